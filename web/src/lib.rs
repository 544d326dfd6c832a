pub mod config;
pub mod handlers;
pub mod i18n;
pub mod middleware;
pub mod models;
pub mod router;
pub mod utils;
pub mod views;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use crate::config::{Config, I18nConfig};
use crate::i18n::{
    CatalogStore, CookieLocaleResolver, DirectoryCatalogs, EmbeddedCatalogs, LocaleResolver,
    LocaleSet,
};
use crate::middleware::LocaleState;
use crate::utils::AppResult;

pub use router::create_router;

/// Shared application state
pub struct AppState {
    pub config: Config,
    pub catalogs: Arc<CatalogStore>,
    pub resolver: Arc<dyn LocaleResolver>,
}

impl AppState {
    pub fn new(config: Config, catalogs: Arc<CatalogStore>) -> Self {
        let resolver =
            CookieLocaleResolver::from_config(Arc::clone(catalogs.locales()), &config.i18n);
        Self { config, catalogs, resolver: Arc::new(resolver) }
    }

    /// Load the catalogs named by the configuration and build the state.
    pub async fn from_config(config: Config) -> AppResult<Self> {
        let catalogs = load_catalogs(&config.i18n).await?;
        Ok(Self::new(config, Arc::new(catalogs)))
    }

    pub fn locale_state(&self) -> LocaleState {
        LocaleState { resolver: Arc::clone(&self.resolver), catalogs: Arc::clone(&self.catalogs) }
    }
}

/// Catalogs come from `catalog_dir` when set, otherwise from the binary.
pub async fn load_catalogs(config: &I18nConfig) -> AppResult<CatalogStore> {
    let locales = Arc::new(LocaleSet::from_config(config)?);

    match &config.catalog_dir {
        Some(dir) => {
            tracing::info!("Loading catalogs from directory: {}", dir);
            CatalogStore::load(&DirectoryCatalogs::new(dir), locales).await
        },
        None => {
            tracing::info!("Loading embedded catalogs");
            CatalogStore::load(&EmbeddedCatalogs, locales).await
        },
    }
}
