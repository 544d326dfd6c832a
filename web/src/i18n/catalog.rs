//! Message catalogs and where they come from.
//!
//! Catalogs are JSON objects mapping a message id (the source-language
//! string) to its translation, stored as `<locale>/messages.json`. They are
//! read once at startup into a [`CatalogStore`] which is then shared
//! read-only by every request.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use rust_embed::RustEmbed;
use serde::Deserialize;

use super::locale::{Locale, LocaleSet};
use super::pseudo;
use crate::utils::{AppError, AppResult};

/// Translated messages for one locale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    messages: HashMap<String, String>,
}

impl Catalog {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.messages.get(id).map(String::as_str)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.messages.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.messages.iter().map(|(id, message)| (id.as_str(), message.as_str()))
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self { messages: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }
}

/// Where catalogs are loaded from.
///
/// `Ok(None)` means the locale simply has no catalog; `Err` means one exists
/// but could not be read or parsed.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn load(&self, locale: &Locale) -> AppResult<Option<Catalog>>;
}

#[derive(RustEmbed)]
#[folder = "locales/"]
struct LocaleAssets;

/// Catalogs compiled into the binary from `web/locales/`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedCatalogs;

#[async_trait]
impl CatalogSource for EmbeddedCatalogs {
    async fn load(&self, locale: &Locale) -> AppResult<Option<Catalog>> {
        let Some(file) = LocaleAssets::get(&format!("{}/messages.json", locale)) else {
            return Ok(None);
        };

        let json = std::str::from_utf8(&file.data)
            .map_err(|e| AppError::catalog_load_failed(locale, e))?;
        let catalog = Catalog::from_json(json).map_err(|e| AppError::catalog_load_failed(locale, e))?;
        Ok(Some(catalog))
    }
}

/// Catalogs read from `<root>/<locale>/messages.json` on disk.
#[derive(Debug, Clone)]
pub struct DirectoryCatalogs {
    root: PathBuf,
}

impl DirectoryCatalogs {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl CatalogSource for DirectoryCatalogs {
    async fn load(&self, locale: &Locale) -> AppResult<Option<Catalog>> {
        let path = self.root.join(locale.as_str()).join("messages.json");
        tracing::debug!("Reading catalog for '{}' from {}", locale, path.display());

        let json = match tokio::fs::read_to_string(&path).await {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(AppError::catalog_load_failed(locale, e)),
        };

        let catalog = Catalog::from_json(&json).map_err(|e| AppError::catalog_load_failed(locale, e))?;
        Ok(Some(catalog))
    }
}

/// All catalogs for the configured locales, loaded once at startup.
///
/// Never mutated after [`CatalogStore::load`]; share it behind an `Arc`.
#[derive(Debug)]
pub struct CatalogStore {
    locales: Arc<LocaleSet>,
    catalogs: HashMap<Locale, Arc<Catalog>>,
}

impl CatalogStore {
    /// Load every configured locale's catalog from `source`.
    ///
    /// The source catalog is required. The pseudo-locale catalog is generated
    /// from it rather than read. Other locales without a catalog are skipped
    /// with a warning, and activating them later fails.
    pub async fn load(source: &dyn CatalogSource, locales: Arc<LocaleSet>) -> AppResult<Self> {
        let source_locale = locales.source().clone();
        let source_catalog = Arc::new(
            source
                .load(&source_locale)
                .await?
                .ok_or_else(|| AppError::catalog_not_found(&source_locale))?,
        );

        let mut catalogs = HashMap::with_capacity(locales.len());
        for locale in locales.iter() {
            let catalog = if *locale == source_locale {
                Arc::clone(&source_catalog)
            } else if locales.is_pseudo(locale) {
                Arc::new(pseudo::localize_catalog(&source_catalog))
            } else {
                match source.load(locale).await? {
                    Some(catalog) => Arc::new(catalog),
                    None => {
                        tracing::warn!("No message catalog found for configured locale '{}'", locale);
                        continue;
                    },
                }
            };

            tracing::info!("Loaded {} messages for locale '{}'", catalog.len(), locale);
            catalogs.insert(locale.clone(), catalog);
        }

        Ok(Self { locales, catalogs })
    }

    pub fn locales(&self) -> &Arc<LocaleSet> {
        &self.locales
    }

    pub fn get(&self, locale: &Locale) -> Option<Arc<Catalog>> {
        self.catalogs.get(locale).cloned()
    }

    pub fn contains(&self, locale: &Locale) -> bool {
        self.catalogs.contains_key(locale)
    }
}
