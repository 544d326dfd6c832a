//! Route tree and the context handed to route handlers.

use std::convert::Infallible;
use std::sync::Arc;

use axum::{
    Router, async_trait,
    extract::FromRequestParts,
    http::{Extensions, request::Parts},
    middleware::from_fn_with_state,
    routing::get,
};
use tower_http::trace::TraceLayer;

use crate::AppState;
use crate::config::SiteConfig;
use crate::handlers::{assets, pages};
use crate::i18n::{CatalogStore, I18n, Locale};
use crate::middleware::locale_middleware;
use crate::utils::{Seo, seo};
use crate::views::HeadContent;

/// Context available to every route handler.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub i18n: Arc<I18n>,
}

impl AppContext {
    /// The context the locale middleware stored for this request, if any.
    pub fn from_extensions(extensions: &Extensions) -> Option<Self> {
        extensions.get::<Arc<I18n>>().map(|i18n| Self { i18n: Arc::clone(i18n) })
    }

    /// Context for rendering outside the locale middleware: a fresh `I18n`
    /// activated for the source locale.
    pub fn fallback(catalogs: &CatalogStore) -> Self {
        let mut i18n = I18n::setup();
        let source = catalogs.locales().source();
        if let Err(err) = i18n.activate(catalogs, source) {
            // store loading guarantees the source catalog; render message ids if not
            tracing::warn!("Fallback context could not activate '{}': {}", source, err);
        }
        Self { i18n: Arc::new(i18n) }
    }
}

#[async_trait]
impl FromRequestParts<Arc<AppState>> for AppContext {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        Ok(Self::from_extensions(&parts.extensions).unwrap_or_else(|| {
            tracing::debug!("No request i18n context for {}, using fallback", parts.uri.path());
            Self::fallback(&state.catalogs)
        }))
    }
}

/// Data every page gets from the root route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootLoaderData {
    pub loader_locale: Option<Locale>,
}

/// Root loader: reads the active locale from the context without resolving it again.
pub fn root_loader(ctx: &AppContext) -> RootLoaderData {
    RootLoaderData { loader_locale: ctx.i18n.locale().cloned() }
}

/// Head shared by every page: base tags plus SEO tags for the site.
pub fn root_head(site: &SiteConfig) -> HeadContent {
    HeadContent::base().with_meta(seo(&Seo {
        title: &site.title,
        description: site.description.as_deref(),
        keywords: site.keywords.as_deref(),
        image: site.image.as_deref(),
        twitter_handle: site.twitter_handle.as_deref(),
    }))
}

/// Page routes and the not-found fallback, without the locale middleware.
pub fn page_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(pages::home))
        .route("/about", get(pages::about))
        .route("/contact", get(pages::contact))
        .fallback(pages::not_found_page)
}

pub fn create_router(state: Arc<AppState>) -> Router {
    let pages = page_routes()
        .layer(from_fn_with_state(state.locale_state(), locale_middleware))
        .with_state(Arc::clone(&state));

    let mut app = Router::new().merge(pages);
    if state.config.static_config.enabled {
        app = app.merge(assets::router());
    }

    app.layer(TraceLayer::new_for_http())
}
