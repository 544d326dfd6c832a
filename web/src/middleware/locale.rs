//! Locale middleware
//!
//! Resolves the request's locale, activates a fresh `I18n` context for it
//! and stores the context in the request extensions for loaders and
//! handlers. Headers produced by resolution (the locale cookie) are appended
//! to the response once the rest of the stack has produced it.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::i18n::{CatalogStore, I18n, LocaleResolution, LocaleResolver};
use crate::utils::AppError;

#[derive(Clone)]
pub struct LocaleState {
    pub resolver: Arc<dyn LocaleResolver>,
    pub catalogs: Arc<CatalogStore>,
}

/// Middleware to resolve and activate the request locale
pub async fn locale_middleware(
    State(state): State<LocaleState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let LocaleResolution { locale, headers } = state.resolver.resolve(req.uri(), req.headers());
    tracing::debug!(
        "Resolved locale '{}' for {} {} ({} header(s) to append)",
        locale,
        req.method(),
        req.uri().path(),
        headers.len()
    );

    // Fresh context per request, activated once; failures go to the error page
    let mut i18n = I18n::setup();
    i18n.activate(&state.catalogs, &locale).map_err(|err| {
        tracing::warn!("Failed to activate locale '{}': {}", locale, err);
        err
    })?;

    req.extensions_mut().insert(Arc::new(i18n));
    req.extensions_mut().insert(locale);

    let mut response = next.run(req).await;

    // Append, not insert: keep any Set-Cookie the handlers already wrote
    let response_headers = response.headers_mut();
    for (name, value) in headers {
        response_headers.append(name, value);
    }

    Ok(response)
}
