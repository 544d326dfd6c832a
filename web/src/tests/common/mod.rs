// Common test utilities and helpers

use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{HeaderName, Request, header::SET_COOKIE},
    response::Response,
};
use tower::ServiceExt;

use crate::AppState;
use crate::config::Config;
use crate::i18n::{CatalogStore, DirectoryCatalogs, LocaleSet};

/// Default configuration: en (source), th and pseudo, cookie `locale`.
pub fn test_config() -> Config {
    Config::default()
}

/// State backed by the embedded catalogs
pub async fn create_test_state() -> Arc<AppState> {
    Arc::new(
        AppState::from_config(test_config())
            .await
            .expect("Failed to load embedded catalogs"),
    )
}

/// State whose store only has the source catalog; `th` is configured but
/// cannot be activated.
pub async fn create_state_without_thai(dir: &tempfile::TempDir) -> Arc<AppState> {
    std::fs::create_dir_all(dir.path().join("en")).expect("Failed to create catalog dir");
    std::fs::write(dir.path().join("en/messages.json"), r#"{"Home": "Home"}"#)
        .expect("Failed to write catalog");

    let config = test_config();
    let locales = Arc::new(LocaleSet::from_config(&config.i18n).expect("Invalid locale set"));
    let catalogs = CatalogStore::load(&DirectoryCatalogs::new(dir.path()), locales)
        .await
        .expect("Failed to load catalogs");

    Arc::new(AppState::new(config, Arc::new(catalogs)))
}

pub fn get(uri: &str, headers: &[(HeaderName, &str)]) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    for (name, value) in headers {
        builder = builder.header(name.clone(), *value);
    }
    builder.body(Body::empty()).expect("Failed to build request")
}

pub async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.expect("Router is infallible")
}

pub async fn body_string(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    String::from_utf8(bytes.to_vec()).expect("Body is not UTF-8")
}

pub fn set_cookies(response: &Response) -> Vec<String> {
    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .map(|value| value.to_str().expect("Set-Cookie is not ASCII").to_string())
        .collect()
}
