//! Public assets compiled into the binary.

use axum::{
    Router,
    http::{StatusCode, Uri, header},
    response::{IntoResponse, Response},
    routing::get,
};
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "public/"]
struct PublicAssets;

pub fn router() -> Router {
    Router::new()
        .route("/styles.css", get(serve_asset))
        .route("/site.webmanifest", get(serve_asset))
        .route("/logo/*path", get(serve_asset))
}

pub async fn serve_asset(uri: Uri) -> Response {
    let path = uri.path().trim_start_matches('/');

    match PublicAssets::get(path) {
        Some(file) => {
            let mime = file.metadata.mimetype().to_string();
            (
                [(header::CONTENT_TYPE, mime), (header::CACHE_CONTROL, "public, max-age=3600".to_string())],
                file.data,
            )
                .into_response()
        },
        None => {
            tracing::debug!("Asset not found: {}", path);
            StatusCode::NOT_FOUND.into_response()
        },
    }
}
