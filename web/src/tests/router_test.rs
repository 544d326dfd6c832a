use axum::http::{
    StatusCode,
    header::{ACCEPT_LANGUAGE, CONTENT_TYPE, COOKIE},
};

use crate::create_router;
use crate::router::{AppContext, page_routes, root_head, root_loader};
use crate::tests::common::{body_string, create_test_state, get, send, set_cookies, test_config};
use crate::utils::MetaTag;

#[tokio::test]
async fn test_home_page_defaults_to_english() {
    let app = create_router(create_test_state().await);

    let response = send(app, get("/", &[])).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(set_cookies(&response).is_empty());
    let body = body_string(response).await;
    assert!(body.starts_with(r#"<!DOCTYPE html><html lang="en">"#));
    assert!(body.contains("<title>TC Logistics</title>"));
    assert!(body.contains("Welcome to TC Logistics"));
    assert!(body.contains("Current language: en"));
}

#[tokio::test]
async fn test_home_page_in_thai_from_cookie() {
    let app = create_router(create_test_state().await);

    let response = send(app, get("/", &[(COOKIE, "theme=dark; locale=th")])).await;

    assert!(set_cookies(&response).is_empty());
    let body = body_string(response).await;
    assert!(body.contains(r#"<html lang="th">"#));
    assert!(body.contains("ยินดีต้อนรับสู่ TC โลจิสติกส์"));
    assert!(body.contains("ภาษาปัจจุบัน: th"));
    assert!(body.contains("หน้าแรก"));
}

#[tokio::test]
async fn test_accept_language_sets_cookie() {
    let app = create_router(create_test_state().await);

    let response = send(app, get("/about", &[(ACCEPT_LANGUAGE, "th,en;q=0.5")])).await;

    assert_eq!(
        set_cookies(&response),
        vec!["locale=th; Path=/; Max-Age=31536000; SameSite=Lax".to_string()]
    );
    assert!(body_string(response).await.contains("เกี่ยวกับ TC โลจิสติกส์"));
}

#[tokio::test]
async fn test_query_parameter_overrides_cookie() {
    let app = create_router(create_test_state().await);

    let response = send(app, get("/contact?locale=en", &[(COOKIE, "locale=th")])).await;

    assert_eq!(
        set_cookies(&response),
        vec!["locale=en; Path=/; Max-Age=31536000; SameSite=Lax".to_string()]
    );
    let body = body_string(response).await;
    assert!(body.contains("Contact us"));
    assert!(body.contains("ops@tc-logistics.example"));
}

#[tokio::test]
async fn test_pseudo_locale_page() {
    let app = create_router(create_test_state().await);

    let response = send(app, get("/", &[(COOKIE, "locale=pseudo")])).await;

    assert!(set_cookies(&response).is_empty());
    let body = body_string(response).await;
    assert!(body.contains(r#"<html lang="pseudo">"#));
    assert!(body.contains("[Ħǿḿḗ ~~]"));
    assert!(!body.contains(">Home<"));
}

#[tokio::test]
async fn test_breadcrumbs_link_back_home() {
    let app = create_router(create_test_state().await);

    let body = body_string(send(app, get("/about", &[])).await).await;

    assert!(body.contains(r#"<a class="breadcrumb-link" href="/">Home</a>"#));
    assert!(body.contains(r#"aria-current="page">About</span>"#));
}

#[tokio::test]
async fn test_unknown_route_renders_not_found() {
    let app = create_router(create_test_state().await);

    let response = send(app, get("/missing/page", &[(COOKIE, "locale=th")])).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_string(response).await;
    assert!(body.contains("ไม่พบหน้าที่คุณกำลังค้นหา"));
    assert!(body.contains("เริ่มต้นใหม่"));
}

#[tokio::test]
async fn test_assets_are_served_without_locale_cookie() {
    let state = create_test_state().await;

    let css = send(create_router(state.clone()), get("/styles.css", &[(ACCEPT_LANGUAGE, "th")])).await;
    assert_eq!(css.status(), StatusCode::OK);
    assert!(set_cookies(&css).is_empty());
    assert!(css.headers()[CONTENT_TYPE].to_str().unwrap().starts_with("text/css"));

    let icon = send(create_router(state.clone()), get("/logo/favicon.svg", &[])).await;
    assert_eq!(icon.status(), StatusCode::OK);
    assert_eq!(icon.headers()[CONTENT_TYPE], "image/svg+xml");

    let missing = send(create_router(state), get("/logo/missing.png", &[])).await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_context_falls_back_without_middleware() {
    let state = create_test_state().await;
    let app = page_routes().with_state(state);

    let response = send(app, get("/", &[(COOKIE, "locale=th")])).await;

    assert!(set_cookies(&response).is_empty());
    let body = body_string(response).await;
    assert!(body.contains(r#"<html lang="en">"#));
    assert!(body.contains("Welcome to TC Logistics"));
}

#[tokio::test]
async fn test_root_loader_reads_active_locale() {
    let state = create_test_state().await;

    let ctx = AppContext::fallback(&state.catalogs);

    assert_eq!(root_loader(&ctx).loader_locale.as_ref().map(|l| l.as_str()), Some("en"));
}

#[test]
fn test_root_head_includes_site_seo() {
    let mut site = test_config().site;
    site.twitter_handle = Some("@tclogistics".to_string());

    let head = root_head(&site);

    assert_eq!(head.meta[0], MetaTag::CharSet("utf-8".to_string()));
    assert!(head.meta.contains(&MetaTag::Title("TC Logistics".to_string())));
    assert!(head.meta.contains(&MetaTag::name("twitter:site", Some("@tclogistics"))));
    assert_eq!(head.links.len(), 3);
}
