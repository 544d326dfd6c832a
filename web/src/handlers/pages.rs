use std::sync::Arc;

use axum::{extract::State, http::StatusCode};
use maud::{Markup, html};

use crate::AppState;
use crate::i18n::Locale;
use crate::models::Breadcrumb;
use crate::router::{AppContext, root_head, root_loader};
use crate::views::{not_found, root_document};

fn render_page(
    state: &AppState,
    ctx: &AppContext,
    breadcrumbs: &[Breadcrumb],
    content: Markup,
) -> Markup {
    root_document(&root_head(&state.config.site), &ctx.i18n, breadcrumbs, content)
}

pub async fn home(State(state): State<Arc<AppState>>, ctx: AppContext) -> Markup {
    let loader = root_loader(&ctx);
    let locale = loader.loader_locale.as_ref().map(Locale::as_str).unwrap_or_default();
    tracing::debug!("Rendering home page (locale '{}')", locale);

    let i18n = &ctx.i18n;
    let content = html! {
        section.page {
            h1 { (i18n.t("Welcome to TC Logistics")) }
            p { (i18n.t("Track shipments, plan routes and keep your fleet moving.")) }
            p.locale-note { (i18n.t_with("Current language: {locale}", &[("locale", locale)])) }
        }
    };

    render_page(&state, &ctx, &[Breadcrumb::page("Home")], content)
}

pub async fn about(State(state): State<Arc<AppState>>, ctx: AppContext) -> Markup {
    let i18n = &ctx.i18n;
    let content = html! {
        section.page {
            h1 { (i18n.t("About TC Logistics")) }
            p { (i18n.t("We connect shippers and carriers across Thailand and the region.")) }
        }
    };

    render_page(&state, &ctx, &[Breadcrumb::link("Home", "/"), Breadcrumb::page("About")], content)
}

pub async fn contact(State(state): State<Arc<AppState>>, ctx: AppContext) -> Markup {
    let i18n = &ctx.i18n;
    let content = html! {
        section.page {
            h1 { (i18n.t("Contact us")) }
            p { (i18n.t_with("Reach our operations team at {email}.", &[("email", "ops@tc-logistics.example")])) }
        }
    };

    render_page(&state, &ctx, &[Breadcrumb::link("Home", "/"), Breadcrumb::page("Contact")], content)
}

pub async fn not_found_page(
    State(state): State<Arc<AppState>>,
    ctx: AppContext,
) -> (StatusCode, Markup) {
    (StatusCode::NOT_FOUND, render_page(&state, &ctx, &[], not_found(&ctx.i18n, None)))
}
