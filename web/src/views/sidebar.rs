use maud::{Markup, html};

use super::icons::icon;
use crate::i18n::I18n;
use crate::models::MenuItem;

/// Sidebar with the application's menu group.
pub fn app_sidebar(i18n: &I18n, menu_items: &[MenuItem]) -> Markup {
    html! {
        aside.sidebar data-sidebar="sidebar" {
            div.sidebar-content {
                div.sidebar-group {
                    div.sidebar-group-label { (i18n.t("TC Logistics")) }
                    div.sidebar-group-content {
                        ul.sidebar-menu {
                            @for item in menu_items {
                                li.sidebar-menu-item {
                                    a.sidebar-menu-button href=(item.url) title=(i18n.t(item.title)) {
                                        (icon(item.icon))
                                        span { (i18n.t(item.title)) }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MENU_ITEMS;

    #[test]
    fn test_sidebar_renders_menu_items() {
        let html = app_sidebar(&I18n::setup(), MENU_ITEMS).into_string();

        assert!(html.contains("TC Logistics"));
        assert!(html.contains(r#"<a class="sidebar-menu-button" href="/" title="Home">"#));
        assert!(html.contains("<span>Home</span>"));
        assert!(html.contains("<svg"));
    }

    #[test]
    fn test_sidebar_without_items() {
        let html = app_sidebar(&I18n::setup(), &[]).into_string();
        assert!(!html.contains("sidebar-menu-item"));
    }
}
