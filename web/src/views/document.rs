use maud::{DOCTYPE, Markup, html};

use super::catch_boundary::default_catch_boundary;
use super::head::{HeadContent, head_content};
use super::layout::{AppLayoutProps, app_layout};
use crate::i18n::{I18n, Locale};
use crate::models::{Breadcrumb, MENU_ITEMS, NAVIGATION_ITEMS};

/// Full HTML document: head content and the application shell around
/// `children`. `lang` follows the active locale.
pub fn root_document(
    head: &HeadContent,
    i18n: &I18n,
    breadcrumbs: &[Breadcrumb],
    children: Markup,
) -> Markup {
    let props = AppLayoutProps {
        breadcrumbs,
        navigation_items: NAVIGATION_ITEMS,
        menu_items: MENU_ITEMS,
    };

    html! {
        (DOCTYPE)
        html lang=[i18n.locale().map(Locale::as_str)] {
            head {
                (head_content(head))
            }
            body {
                (app_layout(i18n, &props, children))
            }
        }
    }
}

/// Error page shown for failed requests.
pub fn error_document(i18n: &I18n, message: &str, is_root: bool) -> Markup {
    let head = HeadContent::base()
        .with_meta([crate::utils::MetaTag::Title(i18n.t("Something went wrong!").to_string())]);

    root_document(&head, i18n, &[], default_catch_boundary(i18n, message, is_root))
}
