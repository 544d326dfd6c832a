use maud::{Markup, html};

use crate::i18n::I18n;

/// Generic error component with recovery actions.
///
/// "Try Again" reloads the current URL. At the root the second action links
/// home; elsewhere it goes back in history.
pub fn default_catch_boundary(i18n: &I18n, message: &str, is_root: bool) -> Markup {
    html! {
        div.catch-boundary {
            div.error-component role="alert" {
                p.error-title { (i18n.t("Something went wrong!")) }
                pre.error-message { code { (message) } }
            }
            div.catch-boundary-actions {
                a.button href="" { (i18n.t("Try Again")) }
                @if is_root {
                    a.button href="/" { (i18n.t("Home")) }
                } @else {
                    a.button href="/" onclick="window.history.back(); return false;" {
                        (i18n.t("Go Back"))
                    }
                }
            }
        }
    }
}
