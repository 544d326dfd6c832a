use maud::{Markup, html};

use crate::i18n::I18n;

/// Not-found component; `children` replaces the default message.
pub fn not_found(i18n: &I18n, children: Option<Markup>) -> Markup {
    html! {
        div.not-found {
            div.not-found-message {
                @if let Some(content) = children {
                    (content)
                } @else {
                    p { (i18n.t("The page you are looking for does not exist.")) }
                }
            }
            p.not-found-actions {
                button.button.button-back type="button" onclick="window.history.back()" {
                    (i18n.t("Go back"))
                }
                a.button.button-start href="/" { (i18n.t("Start Over")) }
            }
        }
    }
}
