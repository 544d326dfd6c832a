//! The per-request i18n context.

use std::borrow::Cow;
use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;

use super::catalog::{Catalog, CatalogStore};
use super::locale::Locale;
use crate::utils::{AppError, AppResult};

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("placeholder pattern is valid")
});

#[derive(Debug, Clone)]
struct Activation {
    locale: Locale,
    catalog: Arc<Catalog>,
    fallback: Option<Arc<Catalog>>,
}

/// Active locale plus its message catalog.
///
/// Created with [`I18n::setup`], activated once, then shared read-only
/// (`Arc<I18n>`) for the rest of the request. Before activation every
/// lookup returns the message id, i.e. the source-language text.
#[derive(Debug, Clone, Default)]
pub struct I18n {
    active: Option<Activation>,
}

impl I18n {
    pub fn setup() -> Self {
        Self::default()
    }

    /// Activate the catalog for `locale`.
    ///
    /// Activating the same locale again is a no-op; switching an already
    /// activated context to another locale is refused.
    pub fn activate(&mut self, store: &CatalogStore, locale: &Locale) -> AppResult<()> {
        if let Some(active) = &self.active {
            if active.locale == *locale {
                return Ok(());
            }
            return Err(AppError::ActivationConflict {
                active: active.locale.to_string(),
                requested: locale.to_string(),
            });
        }

        let catalog = store.get(locale).ok_or_else(|| AppError::catalog_not_found(locale))?;
        let fallback_locale = store.locales().fallback();
        let fallback = if fallback_locale != locale { store.get(fallback_locale) } else { None };

        tracing::debug!("Activated i18n context for locale '{}'", locale);
        self.active = Some(Activation { locale: locale.clone(), catalog, fallback });
        Ok(())
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// The active locale, `None` until activated.
    pub fn locale(&self) -> Option<&Locale> {
        self.active.as_ref().map(|active| &active.locale)
    }

    /// Translate a message id.
    ///
    /// Lookup order: active catalog, fallback locale catalog, the id itself.
    pub fn t<'a>(&'a self, id: &'a str) -> &'a str {
        let Some(active) = &self.active else {
            return id;
        };

        active
            .catalog
            .get(id)
            .or_else(|| active.fallback.as_ref().and_then(|fallback| fallback.get(id)))
            .unwrap_or(id)
    }

    /// Translate a message id and fill its `{name}` placeholders.
    ///
    /// Placeholders without a matching argument are left as they are.
    pub fn t_with(&self, id: &str, args: &[(&str, &str)]) -> String {
        interpolate(self.t(id), args).into_owned()
    }
}

fn interpolate<'a>(message: &'a str, args: &[(&str, &str)]) -> Cow<'a, str> {
    PLACEHOLDER.replace_all(message, |caps: &regex::Captures<'_>| {
        let name = &caps[1];
        args.iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.to_string())
            .unwrap_or_else(|| caps[0].to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::catalog::CatalogSource;
    use crate::i18n::locale::LocaleSet;
    use async_trait::async_trait;
    use std::collections::HashMap;

    struct MapSource(HashMap<&'static str, Catalog>);

    #[async_trait]
    impl CatalogSource for MapSource {
        async fn load(&self, locale: &Locale) -> AppResult<Option<Catalog>> {
            Ok(self.0.get(locale.as_str()).cloned())
        }
    }

    async fn store() -> CatalogStore {
        let locales =
            Arc::new(LocaleSet::new(&["en", "th", "pseudo"], "en", Some("pseudo"), "en").unwrap());
        let source = MapSource(HashMap::from([
            (
                "en",
                [("Home", "Home"), ("About", "About"), ("Hello {name}", "Hello {name}")]
                    .into_iter()
                    .collect(),
            ),
            ("th", [("Home", "หน้าแรก"), ("Hello {name}", "สวัสดี {name}")].into_iter().collect()),
        ]));
        CatalogStore::load(&source, locales).await.unwrap()
    }

    #[tokio::test]
    async fn test_setup_is_inactive() {
        let i18n = I18n::setup();
        assert!(!i18n.is_active());
        assert!(i18n.locale().is_none());
        assert_eq!(i18n.t("Home"), "Home");
    }

    #[tokio::test]
    async fn test_activate_translates() {
        let store = store().await;
        let th = store.locales().get("th").unwrap();
        let mut i18n = I18n::setup();
        i18n.activate(&store, &th).unwrap();

        assert_eq!(i18n.locale(), Some(&th));
        assert_eq!(i18n.t("Home"), "หน้าแรก");
    }

    #[tokio::test]
    async fn test_missing_message_uses_fallback_then_id() {
        let store = store().await;
        let th = store.locales().get("th").unwrap();
        let mut i18n = I18n::setup();
        i18n.activate(&store, &th).unwrap();

        assert_eq!(i18n.t("About"), "About");
        assert_eq!(i18n.t("Not in any catalog"), "Not in any catalog");
    }

    #[tokio::test]
    async fn test_activate_is_idempotent_per_locale() {
        let store = store().await;
        let th = store.locales().get("th").unwrap();
        let en = store.locales().source().clone();
        let mut i18n = I18n::setup();

        i18n.activate(&store, &th).unwrap();
        i18n.activate(&store, &th).unwrap();
        assert!(matches!(i18n.activate(&store, &en), Err(AppError::ActivationConflict { .. })));
        assert_eq!(i18n.locale(), Some(&th));
    }

    #[tokio::test]
    async fn test_activate_pseudo() {
        let store = store().await;
        let pseudo = store.locales().pseudo().unwrap().clone();
        let mut i18n = I18n::setup();
        i18n.activate(&store, &pseudo).unwrap();

        assert_eq!(i18n.t("Home"), "[Ħǿḿḗ ~~]");
    }

    #[tokio::test]
    async fn test_t_with_interpolates() {
        let store = store().await;
        let th = store.locales().get("th").unwrap();
        let mut i18n = I18n::setup();
        i18n.activate(&store, &th).unwrap();

        assert_eq!(i18n.t_with("Hello {name}", &[("name", "Somchai")]), "สวัสดี Somchai");
        assert_eq!(i18n.t_with("Hello {name}", &[]), "สวัสดี {name}");
    }

    #[test]
    fn test_interpolate_multiple() {
        let out = interpolate("{a} and {b} and {a}", &[("a", "1"), ("b", "2")]);
        assert_eq!(out, "1 and 2 and 1");
    }
}
