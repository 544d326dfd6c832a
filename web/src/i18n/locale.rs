//! Locale identifiers and the configured locale set.

use std::fmt;
use std::sync::Arc;

use crate::config::I18nConfig;
use crate::utils::i18n::{is_valid_tag, normalize_tag, primary_subtag};
use crate::utils::{AppError, AppResult};

/// A locale identifier drawn from the configured [`LocaleSet`].
///
/// Only a `LocaleSet` hands these out, so holding a `Locale` means the code
/// is one the application was configured with.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale(Arc<str>);

impl Locale {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Locale {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The configured locales, with exactly one source locale.
#[derive(Debug, Clone)]
pub struct LocaleSet {
    locales: Vec<Locale>,
    source: Locale,
    pseudo: Option<Locale>,
    fallback: Locale,
}

impl LocaleSet {
    /// Build a locale set. `source`, `pseudo` and `fallback` must be members
    /// of `codes`.
    pub fn new<S: AsRef<str>>(
        codes: &[S],
        source: &str,
        pseudo: Option<&str>,
        fallback: &str,
    ) -> AppResult<Self> {
        let mut locales: Vec<Locale> = Vec::with_capacity(codes.len());
        for code in codes {
            let code = code.as_ref().trim();
            if !is_valid_tag(code) {
                return Err(AppError::unsupported_locale(code));
            }
            if locales.iter().any(|l| normalize_tag(l.as_str()) == normalize_tag(code)) {
                return Err(AppError::invalid_config(format!("duplicate locale '{}'", code)));
            }
            locales.push(Locale(Arc::from(code)));
        }

        if locales.is_empty() {
            return Err(AppError::invalid_config("at least one locale must be configured"));
        }

        let member = |code: &str, role: &str| {
            locales
                .iter()
                .find(|l| normalize_tag(l.as_str()) == normalize_tag(code))
                .cloned()
                .ok_or_else(|| {
                    AppError::invalid_config(format!(
                        "{} locale '{}' is not one of the configured locales",
                        role, code
                    ))
                })
        };

        let source = member(source, "source")?;
        let pseudo = pseudo.map(|code| member(code, "pseudo")).transpose()?;
        let fallback = member(fallback, "fallback")?;

        if pseudo.as_ref() == Some(&source) {
            return Err(AppError::invalid_config("pseudo locale cannot be the source locale"));
        }

        Ok(Self { locales, source, pseudo, fallback })
    }

    pub fn from_config(config: &I18nConfig) -> AppResult<Self> {
        Self::new(
            config.locales.as_slice(),
            &config.source_locale,
            config.pseudo_locale.as_deref(),
            &config.fallback_locale,
        )
    }

    /// The source (default) locale.
    pub fn source(&self) -> &Locale {
        &self.source
    }

    pub fn pseudo(&self) -> Option<&Locale> {
        self.pseudo.as_ref()
    }

    /// Locale whose catalog backs messages missing from the active one.
    pub fn fallback(&self) -> &Locale {
        &self.fallback
    }

    pub fn is_pseudo(&self, locale: &Locale) -> bool {
        self.pseudo.as_ref() == Some(locale)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Locale> {
        self.locales.iter()
    }

    pub fn len(&self) -> usize {
        self.locales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }

    /// Look up a configured locale.
    ///
    /// Matching ignores case and `_`/`-`, and falls back to the primary
    /// subtag so that `th-TH` finds `th`.
    pub fn get(&self, code: &str) -> Option<Locale> {
        let tag = normalize_tag(code);
        if tag.is_empty() {
            return None;
        }

        self.find(|l| l == tag).or_else(|| {
            let primary = primary_subtag(&tag);
            self.find(|l| l == primary)
        })
    }

    /// Like [`get`](Self::get) but never yields the pseudo-locale, which is
    /// only selected explicitly and never negotiated from browser preferences.
    pub fn negotiate(&self, code: &str) -> Option<Locale> {
        self.get(code).filter(|locale| !self.is_pseudo(locale))
    }

    /// The configured locale for `code`, or the source locale when `code` is
    /// absent or not configured.
    pub fn resolve_or_default(&self, code: Option<&str>) -> Locale {
        code.and_then(|code| self.get(code)).unwrap_or_else(|| self.source.clone())
    }

    fn find(&self, matches: impl Fn(&str) -> bool) -> Option<Locale> {
        self.locales.iter().find(|l| matches(&normalize_tag(l.as_str()))).cloned()
    }
}
