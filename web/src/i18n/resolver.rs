//! Locale resolution from request signals.

use std::sync::Arc;

use axum::http::{
    HeaderMap, HeaderName, HeaderValue, Uri,
    header::{ACCEPT_LANGUAGE, COOKIE, SET_COOKIE},
};

use super::locale::{Locale, LocaleSet};
use crate::config::I18nConfig;
use crate::utils::{cookie_value, parse_accept_language, query_param};

/// Query parameter that selects a locale explicitly (`/?locale=th`).
pub const LOCALE_QUERY_PARAM: &str = "locale";

/// Outcome of resolving a request's locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleResolution {
    pub locale: Locale,
    /// Headers to append to the response, in order. Empty when the client
    /// already agrees with the resolved locale.
    pub headers: Vec<(HeaderName, HeaderValue)>,
}

/// Picks the locale for a request.
///
/// Implementations must only look at the request itself and must not fail:
/// without a usable signal they return the source locale and no headers.
pub trait LocaleResolver: Send + Sync {
    fn resolve(&self, uri: &Uri, headers: &HeaderMap) -> LocaleResolution;
}

/// Resolves from the `locale` query parameter, then the locale cookie, then
/// `Accept-Language`, and persists the choice in a cookie.
#[derive(Debug, Clone)]
pub struct CookieLocaleResolver {
    locales: Arc<LocaleSet>,
    cookie_name: String,
    cookie_max_age: u64,
}

impl CookieLocaleResolver {
    pub fn new(locales: Arc<LocaleSet>, cookie_name: impl Into<String>, cookie_max_age: u64) -> Self {
        Self { locales, cookie_name: cookie_name.into(), cookie_max_age }
    }

    pub fn from_config(locales: Arc<LocaleSet>, config: &I18nConfig) -> Self {
        Self::new(locales, &config.cookie_name, config.cookie_max_age)
    }

    fn cookie<'a>(&self, headers: &'a HeaderMap) -> Option<&'a str> {
        headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .find_map(|value| cookie_value(value, &self.cookie_name))
    }

    fn negotiate(&self, headers: &HeaderMap) -> Option<Locale> {
        headers
            .get_all(ACCEPT_LANGUAGE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(parse_accept_language)
            .find_map(|tag| self.locales.negotiate(&tag))
    }

    /// Resolution that tells the client to remember `locale` unless its
    /// cookie already says so.
    fn persist(&self, locale: Locale, cookie: Option<&str>) -> LocaleResolution {
        if cookie == Some(locale.as_str()) {
            return LocaleResolution { locale, headers: Vec::new() };
        }

        let value = format!(
            "{}={}; Path=/; Max-Age={}; SameSite=Lax",
            self.cookie_name, locale, self.cookie_max_age
        );
        let headers = match HeaderValue::from_str(&value) {
            Ok(value) => vec![(SET_COOKIE, value)],
            Err(e) => {
                tracing::warn!("Cannot encode locale cookie '{}': {}", value, e);
                Vec::new()
            },
        };

        LocaleResolution { locale, headers }
    }
}

impl LocaleResolver for CookieLocaleResolver {
    fn resolve(&self, uri: &Uri, headers: &HeaderMap) -> LocaleResolution {
        let cookie = self.cookie(headers);

        // an empty `?locale=` is no signal
        if let Some(requested) = uri
            .query()
            .and_then(|query| query_param(query, LOCALE_QUERY_PARAM))
            .filter(|requested| !requested.trim().is_empty())
        {
            let locale = self.locales.resolve_or_default(Some(&requested));
            tracing::debug!("Locale '{}' from query (requested '{}')", locale, requested);
            return self.persist(locale, cookie);
        }

        if let Some(value) = cookie {
            let locale = self.locales.resolve_or_default(Some(value));
            tracing::debug!("Locale '{}' from cookie (value '{}')", locale, value);
            return self.persist(locale, cookie);
        }

        if let Some(locale) = self.negotiate(headers) {
            tracing::debug!("Locale '{}' negotiated from Accept-Language", locale);
            return self.persist(locale, None);
        }

        LocaleResolution { locale: self.locales.source().clone(), headers: Vec::new() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> CookieLocaleResolver {
        let locales =
            Arc::new(LocaleSet::new(&["en", "th", "pseudo"], "en", Some("pseudo"), "en").unwrap());
        CookieLocaleResolver::new(locales, "locale", 3600)
    }

    fn request(uri: &str, headers: &[(HeaderName, &str)]) -> (Uri, HeaderMap) {
        let mut map = HeaderMap::new();
        for (name, value) in headers {
            map.append(name.clone(), HeaderValue::from_str(value).unwrap());
        }
        (uri.parse().unwrap(), map)
    }

    fn set_cookies(resolution: &LocaleResolution) -> Vec<&str> {
        resolution
            .headers
            .iter()
            .filter(|(name, _)| name == SET_COOKIE)
            .map(|(_, value)| value.to_str().unwrap())
            .collect()
    }

    #[test]
    fn test_no_signal_defaults_without_headers() {
        let (uri, headers) = request("/", &[]);
        let resolution = resolver().resolve(&uri, &headers);

        assert_eq!(resolution.locale.as_str(), "en");
        assert!(resolution.headers.is_empty());
    }

    #[test]
    fn test_matching_cookie_emits_nothing() {
        let (uri, headers) = request("/", &[(COOKIE, "session=1; locale=th")]);
        let resolution = resolver().resolve(&uri, &headers);

        assert_eq!(resolution.locale.as_str(), "th");
        assert!(resolution.headers.is_empty());
    }

    #[test]
    fn test_unknown_cookie_falls_back_and_is_corrected() {
        let (uri, headers) = request("/", &[(COOKIE, "locale=xx")]);
        let resolution = resolver().resolve(&uri, &headers);

        assert_eq!(resolution.locale.as_str(), "en");
        assert_eq!(set_cookies(&resolution), vec!["locale=en; Path=/; Max-Age=3600; SameSite=Lax"]);
    }

    #[test]
    fn test_accept_language_sets_cookie() {
        let (uri, headers) = request("/", &[(ACCEPT_LANGUAGE, "th")]);
        let resolution = resolver().resolve(&uri, &headers);

        assert_eq!(resolution.locale.as_str(), "th");
        assert_eq!(set_cookies(&resolution), vec!["locale=th; Path=/; Max-Age=3600; SameSite=Lax"]);
    }

    #[test]
    fn test_accept_language_quality_and_region() {
        let (uri, headers) = request("/", &[(ACCEPT_LANGUAGE, "fr;q=0.9, th-TH;q=0.8, en;q=0.1")]);
        let resolution = resolver().resolve(&uri, &headers);

        assert_eq!(resolution.locale.as_str(), "th");
    }

    #[test]
    fn test_accept_language_unsupported_defaults_without_headers() {
        let (uri, headers) = request("/", &[(ACCEPT_LANGUAGE, "fr, de")]);
        let resolution = resolver().resolve(&uri, &headers);

        assert_eq!(resolution.locale.as_str(), "en");
        assert!(resolution.headers.is_empty());
    }

    #[test]
    fn test_accept_language_never_selects_pseudo() {
        let (uri, headers) = request("/", &[(ACCEPT_LANGUAGE, "pseudo")]);
        let resolution = resolver().resolve(&uri, &headers);

        assert_eq!(resolution.locale.as_str(), "en");
    }

    #[test]
    fn test_cookie_beats_accept_language() {
        let (uri, headers) =
            request("/", &[(COOKIE, "locale=pseudo"), (ACCEPT_LANGUAGE, "th")]);
        let resolution = resolver().resolve(&uri, &headers);

        assert_eq!(resolution.locale.as_str(), "pseudo");
        assert!(resolution.headers.is_empty());
    }

    #[test]
    fn test_query_beats_cookie_and_updates_it() {
        let (uri, headers) = request("/about?locale=th", &[(COOKIE, "locale=en")]);
        let resolution = resolver().resolve(&uri, &headers);

        assert_eq!(resolution.locale.as_str(), "th");
        assert_eq!(set_cookies(&resolution).len(), 1);
        assert!(set_cookies(&resolution)[0].starts_with("locale=th;"));
    }

    #[test]
    fn test_empty_query_is_ignored() {
        let (uri, headers) = request("/?locale=", &[(COOKIE, "locale=th")]);
        let resolution = resolver().resolve(&uri, &headers);

        assert_eq!(resolution.locale.as_str(), "th");
        assert!(resolution.headers.is_empty());

        let (uri, headers) = request("/?locale=&x=1", &[]);
        let resolution = resolver().resolve(&uri, &headers);

        assert_eq!(resolution.locale.as_str(), "en");
        assert!(resolution.headers.is_empty());
    }

    #[test]
    fn test_region_cookie_is_canonicalized() {
        let (uri, headers) = request("/", &[(COOKIE, "locale=th-TH")]);
        let resolution = resolver().resolve(&uri, &headers);

        assert_eq!(resolution.locale.as_str(), "th");
        assert!(set_cookies(&resolution)[0].starts_with("locale=th;"));
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let resolver = resolver();
        let (uri, headers) =
            request("/contact", &[(ACCEPT_LANGUAGE, "th"), (COOKIE, "other=1")]);

        assert_eq!(resolver.resolve(&uri, &headers), resolver.resolve(&uri, &headers));
    }
}
