//! Locale hint parsing helpers
//!
//! Pulls raw locale hints out of the pieces of an HTTP request: language
//! tags, `Accept-Language` values, cookies and query strings. Nothing here
//! knows which locales are configured; matching happens in `i18n::locale`.

/// Normalize a language tag for comparison
/// Accepts: "th", "th-TH", "th_TH", " EN-us ", etc.
pub fn normalize_tag(tag: &str) -> String {
    tag.trim().to_lowercase().replace('_', "-")
}

/// Primary language subtag of a normalized tag ("en-us" -> "en")
pub fn primary_subtag(tag: &str) -> &str {
    tag.split('-').next().unwrap_or(tag)
}

/// Whether a string is usable as a locale code: non-empty, ASCII
/// alphanumerics separated by '-' or '_'.
pub fn is_valid_tag(tag: &str) -> bool {
    !tag.is_empty()
        && tag.len() <= 35
        && tag.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        && !tag.starts_with(['-', '_'])
        && !tag.ends_with(['-', '_'])
}

/// Parse an Accept-Language header value into normalized tags ordered by
/// quality, highest first. Entries with q=0, wildcards and malformed tags
/// are dropped; equal weights keep header order.
pub fn parse_accept_language(header_value: &str) -> Vec<String> {
    let mut weighted: Vec<(String, f32)> = header_value
        .split(',')
        .filter_map(|entry| {
            let mut parts = entry.split(';');
            let tag = parts.next()?.trim();
            if tag.is_empty() || tag == "*" || !is_valid_tag(tag) {
                return None;
            }

            let quality = parts
                .find_map(|param| param.trim().strip_prefix("q="))
                .map(|q| q.trim().parse::<f32>().unwrap_or(0.0))
                .unwrap_or(1.0);

            (quality > 0.0).then(|| (normalize_tag(tag), quality))
        })
        .collect();

    // stable sort keeps header order for equal weights
    weighted.sort_by(|a, b| b.1.total_cmp(&a.1));
    weighted.into_iter().map(|(tag, _)| tag).collect()
}

/// Find a cookie value by name in a Cookie header value
pub fn cookie_value<'a>(header_value: &'a str, name: &str) -> Option<&'a str> {
    header_value.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key.trim() == name).then(|| value.trim().trim_matches('"'))
    })
}

/// Find a query parameter by name, percent-decoded
pub fn query_param(query: &str, name: &str) -> Option<String> {
    query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        if key != name {
            return None;
        }
        let value = value.replace('+', " ");
        urlencoding::decode(&value).ok().map(|decoded| decoded.into_owned())
    })
}
