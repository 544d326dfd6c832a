use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub i18n: I18nConfig,
    pub site: SiteConfig,
    pub static_config: StaticConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct I18nConfig {
    /// Locales the application serves (default: en, th, pseudo)
    pub locales: Vec<String>,
    /// Source/default locale; message ids are written in this language
    pub source_locale: String,
    /// Synthetic locale generated from the source catalog, for spotting untranslated text
    pub pseudo_locale: Option<String>,
    /// Locale consulted for messages missing from the active catalog
    pub fallback_locale: String,
    /// Cookie remembering the visitor's locale
    pub cookie_name: String,
    /// Locale cookie lifetime in seconds (accepts "3600", "30d", ...)
    #[serde(deserialize_with = "deserialize_duration_secs")]
    pub cookie_max_age: u64,
    /// Read catalogs from this directory instead of the embedded ones
    pub catalog_dir: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub title: String,
    pub description: Option<String>,
    pub keywords: Option<String>,
    pub image: Option<String>,
    pub twitter_handle: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StaticConfig {
    /// Serve the embedded public assets (stylesheet, manifest, favicon)
    pub enabled: bool,
}

impl Config {
    /// Load configuration with environment variable override support
    ///
    /// Loading order:
    /// 1. Load from the given file, or the first config.toml found
    /// 2. Override with environment variables (prefixed with APP_)
    /// 3. Validate the final configuration
    pub fn load(path: Option<&str>) -> Result<Self, anyhow::Error> {
        // 1. Load from config file
        let mut config = match path.map(str::to_string).or_else(Self::find_config_file) {
            Some(config_path) => Self::from_toml(&config_path)?,
            None => {
                tracing::warn!("Configuration file not found, using defaults");
                Config::default()
            },
        };

        // 2. Override with environment variables
        config.apply_env_overrides();

        // 3. Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Apply environment variable overrides
    ///
    /// Supported environment variables:
    /// - APP_SERVER_HOST: Server host (default: 0.0.0.0)
    /// - APP_SERVER_PORT: Server port (default: 3000)
    /// - APP_LOG_LEVEL: Logging level (e.g., "info,tc_logistics=debug")
    /// - APP_LOG_FILE: Log file path
    /// - APP_LOCALES: Comma separated locale list (e.g., "en,th,pseudo")
    /// - APP_SOURCE_LOCALE: Source/default locale
    /// - APP_PSEUDO_LOCALE: Pseudo-locale code, empty to disable
    /// - APP_FALLBACK_LOCALE: Locale consulted for missing messages
    /// - APP_LOCALE_COOKIE_NAME: Name of the locale cookie
    /// - APP_CATALOG_DIR: Directory holding <locale>/messages.json catalogs
    /// - APP_LOCALE_COOKIE_MAX_AGE: Locale cookie lifetime (accepts "3600", "30d", "1h")
    /// - APP_SITE_TITLE: Document title
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(host) = var("APP_SERVER_HOST") {
            self.server.host = host;
            tracing::info!("Override server.host from env: {}", self.server.host);
        }

        if let Some(port) = var("APP_SERVER_PORT")
            && let Ok(port) = port.parse()
        {
            self.server.port = port;
            tracing::info!("Override server.port from env: {}", self.server.port);
        }

        if let Some(level) = var("APP_LOG_LEVEL") {
            self.logging.level = level;
            tracing::info!("Override logging.level from env: {}", self.logging.level);
        }

        if let Some(file) = var("APP_LOG_FILE") {
            tracing::info!("Override logging.file from env: {}", file);
            self.logging.file = Some(file);
        }

        if let Some(locales) = var("APP_LOCALES") {
            self.i18n.locales = split_list(&locales);
            tracing::info!("Override i18n.locales from env: {:?}", self.i18n.locales);
        }

        if let Some(source) = var("APP_SOURCE_LOCALE") {
            self.i18n.source_locale = source;
            tracing::info!("Override i18n.source_locale from env: {}", self.i18n.source_locale);
        }

        if let Some(pseudo) = var("APP_PSEUDO_LOCALE") {
            let pseudo = pseudo.trim().to_string();
            self.i18n.pseudo_locale = (!pseudo.is_empty()).then_some(pseudo);
            tracing::info!("Override i18n.pseudo_locale from env: {:?}", self.i18n.pseudo_locale);
        }

        if let Some(fallback) = var("APP_FALLBACK_LOCALE") {
            self.i18n.fallback_locale = fallback;
            tracing::info!("Override i18n.fallback_locale from env: {}", self.i18n.fallback_locale);
        }

        if let Some(name) = var("APP_LOCALE_COOKIE_NAME") {
            self.i18n.cookie_name = name;
            tracing::info!("Override i18n.cookie_name from env: {}", self.i18n.cookie_name);
        }

        if let Some(dir) = var("APP_CATALOG_DIR") {
            tracing::info!("Override i18n.catalog_dir from env: {}", dir);
            self.i18n.catalog_dir = Some(dir);
        }

        if let Some(max_age) = var("APP_LOCALE_COOKIE_MAX_AGE") {
            match parse_duration_to_secs(&max_age) {
                Ok(val) => {
                    self.i18n.cookie_max_age = val;
                    tracing::info!(
                        "Override i18n.cookie_max_age from env: {}",
                        self.i18n.cookie_max_age
                    );
                },
                Err(e) => tracing::warn!(
                    "Invalid APP_LOCALE_COOKIE_MAX_AGE '{}': {} (keep {})",
                    max_age,
                    e,
                    self.i18n.cookie_max_age
                ),
            }
        }

        if let Some(title) = var("APP_SITE_TITLE") {
            self.site.title = title;
            tracing::info!("Override site.title from env: {}", self.site.title);
        }
    }

    /// Validate configuration
    fn validate(&self) -> Result<(), anyhow::Error> {
        // Validate server port
        if self.server.port == 0 {
            anyhow::bail!("Server port cannot be 0");
        }

        if self.site.title.trim().is_empty() {
            anyhow::bail!("site.title cannot be empty");
        }

        // Locale set invariants: members, one source, pseudo/fallback inside the set
        crate::i18n::LocaleSet::from_config(&self.i18n)?;

        let cookie_name = &self.i18n.cookie_name;
        if cookie_name.is_empty()
            || !cookie_name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            anyhow::bail!("i18n.cookie_name '{}' is not a valid cookie name", cookie_name);
        }

        if self.i18n.cookie_max_age == 0 {
            anyhow::bail!("i18n.cookie_max_age must be > 0");
        }

        Ok(())
    }

    fn find_config_file() -> Option<String> {
        let possible_paths =
            ["conf/config.toml", "config.toml", "./conf/config.toml", "./config.toml"];

        for path in &possible_paths {
            if Path::new(path).exists() {
                return Some(path.to_string());
            }
        }
        None
    }

    fn from_toml(path: &str) -> Result<Self, anyhow::Error> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "0.0.0.0".to_string(), port: 3000 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info,tc_logistics=debug,tower_http=info".to_string(), file: None }
    }
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            locales: vec!["en".to_string(), "th".to_string(), "pseudo".to_string()],
            source_locale: "en".to_string(),
            pseudo_locale: Some("pseudo".to_string()),
            fallback_locale: "en".to_string(),
            cookie_name: "locale".to_string(),
            cookie_max_age: 365 * 24 * 60 * 60,
            catalog_dir: None,
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "TC Logistics".to_string(),
            description: Some("Shipment tracking and fleet operations for TC Logistics.".to_string()),
            keywords: None,
            image: None,
            twitter_handle: None,
        }
    }
}

impl Default for StaticConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

// =========================
// Helpers for parsing values
// =========================

fn split_list(input: &str) -> Vec<String> {
    input.split(',').map(str::trim).filter(|s| !s.is_empty()).map(str::to_string).collect()
}

fn parse_duration_to_secs(input: &str) -> Result<u64, String> {
    // Accept plain numbers (treated as seconds)
    if let Ok(val) = input.parse::<u64>() {
        return Ok(val);
    }

    let s = input.trim().to_lowercase();
    let (num_str, unit) = s.split_at(s.chars().take_while(|c| c.is_ascii_digit()).count());
    if num_str.is_empty() || unit.is_empty() {
        return Err("missing number or unit".into());
    }
    let n: u64 = num_str.parse().map_err(|_| "invalid number".to_string())?;
    let unit_secs: u64 = match unit {
        "s" | "sec" | "secs" | "second" | "seconds" => 1,
        "m" | "min" | "mins" | "minute" | "minutes" => 60,
        "h" | "hr" | "hour" | "hours" => 60 * 60,
        "d" | "day" | "days" => 60 * 60 * 24,
        "w" | "week" | "weeks" => 60 * 60 * 24 * 7,
        _ => return Err(format!("unsupported unit: {}", unit)),
    };
    n.checked_mul(unit_secs).ok_or_else(|| "duration too large".to_string())
}

// Custom serde deserializer to support numeric or human-friendly string values
fn deserialize_duration_secs<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    struct Visitor;
    impl<'de> serde::de::Visitor<'de> for Visitor {
        type Value = u64;
        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            write!(f, "a number of seconds or a string like '30s', '12h', '365d'")
        }
        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E> {
            Ok(v)
        }
        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            if v >= 0 { Ok(v as u64) } else { Err(E::custom("negative not allowed")) }
        }
        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            parse_duration_to_secs(v).map_err(E::custom)
        }
        fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            parse_duration_to_secs(&v).map_err(E::custom)
        }
    }
    deserializer.deserialize_any(Visitor)
}
