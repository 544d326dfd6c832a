//! Internationalization
//!
//! - `locale`: configured locale set and validated `Locale` identifiers
//! - `resolver`: picks a request's locale from query, cookie and `Accept-Language`
//! - `catalog`: message catalogs, their sources and the startup `CatalogStore`
//! - `context`: the per-request `I18n` context handed to handlers and views
//! - `pseudo`: pseudo-localization used to spot untranslated text

pub mod catalog;
pub mod context;
pub mod locale;
pub mod pseudo;
pub mod resolver;

pub use catalog::{Catalog, CatalogSource, CatalogStore, DirectoryCatalogs, EmbeddedCatalogs};
pub use context::I18n;
pub use locale::{Locale, LocaleSet};
pub use resolver::{CookieLocaleResolver, LOCALE_QUERY_PARAM, LocaleResolution, LocaleResolver};
