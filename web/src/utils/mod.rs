pub mod error;
pub mod i18n;
pub mod seo;

pub use error::{AppError, AppResult};
pub use i18n::{cookie_value, normalize_tag, parse_accept_language, query_param};
pub use seo::{MetaTag, Seo, seo};
