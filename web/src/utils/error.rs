use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::i18n::I18n;
use crate::views;

/// Application error with enough context to pick a status code and render
/// the generic error page.
#[derive(Error, Debug)]
pub enum AppError {
    // Locale errors 1xxx
    #[error("Unsupported locale: {0}")]
    UnsupportedLocale(String),

    // Catalog errors 2xxx
    #[error("Message catalog for locale '{locale}' not found")]
    CatalogNotFound { locale: String },

    #[error("Failed to load message catalog for locale '{locale}': {message}")]
    CatalogLoadFailed { locale: String, message: String },

    #[error("I18n context already activated for '{active}', cannot activate '{requested}'")]
    ActivationConflict { active: String, requested: String },

    // Configuration errors 4xxx
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // System errors 5xxx
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AppError {
    pub fn unsupported_locale(code: impl Into<String>) -> Self {
        Self::UnsupportedLocale(code.into())
    }

    pub fn catalog_not_found(locale: impl std::fmt::Display) -> Self {
        Self::CatalogNotFound { locale: locale.to_string() }
    }

    pub fn catalog_load_failed(
        locale: impl std::fmt::Display,
        message: impl std::fmt::Display,
    ) -> Self {
        Self::CatalogLoadFailed { locale: locale.to_string(), message: message.to_string() }
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }

    pub fn error_code(&self) -> i32 {
        match self {
            Self::UnsupportedLocale(_) => 1001,

            Self::CatalogNotFound { .. } => 2001,
            Self::CatalogLoadFailed { .. } => 2002,
            Self::ActivationConflict { .. } => 2003,

            Self::InvalidConfig(_) => 4001,

            Self::Other(_) => 5001,
        }
    }

    /// Status of the error page. Locale and config errors (1xxx, 4xxx) are
    /// raised at startup only; anything reaching a response is a server fault.
    pub fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::error!(code = self.error_code(), "Request failed: {}", self);

        // The failing request may never have reached a usable catalog, so the
        // error page is rendered with message ids, which are the source strings.
        let i18n = I18n::setup();
        let page = views::error_document(&i18n, &self.to_string(), true);

        (status, page).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
