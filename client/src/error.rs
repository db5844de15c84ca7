use thiserror::Error;
use validator::ValidationErrors;

pub type Result<T> = std::result::Result<T, AppError>;

/// Application error types.
///
/// Validation failures block submission and carry field-scoped messages;
/// remote failures surface as transient notifications; storage failures are
/// never constructed on read paths (local persistence degrades silently).
#[derive(Debug, Error)]
pub enum AppError {
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),

    /// Remote API answered with a non-success status
    #[error("api error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Request never produced a usable response
    #[error("network error: {0}")]
    Network(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("export error: {0}")]
    Export(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::Validation(errors)
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::Serialization(err.to_string())
        } else {
            AppError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<query_cache::CacheError> for AppError {
    fn from(err: query_cache::CacheError) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for AppError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        AppError::Export(err.to_string())
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}
