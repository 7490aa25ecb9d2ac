use sea_orm::DbErr;
use thiserror::Error;

/// Failures surfaced by the hotel and room services.
///
/// The `Display` text is what clients see in the `message` field.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Validation(String),

    /// The media host rejected or failed an upload.
    #[error("{0}")]
    Upstream(String),

    #[error("Database error: {0}")]
    Persistence(#[from] DbErr),
}

impl ServiceError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}
