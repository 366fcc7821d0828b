use thiserror::Error;

use super::image::ImageError;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation failed for '{field}': {message}")]
    Validation {
        field: &'static str,
        message: &'static str,
    },

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("no active session")]
    NoSession,

    #[error("image rejected: {0}")]
    Image(#[from] ImageError),
}
