use thiserror::Error;

use crate::domain::user::ValidationFailure;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("user did not pass validation")]
    Validation { failures: Vec<ValidationFailure> },

    #[error("user with the same first and last name already exists")]
    DuplicateIdentity,

    #[error("user not found")]
    NotFound,

    #[error("storage error: {message}")]
    Storage { message: String },

    #[error("operation cancelled")]
    Cancelled,
}

impl DomainError {
    pub fn validation(failures: Vec<ValidationFailure>) -> Self {
        Self::Validation { failures }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}
