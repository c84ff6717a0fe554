//! Meals Errors
//!
//! Failures of the fetch, form and DOM paths, shared by every operation.

use thiserror::Error;

pub type MealsResult<T> = Result<T, MealsError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MealsError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server responded {status} {text}")]
    Status { status: u16, text: String },

    #[error("Malformed response: {0}")]
    Decode(String),

    #[error("Form error: {0}")]
    Form(String),

    #[error("Page element missing: {0}")]
    Dom(String),
}

impl MealsError {
    /// Wrap a JS exception value
    pub fn network(err: impl std::fmt::Debug) -> Self {
        MealsError::Network(format!("{:?}", err))
    }
}
