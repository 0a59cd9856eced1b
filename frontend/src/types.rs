//! Browser-side error type.
//!
//! Domain refusals are [`shush_core::WizardError`]s and relay failures are
//! [`shush_core::RelayError`]s. What is left here are the things only a
//! browser can get wrong.

use std::fmt;

/// Frontend application errors.
#[derive(Clone, Debug, PartialEq)]
pub enum AppError {
    /// A blocking notice could not be shown.
    Notice(String),
    /// Page navigation failed.
    Navigation(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Notice(msg) => write!(f, "Notice error: {}", msg),
            AppError::Navigation(msg) => write!(f, "Navigation error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
