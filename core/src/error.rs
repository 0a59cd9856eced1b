//! Error types for the onboarding wizard.
//!
//! - [`WizardError`] - Refused state machine transitions and bad field input
//! - [`RelayError`] - Failures reaching the form relay
//!
//! Refusals leave the wizard untouched, so every variant here is
//! recoverable: the UI simply keeps the control disabled or shows a notice.

use thiserror::Error;

use crate::schema::Field;

// =============================================================================
// Wizard Errors
// =============================================================================

/// A transition or edit the wizard refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    /// A submission is in flight or already succeeded.
    #[error("Wizard is busy submitting")]
    Busy,

    /// `Next` on the last step.
    #[error("Already at the last step")]
    AtLastStep,

    /// `Back` on the first step.
    #[error("Already at the first step")]
    AtFirstStep,

    /// A relay result arrived with no submission in flight.
    #[error("No submission in flight")]
    NotSubmitting,

    /// Submit requested before the confirmation step.
    #[error("Submission is only available on the confirmation step")]
    NotAtConfirmStep,

    /// Required fields are still empty.
    #[error("Missing required fields: {0:?}")]
    MissingRequired(Vec<Field>),

    /// The field is not part of the active form schema.
    #[error("Field '{}' is not part of this form", .0.key())]
    FieldUnavailable(Field),

    /// Value outside an enumerated field's choices.
    #[error("Invalid value for field '{}': {value}", .field.key())]
    InvalidChoice { field: Field, value: String },
}

// =============================================================================
// Relay Errors
// =============================================================================

/// Transport-level failures talking to the relay endpoint.
///
/// A non-2xx answer is *not* an error here: it comes back as a
/// [`crate::relay::RelayResponse`] and is classified by the wizard.
#[derive(Debug, Error)]
pub enum RelayError {
    /// Payload could not be encoded.
    #[error("Failed to encode payload: {0}")]
    Encode(#[from] serde_json::Error),

    /// Request could not be built.
    #[error("Failed to build request: {0}")]
    Request(String),

    /// Network failure or aborted request.
    #[error("HTTP request failed: {0}")]
    Transport(String),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for wizard operations.
pub type WizardResult<T> = Result<T, WizardError>;

/// Result type for relay operations.
pub type RelayResult<T> = Result<T, RelayError>;
