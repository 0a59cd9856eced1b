//! # shush-core - onboarding logic for the SHUSH.CASH front end
//!
//! Everything the browser client decides, without the browser:
//!
//! ```text
//! ┌──────────┐   ┌──────────┐   ┌──────────┐   ┌──────────┐   ┌──────────┐
//! │  Schema  │──▶│   Form   │──▶│  Wizard  │──▶│  Relay   │──▶│ Checkout │
//! │ (variant)│   │ (values) │   │ (steps)  │   │ (POST)   │   │ (URL)    │
//! └──────────┘   └──────────┘   └──────────┘   └──────────┘   └──────────┘
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Site constants and [`SiteConfig`]
//! - [`error`] - Error types
//! - [`schema`] - Field set of each wizard variant
//! - [`form`] - Entered values
//! - [`secret`] - Zeroizing password storage
//! - [`wizard`] - Step and submission state machine
//! - [`relay`] - Relay payload and transport contract
//! - [`embed`] - Dashboard frame loading lifecycle
//! - [`shell`] - Layout and wizard visibility

pub mod config;
pub mod error;

pub mod schema;
pub mod form;
pub mod secret;

pub mod wizard;
pub mod relay;

pub mod embed;
pub mod shell;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{ShellLayout, SiteConfig};
pub use error::{RelayError, RelayResult, WizardError, WizardResult};
pub use schema::{Field, FormSchema, IdentityFields, Location, Platform, SelectionMode, UseCase};
pub use form::{FormState, Identity, UseCaseSelection};
pub use secret::SecretString;
pub use wizard::{Step, SubmitFailure, SubmitOutcome, SubmitStatus, Summary, SummaryRow, Wizard};
pub use relay::{Relay, RelayPayload, RelayResponse, RELAY_HEADERS};
pub use embed::{EmbedFrame, EmbedStatus};
pub use shell::Shell;
