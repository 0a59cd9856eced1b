//! UI components.
//!
//! # Layout Components
//! - [`Header`] - Live indicator, product title, optional "Deploy" trigger
//! - [`DashboardEmbed`] - Embedded dashboard with its loading overlay
//!
//! # Wizard Components
//! - [`WizardModal`] - Four-step onboarding overlay
//! - Step bodies: `SelectionStep`, `CredentialsStep`, `InfrastructureStep`,
//!   `ConfirmStep`

mod header;
mod dashboard;
mod wizard;
mod steps;

pub use header::*;
pub use dashboard::*;
pub use wizard::*;
pub use steps::*;
