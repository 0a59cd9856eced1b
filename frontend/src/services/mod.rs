//! Browser services.
//!
//! - [`relay`] - HTTP post of the wizard payload to the form relay
//! - [`browser`] - Blocking notices and page navigation

pub mod relay;
pub mod browser;

pub use relay::*;
pub use browser::*;
