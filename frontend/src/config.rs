//! Application configuration.
//!
//! Site constants live in [`shush_core::config`]. This module picks the
//! variant that is actually deployed and sets up browser logging.

pub use shush_core::config::*;
use shush_core::FormSchema;

/// Console log level.
pub const LOG_LEVEL: log::Level = log::Level::Debug;

/// Configuration of the deployed site.
///
/// The provisioning form behind a "Deploy" button in the header.
pub fn site_config() -> SiteConfig {
    SiteConfig::default()
        .with_layout(ShellLayout::EmbedWithDeploy)
        .with_schema(FormSchema::provisioning())
}
