//! Embedded dashboard frame and its loading lifecycle.
//!
//! The dashboard is an opaque third-party app. The only signal it gives is
//! the frame's `load` event. A timeout moves the overlay to a stalled state
//! instead of spinning forever; a late `load` still dismisses it.

use crate::config::SiteConfig;

/// Attributes of the dashboard `<iframe>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedFrame {
    pub src: String,
    pub title: String,
    pub allow: String,
}

impl EmbedFrame {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            src: config.dashboard_url.clone(),
            title: config.dashboard_title.clone(),
            allow: config.embed_allow.clone(),
        }
    }

    /// Individual permissions of the allow-list.
    pub fn permissions(&self) -> impl Iterator<Item = &str> {
        self.allow.split(';').map(str::trim).filter(|p| !p.is_empty())
    }
}

/// Loading lifecycle of the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmbedStatus {
    #[default]
    Loading,
    Ready,
    /// Timed out waiting for `load`.
    Stalled,
}

impl EmbedStatus {
    /// Frame reported `load`. Returns whether the status changed.
    pub fn on_load(&mut self) -> bool {
        match self {
            EmbedStatus::Loading | EmbedStatus::Stalled => {
                *self = EmbedStatus::Ready;
                true
            }
            EmbedStatus::Ready => false,
        }
    }

    /// Load timer fired. Returns whether the status changed.
    pub fn on_timeout(&mut self) -> bool {
        if *self == EmbedStatus::Loading {
            *self = EmbedStatus::Stalled;
            true
        } else {
            false
        }
    }

    pub fn shows_overlay(&self) -> bool {
        !matches!(self, EmbedStatus::Ready)
    }

    /// Text under the spinner.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            EmbedStatus::Loading => Some("Connecting to live dashboard..."),
            EmbedStatus::Stalled => Some("The dashboard is taking longer than usual to respond."),
            EmbedStatus::Ready => None,
        }
    }
}
