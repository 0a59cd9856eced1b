//! Blocking notices and hard navigation.

use shush_core::SubmitOutcome;

use crate::types::{AppError, AppResult};

/// Blocking `alert()`.
pub fn show_notice(message: &str) -> AppResult<()> {
    gloo_utils::window()
        .alert_with_message(message)
        .map_err(|e| AppError::Notice(format!("{:?}", e)))
}

/// Full-page navigation, leaving the app.
pub fn navigate_to(url: &str) -> AppResult<()> {
    log::info!("➡️ Navigating to {}", url);
    gloo_utils::window()
        .location()
        .set_href(url)
        .map_err(|e| AppError::Navigation(format!("{:?}", e)))
}

pub fn reload_page() -> AppResult<()> {
    gloo_utils::window()
        .location()
        .reload()
        .map_err(|e| AppError::Navigation(format!("{:?}", e)))
}

/// Tell the user how the submission went, then leave for checkout on success.
///
/// A notice that cannot be shown does not stop the redirect; only a failed
/// navigation is returned.
pub fn deliver_outcome(outcome: &SubmitOutcome) -> AppResult<()> {
    if let Err(e) = show_notice(&outcome.notice()) {
        log::warn!("⚠️ {}", e);
    }
    match outcome.redirect_url() {
        Some(url) => navigate_to(url),
        None => Ok(()),
    }
}
