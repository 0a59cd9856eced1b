//! Page shell state: which layout is shown and whether the wizard is open.

use crate::config::ShellLayout;
use crate::error::{WizardError, WizardResult};
use crate::wizard::Wizard;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Shell {
    layout: ShellLayout,
    wizard_open: bool,
}

impl Shell {
    pub fn new(layout: ShellLayout) -> Self {
        Self {
            layout,
            wizard_open: false,
        }
    }

    pub fn layout(&self) -> ShellLayout {
        self.layout
    }

    pub fn is_wizard_open(&self) -> bool {
        self.wizard_open
    }

    /// Whether the header shows the "Deploy" trigger.
    pub fn has_deploy_action(&self) -> bool {
        self.layout == ShellLayout::EmbedWithDeploy
    }

    /// Returns `false` when this layout has no wizard.
    pub fn open_wizard(&mut self) -> bool {
        if !self.has_deploy_action() {
            return false;
        }
        self.wizard_open = true;
        true
    }

    /// Hide the wizard and reset it, wiping any entered credentials.
    ///
    /// Refused while a submission is in flight.
    pub fn close_wizard(&mut self, wizard: &mut Wizard) -> WizardResult<()> {
        if wizard.is_busy() {
            return Err(WizardError::Busy);
        }
        wizard.reset();
        self.wizard_open = false;
        log::debug!("Wizard closed and reset");
        Ok(())
    }
}
