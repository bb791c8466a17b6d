//! Help text state
//!
//! The help text is announced while the field is focused and hidden from
//! assistive technology on blur, unless it is persistent or currently showing
//! a validation message.

use crate::constants::{css_classes, strings};
use crate::host::HelpTextHost;

pub struct HelpTextState<H: HelpTextHost> {
    host: H,
}

impl<H: HelpTextHost> HelpTextState<H> {
    pub fn new(host: H) -> Self {
        Self { host }
    }

    /// Make the help text visible to screen readers
    pub fn show_help_text(&mut self) {
        self.host.remove_attr(strings::ARIA_HIDDEN);
    }

    pub fn update_help_text(&mut self, is_valid: bool) {
        let is_persistent = self.host.has_class(css_classes::HELPTEXT_PERSISTENT);
        let is_validation_msg = self.host.has_class(css_classes::HELPTEXT_VALIDATION_MSG);
        let validation_msg_needs_display = is_validation_msg && !is_valid;

        if validation_msg_needs_display {
            self.host.set_attr(strings::ROLE, strings::ROLE_ALERT);
        } else {
            self.host.remove_attr(strings::ROLE);
        }

        if is_persistent || validation_msg_needs_display {
            return;
        }
        self.hide_help_text();
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    fn hide_help_text(&mut self) {
        self.host.set_attr(strings::ARIA_HIDDEN, "true");
    }
}
