//! Floating label state
//!
//! All state lives in the label's classes: floated above the input, and
//! shaking after a failed validation.

use crate::constants::css_classes;
use crate::host::LabelHost;

pub struct LabelState<H: LabelHost> {
    host: H,
}

impl<H: LabelHost> LabelState<H> {
    pub fn new(host: H) -> Self {
        Self { host }
    }

    /// Move the label above the input
    pub fn float_label(&mut self) {
        self.host.add_class(css_classes::LABEL_FLOAT_ABOVE);
        self.host.remove_class(css_classes::LABEL_SHAKE);
    }

    /// Stop shaking. The label only returns to rest when the input is empty
    /// and not holding bad input.
    pub fn deactivate_focus(&mut self, has_valid_input: bool) {
        self.host.remove_class(css_classes::LABEL_SHAKE);

        if has_valid_input {
            self.host.remove_class(css_classes::LABEL_FLOAT_ABOVE);
        }
    }

    /// Shake on invalid input. Clearing the shake is left to `deactivate_focus`.
    pub fn change_validity(&mut self, is_valid: bool) {
        if !is_valid {
            self.host.add_class(css_classes::LABEL_SHAKE);
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }
}
