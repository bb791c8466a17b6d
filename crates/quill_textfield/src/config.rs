//! Text field options
//!
//! Every field is optional. Unset fields leave the state read from the host
//! untouched.

use serde::{Deserialize, Serialize};

/// Options applied right after a text field is initialised
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct TextFieldOptions {
    /// Force the field disabled or enabled
    pub disabled: Option<bool>,
    /// Take over validity from the native input with a fixed value
    pub valid: Option<bool>,
}

impl TextFieldOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether the field starts disabled
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = Some(disabled);
        self
    }

    /// Set a fixed validity, opting out of native validation
    pub fn valid(mut self, valid: bool) -> Self {
        self.valid = Some(valid);
        self
    }
}
