//! Quill Text Field
//!
//! Behaviour of a material-style text field, decoupled from rendering. Each
//! part of the field is a small state holder driven through a host trait:
//!
//! - [`InputState`]: native input focus, value, and validity
//! - [`LabelState`]: floating and shaking label
//! - [`BottomLineState`]: underline activation and its animation origin
//! - [`HelpTextState`]: help text visibility and ARIA attributes
//! - [`TextFieldController`]: composes the above and owns the root classes
//!
//! Native events flow into the input, the input reports focus and blur to the
//! controller, and the controller fans out to the label, bottom line, and help
//! text. Bottom line and help text are optional.
//!
//! # Example
//!
//! ```ignore
//! use quill_textfield::prelude::*;
//!
//! let mut field = TextFieldController::new(root_host, TextFieldParts {
//!     input: input_host,
//!     label: label_host,
//!     bottom_line: Some(bottom_line_host),
//!     help_text: None,
//! });
//! field.init();
//!
//! // Deliver events from the host
//! field.handle_event(EventSource::Input, &focus_event);
//!
//! field.set_valid(false);
//! field.destroy();
//! ```

pub mod bottom_line;
pub mod config;
pub mod constants;
pub mod controller;
pub mod help_text;
pub mod host;
pub mod input;
pub mod label;

#[cfg(test)]
mod test_host;

pub use bottom_line::BottomLineState;
pub use config::TextFieldOptions;
pub use constants::{css_classes, strings};
pub use controller::{EventSource, FieldState, TextFieldController, TextFieldParts};
pub use help_text::HelpTextState;
pub use host::{
    BottomLineHost, DetachedInput, HelpTextHost, InputHost, LabelHost, NativeInput, TextFieldHost,
};
pub use input::{InputAction, InputState};
pub use label::LabelState;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::TextFieldOptions;
    pub use crate::controller::{EventSource, FieldState, TextFieldController, TextFieldParts};
    pub use crate::host::{
        BottomLineHost, HelpTextHost, InputHost, LabelHost, NativeInput, TextFieldHost,
    };
}
