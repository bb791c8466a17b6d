//! Host traits
//!
//! The foundations never touch elements directly. Each part of the text field
//! talks to the host environment through one of these traits. Every method
//! except the associated types has a no-op default, so a host only implements
//! what it can actually render.
//!
//! Listener registration returns `None` when the host has no element to listen
//! on; the foundation then has nothing to release on teardown.

use quill_core::{EventType, ListenerId};

/// The native input element: value, disabled flag, and constraint validation
pub trait NativeInput {
    fn value(&self) -> String;

    fn is_disabled(&self) -> bool;

    fn set_disabled(&mut self, disabled: bool);

    /// Browser-flagged unparseable input (e.g. letters in a number field)
    fn is_bad_input(&self) -> bool;

    /// Run constraint validation
    fn check_validity(&mut self) -> bool;
}

/// Stand-in used whenever no native input is bound.
///
/// Always empty, enabled, and valid. Writes are dropped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DetachedInput;

impl NativeInput for DetachedInput {
    fn value(&self) -> String {
        String::new()
    }

    fn is_disabled(&self) -> bool {
        false
    }

    fn set_disabled(&mut self, _disabled: bool) {}

    fn is_bad_input(&self) -> bool {
        false
    }

    fn check_validity(&mut self) -> bool {
        true
    }
}

/// Host for the native input element
pub trait InputHost {
    type Native: NativeInput;

    fn register_handler(&mut self, _event_type: EventType) -> Option<ListenerId> {
        None
    }

    fn deregister_handler(&mut self, _id: ListenerId) {}

    /// The bound native input, if any
    fn native_input(&self) -> Option<Self::Native> {
        None
    }

    /// Left edge of the input in viewport coordinates
    fn client_left(&self) -> f32 {
        0.0
    }

    fn notify_focus(&mut self) {}

    fn notify_blur(&mut self) {}

    fn notify_pressed(&mut self) {}
}

/// Host for the floating label
pub trait LabelHost {
    fn add_class(&mut self, _class: &str) {}

    fn remove_class(&mut self, _class: &str) {}
}

/// Host for the bottom line decoration
pub trait BottomLineHost {
    fn add_class(&mut self, _class: &str) {}

    fn remove_class(&mut self, _class: &str) {}

    fn set_attr(&mut self, _name: &str, _value: &str) {}

    fn register_handler(&mut self, _event_type: EventType) -> Option<ListenerId> {
        None
    }

    fn deregister_handler(&mut self, _id: ListenerId) {}
}

/// Host for the help text region
pub trait HelpTextHost {
    fn add_class(&mut self, _class: &str) {}

    fn remove_class(&mut self, _class: &str) {}

    fn has_class(&self, _class: &str) -> bool {
        false
    }

    fn set_attr(&mut self, _name: &str, _value: &str) {}

    fn remove_attr(&mut self, _name: &str) {}
}

/// Host for the text field root and its icon.
///
/// The associated types name the hosts of the parts the controller composes.
pub trait TextFieldHost {
    type Input: InputHost;
    type Label: LabelHost;
    type BottomLine: BottomLineHost;
    type HelpText: HelpTextHost;

    fn add_class(&mut self, _class: &str) {}

    fn remove_class(&mut self, _class: &str) {}

    /// Set an attribute on the trailing/leading icon, if there is one
    fn set_icon_attr(&mut self, _name: &str, _value: &str) {}

    /// Whether the element an event was dispatched to carries `class`
    fn event_target_has_class(&self, _target: u64, _class: &str) -> bool {
        false
    }

    fn register_handler(&mut self, _event_type: EventType) -> Option<ListenerId> {
        None
    }

    fn deregister_handler(&mut self, _id: ListenerId) {}

    fn notify_icon_action(&mut self) {}
}
