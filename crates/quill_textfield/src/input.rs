//! Native input state
//!
//! Tracks whether the native input is focused and whether the user has
//! interacted with it, and turns native events into focus, blur, and press
//! notifications for the controller.

use quill_core::events::event_types;
use quill_core::{Event, EventType, Subscriptions};

use crate::host::{DetachedInput, InputHost, NativeInput};

/// Native events the input listens for
const NATIVE_EVENTS: [EventType; 5] = [
    event_types::FOCUS,
    event_types::BLUR,
    event_types::INPUT,
    event_types::POINTER_DOWN,
    event_types::TOUCH_START,
];

/// What a native event meant for the text field
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputAction {
    Focused,
    Blurred,
    Pressed,
}

pub struct InputState<H: InputHost> {
    host: H,
    is_focused: bool,
    received_user_input: bool,
    subscriptions: Subscriptions,
}

impl<H: InputHost> InputState<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            is_focused: false,
            received_user_input: false,
            subscriptions: Subscriptions::new(),
        }
    }

    pub fn init(&mut self) {
        for event_type in NATIVE_EVENTS {
            if let Some(id) = self.host.register_handler(event_type) {
                self.subscriptions.push(id);
            }
        }
    }

    pub fn destroy(&mut self) {
        let host = &mut self.host;
        self.subscriptions
            .release_all(|id| host.deregister_handler(id));
    }

    /// Route a native event. Returns what the controller should react to.
    pub fn handle_event(&mut self, event: &Event) -> Option<InputAction> {
        match event.event_type {
            event_types::FOCUS => {
                self.activate_focus();
                Some(InputAction::Focused)
            }
            event_types::BLUR => {
                self.deactivate_focus();
                Some(InputAction::Blurred)
            }
            event_types::INPUT => self.auto_complete_focus().then_some(InputAction::Focused),
            event_types::POINTER_DOWN | event_types::TOUCH_START => {
                self.host.notify_pressed();
                Some(InputAction::Pressed)
            }
            _ => None,
        }
    }

    pub fn activate_focus(&mut self) {
        self.is_focused = true;
        self.host.notify_focus();
    }

    pub fn deactivate_focus(&mut self) {
        self.is_focused = false;
        if self.value().is_empty() && !self.is_bad_input() {
            self.received_user_input = false;
        }
        self.host.notify_blur();
    }

    /// Focus on value changes that did not come from the user (autofill,
    /// restored form state). Returns true if focus was activated.
    pub fn auto_complete_focus(&mut self) -> bool {
        if self.received_user_input {
            return false;
        }
        self.activate_focus();
        true
    }

    pub fn is_focused(&self) -> bool {
        self.is_focused
    }

    pub fn received_user_input(&self) -> bool {
        self.received_user_input
    }

    pub fn mark_user_input(&mut self) {
        self.received_user_input = true;
    }

    pub fn is_bad_input(&self) -> bool {
        self.with_native(|input| input.is_bad_input())
    }

    pub fn value(&self) -> String {
        self.with_native(|input| input.value())
    }

    pub fn check_validity(&self) -> bool {
        self.with_native(|input| input.check_validity())
    }

    pub fn is_disabled(&self) -> bool {
        self.with_native(|input| input.is_disabled())
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.with_native(|input| input.set_disabled(disabled));
    }

    /// Left edge of the input, for positioning press feedback
    pub fn client_left(&self) -> f32 {
        self.host.client_left()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    fn with_native<R>(&self, f: impl FnOnce(&mut dyn NativeInput) -> R) -> R {
        match self.host.native_input() {
            Some(mut input) => f(&mut input),
            None => f(&mut DetachedInput),
        }
    }
}
