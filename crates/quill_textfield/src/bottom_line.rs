//! Bottom line state

use quill_core::events::event_types;
use quill_core::{Event, EventData, Subscriptions};

use crate::constants::{css_classes, strings};
use crate::host::BottomLineHost;

pub struct BottomLineState<H: BottomLineHost> {
    host: H,
    subscriptions: Subscriptions,
}

impl<H: BottomLineHost> BottomLineState<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            subscriptions: Subscriptions::new(),
        }
    }

    pub fn init(&mut self) {
        if let Some(id) = self.host.register_handler(event_types::TRANSITION_END) {
            self.subscriptions.push(id);
        }
    }

    pub fn destroy(&mut self) {
        let host = &mut self.host;
        self.subscriptions
            .release_all(|id| host.deregister_handler(id));
    }

    pub fn activate_focus(&mut self) {
        self.host.add_class(css_classes::BOTTOM_LINE_ACTIVE);
    }

    pub fn deactivate_focus(&mut self) {
        self.host.remove_class(css_classes::BOTTOM_LINE_ACTIVE);
    }

    /// Start the activation animation where the press landed.
    ///
    /// `target_left` is the left edge of the pressed element in the same
    /// coordinate space as the pointer.
    pub fn set_transform_origin(&mut self, event: &Event, target_left: f32) {
        let EventData::Pointer { x, .. } = event.data else {
            return;
        };
        let normalized_x = x - target_left;
        self.host.set_attr(
            strings::STYLE,
            &format!("transform-origin: {normalized_x}px center"),
        );
    }

    /// Retire the line once its fade-out finishes on an unfocused field
    pub fn handle_transition_end(&mut self, event: &Event, is_focused: bool) {
        let EventData::Transition { property } = &event.data else {
            return;
        };
        if !is_focused && property == strings::OPACITY_PROPERTY {
            self.deactivate_focus();
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }
}
