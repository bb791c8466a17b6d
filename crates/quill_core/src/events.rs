//! Event model
//!
//! Host-agnostic description of the interaction events a widget reacts to.

/// Event type identifier
pub type EventType = u32;

/// Common event types
pub mod event_types {
    use super::EventType;

    pub const POINTER_DOWN: EventType = 1;
    pub const TOUCH_START: EventType = 2;
    pub const CLICK: EventType = 3;
    pub const FOCUS: EventType = 10;
    pub const BLUR: EventType = 11;
    pub const KEY_DOWN: EventType = 20;
    /// Value changed by the user, an IME, or autofill
    pub const INPUT: EventType = 22;
    /// A CSS transition finished
    pub const TRANSITION_END: EventType = 40;

    /// Host-side name of an event type (`"mousedown"`, `"focus"`, ...)
    pub fn name(event_type: EventType) -> &'static str {
        match event_type {
            POINTER_DOWN => "mousedown",
            TOUCH_START => "touchstart",
            CLICK => "click",
            FOCUS => "focus",
            BLUR => "blur",
            KEY_DOWN => "keydown",
            INPUT => "input",
            TRANSITION_END => "transitionend",
            _ => "unknown",
        }
    }

    /// Inverse of [`name`]
    pub fn from_name(name: &str) -> Option<EventType> {
        let event_type = match name {
            "mousedown" => POINTER_DOWN,
            "touchstart" => TOUCH_START,
            "click" => CLICK,
            "focus" => FOCUS,
            "blur" => BLUR,
            "keydown" => KEY_DOWN,
            "input" => INPUT,
            "transitionend" => TRANSITION_END,
            _ => return None,
        };
        Some(event_type)
    }

    /// Whether events of this type propagate to ancestors of their target
    pub fn bubbles(event_type: EventType) -> bool {
        !matches!(event_type, FOCUS | BLUR)
    }
}

/// An interaction event with associated data
#[derive(Clone, Debug)]
pub struct Event {
    pub event_type: EventType,
    /// Element the event was originally dispatched to
    pub target: u64,
    pub data: EventData,
}

/// Event-specific data
#[derive(Clone, Debug)]
pub enum EventData {
    Pointer {
        /// Viewport-relative coordinates
        x: f32,
        y: f32,
    },
    Key {
        /// Logical key name (`"Enter"`, `"a"`, ...), empty when unknown
        key: String,
        /// Legacy virtual key code
        code: KeyCode,
    },
    Transition {
        /// CSS property whose transition finished
        property: String,
    },
    None,
}

/// Virtual key codes (legacy `keyCode` numbering)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct KeyCode(pub u32);

impl KeyCode {
    pub const ENTER: KeyCode = KeyCode(0x0D);

    // Unknown/unmapped key
    pub const UNKNOWN: KeyCode = KeyCode(0);
}

impl Event {
    /// Create an event without payload
    pub fn new(event_type: EventType, target: u64) -> Self {
        Self {
            event_type,
            target,
            data: EventData::None,
        }
    }

    /// Create a pointer press at viewport coordinates
    pub fn pointer(event_type: EventType, target: u64, x: f32, y: f32) -> Self {
        Self {
            data: EventData::Pointer { x, y },
            ..Self::new(event_type, target)
        }
    }

    /// Create a key event
    pub fn key(event_type: EventType, target: u64, key: impl Into<String>, code: KeyCode) -> Self {
        Self {
            data: EventData::Key {
                key: key.into(),
                code,
            },
            ..Self::new(event_type, target)
        }
    }

    /// Create a transition-end event for a CSS property
    pub fn transition_end(target: u64, property: impl Into<String>) -> Self {
        Self {
            data: EventData::Transition {
                property: property.into(),
            },
            ..Self::new(event_types::TRANSITION_END, target)
        }
    }

    /// Whether this is an Enter key press, by key name or legacy key code
    pub fn is_enter_key(&self) -> bool {
        match &self.data {
            EventData::Key { key, code } => key == "Enter" || *code == KeyCode::ENTER,
            _ => false,
        }
    }
}
