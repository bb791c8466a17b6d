//! Text field controller
//!
//! The controller coordinates the input, label, bottom line, and help text:
//! - Root classes for upgraded, focused, invalid, and disabled states
//! - Floating label on focus and for pre-filled values
//! - Native or caller-supplied validity
//! - Icon activation by click or Enter
//!
//! Focus and validity are tracked by a small state machine so hosts can ask
//! which visual state the field is in without inspecting classes.

use quill_core::events::event_types;
use quill_core::fsm::StateMachine;
use quill_core::{Event, EventType, Subscriptions};

use crate::bottom_line::BottomLineState;
use crate::config::TextFieldOptions;
use crate::constants::{css_classes, strings};
use crate::help_text::HelpTextState;
use crate::host::TextFieldHost;
use crate::input::{InputAction, InputState};
use crate::label::LabelState;

/// Controller FSM states
pub mod states {
    pub const UNFOCUSED_VALID: u32 = 0;
    pub const UNFOCUSED_INVALID: u32 = 1;
    pub const FOCUSED: u32 = 2;
}

/// Controller FSM events
mod signals {
    pub const FOCUS: u32 = 1;
    pub const BLUR: u32 = 2;
    pub const VALID: u32 = 3;
    pub const INVALID: u32 = 4;
}

/// Events the controller listens for on the root
const ROOT_EVENTS: [EventType; 2] = [event_types::CLICK, event_types::KEY_DOWN];

/// Visual state of the field
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldState {
    UnfocusedValid,
    UnfocusedInvalid,
    Focused,
}

/// Which part of the field an event was delivered to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventSource {
    Root,
    Input,
    BottomLine,
}

/// Hosts for the parts a controller is built from
pub struct TextFieldParts<H: TextFieldHost> {
    pub input: H::Input,
    pub label: H::Label,
    pub bottom_line: Option<H::BottomLine>,
    pub help_text: Option<H::HelpText>,
}

pub struct TextFieldController<H: TextFieldHost> {
    host: H,
    input: InputState<H::Input>,
    label: LabelState<H::Label>,
    bottom_line: Option<BottomLineState<H::BottomLine>>,
    help_text: Option<HelpTextState<H::HelpText>>,
    /// Set by `set_valid`; native validation is never consulted again
    use_custom_validity_checking: bool,
    received_user_input: bool,
    is_valid: bool,
    fsm: StateMachine,
    subscriptions: Subscriptions,
}

impl<H: TextFieldHost> TextFieldController<H> {
    pub fn new(host: H, parts: TextFieldParts<H>) -> Self {
        Self {
            host,
            input: InputState::new(parts.input),
            label: LabelState::new(parts.label),
            bottom_line: parts.bottom_line.map(BottomLineState::new),
            help_text: parts.help_text.map(HelpTextState::new),
            use_custom_validity_checking: false,
            received_user_input: false,
            is_valid: true,
            fsm: Self::create_fsm(),
            subscriptions: Subscriptions::new(),
        }
    }

    fn create_fsm() -> StateMachine {
        use states::*;

        StateMachine::builder(UNFOCUSED_VALID)
            .on_any(&[UNFOCUSED_VALID, UNFOCUSED_INVALID], signals::FOCUS, FOCUSED)
            .on(FOCUSED, signals::BLUR, UNFOCUSED_VALID)
            .on(UNFOCUSED_VALID, signals::INVALID, UNFOCUSED_INVALID)
            .on(UNFOCUSED_INVALID, signals::VALID, UNFOCUSED_VALID)
            .build()
    }

    pub fn init(&mut self) {
        self.host.add_class(css_classes::UPGRADED);

        // Restored or pre-filled values
        if !self.input.value().is_empty() {
            self.label.float_label();
        }

        self.input.init();
        for event_type in ROOT_EVENTS {
            if let Some(id) = self.host.register_handler(event_type) {
                self.subscriptions.push(id);
            }
        }
        if let Some(bottom_line) = self.bottom_line.as_mut() {
            bottom_line.init();
        }

        tracing::debug!(
            bottom_line = self.bottom_line.is_some(),
            help_text = self.help_text.is_some(),
            "text field initialised"
        );
    }

    pub fn destroy(&mut self) {
        self.host.remove_class(css_classes::UPGRADED);

        self.input.destroy();
        let host = &mut self.host;
        self.subscriptions
            .release_all(|id| host.deregister_handler(id));
        if let Some(bottom_line) = self.bottom_line.as_mut() {
            bottom_line.destroy();
        }

        tracing::debug!("text field destroyed");
    }

    pub fn apply_options(&mut self, options: &TextFieldOptions) {
        if let Some(disabled) = options.disabled {
            self.set_disabled(disabled);
        }
        if let Some(valid) = options.valid {
            self.set_valid(valid);
        }
    }

    /// Route an event delivered to one of the field's parts
    pub fn handle_event(&mut self, source: EventSource, event: &Event) {
        tracing::trace!(?source, event = event_types::name(event.event_type), "text field event");

        match source {
            EventSource::Input => match self.input.handle_event(event) {
                Some(InputAction::Focused) => self.activate_focus(),
                Some(InputAction::Blurred) => self.deactivate_focus(),
                Some(InputAction::Pressed) => self.set_pointer_x_offset(event),
                None => {}
            },
            EventSource::Root => {
                if ROOT_EVENTS.contains(&event.event_type) {
                    self.handle_text_field_interaction(event);
                }
            }
            EventSource::BottomLine => {
                if event.event_type == event_types::TRANSITION_END {
                    let is_focused = self.is_focused();
                    if let Some(bottom_line) = self.bottom_line.as_mut() {
                        bottom_line.handle_transition_end(event, is_focused);
                    }
                }
            }
        }
    }

    /// React to the input gaining focus
    pub fn activate_focus(&mut self) {
        self.host.add_class(css_classes::FOCUSED);
        if let Some(bottom_line) = self.bottom_line.as_mut() {
            bottom_line.activate_focus();
        }
        self.label.float_label();
        if let Some(help_text) = self.help_text.as_mut() {
            help_text.show_help_text();
        }

        self.fsm.send(signals::FOCUS);
        tracing::debug!("text field focused");
    }

    /// React to the input losing focus
    pub fn deactivate_focus(&mut self) {
        self.host.remove_class(css_classes::FOCUSED);

        let has_valid_input = self.input.value().is_empty() && !self.input.is_bad_input();
        self.label.deactivate_focus(has_valid_input);
        if has_valid_input {
            self.received_user_input = false;
        }

        self.fsm.send(signals::BLUR);
        if self.use_custom_validity_checking {
            self.sync_validity_state();
        } else {
            let is_valid = self.input.check_validity();
            self.change_validity(is_valid);
        }
        tracing::debug!(valid = self.is_valid, "text field blurred");
    }

    pub fn change_validity(&mut self, is_valid: bool) {
        self.is_valid = is_valid;
        self.label.change_validity(is_valid);
        if is_valid {
            self.host.remove_class(css_classes::INVALID);
        } else {
            self.host.add_class(css_classes::INVALID);
        }
        if let Some(help_text) = self.help_text.as_mut() {
            help_text.update_help_text(is_valid);
        }
        self.sync_validity_state();
    }

    pub fn is_disabled(&self) -> bool {
        self.input.is_disabled()
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.input.set_disabled(disabled);
        if disabled {
            self.host.add_class(css_classes::DISABLED);
            self.host.set_icon_attr(strings::TABINDEX, "-1");
        } else {
            self.host.remove_class(css_classes::DISABLED);
            self.host.set_icon_attr(strings::TABINDEX, "0");
        }
        tracing::debug!(disabled, "text field disabled state changed");
    }

    /// Override validity. Native validation is not consulted afterwards.
    pub fn set_valid(&mut self, is_valid: bool) {
        self.use_custom_validity_checking = true;
        self.change_validity(is_valid);
    }

    pub fn state(&self) -> FieldState {
        match self.fsm.current_state() {
            states::FOCUSED => FieldState::Focused,
            states::UNFOCUSED_INVALID => FieldState::UnfocusedInvalid,
            _ => FieldState::UnfocusedValid,
        }
    }

    pub fn is_focused(&self) -> bool {
        self.fsm.is_in(states::FOCUSED)
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn uses_custom_validity(&self) -> bool {
        self.use_custom_validity_checking
    }

    /// Whether the user has clicked or typed inside the field
    pub fn received_user_input(&self) -> bool {
        self.received_user_input
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn input(&self) -> &InputState<H::Input> {
        &self.input
    }

    pub fn label(&self) -> &LabelState<H::Label> {
        &self.label
    }

    pub fn bottom_line(&self) -> Option<&BottomLineState<H::BottomLine>> {
        self.bottom_line.as_ref()
    }

    pub fn help_text(&self) -> Option<&HelpTextState<H::HelpText>> {
        self.help_text.as_ref()
    }

    fn handle_text_field_interaction(&mut self, event: &Event) {
        if self.input.is_disabled() {
            return;
        }
        self.received_user_input = true;
        self.input.mark_user_input();

        let target_is_icon = self
            .host
            .event_target_has_class(event.target, css_classes::TEXT_FIELD_ICON);
        let triggers_notification = event.event_type == event_types::CLICK || event.is_enter_key();

        if target_is_icon && triggers_notification {
            tracing::debug!("text field icon activated");
            self.host.notify_icon_action();
        }
    }

    fn set_pointer_x_offset(&mut self, event: &Event) {
        let target_left = self.input.client_left();
        if let Some(bottom_line) = self.bottom_line.as_mut() {
            bottom_line.set_transform_origin(event, target_left);
        }
    }

    fn sync_validity_state(&mut self) {
        if self.is_focused() {
            return;
        }
        let signal = if self.is_valid {
            signals::VALID
        } else {
            signals::INVALID
        };
        self.fsm.send(signal);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_core::KeyCode;

    use crate::test_host::{
        Fake, FakeBottomLine, FakeHelpText, FakeInput, FakeLabel, FakeRoot, Shared, BOTTOM_LINE,
        ICON, INPUT, ROOT,
    };

    fn controller(fake: &Shared, bottom_line: bool, help_text: bool) -> TextFieldController<FakeRoot> {
        TextFieldController::new(
            FakeRoot(fake.clone()),
            TextFieldParts {
                input: FakeInput(fake.clone()),
                label: FakeLabel(fake.clone()),
                bottom_line: bottom_line.then(|| FakeBottomLine(fake.clone())),
                help_text: help_text.then(|| FakeHelpText(fake.clone())),
            },
        )
    }

    fn full(fake: &Shared) -> TextFieldController<FakeRoot> {
        let mut field = controller(fake, true, true);
        field.init();
        field
    }

    fn focus(field: &mut TextFieldController<FakeRoot>) {
        field.handle_event(EventSource::Input, &Event::new(event_types::FOCUS, INPUT));
    }

    fn blur(field: &mut TextFieldController<FakeRoot>) {
        field.handle_event(EventSource::Input, &Event::new(event_types::BLUR, INPUT));
    }

    fn icon_notifications(fake: &Shared) -> usize {
        fake.borrow()
            .notifications
            .iter()
            .filter(|n| **n == strings::ICON_EVENT)
            .count()
    }

    #[test]
    fn test_init_marks_upgraded_and_subscribes() {
        let fake = Fake::shared();
        let field = full(&fake);

        let fake = fake.borrow();
        assert!(fake.root.contains(css_classes::UPGRADED));
        assert!(fake.listeners.has_listener(ROOT, event_types::CLICK));
        assert!(fake.listeners.has_listener(ROOT, event_types::KEY_DOWN));
        assert!(fake.listeners.has_listener(INPUT, event_types::FOCUS));
        assert!(fake.listeners.has_listener(BOTTOM_LINE, event_types::TRANSITION_END));
        assert!(!fake.label.contains(css_classes::LABEL_FLOAT_ABOVE));
        assert_eq!(field.state(), FieldState::UnfocusedValid);
    }

    #[test]
    fn test_init_floats_label_for_prefilled_value() {
        let fake = Fake::shared();
        fake.borrow_mut().value = "restored".into();
        let _field = full(&fake);
        assert!(fake.borrow().label.contains(css_classes::LABEL_FLOAT_ABOVE));
    }

    #[test]
    fn test_destroy_releases_every_listener() {
        let fake = Fake::shared();
        let mut field = full(&fake);
        assert!(!fake.borrow().listeners.is_empty());

        field.destroy();
        assert!(fake.borrow().listeners.is_empty());
        assert!(!fake.borrow().root.contains(css_classes::UPGRADED));
    }

    #[test]
    fn test_focus_then_blur_on_empty_valid_field() {
        let fake = Fake::shared();
        let mut field = full(&fake);

        focus(&mut field);
        {
            let fake = fake.borrow();
            assert!(fake.root.contains(css_classes::FOCUSED));
            assert!(fake.label.contains(css_classes::LABEL_FLOAT_ABOVE));
            assert!(fake.bottom_line.contains(css_classes::BOTTOM_LINE_ACTIVE));
            assert!(!fake.help_text_attrs.contains_key(strings::ARIA_HIDDEN));
        }
        assert_eq!(field.state(), FieldState::Focused);

        blur(&mut field);
        let fake = fake.borrow();
        assert!(!fake.root.contains(css_classes::FOCUSED));
        assert!(!fake.label.contains(css_classes::LABEL_FLOAT_ABOVE));
        assert!(!fake.label.contains(css_classes::LABEL_SHAKE));
        assert!(!fake.root.contains(css_classes::INVALID));
        assert_eq!(fake.validity_checks, 1);
        assert_eq!(field.state(), FieldState::UnfocusedValid);
    }

    #[test]
    fn test_blur_keeps_label_floating_with_value() {
        let fake = Fake::shared();
        let mut field = full(&fake);
        focus(&mut field);
        fake.borrow_mut().value = "typed".into();
        blur(&mut field);
        assert!(fake.borrow().label.contains(css_classes::LABEL_FLOAT_ABOVE));
    }

    #[test]
    fn test_blur_with_bad_input_keeps_label_and_user_input() {
        let fake = Fake::shared();
        let mut field = full(&fake);
        field.handle_event(EventSource::Root, &Event::new(event_types::CLICK, ROOT));
        focus(&mut field);
        {
            let mut fake = fake.borrow_mut();
            fake.bad_input = true;
            fake.native_valid = false;
        }
        blur(&mut field);

        {
            let fake = fake.borrow();
            assert!(fake.label.contains(css_classes::LABEL_FLOAT_ABOVE));
            assert!(fake.root.contains(css_classes::INVALID));
        }
        assert!(field.received_user_input());
        assert!(field.input().received_user_input());
        assert_eq!(field.state(), FieldState::UnfocusedInvalid);

        // Not mistaken for autofill
        field.handle_event(EventSource::Input, &Event::new(event_types::INPUT, INPUT));
        assert!(!fake.borrow().root.contains(css_classes::FOCUSED));
        assert_eq!(field.state(), FieldState::UnfocusedInvalid);
    }

    #[test]
    fn test_blur_with_native_invalid_marks_field_invalid() {
        let fake = Fake::shared();
        let mut field = full(&fake);
        fake.borrow_mut().native_valid = false;

        focus(&mut field);
        blur(&mut field);

        let fake = fake.borrow();
        assert!(fake.root.contains(css_classes::INVALID));
        assert!(fake.label.contains(css_classes::LABEL_SHAKE));
        assert_eq!(field.state(), FieldState::UnfocusedInvalid);
    }

    #[test]
    fn test_custom_validity_never_consults_native() {
        let fake = Fake::shared();
        let mut field = full(&fake);
        field.set_valid(true);
        fake.borrow_mut().native_valid = false;

        for _ in 0..3 {
            focus(&mut field);
            blur(&mut field);
        }

        assert_eq!(fake.borrow().validity_checks, 0);
        assert!(!fake.borrow().root.contains(css_classes::INVALID));
        assert!(field.uses_custom_validity());
    }

    #[test]
    fn test_set_valid_false_overrides_native_validity() {
        let fake = Fake::shared();
        let mut field = full(&fake);
        field.set_valid(false);

        {
            let fake = fake.borrow();
            assert!(fake.root.contains(css_classes::INVALID));
            assert!(fake.label.contains(css_classes::LABEL_SHAKE));
        }
        assert_eq!(field.state(), FieldState::UnfocusedInvalid);

        focus(&mut field);
        blur(&mut field);
        assert!(fake.borrow().root.contains(css_classes::INVALID));
        assert_eq!(field.state(), FieldState::UnfocusedInvalid);
    }

    #[test]
    fn test_help_text_hidden_on_blur() {
        let fake = Fake::shared();
        let mut field = full(&fake);
        focus(&mut field);
        blur(&mut field);
        assert_eq!(
            fake.borrow().help_text_attrs.get(strings::ARIA_HIDDEN).map(String::as_str),
            Some("true")
        );
    }

    #[test]
    fn test_persistent_help_text_never_hidden_when_invalid() {
        let fake = Fake::shared();
        {
            let mut fake = fake.borrow_mut();
            fake.help_text.insert(css_classes::HELPTEXT_PERSISTENT.to_string());
            fake.help_text.insert(css_classes::HELPTEXT_VALIDATION_MSG.to_string());
            fake.native_valid = false;
        }
        let mut field = full(&fake);
        focus(&mut field);
        blur(&mut field);
        field.set_valid(false);

        assert!(!fake.borrow().help_text_attrs.contains_key(strings::ARIA_HIDDEN));
    }

    #[test]
    fn test_set_disabled_toggles_class_and_icon_tabindex() {
        let fake = Fake::shared();
        let mut field = full(&fake);

        field.set_disabled(true);
        assert!(field.is_disabled());
        assert!(fake.borrow().root.contains(css_classes::DISABLED));
        assert_eq!(
            fake.borrow().icon_attrs.get(strings::TABINDEX).map(String::as_str),
            Some("-1")
        );

        field.set_disabled(false);
        assert!(!field.is_disabled());
        assert!(!fake.borrow().root.contains(css_classes::DISABLED));
        assert_eq!(
            fake.borrow().icon_attrs.get(strings::TABINDEX).map(String::as_str),
            Some("0")
        );
    }

    #[test]
    fn test_icon_click_and_enter_notify() {
        let fake = Fake::shared();
        let mut field = full(&fake);

        field.handle_event(EventSource::Root, &Event::new(event_types::CLICK, ICON));
        field.handle_event(
            EventSource::Root,
            &Event::key(event_types::KEY_DOWN, ICON, "Enter", KeyCode::UNKNOWN),
        );
        field.handle_event(
            EventSource::Root,
            &Event::key(event_types::KEY_DOWN, ICON, "", KeyCode::ENTER),
        );
        assert_eq!(icon_notifications(&fake), 3);

        // Other keys, or clicks outside the icon, do nothing
        field.handle_event(
            EventSource::Root,
            &Event::key(event_types::KEY_DOWN, ICON, "a", KeyCode(0x41)),
        );
        field.handle_event(EventSource::Root, &Event::new(event_types::CLICK, INPUT));
        assert_eq!(icon_notifications(&fake), 3);
        assert!(field.received_user_input());
    }

    #[test]
    fn test_disabled_field_ignores_icon() {
        let fake = Fake::shared();
        let mut field = full(&fake);
        field.set_disabled(true);

        field.handle_event(EventSource::Root, &Event::new(event_types::CLICK, ICON));
        field.handle_event(
            EventSource::Root,
            &Event::key(event_types::KEY_DOWN, ICON, "Enter", KeyCode::ENTER),
        );

        assert_eq!(icon_notifications(&fake), 0);
        assert!(!field.received_user_input());
    }

    #[test]
    fn test_autofill_focuses_until_user_interacts() {
        let fake = Fake::shared();
        let mut field = full(&fake);

        field.handle_event(EventSource::Input, &Event::new(event_types::INPUT, INPUT));
        assert!(fake.borrow().root.contains(css_classes::FOCUSED));
        blur(&mut field);

        field.handle_event(EventSource::Root, &Event::new(event_types::CLICK, INPUT));
        field.handle_event(EventSource::Input, &Event::new(event_types::INPUT, INPUT));
        assert!(!fake.borrow().root.contains(css_classes::FOCUSED));
    }

    #[test]
    fn test_press_sets_bottom_line_origin() {
        let fake = Fake::shared();
        fake.borrow_mut().input_left = 10.0;
        let mut field = full(&fake);

        field.handle_event(
            EventSource::Input,
            &Event::pointer(event_types::POINTER_DOWN, INPUT, 42.0, 5.0),
        );
        assert_eq!(
            fake.borrow().bottom_line_attrs.get(strings::STYLE).map(String::as_str),
            Some("transform-origin: 32px center")
        );
    }

    #[test]
    fn test_bottom_line_retires_after_blur_transition() {
        let fake = Fake::shared();
        let mut field = full(&fake);
        let opacity_end = Event::transition_end(BOTTOM_LINE, "opacity");

        focus(&mut field);
        field.handle_event(EventSource::BottomLine, &opacity_end);
        assert!(fake.borrow().bottom_line.contains(css_classes::BOTTOM_LINE_ACTIVE));

        blur(&mut field);
        field.handle_event(EventSource::BottomLine, &opacity_end);
        assert!(!fake.borrow().bottom_line.contains(css_classes::BOTTOM_LINE_ACTIVE));
    }

    #[test]
    fn test_missing_optional_parts_are_skipped() {
        let fake = Fake::shared();
        let mut field = controller(&fake, false, false);
        field.init();
        assert!(field.bottom_line().is_none());
        assert!(field.help_text().is_none());

        focus(&mut field);
        field.handle_event(
            EventSource::Input,
            &Event::pointer(event_types::POINTER_DOWN, INPUT, 1.0, 1.0),
        );
        field.set_valid(false);
        blur(&mut field);
        field.handle_event(EventSource::BottomLine, &Event::transition_end(BOTTOM_LINE, "opacity"));
        field.destroy();

        let fake = fake.borrow();
        assert!(fake.bottom_line.is_empty());
        assert!(fake.help_text_attrs.is_empty());
        assert!(fake.root.contains(css_classes::INVALID));
        assert!(fake.listeners.is_empty());
    }

    #[test]
    fn test_apply_options() {
        let fake = Fake::shared();
        let mut field = full(&fake);
        field.apply_options(&TextFieldOptions::new().disabled(true).valid(false));

        assert!(field.is_disabled());
        assert!(field.uses_custom_validity());
        assert!(!field.is_valid());
    }
}
