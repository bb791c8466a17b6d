//! Text field component
//!
//! Binds a [`TextFieldController`] to text field markup in a [`Document`]:
//! finds the parts under the root, wires a host to each, and delivers
//! document events to the controller along their propagation path.
//!
//! [`Document`]: crate::document::Document

use quill_core::{event_types, Event, KeyCode};
use quill_textfield::{
    css_classes, strings, EventSource, FieldState, TextFieldController, TextFieldOptions,
    TextFieldParts,
};

use crate::document::ElementId;
use crate::error::{DomError, Result};
use crate::hosts::{
    BottomLineElement, HelpTextElement, InputElement, LabelElement, RootHost, SharedDocument,
};
use crate::ripple::{MarkerRipple, Ripple, RippleFactory};

/// Parts of a text field as found under its root
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttachedElements {
    pub root: ElementId,
    pub input: ElementId,
    pub label: Option<ElementId>,
    pub icon: Option<ElementId>,
    pub bottom_line: Option<ElementId>,
    pub help_text: Option<ElementId>,
}

pub struct TextField {
    doc: SharedDocument,
    elements: AttachedElements,
    controller: TextFieldController<RootHost>,
    ripple: Option<Box<dyn Ripple>>,
}

impl TextField {
    /// Attach to the text field rooted at `root` with default options
    pub fn attach_to(doc: &SharedDocument, root: ElementId) -> Result<Self> {
        Self::attach_with(doc, root, &TextFieldOptions::default(), None)
    }

    /// Attach to the text field rooted at `root`.
    ///
    /// Boxed fields get a ripple from `ripple_factory`, or a [`MarkerRipple`]
    /// when none is given.
    pub fn attach_with(
        doc: &SharedDocument,
        root: ElementId,
        options: &TextFieldOptions,
        ripple_factory: Option<&RippleFactory>,
    ) -> Result<Self> {
        let elements = Self::find_elements(doc, root)?;

        let parts = TextFieldParts {
            input: InputElement::new(doc.clone(), elements.input),
            label: LabelElement::new(doc.clone(), elements.label),
            bottom_line: elements
                .bottom_line
                .map(|line| BottomLineElement::new(doc.clone(), line)),
            help_text: elements
                .help_text
                .map(|help| HelpTextElement::new(doc.clone(), help)),
        };
        let host = RootHost::new(doc.clone(), root, elements.icon);
        let mut controller = TextFieldController::new(host, parts);

        let boxed = doc.borrow().has_class(root, css_classes::BOX);
        let ripple = boxed.then(|| match ripple_factory {
            Some(factory) => factory(doc, root),
            None => MarkerRipple::attach(doc, root),
        });

        controller.init();
        // Markup that starts disabled gets the matching root class
        if options.disabled.is_none() && controller.is_disabled() {
            controller.set_disabled(true);
        }
        controller.apply_options(options);

        tracing::debug!(
            ?root,
            boxed,
            icon = elements.icon.is_some(),
            "text field attached"
        );

        Ok(Self {
            doc: doc.clone(),
            elements,
            controller,
            ripple,
        })
    }

    fn find_elements(doc: &SharedDocument, root: ElementId) -> Result<AttachedElements> {
        let doc = doc.borrow();
        if !doc.contains(root) {
            return Err(DomError::UnknownElement(root));
        }

        let input = doc
            .query_selector(root, css_classes::INPUT)
            .ok_or(DomError::MissingInput(root))?;
        let label = doc.query_selector(root, css_classes::LABEL);
        let icon = doc.query_selector(root, css_classes::TEXT_FIELD_ICON);
        let bottom_line = if doc.has_class(root, css_classes::TEXTAREA) {
            None
        } else {
            doc.query_selector(root, css_classes::BOTTOM_LINE)
        };

        let help_text = doc.attr(input, strings::ARIA_CONTROLS).and_then(|id| {
            let found = doc.get_element_by_id(id);
            if found.is_none() {
                tracing::warn!(id, "aria-controls names no element, help text disabled");
            }
            found
        });

        Ok(AttachedElements {
            root,
            input,
            label,
            icon,
            bottom_line,
            help_text,
        })
    }

    /// Deliver `event` to its target and, if it bubbles, the target's
    /// ancestors. Only elements the field listens on see it.
    pub fn dispatch(&mut self, event: Event) {
        let target = ElementId::from_raw(event.target);
        let path = self
            .doc
            .borrow()
            .propagation_path(target, event.event_type);

        for element in path {
            if let Some(source) = self.source_of(element) {
                self.controller.handle_event(source, &event);
            }
        }
    }

    fn source_of(&self, element: ElementId) -> Option<EventSource> {
        if element == self.elements.root {
            Some(EventSource::Root)
        } else if element == self.elements.input {
            Some(EventSource::Input)
        } else if Some(element) == self.elements.bottom_line {
            Some(EventSource::BottomLine)
        } else {
            None
        }
    }

    // =========================================================================
    // Simulated interaction
    // =========================================================================

    pub fn focus(&mut self) {
        self.dispatch(Event::new(event_types::FOCUS, self.elements.input.to_raw()));
    }

    pub fn blur(&mut self) {
        self.dispatch(Event::new(event_types::BLUR, self.elements.input.to_raw()));
    }

    /// Replace the value and fire `input`, as typing or autofill would
    pub fn input(&mut self, value: &str) {
        self.doc.borrow_mut().set_value(self.elements.input, value);
        self.dispatch(Event::new(event_types::INPUT, self.elements.input.to_raw()));
    }

    /// Press the input at viewport x coordinate `x`
    pub fn press(&mut self, x: f32) {
        self.dispatch(Event::pointer(
            event_types::POINTER_DOWN,
            self.elements.input.to_raw(),
            x,
            0.0,
        ));
    }

    pub fn click(&mut self, element: ElementId) {
        self.dispatch(Event::new(event_types::CLICK, element.to_raw()));
    }

    pub fn key_down(&mut self, element: ElementId, key: &str, code: KeyCode) {
        self.dispatch(Event::key(event_types::KEY_DOWN, element.to_raw(), key, code));
    }

    /// Finish the bottom line transition of `property`. No-op without a
    /// bottom line.
    pub fn transition_end(&mut self, property: &str) {
        if let Some(line) = self.elements.bottom_line {
            self.dispatch(Event::transition_end(line.to_raw(), property));
        }
    }

    // =========================================================================
    // Properties
    // =========================================================================

    pub fn disabled(&self) -> bool {
        self.controller.is_disabled()
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.controller.set_disabled(disabled);
    }

    pub fn set_valid(&mut self, is_valid: bool) {
        self.controller.set_valid(is_valid);
    }

    pub fn state(&self) -> FieldState {
        self.controller.state()
    }

    pub fn controller(&self) -> &TextFieldController<RootHost> {
        &self.controller
    }

    pub fn elements(&self) -> &AttachedElements {
        &self.elements
    }

    pub fn has_ripple(&self) -> bool {
        self.ripple.is_some()
    }

    /// Detach from the document, releasing every listener
    pub fn destroy(mut self) {
        self.controller.destroy();
        if let Some(mut ripple) = self.ripple.take() {
            ripple.destroy();
        }
        tracing::debug!(root = ?self.elements.root, "text field detached");
    }
}
