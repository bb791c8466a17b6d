//! Host trait implementations backed by a shared [`Document`]
//!
//! Each host holds the document and the element it stands for. Borrows of the
//! document last for a single call, so a foundation may call several hosts in
//! a row without conflicts.

use std::cell::RefCell;
use std::rc::Rc;

use quill_core::{EventType, ListenerId};
use quill_textfield::host::{
    BottomLineHost, HelpTextHost, InputHost, LabelHost, NativeInput, TextFieldHost,
};
use quill_textfield::strings;

use crate::document::{Document, ElementId};

/// A document shared between the hosts of one or more widgets
pub type SharedDocument = Rc<RefCell<Document>>;

/// Text field root and its optional icon
pub struct RootHost {
    doc: SharedDocument,
    root: ElementId,
    icon: Option<ElementId>,
}

impl RootHost {
    pub fn new(doc: SharedDocument, root: ElementId, icon: Option<ElementId>) -> Self {
        Self { doc, root, icon }
    }
}

impl TextFieldHost for RootHost {
    type Input = InputElement;
    type Label = LabelElement;
    type BottomLine = BottomLineElement;
    type HelpText = HelpTextElement;

    fn add_class(&mut self, class: &str) {
        self.doc.borrow_mut().add_class(self.root, class);
    }

    fn remove_class(&mut self, class: &str) {
        self.doc.borrow_mut().remove_class(self.root, class);
    }

    fn set_icon_attr(&mut self, name: &str, value: &str) {
        if let Some(icon) = self.icon {
            self.doc.borrow_mut().set_attr(icon, name, value);
        }
    }

    fn event_target_has_class(&self, target: u64, class: &str) -> bool {
        self.doc
            .borrow()
            .has_class(ElementId::from_raw(target), class)
    }

    fn register_handler(&mut self, event_type: EventType) -> Option<ListenerId> {
        self.doc.borrow_mut().add_listener(self.root, event_type)
    }

    fn deregister_handler(&mut self, id: ListenerId) {
        self.doc.borrow_mut().remove_listener(id);
    }

    fn notify_icon_action(&mut self) {
        self.doc.borrow_mut().emit(self.root, strings::ICON_EVENT);
    }
}

/// The native input element
pub struct InputElement {
    doc: SharedDocument,
    element: ElementId,
}

impl InputElement {
    pub fn new(doc: SharedDocument, element: ElementId) -> Self {
        Self { doc, element }
    }
}

impl InputHost for InputElement {
    type Native = NativeInputHandle;

    fn register_handler(&mut self, event_type: EventType) -> Option<ListenerId> {
        self.doc.borrow_mut().add_listener(self.element, event_type)
    }

    fn deregister_handler(&mut self, id: ListenerId) {
        self.doc.borrow_mut().remove_listener(id);
    }

    fn native_input(&self) -> Option<NativeInputHandle> {
        self.doc
            .borrow()
            .native(self.element)
            .map(|_| NativeInputHandle {
                doc: self.doc.clone(),
                element: self.element,
            })
    }

    fn client_left(&self) -> f32 {
        self.doc
            .borrow()
            .element(self.element)
            .map_or(0.0, |element| element.client_left)
    }

    fn notify_focus(&mut self) {
        self.doc.borrow_mut().emit(self.element, strings::FOCUS_EVENT);
    }

    fn notify_blur(&mut self) {
        self.doc.borrow_mut().emit(self.element, strings::BLUR_EVENT);
    }

    fn notify_pressed(&mut self) {
        self.doc.borrow_mut().emit(self.element, strings::PRESSED_EVENT);
    }
}

/// Live view of a form control's native state
pub struct NativeInputHandle {
    doc: SharedDocument,
    element: ElementId,
}

impl NativeInput for NativeInputHandle {
    fn value(&self) -> String {
        self.doc
            .borrow()
            .native(self.element)
            .map(|native| native.value.clone())
            .unwrap_or_default()
    }

    fn is_disabled(&self) -> bool {
        self.doc
            .borrow()
            .native(self.element)
            .is_some_and(|native| native.disabled)
    }

    fn set_disabled(&mut self, disabled: bool) {
        if let Some(native) = self.doc.borrow_mut().native_mut(self.element) {
            native.disabled = disabled;
        }
    }

    fn is_bad_input(&self) -> bool {
        self.doc
            .borrow()
            .native(self.element)
            .is_some_and(|native| native.bad_input)
    }

    fn check_validity(&mut self) -> bool {
        self.doc
            .borrow_mut()
            .native_mut(self.element)
            .map_or(true, |native| native.check_validity())
    }
}

/// The floating label; markup without a label still gets a host
pub struct LabelElement {
    doc: SharedDocument,
    element: Option<ElementId>,
}

impl LabelElement {
    pub fn new(doc: SharedDocument, element: Option<ElementId>) -> Self {
        Self { doc, element }
    }
}

impl LabelHost for LabelElement {
    fn add_class(&mut self, class: &str) {
        if let Some(label) = self.element {
            self.doc.borrow_mut().add_class(label, class);
        }
    }

    fn remove_class(&mut self, class: &str) {
        if let Some(label) = self.element {
            self.doc.borrow_mut().remove_class(label, class);
        }
    }
}

pub struct BottomLineElement {
    doc: SharedDocument,
    element: ElementId,
}

impl BottomLineElement {
    pub fn new(doc: SharedDocument, element: ElementId) -> Self {
        Self { doc, element }
    }
}

impl BottomLineHost for BottomLineElement {
    fn add_class(&mut self, class: &str) {
        self.doc.borrow_mut().add_class(self.element, class);
    }

    fn remove_class(&mut self, class: &str) {
        self.doc.borrow_mut().remove_class(self.element, class);
    }

    fn set_attr(&mut self, name: &str, value: &str) {
        self.doc.borrow_mut().set_attr(self.element, name, value);
    }

    fn register_handler(&mut self, event_type: EventType) -> Option<ListenerId> {
        self.doc.borrow_mut().add_listener(self.element, event_type)
    }

    fn deregister_handler(&mut self, id: ListenerId) {
        self.doc.borrow_mut().remove_listener(id);
    }
}

pub struct HelpTextElement {
    doc: SharedDocument,
    element: ElementId,
}

impl HelpTextElement {
    pub fn new(doc: SharedDocument, element: ElementId) -> Self {
        Self { doc, element }
    }
}

impl HelpTextHost for HelpTextElement {
    fn add_class(&mut self, class: &str) {
        self.doc.borrow_mut().add_class(self.element, class);
    }

    fn remove_class(&mut self, class: &str) {
        self.doc.borrow_mut().remove_class(self.element, class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.doc.borrow().has_class(self.element, class)
    }

    fn set_attr(&mut self, name: &str, value: &str) {
        self.doc.borrow_mut().set_attr(self.element, name, value);
    }

    fn remove_attr(&mut self, name: &str) {
        self.doc.borrow_mut().remove_attr(self.element, name);
    }
}
