//! In-memory element tree
//!
//! Just enough of a document to host widgets: elements with classes,
//! attributes, and parent links; native input state for `input` and
//! `textarea` elements; listener registration; and a log of notifications
//! widgets emit.

use indexmap::{IndexMap, IndexSet};
use quill_core::events::event_types;
use quill_core::{EventType, ListenerId, ListenerRegistry};
use serde::Serialize;
use slotmap::{new_key_type, Key, KeyData, SlotMap};

new_key_type! {
    /// Handle to an element in a [`Document`]
    pub struct ElementId;
}

impl ElementId {
    /// Raw form used as an event target
    pub fn to_raw(self) -> u64 {
        self.data().as_ffi()
    }

    pub fn from_raw(raw: u64) -> Self {
        KeyData::from_ffi(raw).into()
    }
}

/// Value and constraint state of a form control
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct NativeInputState {
    pub value: String,
    pub disabled: bool,
    /// The control holds something it could not parse
    pub bad_input: bool,
    pub required: bool,
    /// Set by the page to force a validation failure
    pub custom_error: Option<String>,
    #[serde(skip)]
    validity_checks: usize,
}

impl NativeInputState {
    pub fn is_valid(&self) -> bool {
        !self.bad_input && self.custom_error.is_none() && !(self.required && self.value.is_empty())
    }

    /// Run validation and count the call
    pub fn check_validity(&mut self) -> bool {
        self.validity_checks += 1;
        self.is_valid()
    }

    /// How many times validation has been run
    pub fn validity_checks(&self) -> usize {
        self.validity_checks
    }
}

/// An element node
#[derive(Clone, Debug)]
pub struct Element {
    pub tag: String,
    pub classes: IndexSet<String>,
    pub attributes: IndexMap<String, String>,
    pub parent: Option<ElementId>,
    pub children: Vec<ElementId>,
    pub native: Option<NativeInputState>,
    /// Left edge in viewport coordinates
    pub client_left: f32,
}

impl Element {
    fn new(tag: &str) -> Self {
        let native = matches!(tag, "input" | "textarea").then(NativeInputState::default);
        Self {
            tag: tag.to_string(),
            classes: IndexSet::new(),
            attributes: IndexMap::new(),
            parent: None,
            children: Vec::new(),
            native,
            client_left: 0.0,
        }
    }
}

/// A notification a widget emitted to the page
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Emitted {
    #[serde(skip)]
    pub source: ElementId,
    pub name: String,
}

/// Serializable view of one element
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ElementSnapshot {
    pub tag: String,
    pub classes: Vec<String>,
    pub attributes: IndexMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub native: Option<NativeInputState>,
}

pub struct Document {
    elements: SlotMap<ElementId, Element>,
    listeners: ListenerRegistry,
    emitted: Vec<Emitted>,
}

impl Document {
    pub fn new() -> Self {
        Self {
            elements: SlotMap::with_key(),
            listeners: ListenerRegistry::new(),
            emitted: Vec::new(),
        }
    }

    // =========================================================================
    // Tree
    // =========================================================================

    pub fn create_element(&mut self, tag: &str) -> ElementId {
        self.elements.insert(Element::new(tag))
    }

    /// Append `child` to `parent`. Returns false if either is unknown.
    pub fn append_child(&mut self, parent: ElementId, child: ElementId) -> bool {
        if !self.elements.contains_key(parent) || !self.elements.contains_key(child) {
            return false;
        }
        if let Some(old_parent) = self.elements[child].parent {
            self.elements[old_parent].children.retain(|c| *c != child);
        }
        self.elements[child].parent = Some(parent);
        self.elements[parent].children.push(child);
        true
    }

    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id)
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.contains_key(id)
    }

    /// The element followed by its ancestors, innermost first
    pub fn path_to_root(&self, id: ElementId) -> Vec<ElementId> {
        let mut path = Vec::new();
        let mut current = self.elements.get(id).map(|_| id);
        while let Some(element) = current {
            path.push(element);
            current = self.elements[element].parent;
        }
        path
    }

    /// First descendant of `root` (depth first, document order) with `class`
    pub fn query_selector(&self, root: ElementId, class: &str) -> Option<ElementId> {
        let mut stack: Vec<ElementId> = self.elements.get(root)?.children.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            let element = &self.elements[id];
            if element.classes.contains(class) {
                return Some(id);
            }
            stack.extend(element.children.iter().rev().copied());
        }
        None
    }

    /// Element whose `id` attribute equals `dom_id`
    pub fn get_element_by_id(&self, dom_id: &str) -> Option<ElementId> {
        self.elements
            .iter()
            .find(|(_, element)| element.attributes.get("id").is_some_and(|v| v == dom_id))
            .map(|(id, _)| id)
    }

    // =========================================================================
    // Classes and attributes
    // =========================================================================

    pub fn add_class(&mut self, id: ElementId, class: &str) {
        if let Some(element) = self.elements.get_mut(id) {
            element.classes.insert(class.to_string());
        }
    }

    pub fn remove_class(&mut self, id: ElementId, class: &str) {
        if let Some(element) = self.elements.get_mut(id) {
            element.classes.shift_remove(class);
        }
    }

    pub fn has_class(&self, id: ElementId, class: &str) -> bool {
        self.elements
            .get(id)
            .is_some_and(|element| element.classes.contains(class))
    }

    pub fn set_attr(&mut self, id: ElementId, name: &str, value: &str) {
        if let Some(element) = self.elements.get_mut(id) {
            element.attributes.insert(name.to_string(), value.to_string());
        }
    }

    pub fn attr(&self, id: ElementId, name: &str) -> Option<&str> {
        self.elements
            .get(id)?
            .attributes
            .get(name)
            .map(String::as_str)
    }

    pub fn remove_attr(&mut self, id: ElementId, name: &str) {
        if let Some(element) = self.elements.get_mut(id) {
            element.attributes.shift_remove(name);
        }
    }

    pub fn set_client_left(&mut self, id: ElementId, left: f32) {
        if let Some(element) = self.elements.get_mut(id) {
            element.client_left = left;
        }
    }

    // =========================================================================
    // Form controls
    // =========================================================================

    pub fn native(&self, id: ElementId) -> Option<&NativeInputState> {
        self.elements.get(id)?.native.as_ref()
    }

    pub fn native_mut(&mut self, id: ElementId) -> Option<&mut NativeInputState> {
        self.elements.get_mut(id)?.native.as_mut()
    }

    /// Set a control's value, as typing or autofill would
    pub fn set_value(&mut self, id: ElementId, value: &str) {
        if let Some(native) = self.native_mut(id) {
            native.value = value.to_string();
        }
    }

    // =========================================================================
    // Listeners and notifications
    // =========================================================================

    pub fn add_listener(&mut self, id: ElementId, event_type: EventType) -> Option<ListenerId> {
        self.elements
            .contains_key(id)
            .then(|| self.listeners.register(id.to_raw(), event_type))
    }

    pub fn remove_listener(&mut self, listener: ListenerId) {
        self.listeners.deregister(listener);
    }

    pub fn has_listener(&self, id: ElementId, event_type: EventType) -> bool {
        self.listeners.has_listener(id.to_raw(), event_type)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Elements an event of this type visits, innermost first, filtered to
    /// those with a listener for it
    pub fn propagation_path(&self, target: ElementId, event_type: EventType) -> Vec<ElementId> {
        let path = if event_types::bubbles(event_type) {
            self.path_to_root(target)
        } else {
            vec![target]
        };
        path.into_iter()
            .filter(|id| self.has_listener(*id, event_type))
            .collect()
    }

    pub fn emit(&mut self, source: ElementId, name: &str) {
        tracing::trace!(name, "notification emitted");
        self.emitted.push(Emitted {
            source,
            name: name.to_string(),
        });
    }

    pub fn emitted(&self) -> &[Emitted] {
        &self.emitted
    }

    pub fn take_emitted(&mut self) -> Vec<Emitted> {
        std::mem::take(&mut self.emitted)
    }

    pub fn snapshot(&self, id: ElementId) -> Option<ElementSnapshot> {
        let element = self.elements.get(id)?;
        Some(ElementSnapshot {
            tag: element.tag.clone(),
            classes: element.classes.iter().cloned().collect(),
            attributes: element.attributes.clone(),
            native: element.native.clone(),
        })
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
