//! Recording hosts for foundation tests

use std::cell::RefCell;
use std::rc::Rc;

use quill_core::{EventType, ListenerId, ListenerRegistry};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::host::{
    BottomLineHost, HelpTextHost, InputHost, LabelHost, NativeInput, TextFieldHost,
};

pub const ROOT: u64 = 1;
pub const INPUT: u64 = 2;
pub const BOTTOM_LINE: u64 = 3;
pub const ICON: u64 = 4;

/// Everything the fake hosts write, in one place
pub struct Fake {
    pub root: FxHashSet<String>,
    pub label: FxHashSet<String>,
    pub bottom_line: FxHashSet<String>,
    pub help_text: FxHashSet<String>,
    pub bottom_line_attrs: FxHashMap<String, String>,
    pub help_text_attrs: FxHashMap<String, String>,
    pub icon_attrs: FxHashMap<String, String>,
    pub icon_classes: FxHashMap<u64, Vec<String>>,

    pub has_native: bool,
    pub value: String,
    pub disabled: bool,
    pub bad_input: bool,
    pub native_valid: bool,
    pub validity_checks: usize,
    pub input_left: f32,

    pub listeners: ListenerRegistry,
    pub notifications: Vec<&'static str>,
}

impl Fake {
    pub fn new() -> Self {
        let mut icon_classes = FxHashMap::default();
        icon_classes.insert(ICON, vec![crate::css_classes::TEXT_FIELD_ICON.to_string()]);
        Self {
            root: FxHashSet::default(),
            label: FxHashSet::default(),
            bottom_line: FxHashSet::default(),
            help_text: FxHashSet::default(),
            bottom_line_attrs: FxHashMap::default(),
            help_text_attrs: FxHashMap::default(),
            icon_attrs: FxHashMap::default(),
            icon_classes,
            has_native: true,
            value: String::new(),
            disabled: false,
            bad_input: false,
            native_valid: true,
            validity_checks: 0,
            input_left: 0.0,
            listeners: ListenerRegistry::new(),
            notifications: Vec::new(),
        }
    }

    pub fn shared() -> Rc<RefCell<Fake>> {
        Rc::new(RefCell::new(Self::new()))
    }
}

pub type Shared = Rc<RefCell<Fake>>;

pub struct FakeRoot(pub Shared);
pub struct FakeInput(pub Shared);
pub struct FakeNative(pub Shared);
pub struct FakeLabel(pub Shared);
pub struct FakeBottomLine(pub Shared);
pub struct FakeHelpText(pub Shared);

impl TextFieldHost for FakeRoot {
    type Input = FakeInput;
    type Label = FakeLabel;
    type BottomLine = FakeBottomLine;
    type HelpText = FakeHelpText;

    fn add_class(&mut self, class: &str) {
        self.0.borrow_mut().root.insert(class.to_string());
    }

    fn remove_class(&mut self, class: &str) {
        self.0.borrow_mut().root.remove(class);
    }

    fn set_icon_attr(&mut self, name: &str, value: &str) {
        self.0
            .borrow_mut()
            .icon_attrs
            .insert(name.to_string(), value.to_string());
    }

    fn event_target_has_class(&self, target: u64, class: &str) -> bool {
        self.0
            .borrow()
            .icon_classes
            .get(&target)
            .is_some_and(|classes| classes.iter().any(|c| c == class))
    }

    fn register_handler(&mut self, event_type: EventType) -> Option<ListenerId> {
        Some(self.0.borrow_mut().listeners.register(ROOT, event_type))
    }

    fn deregister_handler(&mut self, id: ListenerId) {
        self.0.borrow_mut().listeners.deregister(id);
    }

    fn notify_icon_action(&mut self) {
        self.0
            .borrow_mut()
            .notifications
            .push(crate::strings::ICON_EVENT);
    }
}

impl InputHost for FakeInput {
    type Native = FakeNative;

    fn register_handler(&mut self, event_type: EventType) -> Option<ListenerId> {
        Some(self.0.borrow_mut().listeners.register(INPUT, event_type))
    }

    fn deregister_handler(&mut self, id: ListenerId) {
        self.0.borrow_mut().listeners.deregister(id);
    }

    fn native_input(&self) -> Option<FakeNative> {
        self.0
            .borrow()
            .has_native
            .then(|| FakeNative(self.0.clone()))
    }

    fn client_left(&self) -> f32 {
        self.0.borrow().input_left
    }

    fn notify_focus(&mut self) {
        self.0
            .borrow_mut()
            .notifications
            .push(crate::strings::FOCUS_EVENT);
    }

    fn notify_blur(&mut self) {
        self.0
            .borrow_mut()
            .notifications
            .push(crate::strings::BLUR_EVENT);
    }

    fn notify_pressed(&mut self) {
        self.0
            .borrow_mut()
            .notifications
            .push(crate::strings::PRESSED_EVENT);
    }
}

impl NativeInput for FakeNative {
    fn value(&self) -> String {
        self.0.borrow().value.clone()
    }

    fn is_disabled(&self) -> bool {
        self.0.borrow().disabled
    }

    fn set_disabled(&mut self, disabled: bool) {
        self.0.borrow_mut().disabled = disabled;
    }

    fn is_bad_input(&self) -> bool {
        self.0.borrow().bad_input
    }

    fn check_validity(&mut self) -> bool {
        let mut fake = self.0.borrow_mut();
        fake.validity_checks += 1;
        fake.native_valid
    }
}

impl LabelHost for FakeLabel {
    fn add_class(&mut self, class: &str) {
        self.0.borrow_mut().label.insert(class.to_string());
    }

    fn remove_class(&mut self, class: &str) {
        self.0.borrow_mut().label.remove(class);
    }
}

impl BottomLineHost for FakeBottomLine {
    fn add_class(&mut self, class: &str) {
        self.0.borrow_mut().bottom_line.insert(class.to_string());
    }

    fn remove_class(&mut self, class: &str) {
        self.0.borrow_mut().bottom_line.remove(class);
    }

    fn set_attr(&mut self, name: &str, value: &str) {
        self.0
            .borrow_mut()
            .bottom_line_attrs
            .insert(name.to_string(), value.to_string());
    }

    fn register_handler(&mut self, event_type: EventType) -> Option<ListenerId> {
        Some(self.0.borrow_mut().listeners.register(BOTTOM_LINE, event_type))
    }

    fn deregister_handler(&mut self, id: ListenerId) {
        self.0.borrow_mut().listeners.deregister(id);
    }
}

impl HelpTextHost for FakeHelpText {
    fn add_class(&mut self, class: &str) {
        self.0.borrow_mut().help_text.insert(class.to_string());
    }

    fn remove_class(&mut self, class: &str) {
        self.0.borrow_mut().help_text.remove(class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.borrow().help_text.contains(class)
    }

    fn set_attr(&mut self, name: &str, value: &str) {
        self.0
            .borrow_mut()
            .help_text_attrs
            .insert(name.to_string(), value.to_string());
    }

    fn remove_attr(&mut self, name: &str) {
        self.0.borrow_mut().help_text_attrs.remove(name);
    }
}
