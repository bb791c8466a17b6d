//! Text field markup
//!
//! Builds the element structure a text field attaches to:
//!
//! ```text
//! div.mdc-textfield[--box|--textarea]
//! ├── input.mdc-textfield__input [aria-controls]   (textarea for the textarea variant)
//! ├── label.mdc-textfield__label
//! ├── i.mdc-textfield__icon [tabindex]
//! └── div.mdc-textfield__bottom-line               (not for the textarea variant)
//! p.mdc-textfield-helptext#<id>                    (sibling of the root)
//! ```

use quill_textfield::{css_classes, strings};
use serde::Deserialize;

use crate::document::{Document, ElementId};

/// Help text configuration
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HelpTextMarkup {
    pub persistent: bool,
    pub validation_msg: bool,
}

/// Describes a text field to build
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TextFieldMarkup {
    /// Boxed variant
    #[serde(rename = "box")]
    pub boxed: bool,
    pub textarea: bool,
    pub label: Option<String>,
    pub icon: bool,
    pub value: String,
    pub required: bool,
    pub bad_input: bool,
    pub disabled: bool,
    pub help_text: Option<HelpTextMarkup>,
    /// DOM id of the help text element
    pub help_text_id: String,
}

impl Default for TextFieldMarkup {
    fn default() -> Self {
        Self {
            boxed: false,
            textarea: false,
            label: Some("Label".to_string()),
            icon: false,
            value: String::new(),
            required: false,
            bad_input: false,
            disabled: false,
            help_text: None,
            help_text_id: "textfield-helptext".to_string(),
        }
    }
}

/// Elements created for a text field
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextFieldElements {
    /// Page container holding the root and the help text
    pub container: ElementId,
    pub root: ElementId,
    pub input: ElementId,
    pub label: Option<ElementId>,
    pub icon: Option<ElementId>,
    pub bottom_line: Option<ElementId>,
    pub help_text: Option<ElementId>,
}

impl TextFieldMarkup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn boxed(mut self) -> Self {
        self.boxed = true;
        self
    }

    pub fn textarea(mut self) -> Self {
        self.textarea = true;
        self
    }

    pub fn no_label(mut self) -> Self {
        self.label = None;
        self
    }

    pub fn icon(mut self) -> Self {
        self.icon = true;
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Start with input the control could not parse
    pub fn bad_input(mut self) -> Self {
        self.bad_input = true;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    pub fn help_text(mut self, help_text: HelpTextMarkup) -> Self {
        self.help_text = Some(help_text);
        self
    }

    /// Create the elements in `doc`
    pub fn build(&self, doc: &mut Document) -> TextFieldElements {
        let container = doc.create_element("div");
        let root = doc.create_element("div");
        doc.append_child(container, root);
        doc.add_class(root, css_classes::ROOT);
        if self.boxed {
            doc.add_class(root, css_classes::BOX);
        }
        if self.textarea {
            doc.add_class(root, css_classes::TEXTAREA);
        }

        let input = doc.create_element(if self.textarea { "textarea" } else { "input" });
        doc.add_class(input, css_classes::INPUT);
        doc.append_child(root, input);
        if let Some(native) = doc.native_mut(input) {
            native.value = self.value.clone();
            native.required = self.required;
            native.bad_input = self.bad_input;
            native.disabled = self.disabled;
        }

        let label = self.label.as_ref().map(|_| {
            let label = doc.create_element("label");
            doc.add_class(label, css_classes::LABEL);
            doc.append_child(root, label);
            label
        });

        let icon = self.icon.then(|| {
            let icon = doc.create_element("i");
            doc.add_class(icon, css_classes::TEXT_FIELD_ICON);
            doc.set_attr(icon, strings::TABINDEX, "0");
            doc.append_child(root, icon);
            icon
        });

        let bottom_line = (!self.textarea).then(|| {
            let line = doc.create_element("div");
            doc.add_class(line, css_classes::BOTTOM_LINE);
            doc.append_child(root, line);
            line
        });

        let help_text = self.help_text.as_ref().map(|markup| {
            let help = doc.create_element("p");
            doc.add_class(help, "mdc-textfield-helptext");
            if markup.persistent {
                doc.add_class(help, css_classes::HELPTEXT_PERSISTENT);
            }
            if markup.validation_msg {
                doc.add_class(help, css_classes::HELPTEXT_VALIDATION_MSG);
            }
            doc.set_attr(help, "id", &self.help_text_id);
            doc.set_attr(help, strings::ARIA_HIDDEN, "true");
            doc.set_attr(input, strings::ARIA_CONTROLS, &self.help_text_id);
            doc.append_child(container, help);
            help
        });

        TextFieldElements {
            container,
            root,
            input,
            label,
            icon,
            bottom_line,
            help_text,
        }
    }
}
