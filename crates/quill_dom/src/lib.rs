//! Quill DOM
//!
//! A small in-memory element tree with the host implementations that bind
//! [`quill_textfield`] foundations to it. Used to drive text fields from
//! tests and from the `quill` replay tool without a browser.
//!
//! # Example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use quill_dom::{Document, TextField, TextFieldMarkup};
//!
//! let doc = Rc::new(RefCell::new(Document::new()));
//! let elements = TextFieldMarkup::new().required().build(&mut doc.borrow_mut());
//!
//! let mut field = TextField::attach_to(&doc, elements.root).unwrap();
//! field.focus();
//! field.blur();
//! assert!(!field.controller().is_valid());
//! field.destroy();
//! assert_eq!(doc.borrow().listener_count(), 0);
//! ```

pub mod document;
pub mod error;
pub mod hosts;
pub mod markup;
pub mod ripple;
pub mod textfield;

pub use document::{Document, Element, ElementId, ElementSnapshot, Emitted, NativeInputState};
pub use error::{DomError, Result};
pub use hosts::SharedDocument;
pub use markup::{HelpTextMarkup, TextFieldElements, TextFieldMarkup};
pub use ripple::{MarkerRipple, Ripple, RippleFactory, RIPPLE_UPGRADED};
pub use textfield::{AttachedElements, TextField};
