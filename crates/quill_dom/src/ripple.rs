//! Ripple attachment
//!
//! The ripple effect itself lives outside this crate. Boxed text fields ask a
//! [`RippleFactory`] for one on attach and destroy it on detach.

use crate::document::ElementId;
use crate::hosts::SharedDocument;

/// Class a [`MarkerRipple`] puts on its surface
pub const RIPPLE_UPGRADED: &str = "mdc-ripple-upgraded";

/// An attached ripple
pub trait Ripple {
    fn destroy(&mut self);
}

/// Creates a ripple for a surface element
pub type RippleFactory = dyn Fn(&SharedDocument, ElementId) -> Box<dyn Ripple>;

/// Stand-in ripple that only marks its surface as upgraded
pub struct MarkerRipple {
    doc: SharedDocument,
    surface: ElementId,
}

impl MarkerRipple {
    pub fn attach(doc: &SharedDocument, surface: ElementId) -> Box<dyn Ripple> {
        doc.borrow_mut().add_class(surface, RIPPLE_UPGRADED);
        Box::new(Self {
            doc: doc.clone(),
            surface,
        })
    }
}

impl Ripple for MarkerRipple {
    fn destroy(&mut self) {
        self.doc.borrow_mut().remove_class(self.surface, RIPPLE_UPGRADED);
    }
}
