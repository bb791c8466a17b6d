//! Document error types

use thiserror::Error;

use crate::document::ElementId;

/// Errors raised while binding widgets to a document
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomError {
    /// The element is not (or no longer) part of the document
    #[error("Unknown element: {0:?}")]
    UnknownElement(ElementId),

    /// A text field root without its mandatory input
    #[error("Text field root {0:?} has no input element")]
    MissingInput(ElementId),
}

/// Result type for document operations
pub type Result<T> = std::result::Result<T, DomError>;
