//! Structural markup failures.

use thiserror::Error;

/// Expected structure absent from (or invalid for) a parsed document.
///
/// Distinct from JSON decode failures: these fire when the markup itself does
/// not hold the nodes, attributes or text a parser relies on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarkupError {
    #[error("invalid CSS selector '{selector}'")]
    InvalidSelector { selector: String },

    #[error("no element matches selector '{selector}'")]
    SelectorNotFound { selector: String },

    #[error("attribute '{attribute}' missing on '{selector}' element")]
    AttributeMissing { selector: String, attribute: String },

    #[error("no child element at index {index}")]
    ChildMissing { index: usize },

    #[error("element has no text content")]
    TextMissing,
}

impl MarkupError {
    pub fn invalid_selector(selector: impl Into<String>) -> Self {
        Self::InvalidSelector {
            selector: selector.into(),
        }
    }

    pub fn selector_not_found(selector: impl Into<String>) -> Self {
        Self::SelectorNotFound {
            selector: selector.into(),
        }
    }

    pub fn attribute_missing(selector: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self::AttributeMissing {
            selector: selector.into(),
            attribute: attribute.into(),
        }
    }

    pub fn child_missing(index: usize) -> Self {
        Self::ChildMissing { index }
    }
}
