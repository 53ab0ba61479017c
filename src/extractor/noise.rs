//! Noise filter.
//!
//! Removes non-content elements from a parsed tree and recognizes text blocks
//! that are site chrome rather than content.

use dom_query::{Document, NodeRef};

use crate::dom;
use crate::selector::{is_boilerplate_text, NOISE_TAGS};

/// Remove scripts, styles and page chrome (`nav`, `header`, `footer`,
/// `aside`, `button`) from the tree.
///
/// Mutates only the caller's own parsed document.
pub fn strip_noise(doc: &Document) {
    dom::remove_tags(doc, NOISE_TAGS);
}

/// Whether a block's visible text opens like a cookie banner or login prompt.
#[must_use]
pub fn is_boilerplate(node: &NodeRef) -> bool {
    is_boilerplate_text(&dom::stripped_text(node))
}
