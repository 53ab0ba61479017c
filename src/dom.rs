//! DOM Operations Adapter
//!
//! Thin helpers over the `dom_query` crate. A parsed [`Document`] is the
//! arena for one conversion call: every [`Selection`] handed around borrows
//! from it and is dropped with it.

pub use dom_query::{Document, Matcher, NodeRef, Selection};

/// Parse an HTML string into a document.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Select all elements matching a CSS selector, or `None` if the selector
/// does not parse.
///
/// `dom_query`'s `select` panics on malformed selectors; this goes through a
/// [`Matcher`] so a bad pattern only skips itself.
#[must_use]
pub fn try_select_all<'a>(doc: &'a Document, selector: &str) -> Option<Selection<'a>> {
    let matcher = Matcher::new(selector).ok()?;
    Some(doc.select_matcher(&matcher))
}

/// Remove every element matching any of the given tag names.
pub fn remove_tags(doc: &Document, tags: &[&str]) {
    let selector = tags.join(", ");
    doc.select(&selector).remove();
}

/// Get tag name (lowercase)
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(NodeRef::node_name)
        .map(|t| t.to_ascii_lowercase())
}

/// Get outer HTML of the first node in the selection.
#[inline]
#[must_use]
pub fn outer_html(sel: &Selection) -> String {
    sel.html().to_string()
}

/// Visible text fragments of a node: each descendant text node, trimmed,
/// empty ones dropped, in document order.
fn text_fragments(node: &NodeRef) -> Vec<String> {
    node.descendants()
        .into_iter()
        .filter(NodeRef::is_text)
        .map(|n| n.text().trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Visible text of a node with whitespace stripped from each text fragment
/// and the fragments concatenated without a separator.
#[must_use]
pub fn stripped_text(node: &NodeRef) -> String {
    text_fragments(node).concat()
}

/// Text density of a node: character count of [`stripped_text`].
#[must_use]
pub fn text_length(node: &NodeRef) -> usize {
    text_fragments(node).iter().map(|t| t.chars().count()).sum()
}

/// Visible text of a node, trimmed fragments joined by `separator`.
#[must_use]
pub fn joined_text(node: &NodeRef, separator: &str) -> String {
    text_fragments(node).join(separator)
}
