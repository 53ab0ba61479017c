//! Raw-text fallback.
//!
//! Last resort when neither the engine nor the scorer found a region: the
//! visible text of `<body>`, one text fragment per line, with short lines and
//! leaked UI-framework class names dropped.

use dom_query::Document;

use crate::dom;
use crate::selector::RAW_TEXT_NOISE_TAGS;

/// Lines of this many characters or fewer are dropped.
pub const MAX_DROPPED_LINE_LEN: usize = 2;

/// Line prefixes that betray CSS-in-JS class names rendered as text.
pub const UI_LEAKAGE_PREFIXES: &[&str] = &["MuiTypography"];

/// Basic document cleaning before reading body text.
fn basic_cleaning(doc: &Document) {
    dom::remove_tags(doc, RAW_TEXT_NOISE_TAGS);
}

fn keep_line(line: &str) -> bool {
    line.chars().count() > MAX_DROPPED_LINE_LEN
        && !UI_LEAKAGE_PREFIXES
            .iter()
            .any(|prefix| line.starts_with(prefix))
}

/// Visible body text of `html`, or `None` if nothing survives filtering.
///
/// Parses its own copy of the document. Used when no scorer ran.
#[must_use]
pub fn raw_text(html: &str) -> Option<String> {
    raw_text_from(&dom::parse(html))
}

/// Visible body text of an already parsed document.
///
/// The document may have been stripped by the scorer; whatever it removed
/// stays removed here.
#[must_use]
pub fn raw_text_from(doc: &Document) -> Option<String> {
    basic_cleaning(doc);

    let body = doc.select("body");
    let node = body.nodes().first()?;
    let text = dom::joined_text(node, "\n");

    let content = text
        .split('\n')
        .map(str::trim)
        .filter(|line| keep_line(line))
        .collect::<Vec<_>>()
        .join("\n");

    (!content.is_empty()).then_some(content)
}
