//! Output formatting.
//!
//! The converted document has a fixed shape:
//!
//! ```text
//! # {title}
//! Source: {url}
//! Description: {description}
//!
//! ---
//!
//! {body}
//! ```
//!
//! `Source` appears only when a URL is known; `Description` only for flows
//! that carry it.

use std::fmt::Display;

use crate::result::Metadata;

/// Separator block between header and body.
pub const SEPARATOR: &str = "\n---\n";

/// Appended to output cut at the maximum length.
pub const TRUNCATION_SUFFIX: &str = "\n\n[Content truncated...]";

/// Assemble header and body into the final document.
#[must_use]
pub fn format_output(metadata: &Metadata, body: &str, include_description: bool) -> String {
    let mut lines = vec![format!("# {}", metadata.title)];

    if let Some(url) = &metadata.url {
        lines.push(format!("Source: {url}"));
    }
    if include_description {
        if let Some(description) = &metadata.description {
            lines.push(format!("Description: {description}"));
        }
    }
    lines.push(SEPARATOR.to_string());
    lines.push(body.to_string());

    lines.join("\n")
}

/// Format a failure in place of the normal output.
#[must_use]
pub fn render_error(message: &dyn Display) -> String {
    format!("Error: {message}")
}

/// Cut `output` to `max_length` characters and mark it as truncated.
///
/// `None` and `Some(0)` mean no limit.
///
/// # Example
///
/// ```rust
/// use html2llm::format::{truncate, TRUNCATION_SUFFIX};
///
/// let out = truncate("x".repeat(80), Some(50));
/// assert_eq!(out.len(), 50 + TRUNCATION_SUFFIX.len());
/// assert!(out.ends_with(TRUNCATION_SUFFIX));
/// ```
#[must_use]
pub fn truncate(output: String, max_length: Option<usize>) -> String {
    match max_length {
        Some(max) if max > 0 && output.chars().count() > max => {
            let mut cut: String = output.chars().take(max).collect();
            cut.push_str(TRUNCATION_SUFFIX);
            cut
        }
        _ => output,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(url: Option<&str>, description: Option<&str>) -> Metadata {
        Metadata {
            title: "Docs".to_string(),
            description: description.map(str::to_string),
            url: url.map(str::to_string),
        }
    }

    #[test]
    fn test_format_with_source() {
        let out = format_output(&metadata(Some("https://example.com"), None), "Body", false);
        assert_eq!(out, "# Docs\nSource: https://example.com\n\n---\n\nBody");
    }

    #[test]
    fn test_format_without_source() {
        let out = format_output(&metadata(None, None), "Body", false);
        assert_eq!(out, "# Docs\n\n---\n\nBody");
    }

    #[test]
    fn test_description_only_when_requested() {
        let meta = metadata(Some("https://example.com"), Some("About docs"));

        let with = format_output(&meta, "Body", true);
        assert_eq!(
            with,
            "# Docs\nSource: https://example.com\nDescription: About docs\n\n---\n\nBody"
        );

        let without = format_output(&meta, "Body", false);
        assert!(!without.contains("Description:"));
    }

    #[test]
    fn test_truncate_appends_suffix() {
        let out = truncate("a".repeat(120), Some(50));

        assert_eq!(out.len(), 50 + TRUNCATION_SUFFIX.len());
        assert!(out.ends_with(TRUNCATION_SUFFIX));
        assert!(out.starts_with(&"a".repeat(50)));
    }

    #[test]
    fn test_truncate_leaves_short_output() {
        assert_eq!(truncate("short".to_string(), Some(50)), "short");
        assert_eq!(truncate("a".repeat(50), Some(50)), "a".repeat(50));
        assert_eq!(truncate("long".repeat(100), None).len(), 400);
        assert_eq!(truncate("long".repeat(100), Some(0)).len(), 400);
    }

    #[test]
    fn test_truncate_counts_characters() {
        let out = truncate("é".repeat(10), Some(4));
        assert_eq!(out, format!("éééé{TRUNCATION_SUFFIX}"));
    }

    #[test]
    fn test_render_error() {
        assert_eq!(render_error(&"timed out"), "Error: timed out");
    }
}
