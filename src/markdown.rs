//! Markdown normalization.
//!
//! HTML is converted with `quick_html2md` (ATX headings, `-` bullets, GFM
//! tables) and the result collapsed so that every line carries content.

use dom_query::Selection;
use quick_html2md::{html_to_markdown_with_options, MarkdownOptions};

use crate::dom;

/// Converter settings shared by every strategy: links kept, images dropped,
/// tables preserved.
fn markdown_options() -> MarkdownOptions {
    MarkdownOptions::new()
        .include_links(true)
        .include_images(false)
        .preserve_tables(true)
}

/// Convert an HTML fragment to collapsed Markdown.
#[must_use]
pub fn html_to_markdown(html: &str) -> String {
    let raw = html_to_markdown_with_options(html, &markdown_options());
    collapse_lines(&raw)
}

/// Convert a DOM subtree to collapsed Markdown.
#[must_use]
pub fn to_markdown(region: &Selection) -> String {
    html_to_markdown(&dom::outer_html(region))
}

/// Trim every line and drop the empty ones.
///
/// Only whitespace around lines is touched; inline content is preserved.
///
/// # Examples
///
/// ```
/// use html2llm::markdown::collapse_lines;
///
/// assert_eq!(collapse_lines("  # Title \n\n\n- item\n   \n"), "# Title\n- item");
/// ```
#[must_use]
pub fn collapse_lines(markdown: &str) -> String {
    markdown
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_lines_is_idempotent() {
        let input = "\n  # Heading  \n\n\n  Some *inline*  text \r\n\t- a\n-   b  \n\n";
        let once = collapse_lines(input);
        let twice = collapse_lines(&once);

        assert_eq!(once, twice);
        assert_eq!(once, "# Heading\nSome *inline*  text\n- a\n-   b");
    }

    #[test]
    fn test_collapse_lines_empty() {
        assert_eq!(collapse_lines(""), "");
        assert_eq!(collapse_lines(" \n\t\n "), "");
    }

    #[test]
    fn test_headings_use_atx_style() {
        let md = html_to_markdown("<h1>H1</h1><h2>H2</h2><p>Para</p>");
        assert!(md.contains("# H1"), "{md}");
        assert!(md.contains("## H2"), "{md}");
        assert!(md.contains("Para"), "{md}");
    }

    #[test]
    fn test_bullets_use_dash() {
        let md = html_to_markdown("<ul><li>item 1</li><li>item 2</li></ul>");
        assert!(md.contains("- item 1"), "{md}");
        assert!(md.contains("- item 2"), "{md}");
    }

    #[test]
    fn test_no_blank_lines_in_output() {
        let md = html_to_markdown("<h1>T</h1><p>One</p><p>Two</p><ul><li>x</li></ul>");
        assert!(md.lines().all(|l| !l.trim().is_empty()), "{md}");
    }

    #[test]
    fn test_to_markdown_converts_region() {
        let doc = dom::parse("<body><main><h1>Hi</h1><p>World</p></main><p>Outside</p></body>");
        let md = to_markdown(&doc.select("main"));

        assert!(md.contains("# Hi"));
        assert!(md.contains("World"));
        assert!(!md.contains("Outside"));
    }
}
