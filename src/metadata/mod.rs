//! Metadata extraction module.
//!
//! Pulls the title, description and source URL used in the document header.
//! Everything here is a pure function of the HTML string.

use std::sync::LazyLock;

use regex::Regex;

use crate::dom;
use crate::result::{Document, Metadata};

/// Title used when the page has none.
pub const UNTITLED: &str = "Untitled";

/// Any HTML comment body.
#[allow(clippy::expect_used)]
static COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--(.*?)-->").expect("COMMENT_RE regex"));

/// Marker browsers write at the top of saved pages:
/// `<!-- saved from url=(0043)https://example.com/page -->`.
#[allow(clippy::expect_used)]
static SAVED_FROM_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"saved from url=\(\d+\)(https?://\S+)").expect("SAVED_FROM_URL_RE regex")
});

/// Extract header metadata from a document.
///
/// The caller's URL and title win over anything found in the page. The
/// `saved from url` marker is only consulted when no URL was supplied.
#[must_use]
pub fn extract_metadata(document: &Document) -> Metadata {
    let doc = dom::parse(&document.html);

    let title = document
        .title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .or_else(|| extract_title(&doc))
        .unwrap_or_else(|| UNTITLED.to_string());

    let url = document
        .url
        .clone()
        .or_else(|| recover_saved_url(&document.html));

    Metadata {
        title,
        description: extract_description(&doc),
        url,
    }
}

/// Text of the first `<title>` element, trimmed; `None` when missing or blank.
#[must_use]
pub fn extract_title(doc: &dom::Document) -> Option<String> {
    let title = doc.select("title").first().text();
    let title = title.trim();
    (!title.is_empty()).then(|| title.to_string())
}

/// `content` of `<meta name="description">`; `None` when missing or blank.
#[must_use]
pub fn extract_description(doc: &dom::Document) -> Option<String> {
    doc.select(r#"meta[name="description"]"#)
        .first()
        .attr("content")
        .map(|c| c.to_string())
        .filter(|c| !c.trim().is_empty())
}

/// Recover the original URL of a page saved by a browser.
///
/// Scans HTML comments in order; the first one containing `saved from url`
/// and matching `saved from url=(<digits>)<http(s) url>` yields the URL.
///
/// # Example
///
/// ```rust
/// use html2llm::metadata::recover_saved_url;
///
/// let html = "<!-- saved from url=(0043)https://example.com/page --><html></html>";
/// assert_eq!(recover_saved_url(html).as_deref(), Some("https://example.com/page"));
/// ```
#[must_use]
pub fn recover_saved_url(html: &str) -> Option<String> {
    COMMENT_RE
        .captures_iter(html)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str())
        .filter(|comment| comment.contains("saved from url"))
        .find_map(|comment| {
            SAVED_FROM_URL_RE
                .captures(comment)
                .and_then(|c| c.get(1))
                .map(|m| m.as_str().trim().to_string())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_and_description() {
        let html = r#"<html><head>
            <title> Docs </title>
            <meta name="description" content="Project documentation">
        </head><body></body></html>"#;

        let meta = extract_metadata(&Document::new(html));

        assert_eq!(meta.title, "Docs");
        assert_eq!(meta.description.as_deref(), Some("Project documentation"));
        assert!(meta.url.is_none());
    }

    #[test]
    fn test_multiline_title_is_trimmed() {
        let html = "<html><head><title>\n    Release Notes\n  </title></head><body></body></html>";

        let meta = extract_metadata(&Document::new(html));

        assert_eq!(meta.title, "Release Notes");
    }

    #[test]
    fn test_missing_title_is_untitled() {
        let meta = extract_metadata(&Document::new("<html><body><p>x</p></body></html>"));
        assert_eq!(meta.title, UNTITLED);

        let meta = extract_metadata(&Document::new("<title>   </title>"));
        assert_eq!(meta.title, UNTITLED);
    }

    #[test]
    fn test_caller_title_wins() {
        let doc = Document::new("<title>Page</title>").with_title("Tab title");
        assert_eq!(extract_metadata(&doc).title, "Tab title");
    }

    #[test]
    fn test_empty_description_is_none() {
        let meta = extract_metadata(&Document::new(r#"<meta name="description" content="">"#));
        assert!(meta.description.is_none());

        let meta = extract_metadata(&Document::new(r#"<meta name="description">"#));
        assert!(meta.description.is_none());
    }

    #[test]
    fn test_recover_saved_url() {
        let html = "<!DOCTYPE html>\n<!-- saved from url=(0043)https://example.com/page -->\n<html><head><title>T</title></head></html>";
        let meta = extract_metadata(&Document::new(html));
        assert_eq!(meta.url.as_deref(), Some("https://example.com/page"));
    }

    #[test]
    fn test_caller_url_takes_precedence() {
        let html = "<!-- saved from url=(0043)https://example.com/page --><html></html>";
        let doc = Document::new(html).with_url("https://other.example/");
        assert_eq!(extract_metadata(&doc).url.as_deref(), Some("https://other.example/"));
    }

    #[test]
    fn test_unrelated_comments_are_skipped() {
        let html = "<!-- build 42 --><!-- saved from url=(0022)http://example.org/a/b--><p>x</p>";
        assert_eq!(recover_saved_url(html).as_deref(), Some("http://example.org/a/b"));
    }

    #[test]
    fn test_malformed_marker_yields_none() {
        assert!(recover_saved_url("<!-- saved from url=https://example.com -->").is_none());
        assert!(recover_saved_url("<!-- saved from url=(0012)ftp://x.y -->").is_none());
        assert!(recover_saved_url("<p>saved from url=(0012)https://x.y</p>").is_none());
    }
}
