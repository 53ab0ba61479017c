//! Selector catalogs for main-content detection and noise removal.
//!
//! Lists are ordered: landmarks first, then content class/id conventions,
//! then framework-specific containers, then generic structural patterns.

/// Elements removed from the tree before any candidate is scored.
pub const NOISE_TAGS: &[&str] = &["script", "style", "nav", "header", "footer", "aside", "button"];

/// Elements removed before the raw-text fallback reads `<body>`.
pub const RAW_TEXT_NOISE_TAGS: &[&str] = &["script", "style", "nav", "header", "footer"];

/// Case-sensitive markers that flag a text block as site chrome when they
/// occur in its first [`BOILERPLATE_PREFIX_CHARS`] characters.
pub const BOILERPLATE_MARKERS: &[&str] = &["Cookie", "Accept", "Login", "Sign in"];

/// Length of the text prefix scanned for [`BOILERPLATE_MARKERS`].
pub const BOILERPLATE_PREFIX_CHARS: usize = 100;

/// Selectors consulted by the score-all scorer. Every match is measured; the
/// longest text wins.
pub const SCORED_CONTENT_SELECTORS: &[&str] = &[
    // Landmarks
    "main",
    "article",
    "[role=\"main\"]",
    ".main-content",
    "#main-content",
    ".content",
    "#content",
    // Documentation sites
    ".docs-content",
    ".documentation-content",
    ".markdown-body",
    ".doc-content",
    ".page-content",
    ".post-content",
    // TechDocs / Backstage
    ".jss4-511",
    "[class*=\"makeStyles-content\"]",
    "[class*=\"TechDocsContent\"]",
    "[class*=\"MarkdownContent\"]",
    ".MuiContainer-root article",
    "div[class*=\"jss\"][class*=\"511\"]",
    // Material-UI containers
    ".MuiContainer-root",
    ".MuiPaper-root",
    // Any div holding prose directly
    "div:has(> h1, > h2, > h3, > p, > ul, > ol, > pre)",
];

/// Selectors walked by the first-match scorer; the first hit is returned.
pub const FIRST_MATCH_CONTENT_SELECTORS: &[&str] = &[
    "main",
    "article",
    "[role=\"main\"]",
    ".docs-content",
    ".documentation-content",
    ".markdown-body",
    ".content-body",
    "#content",
    ".content",
    "div.content",
    ".doc-content",
    ".page-content",
    ".post-content",
    ".MuiContainer-root",
    "[class*=\"makeStyles-content\"]",
    "[class*=\"docs\"]",
    "[class*=\"documentation\"]",
    ".main-content",
    "#main-content",
];

/// Whether `text` looks like a cookie banner, login prompt or similar chrome.
///
/// Only the first [`BOILERPLATE_PREFIX_CHARS`] characters are scanned.
#[must_use]
pub fn is_boilerplate_text(text: &str) -> bool {
    let prefix: String = text.chars().take(BOILERPLATE_PREFIX_CHARS).collect();
    BOILERPLATE_MARKERS
        .iter()
        .any(|marker| prefix.contains(marker))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom;

    #[test]
    fn test_boilerplate_marker_in_prefix() {
        assert!(is_boilerplate_text("Cookie banner: accept all cookies to continue"));
        assert!(is_boilerplate_text("Please Sign in to read more"));
        assert!(!is_boilerplate_text("An article about baking bread"));
    }

    #[test]
    fn test_boilerplate_markers_are_case_sensitive() {
        assert!(!is_boilerplate_text("we use cookies and you can accept them"));
    }

    #[test]
    fn test_boilerplate_marker_after_prefix_is_ignored() {
        let text = format!("{}Cookie", "x".repeat(BOILERPLATE_PREFIX_CHARS));
        assert!(!is_boilerplate_text(&text));

        let text = format!("{}Cookie", "x".repeat(BOILERPLATE_PREFIX_CHARS - 6));
        assert!(is_boilerplate_text(&text));
    }

    #[test]
    fn test_all_catalog_selectors_parse() {
        let doc = dom::parse("<html><body><div><p>x</p></div></body></html>");
        let plain = SCORED_CONTENT_SELECTORS
            .iter()
            .chain(FIRST_MATCH_CONTENT_SELECTORS)
            .filter(|s| !s.contains(":has("));
        for selector in plain {
            assert!(
                dom::try_select_all(&doc, selector).is_some(),
                "selector failed to parse: {selector}"
            );
        }
    }
}
