//! Semantic extraction engines.
//!
//! An engine recognizes readable article content directly from HTML,
//! independent of selector scoring. It is the orchestrator's first choice and
//! is treated as a black box: it either returns Markdown or nothing.

#[cfg(feature = "readability")]
use tracing::debug;

/// A heuristic article extractor consulted before selector scoring.
pub trait ContentEngine {
    /// Markdown for the page's main content, or `None` if the engine found
    /// nothing usable. Must not panic.
    fn extract(&self, html: &str, url: Option<&str>) -> Option<String>;
}

impl<F> ContentEngine for F
where
    F: Fn(&str, Option<&str>) -> Option<String>,
{
    fn extract(&self, html: &str, url: Option<&str>) -> Option<String> {
        self(html, url)
    }
}

/// An engine that never produces content.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoEngine;

impl ContentEngine for NoEngine {
    fn extract(&self, _html: &str, _url: Option<&str>) -> Option<String> {
        None
    }
}

/// Mozilla Readability, via `dom_smoothie`.
#[cfg(feature = "readability")]
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadabilityEngine;

#[cfg(feature = "readability")]
impl ContentEngine for ReadabilityEngine {
    fn extract(&self, html: &str, url: Option<&str>) -> Option<String> {
        use dom_smoothie::Readability;

        let mut reader = match Readability::new(html, url, None) {
            Ok(reader) => reader,
            Err(err) => {
                debug!(error = %err, "readability setup failed");
                return None;
            }
        };
        let article = match reader.parse() {
            Ok(article) => article,
            Err(err) => {
                debug!(error = %err, "readability found no article");
                return None;
            }
        };

        let markdown = crate::markdown::html_to_markdown(&article.content);
        (!markdown.is_empty()).then_some(markdown)
    }
}

/// Engine used by [`crate::convert`].
#[cfg(feature = "readability")]
pub type DefaultEngine = ReadabilityEngine;

/// Engine used by [`crate::convert`].
#[cfg(not(feature = "readability"))]
pub type DefaultEngine = NoEngine;
