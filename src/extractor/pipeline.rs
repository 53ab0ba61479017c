//! Content extraction pipeline.
//!
//! Runs the extraction strategies in a fixed order and stops at the first
//! one that produces content:
//!
//! 1. semantic engine (methods `auto` and `engine`)
//! 2. candidate region scorer + Markdown normalizer (methods `auto` and `selector`)
//! 3. raw body text, read from the scorer's noise-stripped parse when the
//!    scorer ran
//!
//! A strategy that finds nothing is not an error; the cascade moves on. The
//! pipeline itself never fails: it yields `Some(body)` or `None`.

use tracing::debug;

use super::engine::{ContentEngine, DefaultEngine};
use super::fallback::{raw_text, raw_text_from};
use super::scorer::{RegionScorer, Scorer};
use crate::dom::{self, Document};
use crate::markdown;
use crate::options::{Method, Options};

/// The extraction orchestrator.
///
/// Generic over the engine and scorer so either can be replaced; the
/// defaults are Readability and the selector [`Scorer`].
#[derive(Debug, Clone)]
pub struct Extractor<E = DefaultEngine, S = Scorer> {
    engine: E,
    scorer: S,
    method: Method,
}

impl Extractor {
    /// Default engine and a scorer matching the options' variant.
    #[must_use]
    pub fn from_options(options: &Options) -> Self {
        Self::new(
            DefaultEngine::default(),
            Scorer::new(options.scorer_variant()),
            options.method,
        )
    }
}

impl<E: ContentEngine, S: RegionScorer> Extractor<E, S> {
    /// An orchestrator over the given strategies.
    pub fn new(engine: E, scorer: S, method: Method) -> Self {
        Self {
            engine,
            scorer,
            method,
        }
    }

    /// The configured method.
    pub fn method(&self) -> Method {
        self.method
    }

    /// Main content of `html` as Markdown/text, or `None` if every strategy
    /// came up empty.
    ///
    /// `url` is passed to the engine as a hint for resolving links.
    pub fn extract(&self, html: &str, url: Option<&str>) -> Option<String> {
        if self.method.uses_engine() {
            if let Some(content) = self.engine.extract(html, url).and_then(non_blank) {
                debug!(chars = content.len(), "engine produced content");
                return Some(content);
            }
            debug!("engine produced nothing");
        }

        if self.method.uses_selectors() {
            let doc = dom::parse(html);
            if let Some(content) = self.extract_region(&doc) {
                debug!(chars = content.len(), "scorer produced content");
                return Some(content);
            }
            debug!("scorer produced nothing");
            return log_raw(raw_text_from(&doc));
        }

        log_raw(raw_text(html))
    }

    /// Score the document and normalize the winning region.
    ///
    /// Noise removed by the scorer stays removed in `doc`.
    fn extract_region(&self, doc: &Document) -> Option<String> {
        let region = self.scorer.find_region(doc)?;
        non_blank(markdown::to_markdown(&region))
    }
}

fn log_raw(content: Option<String>) -> Option<String> {
    match &content {
        Some(text) => debug!(chars = text.len(), "raw text fallback produced content"),
        None => debug!("raw text fallback produced nothing"),
    }
    content
}

fn non_blank(content: String) -> Option<String> {
    (!content.trim().is_empty()).then_some(content)
}
