//! Candidate region scorer.
//!
//! Picks the single element most likely to hold a page's main content. Two
//! variants share the same noise filter and selector machinery:
//!
//! - **score-all** measures every element matched by every selector and keeps
//!   the one with the most visible text, then falls back to the longest
//!   non-boilerplate `div`.
//! - **first-match** returns the first element matched by the first selector
//!   that matches anything, then the longest `div`, then `<body>`.

use dom_query::{Document, NodeRef, Selection};
use tracing::debug;

use super::noise::{is_boilerplate, strip_noise};
use crate::dom;
use crate::options::ScorerVariant;
use crate::selector::{FIRST_MATCH_CONTENT_SELECTORS, SCORED_CONTENT_SELECTORS};

/// A selector match must carry more text than this to be a candidate.
pub const MIN_SELECTOR_TEXT_LEN: usize = 100;

/// Minimum text for the score-all largest-`div` fallback.
pub const MIN_DIV_TEXT_LEN: usize = 200;

/// Minimum text for the first-match largest-`div` fallback.
pub const MIN_FIRST_MATCH_DIV_TEXT_LEN: usize = 100;

/// Finds the main content region of a parsed document.
///
/// Implementations may mutate the document (noise removal); the orchestrator
/// hands each call a fresh parse.
pub trait RegionScorer {
    /// The best main-content element, or `None` if nothing qualifies.
    fn find_region<'a>(&self, doc: &'a Document) -> Option<Selection<'a>>;
}

/// An element under consideration and its text density.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    /// The candidate element.
    pub node: NodeRef<'a>,
    /// Visible character count.
    pub text_len: usize,
}

impl<'a> Candidate<'a> {
    fn measure(node: NodeRef<'a>) -> Self {
        Self {
            text_len: dom::text_length(&node),
            node,
        }
    }
}

/// Selector-driven scorer, configured by variant and selector list.
#[derive(Debug, Clone)]
pub struct Scorer {
    variant: ScorerVariant,
    selectors: Vec<String>,
}

impl Default for Scorer {
    fn default() -> Self {
        Self::new(ScorerVariant::default())
    }
}

impl Scorer {
    /// A scorer using the built-in selector list for `variant`.
    #[must_use]
    pub fn new(variant: ScorerVariant) -> Self {
        let defaults = match variant {
            ScorerVariant::ScoreAll => SCORED_CONTENT_SELECTORS,
            ScorerVariant::FirstMatch => FIRST_MATCH_CONTENT_SELECTORS,
        };
        Self::with_selectors(variant, defaults.iter().copied())
    }

    /// A scorer using a custom ordered selector list.
    #[must_use]
    pub fn with_selectors<I, S>(variant: ScorerVariant, selectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            variant,
            selectors: selectors.into_iter().map(Into::into).collect(),
        }
    }

    /// Shorthand for `Scorer::new(ScorerVariant::ScoreAll)`.
    #[must_use]
    pub fn score_all() -> Self {
        Self::new(ScorerVariant::ScoreAll)
    }

    /// Shorthand for `Scorer::new(ScorerVariant::FirstMatch)`.
    #[must_use]
    pub fn first_match() -> Self {
        Self::new(ScorerVariant::FirstMatch)
    }

    /// The configured variant.
    #[must_use]
    pub fn variant(&self) -> ScorerVariant {
        self.variant
    }

    /// The configured selectors, in consultation order.
    #[must_use]
    pub fn selectors(&self) -> &[String] {
        &self.selectors
    }

    /// Longest-text element over all selector matches.
    ///
    /// A fold over the selector list carrying the best candidate so far. A
    /// match replaces the best only with strictly more text, so among equals
    /// the earliest seen wins.
    fn best_selector_match<'a>(&self, doc: &'a Document) -> Option<Candidate<'a>> {
        self.selectors.iter().fold(None, |best, selector| {
            let Some(matches) = dom::try_select_all(doc, selector) else {
                debug!(selector = %selector, "skipping malformed selector");
                return best;
            };

            matches.nodes().iter().fold(best, |best, node| {
                let candidate = Candidate::measure(*node);
                let qualifies = candidate.text_len > MIN_SELECTOR_TEXT_LEN
                    && best.is_none_or(|b: Candidate<'a>| candidate.text_len > b.text_len);
                if qualifies {
                    debug!(selector = %selector, text_len = candidate.text_len, "new best candidate");
                    Some(candidate)
                } else {
                    best
                }
            })
        })
    }

    /// First element matched by the first selector that matches anything.
    fn first_selector_match<'a>(&self, doc: &'a Document) -> Option<NodeRef<'a>> {
        for selector in &self.selectors {
            let Some(matches) = dom::try_select_all(doc, selector) else {
                debug!(selector = %selector, "skipping malformed selector");
                continue;
            };
            if let Some(node) = matches.nodes().first() {
                debug!(selector = %selector, "first selector match");
                return Some(*node);
            }
        }
        None
    }

    fn select_score_all<'a>(&self, doc: &'a Document) -> Option<NodeRef<'a>> {
        if let Some(best) = self.best_selector_match(doc) {
            return Some(best.node);
        }

        debug!("no selector match, trying largest div");
        largest_div(doc, MIN_DIV_TEXT_LEN, true).map(|c| c.node)
    }

    fn select_first_match<'a>(&self, doc: &'a Document) -> Option<NodeRef<'a>> {
        self.first_selector_match(doc)
            .or_else(|| {
                debug!("no selector match, trying largest div");
                largest_div(doc, MIN_FIRST_MATCH_DIV_TEXT_LEN, false).map(|c| c.node)
            })
            .or_else(|| {
                debug!("falling back to body");
                doc.select("body").nodes().first().copied()
            })
    }
}

impl RegionScorer for Scorer {
    fn find_region<'a>(&self, doc: &'a Document) -> Option<Selection<'a>> {
        strip_noise(doc);

        let node = match self.variant {
            ScorerVariant::ScoreAll => self.select_score_all(doc),
            ScorerVariant::FirstMatch => self.select_first_match(doc),
        };
        let region = node.map(Selection::from);
        if let Some(tag) = region.as_ref().and_then(dom::tag_name) {
            debug!(variant = ?self.variant, tag = %tag, "region selected");
        }
        region
    }
}

/// The `div` with the most text above `min_len`; with `skip_boilerplate`,
/// divs whose text opens with a boilerplate marker are ignored. Ties go to
/// the first in document order.
fn largest_div(doc: &Document, min_len: usize, skip_boilerplate: bool) -> Option<Candidate<'_>> {
    doc.select("div")
        .nodes()
        .iter()
        .map(|node| Candidate::measure(*node))
        .filter(|c| c.text_len > min_len)
        .filter(|c| !(skip_boilerplate && is_boilerplate(&c.node)))
        .fold(None, |best: Option<Candidate<'_>>, c| match best {
            Some(b) if b.text_len >= c.text_len => Some(b),
            _ => Some(c),
        })
}
