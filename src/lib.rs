//! # html2llm
//!
//! Converts web pages into a single clean Markdown document for language
//! models: a title and source header followed by the page's main content,
//! stripped of navigation, ads and other boilerplate.
//!
//! ## Quick Start
//!
//! ```rust
//! use html2llm::{convert, Document, Method, Options, ScorerVariant};
//!
//! let html = r#"<html><head><title>Docs</title></head>
//! <body><nav>skip</nav><main><h1>Hi</h1><p>World</p></main></body></html>"#;
//!
//! let options = Options {
//!     method: Method::Selector,
//!     scorer: Some(ScorerVariant::FirstMatch),
//!     ..Options::default()
//! };
//! let output = convert(&Document::new(html), &options);
//!
//! assert!(output.starts_with("# Docs\n"));
//! assert!(output.contains("# Hi"));
//! assert!(!output.contains("skip"));
//! ```
//!
//! ## Pipeline
//!
//! Content is taken from the first strategy that yields anything:
//!
//! 1. **Semantic engine**: Readability (feature `readability`, on by default)
//! 2. **Selector scoring**: landmark and content-class selectors ranked by text density
//! 3. **Raw text**: the visible text of `<body>`
//!
//! What happens when all three fail depends on the [`Flow`]: saved files get
//! a `No content extracted` body, fetched and browser pages an `Error: ...`
//! string.

mod error;
mod options;
mod result;

/// DOM helpers over `dom_query` (parsing, text density).
pub mod dom;

/// Character encoding detection for saved pages.
pub mod encoding;

/// Extraction strategies and the orchestrator.
pub mod extractor;

/// Output template and truncation.
pub mod format;

/// Markdown conversion and line collapsing.
pub mod markdown;

/// Title, description and source URL extraction.
pub mod metadata;

/// Selector catalogs and boilerplate markers.
pub mod selector;

pub use error::{Error, Result};
pub use extractor::{ContentEngine, Extractor, RegionScorer, Scorer};
pub use options::{FailureMode, Flow, Method, Options, ScorerVariant, NO_CONTENT_PLACEHOLDER};
pub use result::{Document, Extraction, Metadata};

use tracing::debug;

/// Extracts metadata and main content using the default engine and the
/// scorer selected by `options`.
///
/// Returns `Err(Error::NoContent)` when no strategy produced anything.
pub fn extract(document: &Document, options: &Options) -> Result<Extraction> {
    extract_with(&Extractor::from_options(options), document)
}

/// Extracts metadata and main content with a caller-supplied orchestrator.
pub fn extract_with<E, S>(extractor: &Extractor<E, S>, document: &Document) -> Result<Extraction>
where
    E: ContentEngine,
    S: RegionScorer,
{
    let metadata = metadata::extract_metadata(document);
    let content = extractor
        .extract(&document.html, metadata.url.as_deref())
        .ok_or(Error::NoContent)?;

    Ok(Extraction { metadata, content })
}

/// Converts a document to the final formatted string.
///
/// Never fails: total extraction failure is rendered according to the
/// flow's [`FailureMode`].
#[must_use]
pub fn convert(document: &Document, options: &Options) -> String {
    convert_with(&Extractor::from_options(options), document, options)
}

/// Converts a document with a caller-supplied orchestrator.
///
/// `options.method` and `options.scorer` are ignored here; they are already
/// baked into `extractor`.
pub fn convert_with<E, S>(extractor: &Extractor<E, S>, document: &Document, options: &Options) -> String
where
    E: ContentEngine,
    S: RegionScorer,
{
    let flow = options.flow;
    let metadata = metadata::extract_metadata(document);
    let output = match extractor.extract(&document.html, metadata.url.as_deref()) {
        Some(content) => format::format_output(&metadata, &content, flow.includes_description()),
        None => match flow.failure_mode() {
            FailureMode::Placeholder => {
                debug!(?flow, "no content extracted, using placeholder");
                format::format_output(&metadata, NO_CONTENT_PLACEHOLDER, flow.includes_description())
            }
            FailureMode::ErrorString => {
                debug!(?flow, "no content extracted");
                format::render_error(&Error::NoContent)
            }
        },
    };

    format::truncate(output, options.max_length)
}

/// Formats a failure of whatever supplied the HTML (fetch, browser session,
/// file read) the way conversion failures are reported.
#[must_use]
pub fn render_upstream_error(err: &dyn std::fmt::Display, options: &Options) -> String {
    format::truncate(format::render_error(err), options.max_length)
}
