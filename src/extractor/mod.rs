//! Main content extraction module.
//!
//! # Module Structure
//!
//! - `engine`: Semantic engines (Readability) behind the `ContentEngine` trait
//! - `noise`: Noise filter (chrome removal, boilerplate detection)
//! - `scorer`: Candidate region scorer, score-all and first-match variants
//! - `fallback`: Raw body-text fallback
//! - `pipeline`: The orchestrator running the strategies in order
//!
//! # Usage
//!
//! ```rust
//! use html2llm::extractor::{Extractor, NoEngine, Scorer};
//! use html2llm::Method;
//!
//! let html = "<html><body><nav>skip</nav><main><h1>Hi</h1><p>World</p></main></body></html>";
//! let extractor = Extractor::new(NoEngine, Scorer::first_match(), Method::Selector);
//!
//! let body = extractor.extract(html, None).unwrap_or_default();
//! assert!(body.contains("# Hi"));
//! assert!(!body.contains("skip"));
//! ```

pub mod engine;
pub mod fallback;
pub mod noise;
pub mod pipeline;
pub mod scorer;

#[cfg(feature = "readability")]
pub use engine::ReadabilityEngine;
pub use engine::{ContentEngine, DefaultEngine, NoEngine};
pub use fallback::{raw_text, raw_text_from};
pub use pipeline::Extractor;
pub use scorer::{Candidate, RegionScorer, Scorer};
