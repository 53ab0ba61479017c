//! Configuration options for conversion.
//!
//! The `Options` struct selects which extraction strategies run, how the
//! candidate region is chosen, and which output conventions apply.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Which extraction strategies the orchestrator may use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Method {
    /// Semantic engine first, then selector scoring.
    #[default]
    Auto,
    /// Semantic engine only.
    Engine,
    /// Selector scoring only.
    Selector,
}

impl Method {
    /// Whether the semantic engine is consulted.
    #[must_use]
    pub fn uses_engine(self) -> bool {
        matches!(self, Self::Auto | Self::Engine)
    }

    /// Whether the candidate region scorer is consulted.
    #[must_use]
    pub fn uses_selectors(self) -> bool {
        matches!(self, Self::Auto | Self::Selector)
    }
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "engine" | "trafilatura" | "readability" => Ok(Self::Engine),
            "selector" | "beautifulsoup" => Ok(Self::Selector),
            _ => Err(Error::InvalidOption {
                name: "method",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Auto => "auto",
            Self::Engine => "engine",
            Self::Selector => "selector",
        })
    }
}

/// How the candidate region scorer picks the main content element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScorerVariant {
    /// Try every selector and keep the match with the most text.
    #[default]
    ScoreAll,
    /// Return the first selector match, falling back to the largest `div`
    /// and finally `<body>`.
    FirstMatch,
}

impl FromStr for ScorerVariant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "score-all" | "score_all" | "all" => Ok(Self::ScoreAll),
            "first-match" | "first_match" | "first" => Ok(Self::FirstMatch),
            _ => Err(Error::InvalidOption {
                name: "scorer",
                value: s.to_string(),
            }),
        }
    }
}

/// How a total extraction failure is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureMode {
    /// Emit the normal header with [`NO_CONTENT_PLACEHOLDER`] as body.
    Placeholder,
    /// Replace the whole output with `Error: {message}`.
    ErrorString,
}

/// Body used when nothing could be extracted in the file flow.
pub const NO_CONTENT_PLACEHOLDER: &str = "No content extracted";

/// The entry point a document came through.
///
/// Each flow carries the header and failure conventions its callers expect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Flow {
    /// A page saved to disk.
    #[default]
    File,
    /// A page fetched over HTTP.
    Network,
    /// A page taken from a live browser or a WebDriver session.
    Browser,
}

impl Flow {
    /// Scorer variant used when the options don't force one.
    #[must_use]
    pub fn default_scorer(self) -> ScorerVariant {
        match self {
            Self::File => ScorerVariant::ScoreAll,
            Self::Network | Self::Browser => ScorerVariant::FirstMatch,
        }
    }

    /// Whether the header carries a `Description:` line.
    #[must_use]
    pub fn includes_description(self) -> bool {
        matches!(self, Self::Network)
    }

    /// How total extraction failure is reported.
    #[must_use]
    pub fn failure_mode(self) -> FailureMode {
        match self {
            Self::File => FailureMode::Placeholder,
            Self::Network | Self::Browser => FailureMode::ErrorString,
        }
    }
}

impl FromStr for Flow {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "file" => Ok(Self::File),
            "network" | "fetch" => Ok(Self::Network),
            "browser" | "tab" => Ok(Self::Browser),
            _ => Err(Error::InvalidOption {
                name: "flow",
                value: s.to_string(),
            }),
        }
    }
}

/// Configuration options for conversion.
///
/// # Example
///
/// ```rust
/// use html2llm::{Flow, Method, Options};
///
/// let options = Options {
///     method: Method::Selector,
///     flow: Flow::Network,
///     max_length: Some(4000),
///     ..Options::default()
/// };
/// assert!(options.flow.includes_description());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Extraction strategies to run.
    ///
    /// Default: `Method::Auto`
    pub method: Method,

    /// Entry point conventions (header lines, failure reporting).
    ///
    /// Default: `Flow::File`
    pub flow: Flow,

    /// Scorer variant; `None` uses the flow's default.
    ///
    /// Default: `None`
    pub scorer: Option<ScorerVariant>,

    /// Maximum length of the final output in characters.
    ///
    /// Longer output is cut and suffixed with `[Content truncated...]`.
    ///
    /// Default: `None`
    pub max_length: Option<usize>,
}

impl Options {
    /// Scorer variant in effect for these options.
    #[must_use]
    pub fn scorer_variant(&self) -> ScorerVariant {
        self.scorer.unwrap_or_else(|| self.flow.default_scorer())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = Options::default();

        assert_eq!(opts.method, Method::Auto);
        assert_eq!(opts.flow, Flow::File);
        assert!(opts.scorer.is_none());
        assert!(opts.max_length.is_none());
        assert_eq!(opts.scorer_variant(), ScorerVariant::ScoreAll);
    }

    #[test]
    fn test_method_parses_tool_aliases() {
        assert_eq!("auto".parse::<Method>().ok(), Some(Method::Auto));
        assert_eq!("trafilatura".parse::<Method>().ok(), Some(Method::Engine));
        assert_eq!("beautifulsoup".parse::<Method>().ok(), Some(Method::Selector));
        assert_eq!(" Selector ".parse::<Method>().ok(), Some(Method::Selector));
        assert!("magic".parse::<Method>().is_err());
    }

    #[test]
    fn test_method_strategy_flags() {
        assert!(Method::Auto.uses_engine() && Method::Auto.uses_selectors());
        assert!(Method::Engine.uses_engine() && !Method::Engine.uses_selectors());
        assert!(!Method::Selector.uses_engine() && Method::Selector.uses_selectors());
    }

    #[test]
    fn test_flow_conventions() {
        assert_eq!(Flow::File.failure_mode(), FailureMode::Placeholder);
        assert_eq!(Flow::Network.failure_mode(), FailureMode::ErrorString);
        assert_eq!(Flow::Browser.failure_mode(), FailureMode::ErrorString);

        assert!(Flow::Network.includes_description());
        assert!(!Flow::File.includes_description());
        assert!(!Flow::Browser.includes_description());
    }

    #[test]
    fn test_explicit_scorer_overrides_flow_default() {
        let opts = Options {
            flow: Flow::Browser,
            scorer: Some(ScorerVariant::ScoreAll),
            ..Options::default()
        };
        assert_eq!(opts.scorer_variant(), ScorerVariant::ScoreAll);

        let opts = Options {
            flow: Flow::Browser,
            ..Options::default()
        };
        assert_eq!(opts.scorer_variant(), ScorerVariant::FirstMatch);
    }

    #[test]
    fn test_scorer_variant_parsing() {
        assert_eq!(
            "first-match".parse::<ScorerVariant>().ok(),
            Some(ScorerVariant::FirstMatch)
        );
        assert_eq!(
            "score-all".parse::<ScorerVariant>().ok(),
            Some(ScorerVariant::ScoreAll)
        );
        assert!("best".parse::<ScorerVariant>().is_err());
    }
}
