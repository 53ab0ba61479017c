//! Error types for html2llm.
//!
//! The conversion entry points never return these to their callers: they are
//! rendered into the `Error: {message}` string of the network and browser
//! flows. They exist so the plumbing around the pipeline (file reads, option
//! parsing, collaborator failures) has one type to propagate with `?`.

/// Error type for conversion operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No extraction strategy produced any content.
    #[error("Failed to extract content from webpage")]
    NoContent,

    /// Reading the input document failed.
    #[error("Failed to read {path}: {source}")]
    Io {
        /// Path (or `-` for stdin) that could not be read.
        path: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A collaborator that supplies HTML (fetch, browser automation, cookie
    /// store) failed before the pipeline ran.
    #[error("{0}")]
    Upstream(String),

    /// An option value could not be parsed.
    #[error("Invalid {name}: {value}")]
    InvalidOption {
        /// Option name, e.g. `method`.
        name: &'static str,
        /// Rejected value.
        value: String,
    },
}

/// Result type alias for conversion operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_content_message() {
        assert_eq!(
            Error::NoContent.to_string(),
            "Failed to extract content from webpage"
        );
    }

    #[test]
    fn upstream_message_is_passed_through() {
        let err = Error::Upstream("connection refused".to_string());
        assert_eq!(err.to_string(), "connection refused");
    }

    #[test]
    fn invalid_option_names_the_option() {
        let err = Error::InvalidOption {
            name: "method",
            value: "magic".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid method: magic");
    }
}
