//! Input and output types of the conversion pipeline.
//!
//! A [`Document`] is what the plumbing hands to the pipeline; [`Metadata`] is
//! what the header of the final document is built from.

use serde::{Deserialize, Serialize};

/// A raw HTML page and what is known about where it came from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    /// The page source.
    pub html: String,

    /// URL the page was loaded from, if the caller knows it.
    ///
    /// When `None`, the URL may be recovered from a `saved from url`
    /// comment embedded by browsers in saved pages.
    pub url: Option<String>,

    /// Title reported by the collaborator that loaded the page (e.g. the
    /// browser tab title). Takes precedence over the `<title>` element.
    pub title: Option<String>,
}

impl Document {
    /// Creates a document with no known URL.
    #[must_use]
    pub fn new(html: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            url: None,
            title: None,
        }
    }

    /// Sets the originating URL.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Sets a title supplied by the caller.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// Header metadata plus the extracted body, before formatting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extraction {
    /// Header information.
    #[serde(flatten)]
    pub metadata: Metadata,

    /// Main content as Markdown (or plain text from the raw fallback).
    pub content: String,
}

/// Header information for the converted document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Page title, `"Untitled"` when the page has none.
    pub title: String,

    /// Content of `<meta name="description">`.
    pub description: Option<String>,

    /// Source URL: the caller's, or one recovered from the page.
    pub url: Option<String>,
}
