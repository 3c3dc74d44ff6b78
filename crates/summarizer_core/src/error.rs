use std::io;

use thiserror::Error;

/// Failure of a summarization request.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SummarizeError {
    /// The caller supplied nothing to summarize.
    #[error("{0}")]
    InvalidInput(String),
    /// Anything unexpected while segmenting, tokenizing or scoring.
    #[error("internal error: {0}")]
    Internal(String),
}

impl SummarizeError {
    pub(crate) fn empty_content() -> Self {
        Self::InvalidInput("Content is empty".into())
    }
}

/// Failure of a [`crate::SentenceSegmenter`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SegmentError {
    /// Non-empty text produced no sentences at all.
    #[error("no sentences found in {chars} characters of text")]
    NoSentences { chars: usize },
    /// A computed sentence end falls inside a multi-byte character.
    #[error("sentence boundary at byte {offset} is not a char boundary")]
    BadBoundary { offset: usize },
}

impl From<SegmentError> for SummarizeError {
    fn from(err: SegmentError) -> Self {
        Self::Internal(format!("segmentation failed: {err}"))
    }
}

/// Failure to load a [`crate::StopWordSet`].
#[derive(Debug, Error)]
pub enum StopWordError {
    /// No built-in list exists for the requested language.
    #[error("unsupported stop-word language: {0}")]
    UnknownLanguage(String),
    /// The stop-word file could not be read.
    #[error("failed to read stop-word file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}
