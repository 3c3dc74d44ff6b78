//! Summarizer core: extractive, frequency-weighted sentence selection.
mod error;
mod frequency;
mod segment;
mod stopwords;
mod summarizer;
mod token;
mod types;

pub use error::{SegmentError, StopWordError, SummarizeError};
pub use frequency::WordFrequencyTable;
pub use segment::{RuleSegmenter, SentenceSegmenter, DEFAULT_ABBREVIATIONS};
pub use stopwords::StopWordSet;
pub use summarizer::{output_sentence_count, truncate_chars, Summarizer, TRUNCATION_MARKER};
pub use token::tokenize;
pub use types::{Sentence, Summary, SummarizerSettings};
