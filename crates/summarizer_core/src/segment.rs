//! Sentence boundary detection.
//!
//! A boundary is a run of `.`, `!` or `?`, optionally followed by closing
//! quotes or brackets, and then whitespace or the end of the text. Periods
//! get extra scrutiny so abbreviations, initials and dotted acronyms stay
//! inside their sentence.

use rustc_hash::FxHashSet;
use service_logging::service_trace;

use crate::{SegmentError, Sentence};

/// Lowercase abbreviations (without their final period) that never end a sentence.
pub const DEFAULT_ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "rev", "hon", "gen", "gov", "capt", "col",
    "lt", "sgt", "mt", "ave", "blvd", "vs", "etc", "approx", "dept", "fig", "vol", "cf", "al",
    "inc", "ltd", "co", "corp", "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept",
    "oct", "nov", "dec", "e.g", "i.e", "a.m", "p.m", "ph.d",
];

pub trait SentenceSegmenter: Send + Sync {
    /// Split `text` into trimmed, non-empty sentences in document order.
    fn segment<'a>(&self, text: &'a str) -> Result<Vec<Sentence<'a>>, SegmentError>;
}

/// Punctuation-driven segmenter with abbreviation awareness.
#[derive(Debug, Clone)]
pub struct RuleSegmenter {
    abbreviations: FxHashSet<String>,
}

impl Default for RuleSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleSegmenter {
    pub fn new() -> Self {
        Self {
            abbreviations: DEFAULT_ABBREVIATIONS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Add abbreviations; a trailing period and letter case are ignored.
    pub fn with_abbreviations(mut self, extra: &[&str]) -> Self {
        for abbr in extra {
            let abbr = abbr.trim().trim_end_matches('.').to_lowercase();
            if !abbr.is_empty() {
                self.abbreviations.insert(abbr);
            }
        }
        self
    }

    /// Byte offsets just past each accepted sentence terminator.
    fn boundaries(&self, text: &str) -> Vec<usize> {
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let mut ends = Vec::new();
        let mut i = 0;

        while i < chars.len() {
            if !is_terminator(chars[i].1) {
                i += 1;
                continue;
            }

            let run_start = i;
            let mut j = i;
            while j < chars.len() && is_terminator(chars[j].1) {
                j += 1;
            }
            let run_end = j;
            while j < chars.len() && is_closer(chars[j].1) {
                j += 1;
            }

            // End of text closes the last sentence without a recorded boundary.
            if j == chars.len() {
                break;
            }
            // "3.14", "example.com", "a.b.c": no whitespace, no boundary.
            if !chars[j].1.is_whitespace() {
                i = j;
                continue;
            }

            let run: String = chars[run_start..run_end].iter().map(|(_, c)| *c).collect();
            let before = &text[..chars[run_start].0];
            let after = &text[chars[j].0..];
            if self.is_boundary(&run, before, after) {
                ends.push(chars[j].0);
            }
            i = j;
        }

        ends
    }

    fn is_boundary(&self, run: &str, before: &str, after: &str) -> bool {
        if run.contains(['!', '?']) {
            return true;
        }

        // A dotted terminator followed by a lowercase word or a digit continues the sentence.
        let next = after.trim_start().chars().next();
        if next.is_some_and(|c| c.is_lowercase() || c.is_ascii_digit()) {
            return false;
        }

        if run != "." {
            return true;
        }

        let word = preceding_word(before);
        if word.is_empty() {
            return true;
        }
        let lowered = word.to_lowercase();
        !(self.abbreviations.contains(&lowered) || is_initial(word) || is_dotted_acronym(&lowered))
    }
}

impl SentenceSegmenter for RuleSegmenter {
    fn segment<'a>(&self, text: &'a str) -> Result<Vec<Sentence<'a>>, SegmentError> {
        let mut sentences = Vec::new();
        let mut start = 0;

        for end in self.boundaries(text).into_iter().chain(std::iter::once(text.len())) {
            if !text.is_char_boundary(end) {
                return Err(SegmentError::BadBoundary { offset: end });
            }
            let piece = text[start..end].trim();
            if !piece.is_empty() {
                sentences.push(Sentence {
                    index: sentences.len(),
                    text: piece,
                });
            }
            start = end;
        }

        service_trace!(
            "segmented {} bytes into {} sentence(s)",
            text.len(),
            sentences.len()
        );
        Ok(sentences)
    }
}

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

fn is_closer(c: char) -> bool {
    matches!(c, '"' | '\'' | ')' | ']' | '}' | '”' | '’' | '»')
}

/// Last word before the terminator, stripped of leading punctuation.
fn preceding_word(before: &str) -> &str {
    before
        .rsplit(char::is_whitespace)
        .next()
        .unwrap_or_default()
        .trim_start_matches(|c: char| !c.is_alphanumeric())
}

/// A single capital letter such as the "J" in "J. Smith". The pronoun "I" is not one.
fn is_initial(word: &str) -> bool {
    let mut chars = word.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_uppercase() && c != 'I')
}

fn is_dotted_acronym(word: &str) -> bool {
    word.contains('.')
        && word
            .split('.')
            .all(|part| part.chars().count() == 1 && part.chars().all(char::is_alphabetic))
}
