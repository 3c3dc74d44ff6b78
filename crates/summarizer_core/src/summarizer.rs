use std::sync::Arc;

use service_logging::service_debug;

use crate::{
    tokenize, SegmentError, SentenceSegmenter, StopWordSet, Summary, SummarizeError,
    SummarizerSettings, WordFrequencyTable,
};

/// Appended when a summary is cut to the requested length.
pub const TRUNCATION_MARKER: &str = "...";

/// Stateless summarizer; the segmenter and stop words are loaded once and shared.
#[derive(Clone)]
pub struct Summarizer {
    segmenter: Arc<dyn SentenceSegmenter>,
    stop_words: Arc<StopWordSet>,
    settings: SummarizerSettings,
}

impl Summarizer {
    pub fn new(segmenter: Arc<dyn SentenceSegmenter>, stop_words: Arc<StopWordSet>) -> Self {
        Self {
            segmenter,
            stop_words,
            settings: SummarizerSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: SummarizerSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn stop_words(&self) -> &StopWordSet {
        &self.stop_words
    }

    /// Summarize `text`, cutting the result to `max_length` characters plus the
    /// marker. `None` or `Some(0)` means no limit.
    pub fn summarize(
        &self,
        text: &str,
        max_length: Option<usize>,
    ) -> Result<Summary, SummarizeError> {
        let canonical = text.trim();
        if canonical.is_empty() {
            return Err(SummarizeError::empty_content());
        }
        let original_length = canonical.chars().count();

        let sentences = self.segmenter.segment(canonical)?;
        if sentences.is_empty() {
            return Err(SegmentError::NoSentences {
                chars: original_length,
            }
            .into());
        }

        if sentences.len() <= self.settings.short_text_sentences {
            service_debug!(
                "short text bypass: {} sentence(s), {} chars",
                sentences.len(),
                original_length
            );
            return Ok(Summary {
                summary: canonical.to_string(),
                original_length,
                summary_length: original_length,
                selected: sentences.iter().map(|s| s.index).collect(),
                truncated: false,
            });
        }

        let tokens: Vec<Vec<String>> = sentences.iter().map(|s| tokenize(s.text)).collect();
        let table = WordFrequencyTable::build(&tokens, &self.stop_words);

        let mut scored: Vec<(usize, f64)> = tokens
            .iter()
            .enumerate()
            .map(|(index, sentence_tokens)| (index, table.score(sentence_tokens)))
            .collect();
        if let Some((index, score)) = scored.iter().find(|(_, score)| !score.is_finite()) {
            return Err(SummarizeError::Internal(format!(
                "sentence {index} scored {score}"
            )));
        }

        // Stable sort: equal scores keep document order, so the earlier sentence wins.
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));

        let count = output_sentence_count(sentences.len(), &self.settings);
        let mut selected: Vec<usize> = scored.iter().take(count).map(|(i, _)| *i).collect();
        selected.sort_unstable();

        let joined = selected
            .iter()
            .map(|&i| sentences[i].text)
            .collect::<Vec<_>>()
            .join(" ");

        let (summary, truncated) = match max_length {
            Some(limit) if limit > 0 => truncate_chars(&joined, limit),
            _ => (joined, false),
        };
        let summary_length = summary.chars().count();

        service_debug!(
            "selected {:?} of {} sentences ({} distinct words), {} -> {} chars{}",
            selected,
            sentences.len(),
            table.len(),
            original_length,
            summary_length,
            if truncated { ", truncated" } else { "" }
        );

        Ok(Summary {
            summary,
            original_length,
            summary_length,
            selected,
            truncated,
        })
    }
}

/// Number of sentences to keep for an input of `sentence_count` sentences:
/// one per `sentences_per_output`, plus one, capped at `max_output_sentences`.
pub fn output_sentence_count(sentence_count: usize, settings: &SummarizerSettings) -> usize {
    let per = settings.sentences_per_output.max(1);
    (sentence_count / per + 1).min(settings.max_output_sentences.max(1))
}

/// Keep the first `max_chars` characters and append [`TRUNCATION_MARKER`] when
/// `text` is longer. Cuts on character positions, possibly mid-word.
pub fn truncate_chars(text: &str, max_chars: usize) -> (String, bool) {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => {
            let mut out = String::with_capacity(cut + TRUNCATION_MARKER.len());
            out.push_str(&text[..cut]);
            out.push_str(TRUNCATION_MARKER);
            (out, true)
        }
        None => (text.to_string(), false),
    }
}
