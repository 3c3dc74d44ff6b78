/// A sentence borrowed from the canonical text, tagged with its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentence<'a> {
    pub index: usize,
    pub text: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub summary: String,
    /// Character count of the trimmed input.
    pub original_length: usize,
    /// Character count of `summary`, marker included.
    pub summary_length: usize,
    /// Indices of the sentences that made it into the summary, ascending.
    pub selected: Vec<usize>,
    pub truncated: bool,
}

/// Tunables for sentence selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummarizerSettings {
    /// Inputs with at most this many sentences are returned verbatim.
    pub short_text_sentences: usize,
    /// One extra output sentence per this many input sentences.
    pub sentences_per_output: usize,
    /// Hard cap on the number of output sentences.
    pub max_output_sentences: usize,
}

impl Default for SummarizerSettings {
    fn default() -> Self {
        Self {
            short_text_sentences: 3,
            sentences_per_output: 3,
            max_output_sentences: 5,
        }
    }
}
