use rustc_hash::FxHashMap;

use crate::StopWordSet;

/// Per-request word weights: raw counts divided by the largest count.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WordFrequencyTable {
    weights: FxHashMap<String, f64>,
}

impl WordFrequencyTable {
    /// Count every non-stop-word token of every sentence, then normalize.
    pub fn build<S: AsRef<[String]>>(sentence_tokens: &[S], stop_words: &StopWordSet) -> Self {
        let mut counts: FxHashMap<String, u32> = FxHashMap::default();
        for tokens in sentence_tokens {
            for token in tokens.as_ref() {
                if !stop_words.contains(token) {
                    *counts.entry(token.clone()).or_insert(0) += 1;
                }
            }
        }

        // An empty table keeps 1 as divisor.
        let max = counts.values().copied().max().unwrap_or(1).max(1);
        let weights = counts
            .into_iter()
            .map(|(word, count)| (word, f64::from(count) / f64::from(max)))
            .collect();

        Self { weights }
    }

    /// Normalized weight of `token`, or 0 for stop words and unseen tokens.
    pub fn weight(&self, token: &str) -> f64 {
        self.weights.get(token).copied().unwrap_or(0.0)
    }

    /// Average weight over all tokens of a sentence; 0 for a sentence without tokens.
    pub fn score(&self, tokens: &[String]) -> f64 {
        if tokens.is_empty() {
            return 0.0;
        }
        let total: f64 = tokens.iter().map(|token| self.weight(token)).sum();
        total / tokens.len() as f64
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights.iter().map(|(word, weight)| (word.as_str(), *weight))
    }
}
