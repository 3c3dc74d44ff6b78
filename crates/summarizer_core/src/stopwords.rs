//! Stop-word sets excluded from frequency counting.
//!
//! Lists come from the `stop-words` crate, an explicit word list, or a plain
//! text file. A set is built once at startup and shared read-only afterwards.

use std::fs;
use std::path::Path;

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

use crate::StopWordError;

/// Immutable set of lowercase tokens that never receive a frequency weight.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWordSet {
    words: FxHashSet<String>,
}

impl StopWordSet {
    /// An empty set: every token is counted.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load the built-in list for a language code or name (`en`, `english`, ...).
    pub fn for_language(language: &str) -> Result<Self, StopWordError> {
        let lang = match language.trim().to_lowercase().as_str() {
            "en" | "english" => LANGUAGE::English,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            "sv" | "swedish" => LANGUAGE::Swedish,
            "no" | "norwegian" => LANGUAGE::Norwegian,
            "da" | "danish" => LANGUAGE::Danish,
            "fi" | "finnish" => LANGUAGE::Finnish,
            "hu" | "hungarian" => LANGUAGE::Hungarian,
            "tr" | "turkish" => LANGUAGE::Turkish,
            "pl" | "polish" => LANGUAGE::Polish,
            "ar" | "arabic" => LANGUAGE::Arabic,
            other => return Err(StopWordError::UnknownLanguage(other.to_string())),
        };

        Ok(Self {
            words: get(lang).iter().map(|s| s.to_lowercase()).collect(),
        })
    }

    /// Build a set from an explicit list of words.
    pub fn from_list<S: AsRef<str>>(words: &[S]) -> Self {
        let mut set = Self::empty();
        set.extend(words);
        set
    }

    /// Read one word per line; blank lines and `#` comments are skipped.
    pub fn from_file(path: &Path) -> Result<Self, StopWordError> {
        let content = fs::read_to_string(path).map_err(|source| StopWordError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let words: Vec<&str> = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .collect();
        Ok(Self::from_list(&words))
    }

    /// Add more words; they are lowercased on insert.
    pub fn extend<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            let word = word.as_ref().trim();
            if !word.is_empty() {
                self.words.insert(word.to_lowercase());
            }
        }
    }

    /// `token` is expected to be lowercase already, as produced by [`crate::tokenize`].
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
