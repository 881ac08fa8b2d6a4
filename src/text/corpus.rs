//! Word corpus that patterns are drawn from

use crate::io::error::{Result, StereogramError};
use std::collections::HashSet;

/// Distinct candidate words, each within the configured length bounds
///
/// Words are printable ASCII without whitespace, so byte length equals
/// display width everywhere a pattern is measured.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Corpus {
    words: Vec<String>,
    bounds: (usize, usize),
}

impl Corpus {
    /// Build a corpus from raw words, keeping only usable ones
    ///
    /// Words outside `bounds` (inclusive) or containing anything other than
    /// printable ASCII are dropped; duplicates keep their first occurrence.
    ///
    /// # Errors
    ///
    /// Returns `EmptyCorpus` if no word survives filtering
    pub fn from_words<I, S>(words: I, bounds: (usize, usize)) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let (min_len, max_len) = bounds;
        let mut seen = HashSet::new();
        let mut kept = Vec::new();

        for word in words {
            let word = word.as_ref();
            if !is_usable_word(word) || !(min_len..=max_len).contains(&word.len()) {
                continue;
            }
            if seen.insert(word.to_string()) {
                kept.push(word.to_string());
            }
        }

        if kept.is_empty() {
            return Err(StereogramError::EmptyCorpus { min_len, max_len });
        }

        Ok(Self {
            words: kept,
            bounds,
        })
    }

    /// All words in insertion order
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false for a constructed corpus
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Inclusive length bounds the corpus was filtered with
    pub const fn bounds(&self) -> (usize, usize) {
        self.bounds
    }

    /// Whether `word` is part of the corpus
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// Length of the shortest word
    pub fn shortest(&self) -> usize {
        self.words.iter().map(String::len).min().unwrap_or(0)
    }

    /// Number of words of each length, indexed by length
    pub fn length_histogram(&self) -> Vec<usize> {
        let mut histogram = vec![0; self.bounds.1 + 1];
        for word in &self.words {
            if let Some(count) = histogram.get_mut(word.len()) {
                *count += 1;
            }
        }
        histogram
    }
}

/// Non-empty printable ASCII with no whitespace
pub fn is_usable_word(word: &str) -> bool {
    !word.is_empty() && word.bytes().all(|b| b.is_ascii_graphic())
}

/// Source of corpus words supplied by the caller
pub trait CorpusProvider {
    /// Load the words and filter them into a corpus
    ///
    /// # Errors
    ///
    /// Returns an error if the words cannot be read or none are usable
    fn load(&self, bounds: (usize, usize)) -> Result<Corpus>;
}
