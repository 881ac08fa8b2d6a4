//! Fixed-length runs of whole corpus words

use crate::algorithm::budget::BudgetTable;
use crate::algorithm::random::RandomSelector;
use crate::io::error::{Result, StereogramError};
use crate::text::corpus::{Corpus, is_usable_word};
use std::fmt;

/// Exactly `length` characters of single-space separated words
///
/// Never starts or ends with a space and never splits a word.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    text: String,
}

impl Pattern {
    /// Pattern text
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Character count
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// True only for a zero-length pattern
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Words in order
    pub fn words(&self) -> Vec<&str> {
        self.text.split(' ').collect()
    }

    /// Leading word, the hidden word when one was forced
    pub fn first_word(&self) -> &str {
        self.text.split(' ').next().unwrap_or_default()
    }

    /// Every word after the first
    pub fn tail_words(&self) -> Vec<&str> {
        self.text.split(' ').skip(1).collect()
    }

    /// Pattern text with its final character dropped
    pub fn without_last_char(&self) -> &str {
        let end = self.text.len().saturating_sub(1);
        self.text.get(..end).unwrap_or_default()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Draws patterns of one fixed length from a corpus
#[derive(Clone, Debug)]
pub struct PatternGenerator<'c> {
    corpus: &'c Corpus,
    table: BudgetTable,
}

impl<'c> PatternGenerator<'c> {
    /// Prepare a generator for patterns of `length` characters
    ///
    /// The corpus' lower length bound drives the fit constraint.
    ///
    /// # Errors
    ///
    /// Returns `UnfillableBudget` if the corpus cannot produce a pattern of
    /// `length` characters, or `InvalidParameter` for a zero length
    pub fn new(corpus: &'c Corpus, length: usize) -> Result<Self> {
        if length == 0 {
            return Err(crate::io::error::invalid_parameter(
                "length",
                &length,
                &"must be positive",
            ));
        }

        let table = BudgetTable::new(corpus, length, corpus.bounds().0);
        if !table.is_fillable(length) {
            return Err(StereogramError::UnfillableBudget {
                budget: length,
                length,
                row: None,
            });
        }

        Ok(Self { corpus, table })
    }

    /// Pattern length produced by this generator
    pub const fn length(&self) -> usize {
        self.table.length()
    }

    /// Corpus words are drawn from
    pub const fn corpus(&self) -> &'c Corpus {
        self.corpus
    }

    /// Candidate table backing word selection
    pub const fn table(&self) -> &BudgetTable {
        &self.table
    }

    /// Check that `word` can start a pattern, returning the budget left after it
    ///
    /// # Errors
    ///
    /// Returns `InvalidMessageWord` for non-printable or spaced words,
    /// `MessageWordTooLong` when no corpus word fits after it, and
    /// `UnfillableBudget` when the remainder cannot be completed exactly
    pub fn check_forced_start(&self, word: &str) -> Result<usize> {
        let length = self.length();

        if !is_usable_word(word) {
            return Err(StereogramError::InvalidMessageWord {
                word: word.to_string(),
                reason: "only printable ASCII without spaces can be embedded".to_string(),
            });
        }

        let remaining = length
            .checked_sub(word.len() + 1)
            .filter(|&remaining| remaining >= self.corpus.shortest())
            .ok_or_else(|| StereogramError::MessageWordTooLong {
                word: word.to_string(),
                block_len: length,
            })?;

        if !self.table.is_fillable(remaining) {
            return Err(StereogramError::UnfillableBudget {
                budget: remaining,
                length,
                row: None,
            });
        }

        Ok(remaining)
    }

    /// Generate a pattern, optionally beginning with `forced_start`
    ///
    /// An empty `forced_start` is treated as absent.
    ///
    /// # Errors
    ///
    /// Propagates `check_forced_start` failures for the forced word, and
    /// returns `UnfillableBudget` if selection reaches a budget with no
    /// candidates
    pub fn generate(
        &self,
        rng: &mut RandomSelector,
        forced_start: Option<&str>,
    ) -> Result<Pattern> {
        let length = self.length();
        let mut text = String::with_capacity(length + 1);
        let mut remaining = length;

        if let Some(start) = forced_start.filter(|s| !s.is_empty()) {
            remaining = self.check_forced_start(start)?;
            text.push_str(start);
            text.push(' ');
        }

        while remaining > 0 {
            let word = rng
                .choose(self.table.candidates(remaining))
                .and_then(|&index| self.corpus.words().get(index))
                .ok_or_else(|| StereogramError::UnfillableBudget {
                    budget: remaining,
                    length,
                    row: None,
                })?;

            text.push_str(word);
            text.push(' ');
            // An exact fit overshoots by the separator
            remaining = remaining.saturating_sub(word.len() + 1);
        }

        text.truncate(length);
        Ok(Pattern { text })
    }
}

/// Generate a single pattern of `length` characters from `corpus`
///
/// # Errors
///
/// See [`PatternGenerator::new`] and [`PatternGenerator::generate`]
pub fn generate_pattern(
    length: usize,
    corpus: &Corpus,
    forced_start: Option<&str>,
    rng: &mut RandomSelector,
) -> Result<Pattern> {
    PatternGenerator::new(corpus, length)?.generate(rng, forced_start)
}
