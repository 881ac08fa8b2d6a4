//! Secret message tokenization and embeddability checks

use crate::io::error::{Result, StereogramError};
use crate::text::corpus::is_usable_word;

/// Ordered words of the hidden message, one per message row
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SecretMessage {
    words: Vec<String>,
}

impl SecretMessage {
    /// Split a line of free-form text on single spaces
    ///
    /// The trailing line terminator is stripped. Repeated, leading or trailing
    /// spaces yield empty tokens, each of which still takes a message row that
    /// hides nothing. A blank line is an empty message.
    pub fn parse(line: &str) -> Self {
        let line = line.trim_end_matches(['\n', '\r']);
        if line.is_empty() {
            return Self::default();
        }
        Self::from_words(line.split(' '))
    }

    /// Use the given tokens verbatim
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Message words in row order
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of message rows needed
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when there is nothing to hide
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Check every word against a pattern of `block_len` characters
    ///
    /// Empty tokens are skipped. A word must be printable ASCII and leave room
    /// for its separator and at least one `min_word_len` filler word. Whether
    /// the remaining budget can actually be filled depends on the corpus and
    /// is checked by the pattern generator.
    ///
    /// # Errors
    ///
    /// Returns `InvalidMessageWord` or `MessageWordTooLong` for the first
    /// offending word
    pub fn validate(&self, block_len: usize, min_word_len: usize) -> Result<()> {
        for word in self.words.iter().filter(|w| !w.is_empty()) {
            check_word(word, block_len, min_word_len)?;
        }
        Ok(())
    }
}

fn check_word(word: &str, block_len: usize, min_word_len: usize) -> Result<()> {
    if !is_usable_word(word) {
        return Err(StereogramError::InvalidMessageWord {
            word: word.to_string(),
            reason: "only printable ASCII without spaces can be embedded".to_string(),
        });
    }
    if word.len() + 1 + min_word_len > block_len {
        return Err(StereogramError::MessageWordTooLong {
            word: word.to_string(),
            block_len,
        });
    }
    Ok(())
}
