//! Layout constants and runtime configuration defaults

use crate::io::error::{Result, invalid_parameter};

// Geometry of the generated block
/// Length of each repeating word pattern
pub const DEFAULT_BLOCK_LEN: usize = 16;
/// Width of every generated row
pub const DEFAULT_TEXT_WIDTH: usize = 80;

// Row 0 is the first row after the calibration row
/// Row index at which the hidden message begins
pub const DEFAULT_MESSAGE_START: usize = 6;
/// Filler rows emitted after the last message row
pub const DEFAULT_TRAILING_ROWS: usize = 2;

// Corpus word-length bounds (inclusive)
/// Shortest word accepted into a corpus
pub const MIN_WORD_LEN: usize = 3;
/// Longest word accepted into a corpus
pub const MAX_WORD_LEN: usize = 6;

/// Marker drawn twice on the calibration row
pub const CALIBRATION_MARKER: char = '*';

/// Characters spliced into the repeating pattern of a message row
pub const CAMOUFLAGE_CHARS: [char; 3] = ['s', 't', 'a'];

/// Prompt shown when the message is read interactively
pub const MESSAGE_PROMPT: &str = "What's your secret message? ";

/// Layout parameters for a single stereogram build
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StereogramConfig {
    /// Characters per pattern
    pub block_len: usize,
    /// Characters per row
    pub text_width: usize,
    /// Row index of the first message row
    pub message_start: usize,
    /// Filler rows after the message
    pub trailing_rows: usize,
    /// Inclusive word-length bounds for the corpus
    pub word_len: (usize, usize),
    /// Calibration marker character
    pub marker: char,
    /// Pool of characters injected into message-row patterns
    pub camouflage_chars: Vec<char>,
}

impl Default for StereogramConfig {
    fn default() -> Self {
        Self {
            block_len: DEFAULT_BLOCK_LEN,
            text_width: DEFAULT_TEXT_WIDTH,
            message_start: DEFAULT_MESSAGE_START,
            trailing_rows: DEFAULT_TRAILING_ROWS,
            word_len: (MIN_WORD_LEN, MAX_WORD_LEN),
            marker: CALIBRATION_MARKER,
            camouflage_chars: CAMOUFLAGE_CHARS.to_vec(),
        }
    }
}

impl StereogramConfig {
    /// Shortest corpus word
    pub const fn min_word_len(&self) -> usize {
        self.word_len.0
    }

    /// Longest corpus word
    pub const fn max_word_len(&self) -> usize {
        self.word_len.1
    }

    /// Number of content rows (excluding calibration) for a message of `message_len` words
    pub const fn row_count(&self, message_len: usize) -> usize {
        self.message_start + message_len + self.trailing_rows
    }

    /// Check that the parameters describe a buildable layout
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` naming the first offending field
    pub fn validate(&self) -> Result<()> {
        let (min_len, max_len) = self.word_len;

        if min_len == 0 {
            return Err(invalid_parameter(
                "min_word_len",
                &min_len,
                &"must be at least 1",
            ));
        }
        if min_len > max_len {
            return Err(invalid_parameter(
                "max_word_len",
                &max_len,
                &format!("must not be shorter than min_word_len ({min_len})"),
            ));
        }
        // A pattern must hold at least one word plus a hidden word and separator
        if self.block_len < 2 * min_len + 1 {
            return Err(invalid_parameter(
                "block_len",
                &self.block_len,
                &format!("must be at least {} to hold two words", 2 * min_len + 1),
            ));
        }
        if max_len > self.block_len {
            return Err(invalid_parameter(
                "max_word_len",
                &max_len,
                &format!("must not exceed block_len ({})", self.block_len),
            ));
        }
        if self.text_width < self.block_len + 2 {
            return Err(invalid_parameter(
                "text_width",
                &self.text_width,
                &format!(
                    "must leave room for the calibration markers ({})",
                    self.block_len + 2
                ),
            ));
        }
        if self.camouflage_chars.is_empty() {
            return Err(invalid_parameter(
                "camouflage_chars",
                &"[]",
                &"at least one character is required",
            ));
        }
        if !self.marker.is_ascii_graphic() {
            return Err(invalid_parameter(
                "marker",
                &self.marker.escape_default(),
                &"must be printable ASCII other than space",
            ));
        }
        if let Some(c) = self
            .camouflage_chars
            .iter()
            .find(|c| !c.is_ascii_graphic())
        {
            return Err(invalid_parameter(
                "camouflage_chars",
                &c.escape_default(),
                &"must be printable ASCII other than space",
            ));
        }

        Ok(())
    }
}
