//! Row-by-row assembly of the text autostereogram
//!
//! Filler rows repeat one pattern with period `block_len + 1` (pattern plus
//! separator). A message row embeds its word at the start of a pattern,
//! repeats that pattern with its last character dropped, then keeps
//! repeating a camouflaged copy that restores the lost character inside the
//! pattern. From the shortened copy onwards the hidden word recurs one
//! column earlier than the surrounding text, which the eyes read as depth.

use crate::algorithm::pattern::PatternGenerator;
use crate::algorithm::random::RandomSelector;
use crate::io::configuration::StereogramConfig;
use crate::io::error::{Result, StereogramError, WithContext, invalid_parameter};
use crate::text::corpus::Corpus;
use crate::text::message::SecretMessage;
use std::fmt;

/// Role of a content row
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowKind {
    /// Camouflage row with no hidden content
    Filler,
    /// Row hiding the message word at this index
    Message(usize),
}

/// Classify content row `row` for a message of `message_len` words
pub const fn row_kind(row: usize, message_start: usize, message_len: usize) -> RowKind {
    if row >= message_start && row - message_start < message_len {
        RowKind::Message(row - message_start)
    } else {
        RowKind::Filler
    }
}

/// Finished output: a calibration row followed by the content rows
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stereogram {
    calibration: String,
    rows: Vec<String>,
}

impl Stereogram {
    /// Convergence guide with two markers
    pub fn calibration(&self) -> &str {
        &self.calibration
    }

    /// Content rows in order, without line terminators
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Number of content rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Calibration row then content rows
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.calibration.as_str()).chain(self.rows.iter().map(String::as_str))
    }

    /// Full newline-terminated text
    pub fn into_text(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Stereogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Builds stereograms for one configuration and corpus
#[derive(Clone, Debug)]
pub struct AutostereogramBuilder<'c> {
    config: StereogramConfig,
    generator: PatternGenerator<'c>,
}

impl<'c> AutostereogramBuilder<'c> {
    /// Validate the layout and prepare pattern generation
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for a bad layout or a corpus whose word
    /// lengths fall outside `word_len`, and `UnfillableBudget` if the corpus
    /// cannot produce a full pattern
    pub fn new(config: StereogramConfig, corpus: &'c Corpus) -> Result<Self> {
        config.validate()?;

        let (min_len, max_len) = corpus.bounds();
        if min_len < config.min_word_len() || max_len > config.max_word_len() {
            return Err(invalid_parameter(
                "word_len",
                &format!("{}..={}", config.min_word_len(), config.max_word_len()),
                &format!("corpus was filtered to {min_len}..={max_len}"),
            ));
        }

        let generator = PatternGenerator::new(corpus, config.block_len)?;
        Ok(Self { config, generator })
    }

    /// Layout in use
    pub const fn config(&self) -> &StereogramConfig {
        &self.config
    }

    /// Underlying pattern generator
    pub const fn generator(&self) -> &PatternGenerator<'c> {
        &self.generator
    }

    /// Check that every message word can be embedded
    ///
    /// Empty tokens hide nothing and always pass.
    ///
    /// # Errors
    ///
    /// Returns the first word's `InvalidMessageWord`, `MessageWordTooLong`
    /// or `UnfillableBudget` error
    pub fn validate_message(&self, message: &SecretMessage) -> Result<()> {
        message.validate(self.config.block_len, self.generator.corpus().shortest())?;
        for word in message.words().iter().filter(|w| !w.is_empty()) {
            self.generator.check_forced_start(word)?;
        }
        Ok(())
    }

    /// Build the stereogram for `message`
    ///
    /// # Errors
    ///
    /// Returns an input error if a message word cannot be embedded
    pub fn build(&self, message: &SecretMessage, rng: &mut RandomSelector) -> Result<Stereogram> {
        self.build_with_progress(message, rng, |_, _| {})
    }

    /// Build the stereogram, reporting `(rows_done, rows_total)` after each row
    ///
    /// # Errors
    ///
    /// Returns an input error if a message word cannot be embedded
    pub fn build_with_progress<F>(
        &self,
        message: &SecretMessage,
        rng: &mut RandomSelector,
        mut on_row: F,
    ) -> Result<Stereogram>
    where
        F: FnMut(usize, usize),
    {
        self.validate_message(message)?;

        let total = self.config.row_count(message.len());
        let mut rows = Vec::with_capacity(total);

        for row in 0..total {
            let line = match row_kind(row, self.config.message_start, message.len()) {
                RowKind::Filler => self.filler_row(rng),
                RowKind::Message(index) => {
                    let word = message.words().get(index).map_or("", String::as_str);
                    self.message_row(word, rng)
                }
            }
            .with_row(row)?;

            rows.push(line);
            on_row(row + 1, total);
        }

        Ok(Stereogram {
            calibration: self.calibration_row(),
            rows,
        })
    }

    /// Two markers `block_len + 1` columns apart, roughly centred
    pub fn calibration_row(&self) -> String {
        let block_len = self.config.block_len;
        let marker = self.config.marker;
        let indent = (self.config.text_width / 2).saturating_sub(block_len / 2);
        format!(
            "{}{marker}{}{marker}",
            " ".repeat(indent),
            " ".repeat(block_len)
        )
    }

    /// Random lead-in word followed by one pattern repeated to full width
    ///
    /// # Errors
    ///
    /// Propagates pattern generation failures
    pub fn filler_row(&self, rng: &mut RandomSelector) -> Result<String> {
        let pattern = self.generator.generate(rng, None)?;
        let lead = rng.choose(&pattern.words()).copied().unwrap_or_default();

        let mut line = String::with_capacity(self.line_capacity());
        line.push_str(lead);
        line.push(' ');
        Ok(self.fill_row(line, pattern.as_str()))
    }

    /// Row hiding `word` with a one-column shortfall between its repetitions
    ///
    /// An empty `word` keeps the row layout around a pattern of corpus words.
    ///
    /// # Errors
    ///
    /// Returns an input error if `word` cannot start a pattern
    pub fn message_row(&self, word: &str, rng: &mut RandomSelector) -> Result<String> {
        let pattern = self.generator.generate(rng, Some(word))?;
        let mut tail = pattern.tail_words();
        if tail.is_empty() && word.is_empty() {
            tail = pattern.words();
        }
        let lead = rng
            .choose(&tail)
            .ok_or_else(|| StereogramError::MessageWordTooLong {
                word: word.to_string(),
                block_len: self.config.block_len,
            })?;

        let mut line = String::with_capacity(self.line_capacity());
        line.push_str(lead);
        line.push(' ');
        line.push_str(pattern.as_str());

        let edited = pattern.without_last_char();
        line.push(' ');
        line.push_str(edited);
        line.push(' ');

        let injected = rng
            .choose(&self.config.camouflage_chars)
            .copied()
            .ok_or_else(|| {
                invalid_parameter("camouflage_chars", &"[]", &"no character to inject")
            })?;
        let camouflaged = camouflage(edited, injected);

        Ok(self.fill_row(line, &camouflaged))
    }

    /// Append `unit` plus a separator until `text_width` is reached, then cut
    fn fill_row(&self, mut line: String, unit: &str) -> String {
        let width = self.config.text_width;
        while line.len() < width {
            line.push_str(unit);
            line.push(' ');
        }
        line.truncate(width);
        line
    }

    const fn line_capacity(&self) -> usize {
        self.config.text_width + 2 * self.config.block_len + 2
    }
}

/// Keep the first word, then glue `injected` onto the remaining words
///
/// The result is one character longer than `edited`. It is visual noise, not
/// a sequence of real words.
pub fn camouflage(edited: &str, injected: char) -> String {
    let mut words = edited.split(' ');
    let first = words.next().unwrap_or_default();
    let rest = words.collect::<Vec<_>>().join(" ");
    format!("{first} {injected}{rest}")
}

/// Check the message and build a stereogram with the default layout
///
/// # Errors
///
/// See [`AutostereogramBuilder::new`] and [`AutostereogramBuilder::build`]
pub fn build_autostereogram(
    corpus: &Corpus,
    message: &SecretMessage,
    rng: &mut RandomSelector,
) -> Result<Stereogram> {
    AutostereogramBuilder::new(StereogramConfig::default(), corpus)?.build(message, rng)
}
