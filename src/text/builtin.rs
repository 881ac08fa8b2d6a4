//! Embedded word list used when no word file is supplied

use crate::io::error::Result;
use crate::text::corpus::{Corpus, CorpusProvider};

static BUILTIN_WORDS: &str = include_str!("words.txt");

/// Corpus provider backed by the word list compiled into the binary
#[derive(Clone, Copy, Debug, Default)]
pub struct BuiltinWords;

impl BuiltinWords {
    /// Raw embedded words, one per line
    pub fn raw() -> impl Iterator<Item = &'static str> {
        BUILTIN_WORDS.lines().map(str::trim).filter(|w| !w.is_empty())
    }
}

impl CorpusProvider for BuiltinWords {
    fn load(&self, bounds: (usize, usize)) -> Result<Corpus> {
        Corpus::from_words(Self::raw(), bounds)
    }
}
