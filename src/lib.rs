//! Text autostereogram generation
//!
//! Rows of random words are laid out so that ordinary rows repeat a fixed
//! pattern while message rows repeat a pattern starting with a hidden word
//! one column short. Viewed with crossed or relaxed eyes the hidden words
//! appear at a different depth from the surrounding text.

#![forbid(unsafe_code)]

/// Pattern generation, row assembly and the seeded random source
pub mod algorithm;
/// Command line, configuration, errors, progress and word list files
pub mod io;
/// Corpus and secret message types
pub mod text;

pub use algorithm::builder::{AutostereogramBuilder, Stereogram, build_autostereogram};
pub use algorithm::pattern::{Pattern, PatternGenerator, generate_pattern};
pub use algorithm::random::RandomSelector;
pub use io::configuration::StereogramConfig;
pub use io::error::{Result, StereogramError};
pub use text::corpus::{Corpus, CorpusProvider};
pub use text::message::SecretMessage;
