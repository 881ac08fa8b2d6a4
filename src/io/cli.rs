//! Command-line interface for generating text autostereograms

use crate::algorithm::builder::{AutostereogramBuilder, Stereogram};
use crate::algorithm::random::RandomSelector;
use crate::io::configuration::{
    CALIBRATION_MARKER, CAMOUFLAGE_CHARS, DEFAULT_BLOCK_LEN, DEFAULT_MESSAGE_START,
    DEFAULT_TEXT_WIDTH, DEFAULT_TRAILING_ROWS, MAX_WORD_LEN, MESSAGE_PROMPT, MIN_WORD_LEN,
    StereogramConfig,
};
use crate::io::error::{Result, file_system_error};
use crate::io::progress::ProgressManager;
use crate::io::wordlist::{WordListFile, save_corpus};
use crate::text::builtin::BuiltinWords;
use crate::text::corpus::{Corpus, CorpusProvider};
use crate::text::message::SecretMessage;
use clap::Parser;
use std::io::{BufRead, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "textstereo")]
#[command(
    author,
    version,
    about = "Hide a message in a text autostereogram made of random words"
)]
/// Command-line arguments for the stereogram generator
pub struct Cli {
    /// Secret message; read from stdin when omitted
    #[arg(short = 'M', long)]
    pub message: Option<String>,

    /// Word list file, one word per line (built-in list when omitted)
    #[arg(long, value_name = "PATH")]
    pub words: Option<PathBuf>,

    /// Write the filtered corpus to this file
    #[arg(long, value_name = "PATH")]
    pub save_corpus: Option<PathBuf>,

    /// Write the stereogram to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Random seed for reproducible generation (random when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Characters per repeating pattern
    #[arg(short, long, default_value_t = DEFAULT_BLOCK_LEN)]
    pub block_len: usize,

    /// Characters per row
    #[arg(short, long, default_value_t = DEFAULT_TEXT_WIDTH)]
    pub width: usize,

    /// Row on which the message starts
    #[arg(long, default_value_t = DEFAULT_MESSAGE_START)]
    pub message_start: usize,

    /// Filler rows after the message
    #[arg(long, default_value_t = DEFAULT_TRAILING_ROWS)]
    pub trailing_rows: usize,

    /// Shortest corpus word
    #[arg(long, default_value_t = MIN_WORD_LEN)]
    pub min_len: usize,

    /// Longest corpus word
    #[arg(long, default_value_t = MAX_WORD_LEN)]
    pub max_len: usize,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Layout described by the arguments
    pub fn config(&self) -> StereogramConfig {
        StereogramConfig {
            block_len: self.block_len,
            text_width: self.width,
            message_start: self.message_start,
            trailing_rows: self.trailing_rows,
            word_len: (self.min_len, self.max_len),
            marker: CALIBRATION_MARKER,
            camouflage_chars: CAMOUFLAGE_CHARS.to_vec(),
        }
    }

    /// Corpus source selected by `--words`
    pub fn corpus_provider(&self) -> Box<dyn CorpusProvider> {
        match &self.words {
            Some(path) => Box::new(WordListFile::new(path)),
            None => Box::new(BuiltinWords),
        }
    }
}

/// Prompt on `prompt_out` and read one line of message text from `input`
///
/// # Errors
///
/// Returns `FileSystem` if the prompt cannot be written or input cannot be read
pub fn read_message<R: BufRead, W: Write>(
    input: &mut R,
    prompt_out: &mut W,
) -> Result<SecretMessage> {
    write!(prompt_out, "{MESSAGE_PROMPT}")
        .and_then(|()| prompt_out.flush())
        .map_err(|e| file_system_error("<stderr>", "write prompt", e))?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .map_err(|e| file_system_error("<stdin>", "read message", e))?;
    Ok(SecretMessage::parse(&line))
}

/// Write the stereogram text to `out`
///
/// # Errors
///
/// Returns `FileSystem` if writing fails
pub fn write_stereogram<W: Write>(stereogram: &Stereogram, out: &mut W) -> Result<()> {
    write!(out, "{stereogram}")
        .and_then(|()| out.flush())
        .map_err(|e| file_system_error("<output>", "write stereogram", e))
}

/// Orchestrates corpus loading, message input and stereogram output
pub struct StereogramRunner {
    cli: Cli,
    progress_manager: ProgressManager,
}

impl StereogramRunner {
    /// Create a new runner with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = if cli.should_show_progress() {
            ProgressManager::new()
        } else {
            ProgressManager::hidden()
        };

        Self {
            cli,
            progress_manager,
        }
    }

    /// Parsed arguments
    pub const fn cli(&self) -> &Cli {
        &self.cli
    }

    /// Seed from `--seed`, or a fresh one that is reported on stderr
    // Allow print so a random run can be reproduced
    #[allow(clippy::print_stderr)]
    pub fn seed(&self) -> u64 {
        if let Some(seed) = self.cli.seed {
            return seed;
        }
        let seed = rand::random::<u64>();
        if self.cli.should_show_progress() {
            eprintln!("Seed: {seed}");
        }
        seed
    }

    /// Load the corpus and persist it if requested
    ///
    /// # Errors
    ///
    /// Returns an error if the word list cannot be read, no word is usable,
    /// or the corpus cannot be saved
    pub fn load_corpus(&self) -> Result<Corpus> {
        let config = self.cli.config();
        let corpus = self.cli.corpus_provider().load(config.word_len)?;

        if let Some(ref path) = self.cli.save_corpus {
            save_corpus(&corpus, path)?;
        }

        Ok(corpus)
    }

    /// Generate a stereogram for `message` with the configured seed
    ///
    /// # Errors
    ///
    /// Returns configuration errors for the layout or corpus and input errors
    /// for message words that cannot be embedded
    pub fn generate(&self, corpus: &Corpus, message: &SecretMessage) -> Result<Stereogram> {
        let builder = AutostereogramBuilder::new(self.cli.config(), corpus)?;
        let mut rng = RandomSelector::new(self.seed());

        let rows = builder.config().row_count(message.len());
        self.progress_manager.initialize(rows, "Building");
        let stereogram = builder.build_with_progress(message, &mut rng, |done, total| {
            self.progress_manager.update_row(done, total);
        });
        self.progress_manager.finish();

        stereogram
    }

    /// Run the full pipeline according to the CLI arguments
    ///
    /// # Errors
    ///
    /// Returns the first layout, corpus, input, generation or output error
    pub fn run(&self) -> Result<()> {
        self.cli.config().validate()?;
        let corpus = self.load_corpus()?;

        let message = match self.cli.message {
            Some(ref text) => SecretMessage::parse(text),
            None => read_message(&mut std::io::stdin().lock(), &mut std::io::stderr())?,
        };

        let stereogram = self.generate(&corpus, &message)?;

        match self.cli.output {
            Some(ref path) => std::fs::write(path, stereogram.to_string())
                .map_err(|e| file_system_error(path, "write stereogram", e)),
            None => write_stereogram(&stereogram, &mut std::io::stdout().lock()),
        }
    }
}
