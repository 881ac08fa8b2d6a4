//! Plain-text word list loading and corpus persistence

use crate::io::error::{Result, file_system_error};
use crate::text::corpus::{Corpus, CorpusProvider};
use std::fs;
use std::path::{Path, PathBuf};

/// Corpus provider reading one word per line from a file
#[derive(Clone, Debug)]
pub struct WordListFile {
    path: PathBuf,
}

impl WordListFile {
    /// Provider for the word list at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the word list
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Trimmed non-empty lines of the file
    ///
    /// # Errors
    ///
    /// Returns `FileSystem` if the file cannot be read
    pub fn read_words(&self) -> Result<Vec<String>> {
        let contents = fs::read_to_string(&self.path)
            .map_err(|e| file_system_error(&self.path, "read word list", e))?;

        Ok(contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }
}

impl CorpusProvider for WordListFile {
    fn load(&self, bounds: (usize, usize)) -> Result<Corpus> {
        Corpus::from_words(self.read_words()?, bounds)
    }
}

/// Write `corpus` one word per line so it can be reloaded with [`WordListFile`]
///
/// # Errors
///
/// Returns `FileSystem` if the file cannot be written
pub fn save_corpus(corpus: &Corpus, path: &Path) -> Result<()> {
    let mut contents = corpus.words().join("\n");
    contents.push('\n');
    fs::write(path, contents).map_err(|e| file_system_error(path, "write corpus", e))
}
