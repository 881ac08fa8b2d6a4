//! Error types and context management for stereogram generation

use std::fmt;
use std::path::PathBuf;

/// Main error type for all generation operations
#[derive(Debug)]
pub enum StereogramError {
    /// Layout parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// No corpus word survived the length and character filters
    EmptyCorpus {
        /// Shortest accepted word length
        min_len: usize,
        /// Longest accepted word length
        max_len: usize,
    },

    /// The corpus cannot fill a remaining pattern budget
    ///
    /// Occurs when no sequence of corpus words honours the fit constraint
    /// for the budget, typically because short words are missing
    UnfillableBudget {
        /// Remaining characters that could not be filled
        budget: usize,
        /// Total pattern length being generated
        length: usize,
        /// Row being built when this occurred
        row: Option<usize>,
    },

    /// A message word leaves no room for filler words in its pattern
    MessageWordTooLong {
        /// The offending word
        word: String,
        /// Pattern length it has to fit into
        block_len: usize,
    },

    /// A message word contains characters that cannot be embedded
    InvalidMessageWord {
        /// The offending word
        word: String,
        /// Description of what's wrong with the word
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl StereogramError {
    /// Whether the error stems from corpus or layout setup rather than user input
    pub const fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidParameter { .. } | Self::EmptyCorpus { .. } | Self::UnfillableBudget { .. }
        )
    }

    /// Whether the error stems from the secret message
    pub const fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::MessageWordTooLong { .. } | Self::InvalidMessageWord { .. }
        )
    }
}

impl fmt::Display for StereogramError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::EmptyCorpus { min_len, max_len } => {
                write!(
                    f,
                    "Corpus contains no usable words of length {min_len} to {max_len}"
                )
            }
            Self::UnfillableBudget {
                budget,
                length,
                row,
            } => {
                write!(
                    f,
                    "Corpus cannot fill {budget} of {length} pattern characters"
                )?;
                if let Some(row) = row {
                    write!(f, " (row {row})")?;
                }
                write!(f, "; add more short words to the corpus")
            }
            Self::MessageWordTooLong { word, block_len } => {
                write!(
                    f,
                    "Message word '{word}' ({} chars) does not fit a {block_len}-character pattern",
                    word.len()
                )
            }
            Self::InvalidMessageWord { word, reason } => {
                write!(f, "Message word '{word}' cannot be embedded: {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for StereogramError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, StereogramError>;

/// Additional context to enrich error messages
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Row being built
    pub row: Option<usize>,
}

/// Enriches error messages with builder state information
pub trait WithContext<T> {
    /// Add error context to a Result
    ///
    /// # Errors
    ///
    /// Propagates the original error with additional context applied
    fn with_context(self, context: ErrorContext) -> Result<T>;

    /// Add just the row context
    ///
    /// # Errors
    ///
    /// Propagates the original error with the row context applied
    fn with_row(self, row: usize) -> Result<T>;
}

impl<T, E> WithContext<T> for std::result::Result<T, E>
where
    E: Into<StereogramError>,
{
    fn with_context(self, context: ErrorContext) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            // Only budget failures are row-specific
            if let StereogramError::UnfillableBudget { row, .. } = &mut error {
                if context.row.is_some() {
                    *row = context.row;
                }
            }
            error
        })
    }

    fn with_row(self, row: usize) -> Result<T> {
        self.with_context(ErrorContext { row: Some(row) })
    }
}

impl From<std::io::Error> for StereogramError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> StereogramError {
    StereogramError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a file system error for `path`
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> StereogramError {
    StereogramError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
