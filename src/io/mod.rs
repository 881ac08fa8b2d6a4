/// Command-line interface and generation runner
pub mod cli;
/// Layout constants and runtime configuration
pub mod configuration;
/// Error types and context helpers
pub mod error;
/// Row progress display
pub mod progress;
/// Word list files and corpus persistence
pub mod wordlist;
