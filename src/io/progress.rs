//! Row progress display on stderr

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static ROW_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:30.cyan/blue}] {pos}/{len} rows")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks rows built for one stereogram
///
/// A hidden manager accepts the same calls and draws nothing.
pub struct ProgressManager {
    bar: ProgressBar,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a visible progress manager
    pub fn new() -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(ROW_STYLE.clone());
        Self { bar }
    }

    /// Create a manager that never draws
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Reset the bar for `rows` rows labelled with `label`
    pub fn initialize(&self, rows: usize, label: &str) {
        self.bar.set_length(rows as u64);
        self.bar.set_position(0);
        self.bar.set_message(label.to_string());
    }

    /// Report `done` of `total` rows finished
    pub fn update_row(&self, done: usize, total: usize) {
        self.bar.set_length(total as u64);
        self.bar.set_position(done as u64);
    }

    /// Rows reported so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Total rows expected
    pub fn length(&self) -> Option<u64> {
        self.bar.length()
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
