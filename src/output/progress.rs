use std::io::IsTerminal;

use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar over the charts of one algorithm.
///
/// Hidden in quiet mode or when stderr is not a TTY.
#[derive(Clone)]
pub struct ChartProgress {
    progress_bar: ProgressBar,
}

impl ChartProgress {
    /// Creates a progress bar for `total` charts of `algorithm`.
    ///
    /// Draws to stderr so stdout stays clean for reports.
    #[must_use]
    pub fn new(total: u64, algorithm: &str, quiet: bool) -> Self {
        let is_tty = std::io::stderr().is_terminal();
        Self::new_with_visibility(total, algorithm, quiet, is_tty)
    }

    fn new_with_visibility(total: u64, algorithm: &str, quiet: bool, is_tty: bool) -> Self {
        let progress_bar = if quiet || !is_tty {
            ProgressBar::hidden()
        } else {
            Self::create_visible_progress_bar(total)
        };
        progress_bar.set_message(algorithm.to_string());
        Self { progress_bar }
    }

    fn create_visible_progress_bar(total: u64) -> ProgressBar {
        let style = ProgressStyle::with_template(
            "{spinner:.green} {msg} [{bar:40.cyan/blue}] {pos}/{len} charts",
        )
        .map_or_else(|_| ProgressStyle::default_bar(), |style| style.progress_chars("█▓░"));
        let pb = ProgressBar::new(total);
        pb.set_style(style);
        pb
    }

    /// Marks one chart as written.
    pub fn inc(&self) {
        self.progress_bar.inc(1);
    }

    #[must_use]
    pub fn position(&self) -> u64 {
        self.progress_bar.position()
    }

    /// Finishes the progress bar and clears it from the terminal.
    pub fn finish(&self) {
        self.progress_bar.finish_and_clear();
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
