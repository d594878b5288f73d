use std::io::IsTerminal;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Spinner shown on stderr while the trees are walked.
///
/// The total is unknown up front, so this only counts visited entries. It is
/// hidden in quiet mode or when stderr is not a TTY, which keeps piped and
/// captured output clean.
pub struct ScanProgress {
    progress_bar: ProgressBar,
}

impl ScanProgress {
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        let is_tty = std::io::stderr().is_terminal();
        Self::new_with_visibility(quiet, is_tty)
    }

    fn new_with_visibility(quiet: bool, is_tty: bool) -> Self {
        let progress_bar = if quiet || !is_tty {
            ProgressBar::hidden()
        } else {
            Self::create_spinner()
        };

        Self { progress_bar }
    }

    fn create_spinner() -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        let style = ProgressStyle::with_template("Thinking... [{spinner}] {pos} entries")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("-\\|/ ");
        pb.set_style(style);
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }

    /// Count one visited entry.
    pub fn inc(&self) {
        self.progress_bar.inc(1);
    }

    /// Stop and clear the spinner so the table starts on a clean line.
    pub fn finish(&self) {
        self.progress_bar.finish_and_clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_in_quiet_mode() {
        let progress = ScanProgress::new_with_visibility(true, true);
        assert!(progress.progress_bar.is_hidden());
        progress.inc();
        progress.inc();
        assert_eq!(progress.progress_bar.position(), 2);
        progress.finish();
    }

    #[test]
    fn test_hidden_without_tty() {
        let progress = ScanProgress::new_with_visibility(false, false);
        assert!(progress.progress_bar.is_hidden());
        progress.finish();
    }

    #[test]
    fn test_visible_spinner_counts_entries() {
        let progress = ScanProgress::new_with_visibility(false, true);
        for _ in 0..5 {
            progress.inc();
        }
        assert_eq!(progress.progress_bar.position(), 5);
        progress.finish();
        assert!(progress.progress_bar.is_finished());
    }
}
