//! Progress reporting module

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Progress reporter for file processing
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
    quiet: bool,
    matched: AtomicUsize,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new(quiet: bool) -> Self {
        Self {
            progress_bar: None,
            quiet,
            matched: AtomicUsize::new(0),
        }
    }

    /// Initialize progress bar for file processing
    pub fn init_files(&mut self, total_files: u64) {
        if self.quiet || total_files < 2 {
            return;
        }

        let pb = ProgressBar::new(total_files);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} files {msg}")
        {
            pb.set_style(style.progress_chars("##-"));
        }
        pb.enable_steady_tick(Duration::from_millis(100));

        self.progress_bar = Some(pb);
    }

    /// Record a parsed input and the number of matched chunks it produced
    pub fn file_completed(&self, filename: &str, matched: usize) {
        let total = self.matched.fetch_add(matched, Ordering::Relaxed) + matched;
        if let Some(pb) = &self.progress_bar {
            pb.set_message(format!("{}: {} match(es), {} total", filename, matched, total));
            pb.inc(1);
        }
    }

    /// Matched chunks recorded so far, across all inputs
    pub fn matched_total(&self) -> usize {
        self.matched.load(Ordering::Relaxed)
    }

    /// Finish progress reporting
    pub fn finish(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(format!("Complete, {} match(es)", self.matched_total()));
        }
    }

    /// Whether a progress bar is being drawn
    pub fn is_active(&self) -> bool {
        self.progress_bar.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_reporter_never_draws() {
        let mut reporter = ProgressReporter::new(true);
        reporter.init_files(10);
        assert!(!reporter.is_active());
        reporter.file_completed("a.txt", 3);
        reporter.finish();
        assert_eq!(reporter.matched_total(), 3);
    }

    #[test]
    fn test_single_file_has_no_bar() {
        let mut reporter = ProgressReporter::new(false);
        reporter.init_files(1);
        assert!(!reporter.is_active());
    }

    #[test]
    fn test_reporter_tracks_files() {
        let mut reporter = ProgressReporter::new(false);
        reporter.init_files(2);
        assert!(reporter.is_active());
        reporter.file_completed("a.txt", 2);
        reporter.file_completed("b.txt", 0);
        reporter.finish();
        assert_eq!(reporter.matched_total(), 2);
    }
}
