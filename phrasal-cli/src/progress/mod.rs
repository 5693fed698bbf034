//! Progress reporting module

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Progress reporter for file processing
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
}

impl ProgressReporter {
    /// Create a new progress reporter; quiet mode reports nothing
    pub fn new(quiet: bool, total_files: u64) -> Self {
        // A bar for a single file is noise
        if quiet || total_files < 2 {
            return Self { progress_bar: None };
        }

        let pb = ProgressBar::new(total_files);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} files {msg}")
                .expect("static progress template is valid")
                .progress_chars("##-"),
        );
        pb.enable_steady_tick(Duration::from_millis(100));

        Self {
            progress_bar: Some(pb),
        }
    }

    /// Update progress for a completed file
    pub fn file_completed(&self, filename: &str) {
        if let Some(pb) = &self.progress_bar {
            pb.set_message(format!("Chunked: {filename}"));
            pb.inc(1);
        }
    }

    /// Finish progress reporting
    pub fn finish(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_and_clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_mode_has_no_bar() {
        let reporter = ProgressReporter::new(true, 10);
        assert!(reporter.progress_bar.is_none());

        // Updates on a quiet reporter are no-ops, not panics
        reporter.file_completed("a.txt");
        reporter.finish();
    }

    #[test]
    fn test_single_file_has_no_bar() {
        let reporter = ProgressReporter::new(false, 1);
        assert!(reporter.progress_bar.is_none());
    }

    #[test]
    fn test_multiple_files_get_a_bar() {
        let reporter = ProgressReporter::new(false, 3);
        assert!(reporter.progress_bar.is_some());
        reporter.file_completed("a.txt");
        reporter.finish();
    }
}
