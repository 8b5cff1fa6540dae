// file: src/pipeline/progress.rs
// description: progress reporting and run statistics
// reference: https://docs.rs/indicatif

use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::time::Instant;

#[derive(Debug, Clone, Default, Serialize)]
pub struct PipelineStats {
    pub files_scanned: usize,
    pub files_indexed: usize,
    pub files_skipped: usize,
    pub months: usize,
    pub duration_secs: f64,
}

impl PipelineStats {
    pub fn success_rate(&self) -> f64 {
        if self.files_scanned == 0 {
            return 0.0;
        }
        (self.files_indexed as f64 / self.files_scanned as f64) * 100.0
    }
}

/// Wraps a single indicatif bar for the sequential file loop. With
/// `enabled = false` the bar is hidden and only the counters remain.
pub struct ProgressTracker {
    bar: ProgressBar,
    files_indexed: usize,
    files_skipped: usize,
    start_time: Instant,
}

impl ProgressTracker {
    pub fn new(total_files: usize, enabled: bool) -> Self {
        let bar = if enabled {
            let bar = ProgressBar::new(total_files as u64);
            bar.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                    .expect("Failed to create progress bar template")
                    .progress_chars("█▓▒░"),
            );
            bar
        } else {
            ProgressBar::hidden()
        };

        Self {
            bar,
            files_indexed: 0,
            files_skipped: 0,
            start_time: Instant::now(),
        }
    }

    pub fn record_indexed(&mut self) {
        self.files_indexed += 1;
        self.bar.inc(1);
    }

    pub fn record_skipped(&mut self, file: &str) {
        self.files_skipped += 1;
        self.bar.set_message(format!("skipped {}", file));
        self.bar.inc(1);
    }

    pub fn finish(self, months: usize) -> PipelineStats {
        self.bar.finish_and_clear();

        PipelineStats {
            files_scanned: self.files_indexed + self.files_skipped,
            files_indexed: self.files_indexed,
            files_skipped: self.files_skipped,
            months,
            duration_secs: self.start_time.elapsed().as_secs_f64(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracker_counts() {
        let mut tracker = ProgressTracker::new(3, false);
        tracker.record_indexed();
        tracker.record_indexed();
        tracker.record_skipped("bad.md");

        let stats = tracker.finish(1);
        assert_eq!(stats.files_scanned, 3);
        assert_eq!(stats.files_indexed, 2);
        assert_eq!(stats.files_skipped, 1);
        assert_eq!(stats.months, 1);
    }

    #[test]
    fn test_success_rate() {
        let stats = PipelineStats {
            files_scanned: 10,
            files_indexed: 9,
            files_skipped: 1,
            months: 2,
            duration_secs: 0.1,
        };
        assert!((stats.success_rate() - 90.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_success_rate_with_no_files() {
        let stats = PipelineStats::default();
        assert_eq!(stats.success_rate(), 0.0);
    }
}
