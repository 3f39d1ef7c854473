//! Batch progress display for multi-file processing

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

/// Coordinates progress display for batch operations
///
/// Small batches get one bar per file; large batches collapse to a single
/// batch bar to avoid terminal spam.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    file_bars: Vec<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static FILE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:30.cyan/blue}] {prefix}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Grids: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a progress manager with no bars yet
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            file_bars: Vec::new(),
        }
    }

    /// Create bars for a batch of `file_count` grid files
    pub fn initialize(&mut self, file_count: usize) {
        if file_count > MAX_INDIVIDUAL_PROGRESS_BARS {
            let batch_bar = ProgressBar::new(file_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
            return;
        }

        for _ in 0..file_count {
            let bar = ProgressBar::new(0);
            bar.set_style(FILE_STYLE.clone());
            self.file_bars.push(self.multi_progress.add(bar));
        }
    }

    /// Configure the bar for a new file with `steps` pending operations
    pub fn start_file(&mut self, index: usize, path: &Path, steps: usize) {
        if let Some(bar) = self.file_bars.get(index) {
            bar.set_length(steps as u64);
            bar.set_prefix(
                path.file_name()
                    .unwrap_or_default()
                    .to_string_lossy()
                    .to_string(),
            );
            bar.set_message(format!("0/{steps}"));
        }
    }

    /// Report a completed step for a file
    pub fn update_step(&mut self, index: usize, step: usize) {
        if let Some(bar) = self.file_bars.get(index) {
            let total = bar.length().unwrap_or(0);
            bar.set_position(step as u64);
            bar.set_message(format!("{step}/{total}"));
        }
    }

    /// Mark a file as completed
    pub fn complete_file(&mut self, index: usize) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }
        if let Some(bar) = self.file_bars.get(index) {
            if let Some(total) = bar.length() {
                bar.set_position(total);
            }
            bar.set_message("done".to_string());
        }
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All grids processed");
        }
        let _ = self.multi_progress.clear();
    }
}
