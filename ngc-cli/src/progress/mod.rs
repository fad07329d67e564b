//! Progress reporting module

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Progress reporter for input processing
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
    enabled: bool,
}

impl ProgressReporter {
    /// Create a new progress reporter; a disabled one draws nothing
    pub fn new(enabled: bool) -> Self {
        Self {
            progress_bar: None,
            enabled,
        }
    }

    /// Initialize progress bar for input processing
    pub fn init_inputs(&mut self, total_inputs: u64) {
        if !self.enabled {
            return;
        }

        let pb = ProgressBar::new(total_inputs);
        match ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} inputs {msg}")
        {
            Ok(style) => pb.set_style(style.progress_chars("##-")),
            Err(error) => log::debug!("Default progress style kept: {error}"),
        }
        pb.enable_steady_tick(Duration::from_millis(100));

        self.progress_bar = Some(pb);
    }

    /// Update progress for a completed input
    pub fn input_completed(&self, name: &str) {
        if let Some(pb) = &self.progress_bar {
            pb.set_message(format!("Processed: {name}"));
            pb.inc(1);
        }
    }

    /// Finish progress reporting
    pub fn finish(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message("Complete");
        }
    }

    /// Whether a bar is being drawn
    pub fn is_active(&self) -> bool {
        self.progress_bar.is_some()
    }
}
