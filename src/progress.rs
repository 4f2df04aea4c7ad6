//! Progress reporting utilities

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Progress reporter for diff runs
#[derive(Debug)]
pub struct ProgressReporter {
    pub load_pb: Option<ProgressBar>,
    pub compare_pb: Option<ProgressBar>,
    pub write_pb: Option<ProgressBar>,
    show_progress: bool,
}

impl ProgressReporter {
    /// Create progress reporter for diff operations; spinners appear as stages start
    pub fn new_for_diff() -> Self {
        Self {
            load_pb: None,
            compare_pb: None,
            write_pb: None,
            show_progress: true,
        }
    }

    /// Create minimal progress reporter (no progress bars)
    pub fn new_minimal() -> Self {
        Self {
            load_pb: None,
            compare_pb: None,
            write_pb: None,
            show_progress: false,
        }
    }

    pub fn start_load(&mut self, message: &str) {
        if self.show_progress && self.load_pb.is_none() {
            self.load_pb = Some(create_spinner(message));
        }
    }

    pub fn finish_load(&mut self, message: &str) {
        if let Some(pb) = self.load_pb.take() {
            pb.finish_with_message(message.to_string());
        }
    }

    pub fn start_compare(&mut self, message: &str) {
        if self.show_progress && self.compare_pb.is_none() {
            self.compare_pb = Some(create_spinner(message));
        }
    }

    pub fn finish_compare(&mut self, message: &str) {
        if let Some(pb) = self.compare_pb.take() {
            pb.finish_with_message(message.to_string());
        }
    }

    pub fn start_write(&mut self, message: &str) {
        if self.show_progress && self.write_pb.is_none() {
            self.write_pb = Some(create_spinner(message));
        }
    }

    pub fn finish_write(&mut self, message: &str) {
        if let Some(pb) = self.write_pb.take() {
            pb.finish_with_message(message.to_string());
        }
    }
}

impl Drop for ProgressReporter {
    fn drop(&mut self) {
        // Spinners left running after an error are cleared silently
        for pb in [
            self.load_pb.take(),
            self.compare_pb.take(),
            self.write_pb.take(),
        ]
        .into_iter()
        .flatten()
        {
            pb.finish_and_clear();
        }
    }
}

/// Create a spinner progress bar
fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
