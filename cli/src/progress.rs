use std::time::Instant;

use crate::ui;

/// Tracks the named steps of a CLI operation and reports elapsed time
pub struct ProgressTracker {
    operation_name: String,
    start_time: Instant,
    steps: Vec<String>,
    current_step: usize,
}

impl ProgressTracker {
    pub fn new(operation_name: &str) -> Self {
        ui::section_header(operation_name);
        Self {
            operation_name: operation_name.to_string(),
            start_time: Instant::now(),
            steps: Vec::new(),
            current_step: 0,
        }
    }

    pub fn with_steps(mut self, steps: Vec<String>) -> Self {
        self.steps = steps;
        self
    }

    /// Announce the current step
    pub fn start_step(&self) {
        if let Some(step) = self.steps.get(self.current_step) {
            ui::status_message(step);
        }
    }

    /// Mark the current step as done and advance
    pub fn complete_step(&mut self) {
        if let Some(step) = self.steps.get(self.current_step) {
            ui::success_message(step);
            self.current_step += 1;
        }
    }

    /// Report the whole operation as finished
    pub fn complete(&self) {
        let seconds = self.start_time.elapsed().as_secs_f32();
        ui::success_message(&format!(
            "{} completed in {seconds:.1}s",
            self.operation_name
        ));
    }
}
