use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use std::cell::RefCell;
use std::time::Duration;

const SPINNER_TICK: Duration = Duration::from_millis(120);

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// This adapter implements the ProgressReporter port, writing progress
/// information to stderr so it doesn't interfere with stdout output.
/// While an LLM call is pending an indicatif spinner is shown.
pub struct StderrProgressReporter {
    spinner: RefCell<Option<ProgressBar>>,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: RefCell::new(None),
        }
    }

    fn start_spinner(&self, message: &str) {
        let mut slot = self.spinner.borrow_mut();
        if let Some(existing) = slot.take() {
            existing.finish_and_clear();
        }

        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("   {spinner:.green} {msg} [{elapsed}]") {
            spinner.set_style(style);
        }
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(SPINNER_TICK);
        *slot = Some(spinner);
    }

    fn clear_spinner(&self) {
        if let Some(spinner) = self.spinner.borrow_mut().take() {
            spinner.finish_and_clear();
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        match self.spinner.borrow().as_ref() {
            Some(spinner) => spinner.println(message),
            None => eprintln!("{}", message),
        }
    }

    fn report_waiting(&self, message: &str) {
        self.start_spinner(message);
    }

    fn report_error(&self, message: &str) {
        self.clear_spinner();
        eprintln!("{}", message);
    }

    fn report_completion(&self, message: &str) {
        self.clear_spinner();
        eprintln!("{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_reporter_lifecycle() {
        let reporter = StderrProgressReporter::new();
        // Can't easily test stderr output, but verify it doesn't panic
        reporter.report("Test message");
        reporter.report_waiting("Waiting for model");
        assert!(reporter.spinner.borrow().is_some());
        reporter.report("While waiting");
        reporter.report_completion("Done");
        assert!(reporter.spinner.borrow().is_none());
    }

    #[test]
    fn test_error_clears_spinner() {
        let reporter = StderrProgressReporter::default();
        reporter.report_waiting("first");
        reporter.report_waiting("second");
        reporter.report_error("failed");
        assert!(reporter.spinner.borrow().is_none());
    }
}
