//! Progress spinners.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use super::theme::GroundworkTheme;
use super::SpinnerHandle;

/// A progress spinner for long-running operations (venv creation, installs).
pub struct ProgressSpinner {
    bar: ProgressBar,
}

impl ProgressSpinner {
    /// Create a new spinner with a message.
    pub fn new(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));

        Self { bar }
    }

    /// Create a spinner that doesn't show (for silent mode).
    pub fn hidden() -> Self {
        let bar = ProgressBar::hidden();
        Self { bar }
    }

    fn finish(&mut self, line: String) {
        self.bar
            .set_style(ProgressStyle::default_spinner().template("{msg}").unwrap());
        self.bar.finish_with_message(line);
    }
}

impl SpinnerHandle for ProgressSpinner {
    fn set_message(&mut self, msg: &str) {
        self.bar.set_message(msg.to_string());
    }

    fn finish_success(&mut self, msg: &str) {
        let theme = GroundworkTheme::new();
        self.finish(theme.format_success(msg));
    }

    fn finish_error(&mut self, msg: &str) {
        let theme = GroundworkTheme::new();
        self.finish(theme.format_error(msg));
    }

    fn finish_skipped(&mut self, msg: &str) {
        let theme = GroundworkTheme::new();
        self.finish(theme.format_skipped(msg));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spinner_finishes_without_panic() {
        let mut spinner = ProgressSpinner::hidden();
        spinner.set_message("Creating virtualenv");
        spinner.finish_success("Virtualenv ready");
    }

    #[test]
    fn spinner_error_and_skip_finish() {
        let mut spinner = ProgressSpinner::hidden();
        spinner.finish_error("venv failed");

        let mut spinner = ProgressSpinner::hidden();
        spinner.finish_skipped("skipped");
    }
}
