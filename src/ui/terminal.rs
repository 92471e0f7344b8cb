//! Interactive terminal UI.

use super::non_interactive::NonInteractiveUI;
use super::spinner::ProgressSpinner;
use super::theme::{should_use_colors, GroundworkTheme};
use super::{OutputMode, SpinnerHandle, UserInterface};

/// UI implementation for interactive terminal sessions.
pub struct TerminalUI {
    mode: OutputMode,
    theme: GroundworkTheme,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            GroundworkTheme::new()
        } else {
            GroundworkTheme::plain()
        };

        Self { mode, theme }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", self.theme.format_success(msg));
        }
    }

    fn skipped(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", self.theme.format_skipped(msg));
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_result() {
            eprintln!("{}", self.theme.format_warning(msg));
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            Box::new(ProgressSpinner::new(message))
        } else {
            Box::new(ProgressSpinner::hidden())
        }
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("\n{}\n", self.theme.format_header(title));
        }
    }

    fn show_step(&mut self, current: usize, total: usize, title: &str) {
        if self.mode.shows_status() {
            println!("{}", self.theme.format_step(current, total, title));
        }
    }

    fn is_interactive(&self) -> bool {
        true
    }
}

/// Create the appropriate UI for the current environment.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if interactive {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}
