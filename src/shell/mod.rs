//! Subprocess execution.

pub mod command;

pub use command::{execute, execute_check, execute_quiet, CommandOptions, CommandResult};

/// Check if running in a CI environment.
pub fn is_ci() -> bool {
    ["CI", "GITHUB_ACTIONS", "GITLAB_CI", "CIRCLECI", "TRAVIS"]
        .iter()
        .any(|var| std::env::var_os(var).is_some())
}
