//! Subprocess invocation.
//!
//! Every external step of the bootstrap is a fixed program plus arguments,
//! so commands are spawned directly (argv-style) rather than through a
//! shell. Each invocation returns an explicit [`CommandResult`]; callers
//! decide per step whether a failure is fatal, ignorable, or propagated.

use crate::error::{GroundworkError, Result};
use std::collections::HashMap;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// Result of executing a subprocess.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output (empty when inherited).
    pub stdout: String,

    /// Standard error (empty when inherited).
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether the command succeeded (exit code 0).
    pub success: bool,
}

/// Options for command execution.
#[derive(Debug, Clone)]
pub struct CommandOptions {
    /// Working directory.
    pub cwd: Option<PathBuf>,

    /// Environment variables (merged with the parent's environment).
    pub env: HashMap<String, String>,

    /// Capture stdout (if false, inherits from parent).
    pub capture_stdout: bool,

    /// Capture stderr (if false, inherits from parent).
    pub capture_stderr: bool,
}

impl Default for CommandOptions {
    fn default() -> Self {
        Self {
            cwd: None,
            env: HashMap::new(),
            capture_stdout: true,
            capture_stderr: true,
        }
    }
}

impl CommandOptions {
    /// Options that leave stdout/stderr attached to the terminal.
    pub fn inherited(cwd: Option<&Path>) -> Self {
        Self {
            cwd: cwd.map(Path::to_path_buf),
            capture_stdout: false,
            capture_stderr: false,
            ..Default::default()
        }
    }
}

/// Render a program + args as a single string for error messages.
fn display_command(program: &Path, args: &[&str]) -> String {
    let mut rendered = program.display().to_string();
    for arg in args {
        rendered.push(' ');
        rendered.push_str(arg);
    }
    rendered
}

/// Execute a program with arguments.
pub fn execute(program: &Path, args: &[&str], options: &CommandOptions) -> Result<CommandResult> {
    let start = Instant::now();

    let mut cmd = Command::new(program);
    cmd.args(args.iter().map(OsStr::new));

    if let Some(cwd) = &options.cwd {
        cmd.current_dir(cwd);
    }

    for (key, value) in &options.env {
        cmd.env(key, value);
    }

    cmd.stdout(if options.capture_stdout {
        Stdio::piped()
    } else {
        Stdio::inherit()
    });
    cmd.stderr(if options.capture_stderr {
        Stdio::piped()
    } else {
        Stdio::inherit()
    });
    cmd.stdin(Stdio::null());

    let output = cmd.output().map_err(|source| GroundworkError::CommandSpawn {
        command: display_command(program, args),
        source,
    })?;

    let duration = start.elapsed();

    let stdout = if options.capture_stdout {
        String::from_utf8_lossy(&output.stdout).to_string()
    } else {
        String::new()
    };

    let stderr = if options.capture_stderr {
        String::from_utf8_lossy(&output.stderr).to_string()
    } else {
        String::new()
    };

    Ok(CommandResult {
        exit_code: output.status.code(),
        success: output.status.success(),
        stdout,
        stderr,
        duration,
    })
}

/// Execute a command and return success/failure.
pub fn execute_check(program: &Path, args: &[&str], cwd: Option<&Path>) -> bool {
    let options = CommandOptions {
        cwd: cwd.map(Path::to_path_buf),
        ..Default::default()
    };

    execute(program, args, &options)
        .map(|r| r.success)
        .unwrap_or(false)
}

/// Execute a command with both streams captured.
pub fn execute_quiet(program: &Path, args: &[&str], cwd: Option<&Path>) -> Result<CommandResult> {
    let options = CommandOptions {
        cwd: cwd.map(Path::to_path_buf),
        ..Default::default()
    };
    execute(program, args, &options)
}
