//! Python runtime discovery and the fatal version check.
//!
//! Interpreter resolution iterates PATH entries directly instead of calling
//! `which` — `which` behavior varies across systems and is sometimes a shell
//! builtin with inconsistent error handling. The version query is the one
//! step of the bootstrap whose failure aborts the entire run.

use crate::error::{GroundworkError, Result};
use crate::shell::execute_quiet;
use regex::Regex;
use std::path::{Path, PathBuf};

/// Interpreter names searched on PATH, in preference order.
const INTERPRETER_CANDIDATES: [&str; 2] = ["python3", "python"];

/// A verified Python runtime.
#[derive(Debug, Clone)]
pub struct PythonRuntime {
    path: PathBuf,
    version: String,
}

impl PythonRuntime {
    /// Discover and verify the Python runtime.
    ///
    /// With an explicit `interpreter` the PATH search is skipped entirely;
    /// either way the interpreter must answer `--version` with a parseable
    /// `Python X.Y.Z` line or the whole bootstrap is aborted.
    pub fn discover(interpreter: Option<&Path>) -> Result<Self> {
        let path = match interpreter {
            Some(explicit) => explicit.to_path_buf(),
            None => resolve_interpreter(&parse_system_path()).ok_or_else(|| {
                GroundworkError::RuntimeNotFound {
                    searched: INTERPRETER_CANDIDATES.join(", "),
                }
            })?,
        };

        let version = query_version(&path)?;
        tracing::debug!("python runtime: {} ({})", version, path.display());

        Ok(Self { path, version })
    }

    /// Path to the interpreter binary.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Version string, e.g. `3.12.1`.
    pub fn version(&self) -> &str {
        &self.version
    }
}

/// Run `<python> --version` and parse the reported version.
fn query_version(python: &Path) -> Result<String> {
    let result = execute_quiet(python, &["--version"], None).map_err(|e| {
        GroundworkError::RuntimeCheckFailed {
            message: e.to_string(),
        }
    })?;

    if !result.success {
        return Err(GroundworkError::RuntimeCheckFailed {
            message: format!(
                "{} --version exited with code {:?}",
                python.display(),
                result.exit_code
            ),
        });
    }

    // Python 2 printed the version banner on stderr; tolerate both streams.
    let banner = if result.stdout.trim().is_empty() {
        result.stderr
    } else {
        result.stdout
    };

    parse_version(&banner).ok_or_else(|| GroundworkError::RuntimeCheckFailed {
        message: format!("unrecognized version output: {:?}", banner.trim()),
    })
}

/// Extract `X.Y[.Z]` from a `Python X.Y.Z` banner.
fn parse_version(output: &str) -> Option<String> {
    let re = Regex::new(r"Python (\d+\.\d+(?:\.\d+)?)").ok()?;
    re.captures(output)
        .map(|caps| caps[1].to_string())
}

/// Resolve the first candidate interpreter found on the given PATH entries.
pub fn resolve_interpreter(path_entries: &[PathBuf]) -> Option<PathBuf> {
    for name in INTERPRETER_CANDIDATES {
        for dir in path_entries {
            let candidate = dir.join(name);
            if candidate.is_file() && is_executable(&candidate) {
                return Some(candidate);
            }
        }
    }
    None
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
fn is_executable(_path: &Path) -> bool {
    true
}
