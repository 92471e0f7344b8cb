//! Error types for groundwork operations.
//!
//! This module defines [`GroundworkError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - The runtime check is the only fatal gate: its errors abort the run
//!   before any filesystem mutation.
//! - Missing manifests and templates are not errors at all; they are
//!   reported skips handled at the call site.
//! - Subprocess failures (venv creation, pip installs) surface as explicit
//!   variants and propagate, aborting the remaining steps.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for groundwork operations.
#[derive(Debug, Error)]
pub enum GroundworkError {
    /// No usable Python interpreter was found.
    #[error("Python runtime not found: {searched}")]
    RuntimeNotFound { searched: String },

    /// The interpreter was found but the version query failed.
    #[error("Python runtime check failed: {message}")]
    RuntimeCheckFailed { message: String },

    /// Virtualenv creation subprocess exited non-zero.
    #[error("Failed to create virtualenv at {path}: exit code {code:?}")]
    VenvCreateFailed { path: PathBuf, code: Option<i32> },

    /// A pip install invocation exited non-zero.
    #[error("Dependency install failed for {manifest}: exit code {code:?}")]
    InstallFailed { manifest: String, code: Option<i32> },

    /// A subprocess could not be spawned at all.
    #[error("Failed to spawn '{command}': {source}")]
    CommandSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// A subprocess ran but exited non-zero.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for groundwork operations.
pub type Result<T> = std::result::Result<T, GroundworkError>;
