//! Dependency installation through the venv's pip.
//!
//! All pip invocations go through the venv's own interpreter
//! (`python -m pip`) so installs resolve into the isolated environment.
//! A missing manifest is a normal, reported condition; a failed install is
//! not caught and aborts the remaining steps.

use crate::error::{GroundworkError, Result};
use crate::python::Virtualenv;
use crate::shell::{execute, CommandOptions};
use std::path::Path;

/// Dependency name substrings reported by the verification step.
pub const EXPECTED_PACKAGES: [&str; 5] = ["fastapi", "uvicorn", "pydantic", "motor", "openai"];

/// The two manifest roles, installed in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestRole {
    Production,
    Development,
}

impl ManifestRole {
    /// Both roles, in install order.
    pub const ALL: [ManifestRole; 2] = [ManifestRole::Production, ManifestRole::Development];

    /// Well-known manifest file name inside the backend root.
    pub fn filename(self) -> &'static str {
        match self {
            ManifestRole::Production => "requirements.txt",
            ManifestRole::Development => "requirements-dev.txt",
        }
    }

    /// Human label for status lines.
    pub fn label(self) -> &'static str {
        match self {
            ManifestRole::Production => "production",
            ManifestRole::Development => "development",
        }
    }
}

/// pip operations against a provisioned virtualenv.
pub struct Pip<'a> {
    venv: &'a Virtualenv,
    backend_root: &'a Path,
    /// Suppress routine pip output. Verbose runs inherit the terminal.
    quiet: bool,
}

impl<'a> Pip<'a> {
    /// Create a pip driver for the given venv.
    pub fn new(venv: &'a Virtualenv, backend_root: &'a Path, quiet: bool) -> Self {
        Self {
            venv,
            backend_root,
            quiet,
        }
    }

    fn options(&self) -> CommandOptions {
        if self.quiet {
            CommandOptions {
                cwd: Some(self.backend_root.to_path_buf()),
                ..Default::default()
            }
        } else {
            CommandOptions::inherited(Some(self.backend_root))
        }
    }

    /// Upgrade pip itself inside the venv.
    pub fn upgrade_self(&self) -> Result<()> {
        let mut args = vec!["-m", "pip", "install", "--upgrade", "pip"];
        if self.quiet {
            args.push("--quiet");
        }

        let result = execute(&self.venv.interpreter(), &args, &self.options())?;
        if !result.success {
            return Err(GroundworkError::InstallFailed {
                manifest: "pip (self-upgrade)".to_string(),
                code: result.exit_code,
            });
        }
        Ok(())
    }

    /// Install one manifest into the venv.
    ///
    /// The caller is responsible for the existence check; a failure here
    /// propagates and aborts the run, with no rollback of packages already
    /// installed.
    pub fn install_manifest(&self, role: ManifestRole) -> Result<()> {
        let mut args = vec!["-m", "pip", "install", "-r", role.filename()];
        if self.quiet {
            args.push("--quiet");
        }

        let result = execute(&self.venv.interpreter(), &args, &self.options())?;
        if !result.success {
            return Err(GroundworkError::InstallFailed {
                manifest: role.filename().to_string(),
                code: result.exit_code,
            });
        }

        tracing::debug!("installed {} manifest", role.label());
        Ok(())
    }

    /// List installed packages as `name version` lines.
    pub fn list_installed(&self) -> Result<Vec<String>> {
        let result = execute(
            &self.venv.interpreter(),
            &["-m", "pip", "list"],
            &CommandOptions {
                cwd: Some(self.backend_root.to_path_buf()),
                ..Default::default()
            },
        )?;

        if !result.success {
            return Err(GroundworkError::CommandFailed {
                command: "pip list".to_string(),
                code: result.exit_code,
            });
        }

        Ok(result.stdout.lines().map(str::to_string).collect())
    }
}

/// Filter package-listing lines by case-sensitive substring match.
///
/// Zero matches is an acceptable outcome, not an error.
pub fn filter_installed(lines: &[String], filters: &[&str]) -> Vec<String> {
    lines
        .iter()
        .filter(|line| filters.iter().any(|f| line.contains(f)))
        .cloned()
        .collect()
}
