//! Isolated dependency environment (virtualenv) provisioning.

use crate::error::{GroundworkError, Result};
use crate::python::PythonRuntime;
use crate::shell::execute_quiet;
use std::path::{Path, PathBuf};

/// Fixed virtualenv directory name inside the backend root.
pub const VENV_DIR: &str = "venv";

/// Handle to the backend virtualenv.
///
/// "Activation" is modeled by invoking the venv's private interpreter
/// directly; the process environment is never mutated.
#[derive(Debug, Clone)]
pub struct Virtualenv {
    root: PathBuf,
}

impl Virtualenv {
    /// Handle for the venv location under `backend_root`, whether or not it
    /// exists yet.
    pub fn at(backend_root: &Path) -> Self {
        Self {
            root: backend_root.join(VENV_DIR),
        }
    }

    /// Create the virtualenv by running `<python> -m venv venv` inside the
    /// backend root.
    ///
    /// If a venv already exists the underlying tool refreshes it in place;
    /// no existence check is made here. A non-zero exit is surfaced as an
    /// explicit error and aborts the bootstrap.
    pub fn provision(runtime: &PythonRuntime, backend_root: &Path) -> Result<Self> {
        let result = execute_quiet(runtime.path(), &["-m", "venv", VENV_DIR], Some(backend_root))?;

        if !result.success {
            return Err(GroundworkError::VenvCreateFailed {
                path: backend_root.join(VENV_DIR),
                code: result.exit_code,
            });
        }

        Ok(Self::at(backend_root))
    }

    /// Venv root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether the venv's interpreter is present on disk.
    pub fn exists(&self) -> bool {
        self.interpreter().is_file()
    }

    /// Path to the venv's private interpreter.
    pub fn interpreter(&self) -> PathBuf {
        if cfg!(target_os = "windows") {
            self.root.join("Scripts").join("python.exe")
        } else {
            self.root.join("bin").join("python")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn at_places_venv_inside_backend_root() {
        let venv = Virtualenv::at(Path::new("/proj/backend"));
        assert_eq!(venv.root(), Path::new("/proj/backend/venv"));
    }

    #[cfg(unix)]
    #[test]
    fn interpreter_is_under_bin() {
        let venv = Virtualenv::at(Path::new("/proj/backend"));
        assert_eq!(
            venv.interpreter(),
            PathBuf::from("/proj/backend/venv/bin/python")
        );
    }

    #[test]
    fn exists_is_false_before_provisioning() {
        let temp = TempDir::new().unwrap();
        let venv = Virtualenv::at(temp.path());
        assert!(!venv.exists());
    }

    #[cfg(unix)]
    #[test]
    fn exists_requires_the_interpreter_not_just_the_dir() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("venv/bin")).unwrap();
        let venv = Virtualenv::at(temp.path());
        assert!(!venv.exists());

        fs::write(temp.path().join("venv/bin/python"), "").unwrap();
        assert!(venv.exists());
    }

    #[cfg(unix)]
    #[test]
    fn provision_surfaces_tool_failure() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let fake = temp.path().join("python3");
        // a runtime whose venv module always fails
        fs::write(&fake, "#!/bin/sh\nif [ \"$1\" = --version ]; then echo 'Python 3.12.1'; exit 0; fi\nexit 7\n")
            .unwrap();
        fs::set_permissions(&fake, fs::Permissions::from_mode(0o755)).unwrap();

        let runtime = PythonRuntime::discover(Some(fake.as_path())).unwrap();
        let backend = temp.path().join("backend");
        fs::create_dir_all(&backend).unwrap();

        let result = Virtualenv::provision(&runtime, &backend);
        assert!(matches!(
            result,
            Err(GroundworkError::VenvCreateFailed { code: Some(7), .. })
        ));
    }
}
