//! Python runtime discovery, virtualenv provisioning, and pip.

pub mod pip;
pub mod runtime;
pub mod venv;

pub use pip::{Pip, ManifestRole, EXPECTED_PACKAGES};
pub use runtime::PythonRuntime;
pub use venv::{Virtualenv, VENV_DIR};
