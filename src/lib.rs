//! groundwork - Project environment bootstrap.
//!
//! groundwork replaces an ad-hoc `setup.sh` with a single idempotent CLI:
//! it verifies the Python runtime, materializes the project's directory
//! skeleton and package markers, provisions a virtualenv, installs the
//! optional dependency manifests, seeds `.env` from its template, and prints
//! a verification report. Running it twice is always safe.
//!
//! # Modules
//!
//! - [`bootstrap`] - The seven-step bootstrap procedure
//! - [`cli`] - Command-line interface and argument parsing
//! - [`envfile`] - Seed-once environment-file handling
//! - [`error`] - Error types and result aliases
//! - [`layout`] - Directory and marker-file sets and their materializers
//! - [`python`] - Runtime discovery, virtualenv, and pip
//! - [`shell`] - Subprocess execution
//! - [`ui`] - Terminal output, spinners, and the mockable UI trait
//!
//! # Example
//!
//! ```no_run
//! use groundwork::bootstrap::{Bootstrap, BootstrapOptions};
//! use groundwork::ui::{create_ui, OutputMode};
//!
//! let mut ui = create_ui(false, OutputMode::Normal);
//! let bootstrap = Bootstrap::new("my-project".into(), BootstrapOptions::default());
//! bootstrap.run(ui.as_mut()).unwrap();
//! ```

pub mod bootstrap;
pub mod cli;
pub mod envfile;
pub mod error;
pub mod layout;
pub mod python;
pub mod shell;
pub mod ui;

pub use error::{GroundworkError, Result};
