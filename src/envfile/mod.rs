//! Environment-file seeding.
//!
//! The live `.env` is created from `.env.example` at most once. The template
//! is never consulted again after the live file exists; there is no diffing
//! and no merge.

use crate::error::Result;
use std::fs;
use std::path::Path;

/// Checked-in template file name inside the backend root.
pub const ENV_TEMPLATE: &str = ".env.example";

/// Live configuration file name inside the backend root.
pub const ENV_LIVE: &str = ".env";

/// Outcome of a seeding attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// Live file was created from the template.
    Created,
    /// Live file already existed and was left untouched.
    LiveExists,
    /// No template to seed from.
    TemplateMissing,
}

/// Seed `backend/.env` from `backend/.env.example` if, and only if, the live
/// file does not exist yet.
pub fn seed(backend_root: &Path) -> Result<SeedOutcome> {
    let template = backend_root.join(ENV_TEMPLATE);
    let live = backend_root.join(ENV_LIVE);

    if !template.is_file() {
        return Ok(SeedOutcome::TemplateMissing);
    }
    if live.exists() {
        return Ok(SeedOutcome::LiveExists);
    }

    fs::copy(&template, &live)?;
    tracing::debug!("seeded {} from {}", live.display(), template.display());
    Ok(SeedOutcome::Created)
}
