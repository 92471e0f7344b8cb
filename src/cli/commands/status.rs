//! The `status` command: read-only report of materialized state.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::cli::args::StatusArgs;
use crate::cli::commands::dispatcher::{Command, CommandResult};
use crate::envfile::ENV_LIVE;
use crate::error::Result;
use crate::layout::{self, PACKAGE_MARKERS, PROJECT_DIRS};
use crate::python::Virtualenv;
use crate::ui::{StatusKind, UserInterface};

/// One checked path in the report.
#[derive(Debug, Serialize)]
pub struct EntryStatus {
    pub path: String,
    pub exists: bool,
}

/// Snapshot of what the bootstrap has already materialized.
#[derive(Debug, Serialize)]
pub struct StatusReport {
    pub directories: Vec<EntryStatus>,
    pub markers: Vec<EntryStatus>,
    pub venv: bool,
    pub env_file: bool,
}

impl StatusReport {
    /// Inspect the project root. No filesystem mutation.
    pub fn gather(project_root: &Path) -> Self {
        let backend = layout::backend_root(project_root);

        let directories = PROJECT_DIRS
            .iter()
            .map(|rel| EntryStatus {
                path: (*rel).to_string(),
                exists: project_root.join(rel).is_dir(),
            })
            .collect();

        let markers = PACKAGE_MARKERS
            .iter()
            .map(|rel| EntryStatus {
                path: (*rel).to_string(),
                exists: project_root.join(rel).is_file(),
            })
            .collect();

        Self {
            directories,
            markers,
            venv: Virtualenv::at(&backend).exists(),
            env_file: backend.join(ENV_LIVE).is_file(),
        }
    }

    /// Whether everything the bootstrap materializes is present.
    pub fn complete(&self) -> bool {
        self.directories.iter().all(|e| e.exists)
            && self.markers.iter().all(|e| e.exists)
            && self.venv
            && self.env_file
    }
}

/// Shows the bootstrap status for a project.
pub struct StatusCommand {
    project_root: PathBuf,
    args: StatusArgs,
}

impl StatusCommand {
    /// Create a status command for the given project root.
    pub fn new(project_root: &Path, args: StatusArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }
}

impl Command for StatusCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let report = StatusReport::gather(&self.project_root);

        if self.args.json {
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| anyhow::anyhow!("failed to serialize status: {}", e))?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        ui.show_header("Bootstrap status");

        ui.message("Directories:");
        for entry in &report.directories {
            print_entry(ui, entry);
        }

        ui.message("Markers:");
        for entry in &report.markers {
            print_entry(ui, entry);
        }

        ui.message("Environment:");
        print_entry(
            ui,
            &EntryStatus {
                path: "backend/venv".to_string(),
                exists: report.venv,
            },
        );
        print_entry(
            ui,
            &EntryStatus {
                path: "backend/.env".to_string(),
                exists: report.env_file,
            },
        );

        if report.complete() {
            ui.success("Environment fully bootstrapped");
        } else {
            ui.message("Run `groundwork run` to materialize the missing entries");
        }

        Ok(CommandResult::success())
    }
}

fn print_entry(ui: &mut dyn UserInterface, entry: &EntryStatus) {
    let kind = if entry.exists {
        StatusKind::Success
    } else {
        StatusKind::Pending
    };
    ui.message(&format!("  {} {}", kind.icon(), entry.path));
}
