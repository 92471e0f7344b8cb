//! The `run` command: execute the bootstrap procedure.

use std::path::{Path, PathBuf};

use crate::bootstrap::{Bootstrap, BootstrapOptions};
use crate::cli::args::RunArgs;
use crate::cli::commands::dispatcher::{Command, CommandResult};
use crate::error::Result;
use crate::ui::UserInterface;

/// Runs the seven-step environment bootstrap.
pub struct RunCommand {
    project_root: PathBuf,
    args: RunArgs,
}

impl RunCommand {
    /// Create a run command for the given project root.
    pub fn new(project_root: &Path, args: RunArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }
}

impl Command for RunCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.show_header(&format!("groundwork {}", env!("CARGO_PKG_VERSION")));

        let options = BootstrapOptions {
            python: self.args.python.clone(),
            skip_install: self.args.skip_install,
        };

        let bootstrap = Bootstrap::new(self.project_root.clone(), options);
        bootstrap.run(ui)?;

        Ok(CommandResult::success())
    }
}
