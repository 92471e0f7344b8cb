//! The `completions` command: generate shell completions.

use clap::CommandFactory;
use clap_complete::generate;

use crate::cli::args::{Cli, CompletionsArgs};
use crate::cli::commands::dispatcher::{Command, CommandResult};
use crate::error::Result;
use crate::ui::UserInterface;

/// Generates completion scripts on stdout.
pub struct CompletionsCommand {
    args: CompletionsArgs,
}

impl CompletionsCommand {
    /// Create a completions command.
    pub fn new(args: CompletionsArgs) -> Self {
        Self { args }
    }
}

impl Command for CompletionsCommand {
    fn execute(&self, _ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut cmd = Cli::command();
        generate(self.args.shell, &mut cmd, "groundwork", &mut std::io::stdout());
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap_complete::Shell;

    #[test]
    fn completions_command_succeeds() {
        let cmd = CompletionsCommand::new(CompletionsArgs { shell: Shell::Bash });
        let mut ui = crate::ui::MockUI::new();
        let result = cmd.execute(&mut ui).unwrap();
        assert!(result.success);
    }
}
