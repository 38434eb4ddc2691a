//! Shell completion generation command.
//!
//! This module provides the `completions` command which generates shell completion
//! scripts for bash, zsh, fish, and PowerShell.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io;

/// Name of the installed binary.
const BIN_NAME: &str = "dualpath";

/// Generate shell completion scripts
#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        global
            .logger
            .info(&format!("generating {} completion script", self.shell));
        match self.shell {
            Shell::Bash => global.logger.info(
                "install with: dualpath completions bash > ~/.local/share/bash-completion/completions/dualpath",
            ),
            Shell::Zsh => global
                .logger
                .info("install with: dualpath completions zsh > ~/.zsh/completions/_dualpath"),
            Shell::Fish => global.logger.info(
                "install with: dualpath completions fish > ~/.config/fish/completions/dualpath.fish",
            ),
            Shell::PowerShell => global
                .logger
                .info("install with: dualpath completions powershell >> $PROFILE"),
            _ => {}
        }

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());
        Ok(())
    }
}
