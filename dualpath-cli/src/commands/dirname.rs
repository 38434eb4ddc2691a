//! Command to print the directory portion of a path.

use super::GrammarCommand;
use crate::error::CliError;
use clap::Args;
use dualpath::PathGrammar;

/// Print the directory portion of a path.
#[derive(Args)]
pub struct DirnameCommand {
    /// Path to inspect
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl GrammarCommand for DirnameCommand {
    fn run<G: PathGrammar>(&self, grammar: &G) -> Result<String, CliError> {
        Ok(grammar.dirname(&self.path))
    }
}
