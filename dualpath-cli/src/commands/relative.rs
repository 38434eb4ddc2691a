//! Command to print the relative path between two paths.

use super::GrammarCommand;
use crate::error::CliError;
use clap::Args;
use dualpath::PathGrammar;

/// Print the relative path from FROM to TO.
#[derive(Args)]
pub struct RelativeCommand {
    /// Starting path
    #[arg(value_name = "FROM")]
    pub from: String,

    /// Target path
    #[arg(value_name = "TO")]
    pub to: String,
}

impl GrammarCommand for RelativeCommand {
    fn run<G: PathGrammar>(&self, grammar: &G) -> Result<String, CliError> {
        Ok(grammar.relative(&self.from, &self.to))
    }
}
