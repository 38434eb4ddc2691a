//! Command to join path segments.

use super::GrammarCommand;
use crate::error::CliError;
use clap::Args;
use dualpath::PathGrammar;

/// Join path segments with the grammar's separator and normalize the result.
#[derive(Args)]
pub struct JoinCommand {
    /// Segments to join; empty segments are skipped
    #[arg(value_name = "PATH")]
    pub paths: Vec<String>,
}

impl GrammarCommand for JoinCommand {
    fn run<G: PathGrammar>(&self, grammar: &G) -> Result<String, CliError> {
        Ok(grammar.join(&self.paths))
    }
}
