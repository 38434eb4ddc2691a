//! Command to normalize a path.

use super::GrammarCommand;
use crate::error::CliError;
use clap::Args;
use dualpath::PathGrammar;

/// Normalize a path, resolving '.' and '..' segments.
#[derive(Args)]
pub struct NormalizeCommand {
    /// Path to normalize
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl GrammarCommand for NormalizeCommand {
    fn run<G: PathGrammar>(&self, grammar: &G) -> Result<String, CliError> {
        Ok(grammar.normalize(&self.path))
    }
}
