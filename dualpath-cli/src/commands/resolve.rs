//! Command to resolve paths into an absolute path.

use super::GrammarCommand;
use crate::error::CliError;
use clap::Args;
use dualpath::PathGrammar;

/// Resolve a sequence of paths, right to left, into an absolute path.
///
/// Resolution stops at the first absolute path from the right. If none is
/// found, the working directory (`--cwd`, or the process one) is used.
#[derive(Args)]
pub struct ResolveCommand {
    /// Paths to resolve
    #[arg(value_name = "PATH")]
    pub paths: Vec<String>,
}

impl GrammarCommand for ResolveCommand {
    fn run<G: PathGrammar>(&self, grammar: &G) -> Result<String, CliError> {
        Ok(grammar.resolve(&self.paths))
    }
}
