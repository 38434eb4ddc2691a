//! Command to print the namespace-prefixed form of a path.

use super::GrammarCommand;
use crate::error::CliError;
use clap::Args;
use dualpath::PathGrammar;

/// Print the namespace-prefixed form of a path.
///
/// Under the Windows grammar, drive and UNC paths gain the `\\?\` prefix.
/// Other paths, and every path under the POSIX grammar, print unchanged.
#[derive(Args)]
pub struct NamespaceCommand {
    /// Path to convert
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl GrammarCommand for NamespaceCommand {
    fn run<G: PathGrammar>(&self, grammar: &G) -> Result<String, CliError> {
        Ok(grammar.to_namespaced_path(&self.path))
    }
}
