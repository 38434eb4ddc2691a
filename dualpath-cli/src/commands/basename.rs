//! Command to print the last portion of a path.

use super::GrammarCommand;
use crate::error::CliError;
use clap::Args;
use dualpath::PathGrammar;

/// Print the last portion of a path.
#[derive(Args)]
pub struct BasenameCommand {
    /// Path to inspect
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Suffix to strip from the result, such as ".html"
    #[arg(long, value_name = "SUFFIX")]
    pub ext: Option<String>,
}

impl GrammarCommand for BasenameCommand {
    fn run<G: PathGrammar>(&self, grammar: &G) -> Result<String, CliError> {
        Ok(grammar.basename(&self.path, self.ext.as_deref()))
    }
}
