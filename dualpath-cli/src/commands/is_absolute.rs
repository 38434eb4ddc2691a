//! Command to report whether a path is absolute.

use super::GrammarCommand;
use crate::error::CliError;
use clap::Args;
use dualpath::PathGrammar;

/// Report whether a path is absolute.
#[derive(Args)]
pub struct IsAbsoluteCommand {
    /// Path to inspect
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Fail with exit code 1 instead of printing "false"
    #[arg(long)]
    pub check: bool,
}

impl GrammarCommand for IsAbsoluteCommand {
    fn run<G: PathGrammar>(&self, grammar: &G) -> Result<String, CliError> {
        let absolute = grammar.is_absolute(&self.path);
        if self.check && !absolute {
            return Err(CliError::SemanticFailure(format!(
                "Assertion failed: '{}' is not absolute",
                self.path
            )));
        }
        Ok(absolute.to_string())
    }
}
