//! Command to split a path into its components.

use super::GrammarCommand;
use crate::error::CliError;
use clap::Args;
use dualpath::PathGrammar;

/// Split a path into root, dir, base, ext and name, printed as JSON.
#[derive(Args)]
pub struct ParseCommand {
    /// Path to parse
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

impl GrammarCommand for ParseCommand {
    fn run<G: PathGrammar>(&self, grammar: &G) -> Result<String, CliError> {
        let components = grammar.parse(&self.path);
        let json = if self.pretty {
            serde_json::to_string_pretty(&components)?
        } else {
            serde_json::to_string(&components)?
        };
        Ok(json)
    }
}
