//! Command to build a path from its components.

use super::GrammarCommand;
use crate::error::CliError;
use clap::Args;
use dualpath::PathGrammar;
use serde_json::Value;

/// Build a path from a JSON object with root, dir, base, ext and name keys.
///
/// Missing keys count as empty. `dir` wins over `root`, and `base` wins over
/// `name` + `ext`.
#[derive(Args)]
pub struct FormatCommand {
    /// Components as a JSON object, e.g. '{"dir":"/home","base":"a.txt"}'
    #[arg(value_name = "JSON")]
    pub components: String,
}

impl GrammarCommand for FormatCommand {
    fn run<G: PathGrammar>(&self, grammar: &G) -> Result<String, CliError> {
        let value: Value = serde_json::from_str(&self.components).map_err(|e| {
            CliError::InvalidArguments(format!("components are not valid JSON: {e}"))
        })?;
        Ok(grammar.format_value(&value)?)
    }
}
