//! CLI command implementations.
//!
//! Every command except `completions` is a single grammar operation. Those
//! implement [`GrammarCommand`] and share [`execute`], which builds the
//! selected grammar over the invocation's working directory and prints the
//! result on one line.

pub mod basename;
pub mod completions;
pub mod dirname;
pub mod extname;
pub mod format;
pub mod is_absolute;
pub mod join;
pub mod namespace;
pub mod normalize;
pub mod parse;
pub mod relative;
pub mod resolve;

pub use basename::BasenameCommand;
pub use completions::CompletionsCommand;
pub use dirname::DirnameCommand;
pub use extname::ExtnameCommand;
pub use format::FormatCommand;
pub use is_absolute::IsAbsoluteCommand;
pub use join::JoinCommand;
pub use namespace::NamespaceCommand;
pub use normalize::NormalizeCommand;
pub use parse::ParseCommand;
pub use relative::RelativeCommand;
pub use resolve::ResolveCommand;

use crate::error::CliError;
use crate::utils::{working_dir, GlobalOptions};
use dualpath::{GrammarKind, PathGrammar, Posix, Windows};

/// A command that runs one operation against a path grammar.
pub trait GrammarCommand {
    /// Run the operation and return the line to print.
    fn run<G: PathGrammar>(&self, grammar: &G) -> Result<String, CliError>;
}

/// Run `command` with the grammar selected by `global` and print its output.
pub fn execute<T: GrammarCommand>(command: &T, global: &GlobalOptions) -> Result<(), CliError> {
    let cwd = working_dir(global);
    global
        .logger
        .debug(&format!("using the {} grammar", global.grammar));

    let output = match global.grammar {
        GrammarKind::Posix => command.run(&Posix::with_cwd(cwd))?,
        GrammarKind::Windows => command.run(&Windows::with_cwd(cwd))?,
    };
    println!("{output}");
    Ok(())
}
