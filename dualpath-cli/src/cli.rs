//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    BasenameCommand, CompletionsCommand, DirnameCommand, ExtnameCommand, FormatCommand,
    IsAbsoluteCommand, JoinCommand, NamespaceCommand, NormalizeCommand, ParseCommand,
    RelativeCommand, ResolveCommand,
};
use crate::utils::DriveCwd;
use clap::{Parser, Subcommand};
use dualpath::GrammarKind;

/// Manipulate POSIX and Windows path strings.
#[derive(Parser)]
#[command(name = "dualpath")]
#[command(version, about = "Manipulate POSIX and Windows path strings", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Path grammar: posix, windows (or win32), or native
    #[arg(
        long,
        value_name = "GRAMMAR",
        global = true,
        env = "DUALPATH_GRAMMAR",
        value_parser = parse_grammar
    )]
    pub grammar: Option<GrammarKind>,

    /// Working directory to resolve against instead of the process one
    #[arg(long, value_name = "PATH", global = true, env = "DUALPATH_CWD")]
    pub cwd: Option<String>,

    /// Working directory of a drive for the Windows grammar (repeatable)
    #[arg(long = "drive-cwd", value_name = "DRIVE=DIR", global = true)]
    pub drive_cwd: Vec<DriveCwd>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the last portion of a path
    Basename(BasenameCommand),

    /// Print the directory portion of a path
    Dirname(DirnameCommand),

    /// Print the extension of a path
    Extname(ExtnameCommand),

    /// Report whether a path is absolute
    IsAbsolute(IsAbsoluteCommand),

    /// Join path segments and normalize the result
    Join(JoinCommand),

    /// Normalize a path, resolving '.' and '..' segments
    Normalize(NormalizeCommand),

    /// Split a path into root, dir, base, ext and name (JSON)
    Parse(ParseCommand),

    /// Build a path from JSON components
    Format(FormatCommand),

    /// Print the relative path from one path to another
    Relative(RelativeCommand),

    /// Resolve a sequence of paths into an absolute path
    Resolve(ResolveCommand),

    /// Print the namespace-prefixed form of a path
    Namespace(NamespaceCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}

/// An empty value selects the host grammar.
fn parse_grammar(value: &str) -> Result<GrammarKind, dualpath::Error> {
    if value.trim().is_empty() {
        Ok(GrammarKind::native())
    } else {
        GrammarKind::parse(value)
    }
}
