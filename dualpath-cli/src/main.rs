//! Main entry point for the dualpath CLI.
//!
//! Each subcommand applies one path operation under the POSIX or Windows
//! grammar and prints the result:
//! - `basename`, `dirname`, `extname`: pieces of a path
//! - `join`, `normalize`, `resolve`, `relative`: path arithmetic
//! - `parse`, `format`: conversion to and from JSON components
//! - `is-absolute`, `namespace`: classification and long-path prefixes

use clap::Parser;
use dualpath_cli::cli::{Cli, Command};
use dualpath_cli::commands::execute;
use dualpath_cli::utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let logger = dualpath::init_logger(cli.verbose, cli.quiet);
    if let Err(e) = logger.install() {
        logger.warn(&format!("cannot install logger: {e}"));
    }

    let global = GlobalOptions {
        logger,
        grammar: cli.grammar.unwrap_or_default(),
        cwd: cli.cwd,
        drive_cwds: cli.drive_cwd,
    };

    // Execute the command
    let result = match cli.command {
        Command::Basename(cmd) => execute(&cmd, &global),
        Command::Dirname(cmd) => execute(&cmd, &global),
        Command::Extname(cmd) => execute(&cmd, &global),
        Command::IsAbsolute(cmd) => execute(&cmd, &global),
        Command::Join(cmd) => execute(&cmd, &global),
        Command::Normalize(cmd) => execute(&cmd, &global),
        Command::Parse(cmd) => execute(&cmd, &global),
        Command::Format(cmd) => execute(&cmd, &global),
        Command::Relative(cmd) => execute(&cmd, &global),
        Command::Resolve(cmd) => execute(&cmd, &global),
        Command::Namespace(cmd) => execute(&cmd, &global),
        Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
