//! Build script for dualpath-cli.
//!
//! This script generates a man page at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: build scripts cannot depend on the crate being built, so the command
//! structure is described again here.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::env;
use std::error::Error;
use std::fs;
use std::path::PathBuf;

fn path_arg() -> Arg {
    Arg::new("path")
        .value_name("PATH")
        .help("Path to operate on")
        .required(true)
}

fn paths_arg() -> Arg {
    Arg::new("paths")
        .value_name("PATH")
        .help("Paths to operate on")
        .num_args(0..)
}

/// Build the CLI command structure for man page generation.
///
/// Keep this synchronized with src/cli.rs.
fn build_cli() -> Command {
    Command::new("dualpath")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Manipulate POSIX and Windows path strings")
        .long_about(
            "Apply POSIX or Windows path operations to strings without touching the filesystem",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("grammar")
                .long("grammar")
                .help("Path grammar: posix, windows (or win32), or native")
                .value_name("GRAMMAR")
                .global(true)
                .env("DUALPATH_GRAMMAR"),
        )
        .arg(
            Arg::new("cwd")
                .long("cwd")
                .help("Working directory to resolve against instead of the process one")
                .value_name("PATH")
                .global(true)
                .env("DUALPATH_CWD"),
        )
        .arg(
            Arg::new("drive-cwd")
                .long("drive-cwd")
                .help("Working directory of a drive for the Windows grammar (repeatable)")
                .value_name("DRIVE=DIR")
                .global(true)
                .action(ArgAction::Append),
        )
        .subcommands(vec![
            Command::new("basename")
                .about("Print the last portion of a path")
                .arg(path_arg())
                .arg(Arg::new("ext").long("ext").value_name("SUFFIX")),
            Command::new("dirname")
                .about("Print the directory portion of a path")
                .arg(path_arg()),
            Command::new("extname")
                .about("Print the extension of a path")
                .arg(path_arg()),
            Command::new("is-absolute")
                .about("Report whether a path is absolute")
                .arg(path_arg())
                .arg(Arg::new("check").long("check").action(ArgAction::SetTrue)),
            Command::new("join")
                .about("Join path segments and normalize the result")
                .arg(paths_arg()),
            Command::new("normalize")
                .about("Normalize a path, resolving '.' and '..' segments")
                .arg(path_arg()),
            Command::new("parse")
                .about("Split a path into root, dir, base, ext and name (JSON)")
                .arg(path_arg())
                .arg(Arg::new("pretty").long("pretty").action(ArgAction::SetTrue)),
            Command::new("format")
                .about("Build a path from JSON components")
                .arg(Arg::new("components").value_name("JSON").required(true)),
            Command::new("relative")
                .about("Print the relative path from one path to another")
                .arg(Arg::new("from").value_name("FROM").required(true))
                .arg(Arg::new("to").value_name("TO").required(true)),
            Command::new("resolve")
                .about("Resolve a sequence of paths into an absolute path")
                .arg(paths_arg()),
            Command::new("namespace")
                .about("Print the namespace-prefixed form of a path")
                .arg(path_arg()),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> Result<(), Box<dyn Error>> {
    let out_dir = PathBuf::from(env::var("OUT_DIR")?);
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let mut buffer = Vec::new();
    Man::new(build_cli()).render(&mut buffer)?;
    fs::write(man_dir.join("dualpath.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
