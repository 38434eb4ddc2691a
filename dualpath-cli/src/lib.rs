//! Library exports for dualpath-cli.
//!
//! The binary is a thin shell over these modules; exposing them lets the
//! command definitions be unit tested and reused by tooling.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
