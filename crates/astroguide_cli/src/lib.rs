//! Command-line front end for AstroGuide.
//!
//! `main.rs` only parses arguments and sets up logging; everything else lives
//! here so the subcommands can be driven from tests with in-memory I/O.

pub mod args;
pub mod commands;

pub use args::{BirthArgs, Cli, Commands};
pub use commands::{Context, birth_input, run};
