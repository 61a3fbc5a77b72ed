//! tc-cli library
//!
//! Command surface, logger and wiring for the `tc` binary.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod runner;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use commands::Commands;
pub use error::{CliError, Result};
pub use runner::{build_service, error_json, execute, render, run};
