//! tc - temporary identifier client
//!
//! Keeps a local supply of rotating temp IDs and prints the one to broadcast.
//!
//! # Examples
//!
//! ```bash
//! # First launch: fetch temp IDs unless some are already stored
//! tc ensure
//!
//! # Temp ID to broadcast right now
//! tc current --pretty
//!
//! # Everything that has not expired yet
//! tc list --valid
//! ```

use tc_cli::{Cli, error_json, render, run};

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let output = run(&cli)
        .await
        .and_then(|value| render(&value, cli.pretty));

    match output {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", error_json(&e));
            ExitCode::FAILURE
        }
    }
}
