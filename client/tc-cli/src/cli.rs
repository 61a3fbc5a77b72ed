use crate::commands::Commands;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "tc")]
#[command(about = "Temporary identifier client for contact tracing")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Temp ID API base URL (overrides api.base_url from config)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
