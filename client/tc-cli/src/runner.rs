use crate::{Cli, CliError, Commands, Result, logger};

use tc_api::TempIdApiClient;
use tc_config::Config;
use tc_db::{ConnectionManager, TempIdRepository};
use tc_temp_id::TempIdService;

use std::sync::Arc;

use log::info;
use serde_json::{Value, json};

/// Load config, initialize logging, wire the service and run one command.
pub async fn run(cli: &Cli) -> Result<Value> {
    let mut config = Config::load()?;
    if let Some(ref url) = cli.api_url {
        config.api.base_url = url.clone();
    }
    config.validate()?;

    let log_file = logger::log_file_path(&config)?;
    logger::initialize(config.logging.level, log_file, config.logging.colored)?;

    info!("Starting tc v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let service = build_service(&config).await?;
    execute(&service, &cli.command).await
}

/// SQLite-backed service talking to the configured API.
pub async fn build_service(config: &Config) -> Result<TempIdService> {
    let manager = ConnectionManager::new(config.database_path()?);
    let pool = manager.get_pool().await?;

    let store = Arc::new(TempIdRepository::new(pool));
    let source = Arc::new(TempIdApiClient::new(&config.api)?);

    Ok(TempIdService::new(source, store).with_config(&config.temp_id, &config.retry))
}

pub async fn execute(service: &TempIdService, command: &Commands) -> Result<Value> {
    let value = match command {
        Commands::Current => {
            let current = service.current_temp_id().await?;
            // Let a background refill finish before the runtime shuts down
            service.wait_for_refill().await;
            serde_json::to_value(current)?
        }
        Commands::Latest => serde_json::to_value(service.latest_temp_id().await?)?,
        Commands::List { valid } => {
            let temp_ids = if *valid {
                service.valid_temp_ids().await?
            } else {
                service.temp_ids().await?
            };
            serde_json::to_value(temp_ids)?
        }
        Commands::Refill => serde_json::to_value(service.refill().await?)?,
        Commands::Ensure => {
            let fetched = service.ensure_temp_ids().await?;
            json!({ "fetched": fetched })
        }
        Commands::Reset => {
            service.delete_all().await?;
            json!({ "deleted": true })
        }
    };

    Ok(value)
}

pub fn render(value: &Value, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };

    Ok(json)
}

/// Error as a single-line JSON object for stderr.
pub fn error_json(error: &CliError) -> String {
    json!({ "error": error.to_string() }).to_string()
}
