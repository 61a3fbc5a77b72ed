use crate::{DbError, Result};

use tc_core::ErrorLocation;

use std::panic::Location;
use std::path::{Path, PathBuf};

use log::{debug, info};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tokio::sync::OnceCell;

const MAX_CONNECTIONS: u32 = 5;

/// Lazily opens the temp ID database and runs migrations exactly once.
pub struct ConnectionManager {
    pool: OnceCell<SqlitePool>,
    db_path: PathBuf,
}

impl ConnectionManager {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            pool: OnceCell::new(),
            db_path: db_path.into(),
        }
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    pub async fn get_pool(&self) -> Result<SqlitePool> {
        let pool = self
            .pool
            .get_or_try_init(|| Self::create_pool(&self.db_path))
            .await?;

        Ok(pool.clone())
    }

    async fn create_pool(db_path: &Path) -> Result<SqlitePool> {
        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| DbError::Initialization {
                    message: format!(
                        "Failed to create database directory {}: {}",
                        parent.display(),
                        e
                    ),
                    location: ErrorLocation::from(Location::caller()),
                })?;
        }

        let options = SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(options)
            .await?;

        debug!("Opened temp ID database at {}", db_path.display());

        run_migrations(&pool).await?;

        info!("Temp ID database ready: {}", db_path.display());

        Ok(pool)
    }
}

/// Apply the embedded schema migrations to `pool`.
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| DbError::Migration {
            message: format!("Migration failed: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(())
}
