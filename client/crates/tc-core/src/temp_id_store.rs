use crate::{StoreError, StoreResult, TempId};

use std::sync::Mutex;

use async_trait::async_trait;

/// Durable local cache of temp IDs.
#[async_trait]
pub trait TempIdStore: Send + Sync {
    /// All stored temp IDs, most recently saved first.
    async fn get_all(&self) -> StoreResult<Vec<TempId>>;

    /// Persist a single temp ID.
    async fn save(&self, temp_id: &TempId) -> StoreResult<()>;

    /// Remove every stored temp ID.
    async fn delete_all(&self) -> StoreResult<()>;
}

/// Store kept entirely in memory. Intended for tests and throwaway sessions.
///
/// Like the SQLite store, saving a temp ID whose value is already present is
/// a no-op.
#[derive(Debug, Default)]
pub struct MemoryTempIdStore {
    temp_ids: Mutex<Vec<TempId>>,
}

impl MemoryTempIdStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store. `temp_ids` is taken as already ordered most recent first.
    pub fn with_temp_ids(temp_ids: Vec<TempId>) -> Self {
        Self {
            temp_ids: Mutex::new(temp_ids),
        }
    }

    fn lock(&self) -> StoreResult<std::sync::MutexGuard<'_, Vec<TempId>>> {
        self.temp_ids
            .lock()
            .map_err(|e| StoreError::backend(PoisonedStore(e.to_string())))
    }
}

#[async_trait]
impl TempIdStore for MemoryTempIdStore {
    async fn get_all(&self) -> StoreResult<Vec<TempId>> {
        Ok(self.lock()?.clone())
    }

    async fn save(&self, temp_id: &TempId) -> StoreResult<()> {
        let mut temp_ids = self.lock()?;
        if !temp_ids.iter().any(|t| t.temp_id == temp_id.temp_id) {
            temp_ids.insert(0, temp_id.clone());
        }
        Ok(())
    }

    async fn delete_all(&self) -> StoreResult<()> {
        self.lock()?.clear();
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("memory store lock poisoned: {0}")]
struct PoisonedStore(String);
