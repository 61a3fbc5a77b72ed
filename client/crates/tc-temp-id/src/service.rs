use crate::{FetchBackoff, Result, TempIdError};

use tc_config::{RetryConfig, TempIdConfig};
use tc_core::{
    SystemTimeSource, TempId, TempIdSource, TempIdStore, TimeSource, filter_valid, find_current,
};

use std::collections::HashSet;
use std::sync::Arc;

use log::{debug, info, warn};
use tokio::sync::Mutex;
use tokio::time::sleep;

/// Keeps a supply of temp IDs in the local store and picks the one to broadcast.
///
/// Cloning is cheap; clones share the source, the store, and the refill guard.
/// At most one refill runs at a time: explicit [`refill`](Self::refill) calls
/// queue behind an in-flight one, the background refill started by
/// [`current_temp_id`](Self::current_temp_id) is skipped if one is running.
#[derive(Clone)]
pub struct TempIdService {
    source: Arc<dyn TempIdSource>,
    store: Arc<dyn TempIdStore>,
    time: Arc<dyn TimeSource>,
    min_valid_count: usize,
    retry: RetryConfig,
    refill_guard: Arc<Mutex<()>>,
}

impl TempIdService {
    pub fn new(source: Arc<dyn TempIdSource>, store: Arc<dyn TempIdStore>) -> Self {
        Self {
            source,
            store,
            time: Arc::new(SystemTimeSource),
            min_valid_count: TempIdConfig::default().min_valid_count,
            retry: RetryConfig::default(),
            refill_guard: Arc::new(Mutex::new(())),
        }
    }

    pub fn with_time_source(mut self, time: Arc<dyn TimeSource>) -> Self {
        self.time = time;
        self
    }

    pub fn with_config(mut self, temp_id: &TempIdConfig, retry: &RetryConfig) -> Self {
        self.min_valid_count = temp_id.min_valid_count;
        self.retry = retry.clone();
        self
    }

    pub fn min_valid_count(&self) -> usize {
        self.min_valid_count
    }

    /// The temp ID whose validity window contains now, if any.
    ///
    /// When fewer than `min_valid_count` unexpired temp IDs are stored, a
    /// refill is started in the background. Its outcome is only logged.
    pub async fn current_temp_id(&self) -> Result<Option<TempId>> {
        let temp_ids = self.store.get_all().await?;
        let now = self.time.now();

        let valid_count = temp_ids.iter().filter(|t| t.is_valid_at(now)).count();
        if valid_count < self.min_valid_count {
            debug!(
                "{} valid temp IDs cached, below {}; refilling in background",
                valid_count, self.min_valid_count
            );
            self.spawn_background_refill();
        }

        let current = find_current(&temp_ids, now).cloned();
        if current.is_none() {
            debug!("No temp ID valid at {}", now);
        }

        Ok(current)
    }

    /// Most recently stored temp ID, regardless of validity.
    pub async fn latest_temp_id(&self) -> Result<Option<TempId>> {
        Ok(self.store.get_all().await?.into_iter().next())
    }

    /// Every stored temp ID, most recent first.
    pub async fn temp_ids(&self) -> Result<Vec<TempId>> {
        Ok(self.store.get_all().await?)
    }

    /// Stored temp IDs that have not expired yet.
    pub async fn valid_temp_ids(&self) -> Result<Vec<TempId>> {
        let temp_ids = self.store.get_all().await?;
        Ok(filter_valid(&temp_ids, self.time.now()))
    }

    pub async fn has_temp_ids(&self) -> Result<bool> {
        Ok(!self.store.get_all().await?.is_empty())
    }

    /// Fetch a batch of temp IDs and store the ones not already present.
    ///
    /// Malformed entries are dropped. The returned list holds every
    /// well-formed entry of the batch, including ones that were already
    /// stored and therefore not saved again.
    pub async fn refill(&self) -> Result<Vec<TempId>> {
        let _guard = self.refill_guard.lock().await;
        self.refill_locked().await
    }

    /// First-launch fetch: a no-op returning `false` when temp IDs are
    /// already stored, otherwise a refill under the retry policy.
    ///
    /// Store errors end the attempt at once. Between attempts the store is
    /// checked again, and a refill started elsewhere that filled it counts
    /// as success.
    pub async fn ensure_temp_ids(&self) -> Result<bool> {
        if self.has_temp_ids().await? {
            debug!("Temp IDs already stored; no fetch needed");
            return Ok(false);
        }

        let mut backoff = FetchBackoff::new(&self.retry);
        loop {
            let attempt = backoff.attempts();
            let error = match self.refill().await {
                Ok(temp_ids) => {
                    if attempt > 1 {
                        info!(
                            "First temp ID fetch succeeded on attempt {} ({} received)",
                            attempt,
                            temp_ids.len()
                        );
                    }
                    return Ok(true);
                }
                Err(e) => e,
            };

            if !error.is_retryable() {
                warn!("First temp ID fetch failed: {}", error);
                return Err(error);
            }

            let Some(delay) = backoff.next_delay() else {
                warn!(
                    "First temp ID fetch failed after {} attempts: {}",
                    attempt, error
                );
                return Err(error);
            };

            debug!(
                "First temp ID fetch attempt {} failed: {}. Retrying in {:?}",
                attempt, error, delay
            );
            sleep(delay).await;

            if self.has_temp_ids().await? {
                info!("Temp IDs stored by another refill; first fetch no longer needed");
                return Ok(true);
            }
        }
    }

    /// Resolves once no refill is running.
    pub async fn wait_for_refill(&self) {
        let _guard = self.refill_guard.lock().await;
    }

    /// Remove every stored temp ID.
    pub async fn delete_all(&self) -> Result<()> {
        self.store.delete_all().await?;
        info!("Deleted all stored temp IDs");
        Ok(())
    }

    fn spawn_background_refill(&self) {
        // Taken before spawning so the refill counts as in flight from here on
        let guard = match Arc::clone(&self.refill_guard).try_lock_owned() {
            Ok(guard) => guard,
            Err(_) => {
                debug!("Temp ID refill already in flight; not starting another");
                return;
            }
        };

        let service = self.clone();
        tokio::spawn(async move {
            let _guard = guard;
            match service.refill_locked().await {
                Ok(temp_ids) => {
                    debug!("Background refill fetched {} temp IDs", temp_ids.len())
                }
                Err(e) => warn!("Background temp ID refill failed: {}", e),
            }
        });
    }

    async fn refill_locked(&self) -> Result<Vec<TempId>> {
        info!("Fetching temp IDs");

        let responses = self.source.fetch_temp_ids().await.map_err(|e| {
            if let Some(code) = e.status() {
                warn!("Temp ID source responded with status {}", code);
            }
            TempIdError::from_transport(e)
        })?;

        let received = responses.len();
        let temp_ids: Vec<TempId> = responses
            .into_iter()
            .filter_map(|response| match TempId::try_from(response) {
                Ok(temp_id) => Some(temp_id),
                Err(e) => {
                    debug!("Dropping malformed temp ID: {}", e);
                    None
                }
            })
            .collect();

        let saved = self.save_new(&temp_ids).await?;

        info!(
            "Fetched {} temp IDs: {} saved, {} already stored, {} malformed",
            received,
            saved,
            temp_ids.len() - saved,
            received - temp_ids.len()
        );

        Ok(temp_ids)
    }

    /// Save the temp IDs whose value is not yet stored, one at a time.
    async fn save_new(&self, temp_ids: &[TempId]) -> Result<usize> {
        let mut known: HashSet<String> = self
            .store
            .get_all()
            .await?
            .into_iter()
            .map(|t| t.temp_id)
            .collect();

        let mut saved = 0;
        for temp_id in temp_ids {
            if !known.insert(temp_id.temp_id.clone()) {
                debug!("Skipping temp ID already stored");
                continue;
            }
            self.store.save(temp_id).await?;
            saved += 1;
        }

        Ok(saved)
    }
}
