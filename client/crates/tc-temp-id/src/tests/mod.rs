
use crate::TempIdService;

use tc_core::{
    ManualTimeSource, MemoryTempIdStore, StoreError, StoreResult, TempId, TempIdResponse,
    TempIdSource, TempIdStore, TransportError,
};

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::DateTime;
use tokio::sync::Notify;

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub(crate) struct FakeCause(pub(crate) &'static str);

/// Scripted reply of [`FakeSource`], rebuilt on every call.
#[derive(Clone)]
pub(crate) enum Reply {
    Batch(Vec<TempIdResponse>),
    FailWithCause(&'static str),
    FailWithoutCause,
    Status(u16),
}

/// Source that replays queued replies, then returns empty batches.
#[derive(Default)]
pub(crate) struct FakeSource {
    replies: Mutex<VecDeque<Reply>>,
    calls: AtomicUsize,
    gate_first_call: AtomicBool,
    pub(crate) entered: Notify,
    pub(crate) release: Notify,
}

impl FakeSource {
    pub(crate) fn new(replies: Vec<Reply>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into()),
            ..Self::default()
        })
    }

    /// First call signals `entered` and then waits for `release`.
    pub(crate) fn gated(replies: Vec<Reply>) -> Arc<Self> {
        let source = Self::new(replies);
        source.gate_first_call.store(true, Ordering::SeqCst);
        source
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TempIdSource for FakeSource {
    async fn fetch_temp_ids(&self) -> Result<Vec<TempIdResponse>, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.gate_first_call.swap(false, Ordering::SeqCst) {
            self.entered.notify_one();
            self.release.notified().await;
        }

        let reply = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Reply::Batch(Vec::new()));

        match reply {
            Reply::Batch(batch) => Ok(batch),
            Reply::FailWithCause(message) => Err(TransportError::caused_by(FakeCause(message))),
            Reply::FailWithoutCause => Err(TransportError::transport(None)),
            Reply::Status(code) => Err(TransportError::status_code(code, None)),
        }
    }
}

/// Store that keeps every save, duplicates included.
#[derive(Default)]
pub(crate) struct AppendOnlyStore {
    temp_ids: Mutex<Vec<TempId>>,
}

#[async_trait]
impl TempIdStore for AppendOnlyStore {
    async fn get_all(&self) -> StoreResult<Vec<TempId>> {
        Ok(self.temp_ids.lock().unwrap().clone())
    }

    async fn save(&self, temp_id: &TempId) -> StoreResult<()> {
        self.temp_ids.lock().unwrap().insert(0, temp_id.clone());
        Ok(())
    }

    async fn delete_all(&self) -> StoreResult<()> {
        self.temp_ids.lock().unwrap().clear();
        Ok(())
    }
}

/// Store whose every operation fails.
pub(crate) struct BrokenStore;

#[async_trait]
impl TempIdStore for BrokenStore {
    async fn get_all(&self) -> StoreResult<Vec<TempId>> {
        Err(StoreError::backend(FakeCause("disk unavailable")))
    }

    async fn save(&self, _temp_id: &TempId) -> StoreResult<()> {
        Err(StoreError::backend(FakeCause("disk unavailable")))
    }

    async fn delete_all(&self) -> StoreResult<()> {
        Err(StoreError::backend(FakeCause("disk unavailable")))
    }
}

/// Temp ID valid over `[from, until)` epoch seconds.
pub(crate) fn temp_id(value: &str, from: i64, until: i64) -> TempId {
    TempId::new(
        value.to_string(),
        DateTime::from_timestamp(from, 0).unwrap(),
        DateTime::from_timestamp(until, 0).unwrap(),
    )
}

pub(crate) fn response(value: &str, from: f64, to: f64) -> TempIdResponse {
    TempIdResponse {
        temp_id: value.to_string(),
        valid_from: from,
        valid_to: to,
    }
}

pub(crate) fn values(temp_ids: &[TempId]) -> Vec<&str> {
    temp_ids.iter().map(|t| t.temp_id.as_str()).collect()
}

pub(crate) struct Harness {
    pub(crate) service: TempIdService,
    pub(crate) source: Arc<FakeSource>,
    pub(crate) store: Arc<MemoryTempIdStore>,
    pub(crate) clock: ManualTimeSource,
}

/// Service over a memory store seeded with `stored` (most recent first), at `now` seconds.
pub(crate) fn harness(stored: Vec<TempId>, replies: Vec<Reply>, now: i64) -> Harness {
    harness_with_source(stored, FakeSource::new(replies), now)
}

pub(crate) fn harness_with_source(
    stored: Vec<TempId>,
    source: Arc<FakeSource>,
    now: i64,
) -> Harness {
    let store = Arc::new(MemoryTempIdStore::with_temp_ids(stored));
    let clock = ManualTimeSource::at_epoch_seconds(now);
    let service = TempIdService::new(source.clone(), store.clone())
        .with_time_source(Arc::new(clock.clone()));

    Harness {
        service,
        source,
        store,
        clock,
    }
}

pub(crate) fn value_of(temp_id: &Option<TempId>) -> Option<&str> {
    temp_id.as_ref().map(|t| t.temp_id.as_str())
}
