
use tc_api::TempIdApiClient;
use tc_config::ApiConfig;
use tc_core::{ManualTimeSource, MemoryTempIdStore, TempId};
use tc_temp_id::TempIdService;

use std::env;
use std::path::Path;
use std::sync::Arc;

use chrono::DateTime;
use tempfile::TempDir;

const CONFIG_DIR_VAR: &str = "TC_CONFIG_DIR";

/// `TC_CONFIG_DIR` pointed at a fresh temp dir until dropped. Callers are `#[serial]`.
pub(crate) struct ScratchConfigDir {
    dir: TempDir,
    previous: Option<String>,
}

impl ScratchConfigDir {
    pub(crate) fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let previous = env::var(CONFIG_DIR_VAR).ok();
        unsafe { env::set_var(CONFIG_DIR_VAR, dir.path()) };

        Self { dir, previous }
    }

    pub(crate) fn path(&self) -> &Path {
        self.dir.path()
    }
}

impl Drop for ScratchConfigDir {
    fn drop(&mut self) {
        unsafe {
            match self.previous.take() {
                Some(dir) => env::set_var(CONFIG_DIR_VAR, dir),
                None => env::remove_var(CONFIG_DIR_VAR),
            }
        }
    }
}

pub(crate) fn temp_id(value: &str, from: i64, until: i64) -> TempId {
    TempId::new(
        value.to_string(),
        DateTime::from_timestamp(from, 0).unwrap(),
        DateTime::from_timestamp(until, 0).unwrap(),
    )
}

/// Service over a seeded memory store whose API endpoint refuses connections.
pub(crate) fn offline_service(stored: Vec<TempId>, now: i64) -> TempIdService {
    let api = ApiConfig {
        base_url: "http://127.0.0.1:1".to_string(),
        timeout_secs: 1,
        ..ApiConfig::default()
    };
    let source = Arc::new(TempIdApiClient::new(&api).unwrap());
    let store = Arc::new(MemoryTempIdStore::with_temp_ids(stored));

    TempIdService::new(source, store)
        .with_time_source(Arc::new(ManualTimeSource::at_epoch_seconds(now)))
}
