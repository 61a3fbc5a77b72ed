use crate::{TempIdResponse, TransportError};

use async_trait::async_trait;

/// Remote issuer of temp IDs.
#[async_trait]
pub trait TempIdSource: Send + Sync {
    /// Fetch a fresh batch of temp IDs. Entries are returned as sent by the
    /// server and may be malformed.
    async fn fetch_temp_ids(&self) -> Result<Vec<TempIdResponse>, TransportError>;
}
