use crate::{ApiError, ApiResult};

use tc_config::ApiConfig;
use tc_core::{TempIdResponse, TempIdSource, TransportError};

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client as ReqwestClient;
use serde_json::Value;

/// HTTP client for the temp ID endpoint
pub struct TempIdApiClient {
    url: String,
    token: Option<String>,
    client: ReqwestClient,
}

impl TempIdApiClient {
    /// Create a client from API configuration
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        Self::build(
            config.temp_ids_url(),
            config.token.clone(),
            config.timeout(),
        )
    }

    fn build(url: String, token: Option<String>, timeout: Duration) -> ApiResult<Self> {
        let client = ReqwestClient::builder()
            .timeout(timeout)
            .build()
            .map_err(ApiError::from_build)?;

        Ok(Self { url, token, client })
    }

    /// Full temp ID endpoint URL
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    fn request(&self) -> reqwest::RequestBuilder {
        let req = self.client.get(&self.url);

        match self.token {
            Some(ref token) => req.bearer_auth(token),
            None => req,
        }
    }

    /// Fetch a batch of temp IDs.
    ///
    /// Non-2xx responses carry no underlying error; connection, timeout and
    /// body decoding failures carry their cause. A body that is a JSON array
    /// is accepted even when some entries do not decode; those are dropped.
    pub async fn get_temp_ids(&self) -> Result<Vec<TempIdResponse>, TransportError> {
        debug!("GET {}", self.url);

        let response = self
            .request()
            .send()
            .await
            .map_err(|e| TransportError::caused_by(e))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Temp ID request to {} returned {}", self.url, status);
            return Err(TransportError::status_code(status.as_u16(), None));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::caused_by(e))?;

        let entries: Vec<Value> =
            serde_json::from_slice(&body).map_err(|e| TransportError::caused_by(e))?;

        let received = entries.len();
        let temp_ids: Vec<TempIdResponse> = entries
            .into_iter()
            .filter_map(|entry| match serde_json::from_value(entry) {
                Ok(temp_id) => Some(temp_id),
                Err(e) => {
                    debug!("Dropping undecodable temp ID entry: {}", e);
                    None
                }
            })
            .collect();

        debug!(
            "Received {} temp IDs ({} undecodable)",
            temp_ids.len(),
            received - temp_ids.len()
        );

        Ok(temp_ids)
    }
}

#[async_trait]
impl TempIdSource for TempIdApiClient {
    async fn fetch_temp_ids(&self) -> Result<Vec<TempIdResponse>, TransportError> {
        self.get_temp_ids().await
    }
}
