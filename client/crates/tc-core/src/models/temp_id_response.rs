use serde::{Deserialize, Serialize};

/// Temp ID as issued by the identifier API.
///
/// Timestamps are epoch seconds and may be fractional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TempIdResponse {
    #[serde(rename = "tempID", alias = "identifier")]
    pub temp_id: String,
    #[serde(rename = "validFrom")]
    pub valid_from: f64,
    #[serde(rename = "validTo")]
    pub valid_to: f64,
}
