pub(crate) mod client;
pub(crate) mod error;

pub use client::TempIdApiClient;
pub use error::{ApiError, Result as ApiResult};
