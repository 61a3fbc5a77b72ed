//! tc-api
//!
//! HTTP client for the temp ID issuing API.

pub(crate) mod client;


pub use client::{ApiError, ApiResult, TempIdApiClient};
