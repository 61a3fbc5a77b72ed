pub mod error;
pub mod retry;
pub mod service;

#[cfg(test)]
mod tests;

pub use error::{Result, TempIdError};
pub use retry::FetchBackoff;
pub use service::TempIdService;
