pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::connection_manager::ConnectionManager;
pub use error::{DbError, Result};
pub use repositories::temp_id_repository::TempIdRepository;
