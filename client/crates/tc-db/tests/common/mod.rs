pub mod fixtures;

#[allow(unused_imports)]
pub use fixtures::*;
#[allow(unused_imports)]
pub use test_db::*;
