pub mod avatar;
pub mod queries;
pub mod store;
pub mod types;

pub use queries::*;
pub use store::{RecordStore, StoreError};
pub use types::*;
