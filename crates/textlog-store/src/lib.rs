// ABOUTME: Persistence layer for textlog, a single append-only text file of records.
// ABOUTME: Provides record validation and the file-backed LogStore.

pub mod record;
pub mod store;

pub use record::Record;
pub use store::{LOG_FILE_NAME, LogStore, StoreError};
