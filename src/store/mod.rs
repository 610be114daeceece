//! Persistence seam for tool state
//!
//! The calculators are pure; everything a session keeps between runs goes
//! through a [`ToolStore`] — a string-keyed JSON blob store — behind a typed
//! [`Repository`]. Backends: an in-memory map for tests and a one-file-per-key
//! directory store for the CLI. Blobs carry no version field and get no
//! migration; a missing key always reads as the empty default.

mod backend;
mod repository;

use thiserror::Error;

pub use backend::{JsonFileStore, MemoryStore};
pub use repository::{keys, Repository};

/// Errors from the persistence layer
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed stored record: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("malformed stored date: {0}")]
    Date(#[from] chrono::ParseError),
}

/// String-keyed blob storage
///
/// Values are opaque strings to the store; the repository layer decides the
/// encoding. Writes are last-write-wins with no cross-key transaction.
pub trait ToolStore {
    /// Read a value; Ok(None) when the key has never been written
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn put(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove a key; removing an absent key is not an error
    fn delete(&mut self, key: &str) -> Result<(), StoreError>;
}
