//! Persistent storage for file records and settings.
//!
//! [`PersistenceGateway`] is the async contract the workspace talks to. A
//! gateway must tolerate absence: a store that was never written reads as
//! empty rather than failing. Failures are reported as [`PersistenceError`];
//! the workspace turns them into degraded, in-memory operation.

use async_trait::async_trait;
use prism_primitives::{FileId, FileRecord};
use serde_json::Value;
use thiserror::Error;

mod json_file;
mod memory;

pub use json_file::JsonFileGateway;
pub use memory::MemoryGateway;

/// Errors surfaced by a [`PersistenceGateway`].
#[derive(Debug, Error)]
pub enum PersistenceError {
	/// The backing store cannot be reached.
	#[error("storage unavailable: {0}")]
	Unavailable(String),

	/// Reading or writing the backing file failed.
	#[error("storage I/O error: {0}")]
	Io(#[from] std::io::Error),

	/// The stored document could not be encoded or decoded.
	#[error("storage codec error: {0}")]
	Codec(#[from] serde_json::Error),
}

/// Async key-value store for file records and settings.
#[async_trait]
pub trait PersistenceGateway: Send + Sync {
	/// Every stored record, ordered by id.
	async fn get_all(&self) -> Result<Vec<FileRecord>, PersistenceError>;

	/// Inserts or replaces the record keyed by `record.id`.
	async fn put(&self, record: FileRecord) -> Result<(), PersistenceError>;

	/// Removes a record. Removing an absent id succeeds.
	async fn delete(&self, id: &FileId) -> Result<(), PersistenceError>;

	async fn get_setting(&self, key: &str) -> Result<Option<Value>, PersistenceError>;

	async fn put_setting(&self, key: &str, value: Value) -> Result<(), PersistenceError>;
}
