use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;
use prism_primitives::{FileId, FileRecord};
use serde_json::Value;

use super::{PersistenceError, PersistenceGateway};

#[derive(Debug, Default)]
struct MemoryState {
	files: BTreeMap<FileId, FileRecord>,
	settings: BTreeMap<String, Value>,
}

/// In-process gateway keyed by id, iterating in id order.
///
/// [`MemoryGateway::set_available`] simulates an unreachable store: every
/// call fails with [`PersistenceError::Unavailable`] until it is restored.
#[derive(Debug)]
pub struct MemoryGateway {
	state: Mutex<MemoryState>,
	available: AtomicBool,
}

impl Default for MemoryGateway {
	fn default() -> Self {
		Self::new()
	}
}

impl MemoryGateway {
	pub fn new() -> Self {
		Self {
			state: Mutex::new(MemoryState::default()),
			available: AtomicBool::new(true),
		}
	}

	/// Creates a gateway pre-populated with `records`.
	pub fn with_records(records: impl IntoIterator<Item = FileRecord>) -> Self {
		let gateway = Self::new();
		{
			let mut state = gateway.state.lock();
			for record in records {
				state.files.insert(record.id.clone(), record);
			}
		}
		gateway
	}

	pub fn set_available(&self, available: bool) {
		self.available.store(available, Ordering::Release);
	}

	/// Synchronous snapshot of one record, for inspection.
	pub fn record(&self, id: &str) -> Option<FileRecord> {
		self.state.lock().files.get(id).cloned()
	}

	/// Synchronous snapshot of all ids in storage order.
	pub fn ids(&self) -> Vec<FileId> {
		self.state.lock().files.keys().cloned().collect()
	}

	fn check(&self) -> Result<(), PersistenceError> {
		if self.available.load(Ordering::Acquire) {
			Ok(())
		} else {
			Err(PersistenceError::Unavailable("memory store switched off".into()))
		}
	}
}

#[async_trait]
impl PersistenceGateway for MemoryGateway {
	async fn get_all(&self) -> Result<Vec<FileRecord>, PersistenceError> {
		self.check()?;
		Ok(self.state.lock().files.values().cloned().collect())
	}

	async fn put(&self, record: FileRecord) -> Result<(), PersistenceError> {
		self.check()?;
		self.state.lock().files.insert(record.id.clone(), record);
		Ok(())
	}

	async fn delete(&self, id: &FileId) -> Result<(), PersistenceError> {
		self.check()?;
		self.state.lock().files.remove(id);
		Ok(())
	}

	async fn get_setting(&self, key: &str) -> Result<Option<Value>, PersistenceError> {
		self.check()?;
		Ok(self.state.lock().settings.get(key).cloned())
	}

	async fn put_setting(&self, key: &str, value: Value) -> Result<(), PersistenceError> {
		self.check()?;
		self.state.lock().settings.insert(key.to_owned(), value);
		Ok(())
	}
}
