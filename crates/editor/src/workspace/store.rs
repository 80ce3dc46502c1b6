//! Gateway access with degraded-mode fallbacks.
//!
//! Every gateway failure is absorbed here: reads fall back to empty results
//! and writes report `false`. The first failure is logged as a warning and
//! surfaced once to the user; later ones only go to the debug log.

use prism_primitives::{FileId, FileRecord};
use serde_json::Value;

use super::Workspace;
use crate::notifications::Notification;
use crate::persistence::PersistenceError;
use crate::surface::{RenderSurface, SurfaceHost};

impl<H, R> Workspace<H, R>
where
	H: SurfaceHost,
	R: RenderSurface,
{
	/// Snapshot of every persisted record, empty when storage is unreachable.
	pub(crate) async fn load_records(&mut self) -> Vec<FileRecord> {
		let result = self.gateway.get_all().await;
		match result {
			Ok(records) => records,
			Err(error) => {
				self.degrade("get_all", &error);
				Vec::new()
			}
		}
	}

	pub(crate) async fn persist_record(&mut self, record: FileRecord) -> bool {
		let id = record.id.clone();
		let result = self.gateway.put(record).await;
		match result {
			Ok(()) => {
				tracing::debug!(file = %id, "store.put");
				true
			}
			Err(error) => {
				self.degrade("put", &error);
				false
			}
		}
	}

	pub(crate) async fn remove_record(&mut self, id: &FileId) -> bool {
		let result = self.gateway.delete(id).await;
		match result {
			Ok(()) => {
				tracing::debug!(file = %id, "store.delete");
				true
			}
			Err(error) => {
				self.degrade("delete", &error);
				false
			}
		}
	}

	pub(crate) async fn load_setting(&mut self, key: &str) -> Option<Value> {
		let result = self.gateway.get_setting(key).await;
		match result {
			Ok(value) => value,
			Err(error) => {
				self.degrade("get_setting", &error);
				None
			}
		}
	}

	pub(crate) async fn persist_setting(&mut self, key: &str, value: Value) -> bool {
		let result = self.gateway.put_setting(key, value).await;
		match result {
			Ok(()) => true,
			Err(error) => {
				self.degrade("put_setting", &error);
				false
			}
		}
	}

	fn degrade(&mut self, operation: &'static str, error: &PersistenceError) {
		if self.storage_degraded {
			tracing::debug!(operation, %error, "store.failed");
			return;
		}
		self.storage_degraded = true;
		tracing::warn!(operation, %error, "store.degraded");
		self.notify(Notification::warning(
			"Storage is unavailable; changes are kept in memory only",
		));
	}
}
