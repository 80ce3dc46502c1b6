use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use prism_primitives::{FileId, FileRecord};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::Mutex;

use super::{PersistenceError, PersistenceGateway};

/// On-disk layout: records keyed by id plus free-form settings.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreDocument {
	#[serde(default)]
	files: BTreeMap<FileId, FileRecord>,
	#[serde(default)]
	settings: BTreeMap<String, Value>,
}

/// Gateway persisting everything in a single JSON document.
///
/// A missing file reads as an empty store. Writes go through a sibling
/// temporary file and a rename, so readers never observe a torn document.
#[derive(Debug)]
pub struct JsonFileGateway {
	path: PathBuf,
	/// Serializes read-modify-write cycles issued through this gateway.
	write_lock: Mutex<()>,
}

impl JsonFileGateway {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self {
			path: path.into(),
			write_lock: Mutex::new(()),
		}
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	async fn read(&self) -> Result<StoreDocument, PersistenceError> {
		match tokio::fs::read(&self.path).await {
			Ok(bytes) if bytes.is_empty() => Ok(StoreDocument::default()),
			Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
			Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(StoreDocument::default()),
			Err(error) => Err(error.into()),
		}
	}

	async fn write(&self, document: &StoreDocument) -> Result<(), PersistenceError> {
		let bytes = serde_json::to_vec_pretty(document)?;
		if let Some(parent) = self.path.parent()
			&& !parent.as_os_str().is_empty()
		{
			tokio::fs::create_dir_all(parent).await?;
		}
		let tmp = self.path.with_extension("json.tmp");
		tokio::fs::write(&tmp, &bytes).await?;
		tokio::fs::rename(&tmp, &self.path).await?;
		tracing::trace!(path = %self.path.display(), bytes = bytes.len(), "store.write");
		Ok(())
	}

	async fn update<F>(&self, apply: F) -> Result<(), PersistenceError>
	where
		F: FnOnce(&mut StoreDocument) + Send,
	{
		let _guard = self.write_lock.lock().await;
		let mut document = self.read().await?;
		apply(&mut document);
		self.write(&document).await
	}
}

#[async_trait]
impl PersistenceGateway for JsonFileGateway {
	async fn get_all(&self) -> Result<Vec<FileRecord>, PersistenceError> {
		Ok(self.read().await?.files.into_values().collect())
	}

	async fn put(&self, record: FileRecord) -> Result<(), PersistenceError> {
		self.update(move |doc| {
			doc.files.insert(record.id.clone(), record);
		})
		.await
	}

	async fn delete(&self, id: &FileId) -> Result<(), PersistenceError> {
		self.update(|doc| {
			doc.files.remove(id);
		})
		.await
	}

	async fn get_setting(&self, key: &str) -> Result<Option<Value>, PersistenceError> {
		Ok(self.read().await?.settings.remove(key))
	}

	async fn put_setting(&self, key: &str, value: Value) -> Result<(), PersistenceError> {
		self.update(move |doc| {
			doc.settings.insert(key.to_owned(), value);
		})
		.await
	}
}
