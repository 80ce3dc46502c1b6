//! Identity changes: ordered sequences over the registry, the active view and
//! the gateway.
//!
//! Each operation validates before it mutates anything. Once mutation
//! starts it runs to completion; gateway failures are absorbed by the store
//! layer and never leave a session half-closed.

use prism_primitives::{FileId, FileRecord};

use super::Workspace;
use crate::error::{EditorError, Result};
use crate::notifications::Notification;
use crate::surface::{RenderSurface, SurfaceHost};

/// A file handed over by the host for import, e.g. from a drop event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportedFile {
	pub name: String,
	/// MIME type reported by the host, if any.
	pub media_type: Option<String>,
	pub content: String,
}

impl ImportedFile {
	pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			media_type: None,
			content: content.into(),
		}
	}

	pub fn with_media_type(mut self, media_type: impl Into<String>) -> Self {
		self.media_type = Some(media_type.into());
		self
	}

	/// Text media types and preview assets (any extension case) are accepted.
	fn is_importable(&self, id: &FileId) -> bool {
		self.media_type
			.as_deref()
			.is_some_and(|media_type| media_type.starts_with("text/"))
			|| id.asset_kind().affects_preview()
	}
}

fn parse_name(name: &str) -> Result<FileId> {
	FileId::new(name.trim()).map_err(|reason| EditorError::invalid_name(name, reason))
}

impl<H, R> Workspace<H, R>
where
	H: SurfaceHost,
	R: RenderSurface,
{
	/// Creates an empty file, opens it and activates it.
	///
	/// Rejects names already persisted or open.
	pub async fn create_file(&mut self, name: &str) -> Result<FileId> {
		let id = parse_name(name)?;

		let records = self.load_records().await;
		if self.sessions.contains(id.as_str()) || records.iter().any(|r| r.id == id) {
			self.notify(Notification::warning(format!("File \"{id}\" already exists!")));
			return Err(EditorError::DuplicateIdentifier(id));
		}

		let record = FileRecord::empty(id.clone());
		self.persist_record(record.clone()).await;
		self.sessions.open(&record, &mut self.host);
		self.switch_to(id.as_str()).await?;

		tracing::info!(file = %id, "identity.create");
		self.notify(Notification::info(format!("Created \"{id}\"")));
		Ok(id)
	}

	/// Renames a file, carrying over unsaved edits.
	///
	/// The content moved is the live buffer when `old` is open, else the
	/// persisted content. The old session is closed, the old record replaced
	/// by the new one, and a fresh session for the new name activated.
	/// Renaming to the same name does nothing.
	pub async fn rename_file(&mut self, old: &str, new_name: &str) -> Result<FileId> {
		let new = match parse_name(new_name) {
			Ok(new) => new,
			Err(error) => {
				self.notify(Notification::error("File names cannot contain slashes or be empty"));
				return Err(error);
			}
		};
		if new.as_str() == old {
			return Ok(new);
		}

		let records = self.load_records().await;
		if self.sessions.contains(new.as_str()) || records.iter().any(|r| r.id == new) {
			self.notify(Notification::warning(format!("File \"{new}\" already exists!")));
			return Err(EditorError::DuplicateIdentifier(new));
		}

		let (old_id, content) = match self.sessions.get(old) {
			Some(session) => (session.id().clone(), self.host.text(session.buffer())),
			None => match records.into_iter().find(|r| r.id.as_str() == old) {
				Some(record) => (record.id, record.content),
				None => return Err(EditorError::UnknownFile(old.to_owned())),
			},
		};

		self.view.close(&mut self.sessions, &mut self.host, old);
		self.remove_record(&old_id).await;

		let record = FileRecord::new(new.clone(), content);
		self.persist_record(record.clone()).await;
		self.sessions.open(&record, &mut self.host);
		self.switch_to(new.as_str()).await?;

		tracing::info!(from = %old_id, to = %new, "identity.rename");
		self.notify(Notification::info(format!("Renamed to \"{new}\"")));
		Ok(new)
	}

	/// Deletes a file, discarding unsaved edits without confirmation.
	///
	/// The preview is recompiled when the file was markup, a stylesheet or a
	/// script. Returns false if `id` was neither open nor persisted.
	pub async fn delete_file(&mut self, id: &str) -> bool {
		let closed = self.view.close(&mut self.sessions, &mut self.host, id);

		let records = self.load_records().await;
		let removed = match records.into_iter().find(|r| r.id.as_str() == id) {
			Some(record) => {
				self.remove_record(&record.id).await;
				tracing::info!(file = %record.id, "identity.delete");
				self.notify(Notification::info(format!("Deleted \"{}\"", record.id)));
				true
			}
			None => {
				if closed {
					tracing::info!(file = id, "identity.delete_unpersisted");
				}
				false
			}
		};

		let deleted = closed || removed;
		if deleted && FileId::new(id).is_ok_and(|id| id.asset_kind().affects_preview()) {
			self.refresh_preview().await;
		}
		deleted
	}

	/// Persists host-provided files. Files that are neither `text/*` nor
	/// named `.html`, `.htm`, `.css` or `.js` are skipped, as are invalid
	/// names.
	///
	/// An existing record of the same name is overwritten; an open session
	/// for it keeps its buffer. Returns the imported identifiers.
	pub async fn import_files<I>(&mut self, files: I) -> Vec<FileId>
	where
		I: IntoIterator<Item = ImportedFile>,
	{
		let mut imported = Vec::new();
		for file in files {
			let id = match FileId::new(file.name.as_str()) {
				Ok(id) => id,
				Err(error) => {
					tracing::debug!(name = %file.name, %error, "identity.import_invalid");
					continue;
				}
			};
			if !file.is_importable(&id) {
				tracing::debug!(file = %id, media_type = ?file.media_type, "identity.import_skipped");
				continue;
			}
			self.persist_record(FileRecord::new(id.clone(), file.content)).await;
			self.notify(Notification::info(format!("Imported \"{id}\"")));
			imported.push(id);
		}
		tracing::info!(count = imported.len(), "identity.import");
		imported
	}

	/// Writes the active buffer to storage and refreshes the preview.
	///
	/// The session stays dirty when the write fails. Returns whether a file
	/// was saved.
	pub async fn save_active(&mut self) -> bool {
		let Some(session) = self.active_session() else {
			return false;
		};
		let record = FileRecord {
			id: session.id().clone(),
			language: session.language(),
			content: self.host.text(session.buffer()),
		};
		let id = record.id.clone();

		let saved = self.persist_record(record).await;
		if saved {
			self.sessions.mark_clean(id.as_str());
			tracing::info!(file = %id, "identity.save");
			self.notify(Notification::success(format!("Saved \"{id}\"")));
		}
		self.refresh_preview().await;
		saved
	}

	/// Persisted content of a file, for download.
	pub async fn export_file(&mut self, id: &str) -> Result<String> {
		let records = self.load_records().await;
		match records.into_iter().find(|r| r.id.as_str() == id) {
			Some(record) => {
				tracing::debug!(file = id, bytes = record.content.len(), "identity.export");
				self.notify(Notification::info(format!("Downloaded \"{id}\"")));
				Ok(record.content)
			}
			None => {
				self.notify(Notification::error(format!("File \"{id}\" not found")));
				Err(EditorError::UnknownFile(id.to_owned()))
			}
		}
	}
}
