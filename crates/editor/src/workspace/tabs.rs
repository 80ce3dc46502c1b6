use prism_primitives::{AssetKind, BufferId, FileId};

use super::Workspace;
use crate::error::{EditorError, Result};
use crate::surface::{RenderSurface, SurfaceHost};

impl<H, R> Workspace<H, R>
where
	H: SurfaceHost,
	R: RenderSurface,
{
	/// Opens a persisted file in a tab and activates it.
	///
	/// An already open file is only switched to; its buffer and dirty flag
	/// are left alone.
	pub async fn open_file(&mut self, id: &str) -> Result<()> {
		if !self.sessions.contains(id) {
			let records = self.load_records().await;
			let Some(record) = records.into_iter().find(|r| r.id.as_str() == id) else {
				return Err(EditorError::UnknownFile(id.to_owned()));
			};
			self.sessions.open(&record, &mut self.host);
		}
		self.switch_to(id).await
	}

	/// Activates an open file. Activating a markup file refreshes the
	/// preview immediately.
	pub async fn switch_to(&mut self, id: &str) -> Result<()> {
		self.view.switch_to(&mut self.sessions, &mut self.host, id)?;
		let markup = self
			.view
			.active()
			.is_some_and(|active| active.asset_kind() == AssetKind::Markup);
		if markup {
			self.refresh_preview().await;
		}
		Ok(())
	}

	/// Closes a tab, discarding unsaved edits. Returns false if `id` was not
	/// open.
	pub fn close_tab(&mut self, id: &str) -> bool {
		self.view.close(&mut self.sessions, &mut self.host, id)
	}

	/// Closes every tab. Returns how many were closed.
	pub fn close_all(&mut self) -> usize {
		let closed = self.view.close_all(&mut self.sessions, &mut self.host);
		tracing::debug!(closed, "tabs.close_all");
		closed
	}

	/// Opens split view, or closes it when already open. Returns whether
	/// split view is open afterwards.
	pub fn toggle_split(&mut self) -> bool {
		if self.view.is_split() {
			self.view.close_split(&mut self.host);
			false
		} else {
			self.view.open_split(&self.sessions, &mut self.host)
		}
	}

	/// Content change notification from the editing widget.
	///
	/// Marks the owning session dirty. Edits to the active file restart the
	/// preview debounce when the file feeds the preview. Changes to buffers
	/// no session owns, such as the split view copy, are ignored.
	pub fn handle_content_changed(&mut self, buffer: BufferId) {
		let Some(id) = self.sessions.find_by_buffer(buffer).cloned() else {
			tracing::trace!(%buffer, "tabs.change_unowned");
			return;
		};

		if self.sessions.mark_dirty(id.as_str()) {
			tracing::debug!(file = %id, "tabs.dirty");
		}

		if self.view.is_active(id.as_str()) && qualifies_for_preview(&id) {
			self.preview.schedule();
		}
	}
}

fn qualifies_for_preview(id: &FileId) -> bool {
	id.asset_kind().affects_preview()
}
