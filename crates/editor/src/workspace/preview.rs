use prism_primitives::FileRecord;

use super::Workspace;
use crate::msg::EditorMsg;
use crate::preview::{self, PreviewDocument};
use crate::surface::{RenderSurface, SurfaceHost};

impl<H, R> Workspace<H, R>
where
	H: SurfaceHost,
	R: RenderSurface,
{
	/// Cancels any pending debounce and recompiles now.
	pub async fn refresh_preview(&mut self) -> PreviewDocument {
		if self.preview.cancel() {
			tracing::trace!("preview.debounce_superseded");
		}
		self.compile_preview().await
	}

	/// Applies one message from the workspace channel.
	pub async fn handle_msg(&mut self, msg: EditorMsg) {
		match msg {
			EditorMsg::PreviewDue { generation } => {
				if self.preview.accept(generation) {
					self.compile_preview().await;
				} else {
					tracing::trace!(generation, current = self.preview.generation(), "preview.stale");
				}
			}
			EditorMsg::PreviewLoaded => {
				self.compiling = false;
				tracing::trace!("preview.loaded");
			}
		}
	}

	/// Applies every message already queued. Returns how many were handled.
	pub async fn pump(&mut self) -> usize {
		let mut handled = 0;
		while let Ok(msg) = self.msg_rx.try_recv() {
			self.handle_msg(msg).await;
			handled += 1;
		}
		handled
	}

	/// Waits for the next message without applying it.
	pub async fn next_msg(&mut self) -> Option<EditorMsg> {
		self.msg_rx.recv().await
	}

	async fn compile_preview(&mut self) -> PreviewDocument {
		let records = self.preview_inputs().await;
		let sessions = &self.sessions;
		let host = &self.host;
		let document = preview::compile(&records, self.config.entry_file.as_str(), |id| {
			sessions.content(id.as_str(), host)
		});

		tracing::debug!(
			markup = ?document.markup,
			stylesheets = document.stylesheets.len(),
			scripts = document.scripts.len(),
			bytes = document.html.len(),
			"preview.compile"
		);
		self.compiling = true;
		self.render.load(document.html.clone());
		document
	}

	/// Persisted records followed, in tab order, by open sessions that have
	/// no record yet. Content is resolved from live buffers at compile time.
	async fn preview_inputs(&mut self) -> Vec<FileRecord> {
		let mut records = self.load_records().await;
		let persisted = records.len();
		for session in self.sessions.iter() {
			if !records[..persisted].iter().any(|r| &r.id == session.id()) {
				records.push(FileRecord::empty(session.id().clone()));
			}
		}
		if records.len() > persisted {
			tracing::trace!(unpersisted = records.len() - persisted, "preview.session_only_inputs");
		}
		records
	}
}
