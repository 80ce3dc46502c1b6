//! Surface bindings and the tab switch protocol.
//!
//! [`ActiveView`] is the only mutator of surface bindings. It tracks which
//! open file is bound to the primary surface and owns the independent
//! buffer shown by the secondary surface while split view is open.
//!
//! # Switch protocol
//!
//! 1. Reject unknown targets.
//! 2. Capture the live primary cursor into the outgoing session.
//! 3. Bind the target buffer.
//! 4. Restore the target's captured cursor, if any.
//! 5. Record the target as active.
//!
//! Step 2 must run before step 3: rebinding resets the surface cursor.

use prism_primitives::FileId;

use crate::error::{EditorError, Result};
use crate::session::{EditingSession, SessionRegistry};
use crate::surface::{Buffer, SurfaceHost, SurfaceSlot};

/// Secondary editor state. `buffer` is `None` when split view was opened
/// with nothing active.
#[derive(Debug)]
struct SplitView {
	buffer: Option<Buffer>,
}

/// Tracks the active file and split view.
#[derive(Debug, Default)]
pub struct ActiveView {
	active: Option<FileId>,
	split: Option<SplitView>,
}

impl ActiveView {
	pub fn new() -> Self {
		Self::default()
	}

	/// File bound to the primary surface.
	pub fn active(&self) -> Option<&FileId> {
		self.active.as_ref()
	}

	pub fn is_active(&self, id: &str) -> bool {
		self.active.as_ref().is_some_and(|active| active == id)
	}

	/// Binds an open file to the primary surface.
	pub fn switch_to<H>(&mut self, sessions: &mut SessionRegistry, host: &mut H, id: &str) -> Result<()>
	where
		H: SurfaceHost + ?Sized,
	{
		if !sessions.contains(id) {
			return Err(EditorError::UnknownFile(id.to_owned()));
		}

		if let Some(previous) = self.active.as_ref()
			&& let Some(session) = sessions.get_mut(previous.as_str())
		{
			session.set_last_cursor(host.cursor(SurfaceSlot::Primary));
		}

		let Some(target) = sessions.get(id) else {
			return Err(EditorError::UnknownFile(id.to_owned()));
		};
		self.bind(target, host);
		Ok(())
	}

	/// Closes an open file, reassigning activation when it was active.
	///
	/// The most recently opened remaining session becomes active; with none
	/// left the primary surface is unbound. Returns false if `id` was not
	/// open.
	pub fn close<H>(&mut self, sessions: &mut SessionRegistry, host: &mut H, id: &str) -> bool
	where
		H: SurfaceHost + ?Sized,
	{
		if !sessions.contains(id) {
			return false;
		}

		let was_active = self.is_active(id);
		if was_active {
			host.bind(SurfaceSlot::Primary, None);
			self.active = None;
		}

		sessions.close(id, host);

		if was_active {
			match sessions.last() {
				Some(next) => self.bind(next, host),
				None => tracing::debug!("view.empty"),
			}
		}
		true
	}

	/// Closes every open file in tab order. Returns how many were closed.
	pub fn close_all<H>(&mut self, sessions: &mut SessionRegistry, host: &mut H) -> usize
	where
		H: SurfaceHost + ?Sized,
	{
		let ids: Vec<FileId> = sessions.ids().cloned().collect();
		ids.iter()
			.filter(|id| self.close(sessions, host, id.as_str()))
			.count()
	}

	pub fn is_split(&self) -> bool {
		self.split.is_some()
	}

	/// Opens split view on a copy of the active file's current content.
	///
	/// Edits in the two surfaces are independent from here on. Returns false
	/// if split view was already open.
	pub fn open_split<H>(&mut self, sessions: &SessionRegistry, host: &mut H) -> bool
	where
		H: SurfaceHost + ?Sized,
	{
		if self.split.is_some() {
			return false;
		}

		let buffer = self
			.active
			.as_ref()
			.and_then(|id| sessions.get(id.as_str()))
			.map(|session| {
				let text = host.text(session.buffer());
				host.create_buffer(&text, session.language())
			});
		host.bind(SurfaceSlot::Secondary, buffer.as_ref());
		tracing::debug!(buffer = ?buffer.as_ref().map(Buffer::id), "view.split_open");
		self.split = Some(SplitView { buffer });
		true
	}

	/// Closes split view and disposes its buffer. Never touches the primary
	/// session. Returns false if split view was not open.
	pub fn close_split<H>(&mut self, host: &mut H) -> bool
	where
		H: SurfaceHost + ?Sized,
	{
		let Some(split) = self.split.take() else {
			return false;
		};
		host.bind(SurfaceSlot::Secondary, None);
		if let Some(buffer) = split.buffer {
			host.dispose_buffer(buffer);
		}
		tracing::debug!("view.split_close");
		true
	}

	/// Buffer shown by the secondary surface.
	pub fn split_buffer(&self) -> Option<&Buffer> {
		self.split.as_ref().and_then(|split| split.buffer.as_ref())
	}

	fn bind<H>(&mut self, session: &EditingSession, host: &mut H)
	where
		H: SurfaceHost + ?Sized,
	{
		host.bind(SurfaceSlot::Primary, Some(session.buffer()));
		if let Some(cursor) = session.last_cursor() {
			host.set_cursor(SurfaceSlot::Primary, cursor);
		}
		tracing::debug!(file = %session.id(), "view.switch");
		self.active = Some(session.id().clone());
	}
}
