//! Open-file storage and buffer lifecycle.
//!
//! [`SessionRegistry`] is the single owner of [`EditingSession`]s and the only
//! place buffers are created or disposed for open files. Insertion order is
//! tab order: switching never reorders, closing and reopening appends.

use indexmap::IndexMap;
use indexmap::map::Entry;
use prism_primitives::{BufferId, FileId, FileRecord, Language, Position};

use crate::surface::{Buffer, SurfaceHost};

/// In-memory editing state for one open file.
#[derive(Debug)]
pub struct EditingSession {
	id: FileId,
	language: Language,
	buffer: Buffer,
	/// Cursor captured when the session was last switched away from.
	last_cursor: Option<Position>,
	/// Set by the first mutation after open or save, cleared by save.
	dirty: bool,
}

impl EditingSession {
	fn new(record: &FileRecord, buffer: Buffer) -> Self {
		Self {
			id: record.id.clone(),
			language: record.language,
			buffer,
			last_cursor: None,
			dirty: false,
		}
	}

	pub fn id(&self) -> &FileId {
		&self.id
	}

	pub fn language(&self) -> Language {
		self.language
	}

	pub fn buffer(&self) -> &Buffer {
		&self.buffer
	}

	pub fn buffer_id(&self) -> BufferId {
		self.buffer.id()
	}

	pub fn last_cursor(&self) -> Option<Position> {
		self.last_cursor
	}

	pub fn is_dirty(&self) -> bool {
		self.dirty
	}

	pub(crate) fn set_last_cursor(&mut self, position: Position) {
		self.last_cursor = Some(position);
	}
}

/// Ordered map from file identifier to its open session.
#[derive(Debug, Default)]
pub struct SessionRegistry {
	sessions: IndexMap<FileId, EditingSession>,
}

impl SessionRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Opens `record`, or returns the existing session untouched.
	///
	/// An existing session keeps its buffer, cursor and dirty flag; reopening
	/// never discards in-progress edits.
	pub fn open<H>(&mut self, record: &FileRecord, host: &mut H) -> &EditingSession
	where
		H: SurfaceHost + ?Sized,
	{
		match self.sessions.entry(record.id.clone()) {
			Entry::Occupied(entry) => {
				tracing::trace!(file = %record.id, "session.reuse");
				entry.into_mut()
			}
			Entry::Vacant(entry) => {
				let buffer = host.create_buffer(&record.content, record.language);
				tracing::debug!(file = %record.id, buffer = %buffer.id(), "session.open");
				entry.insert(EditingSession::new(record, buffer))
			}
		}
	}

	/// Removes a session and releases its buffer. Returns false if `id` was
	/// not open.
	///
	/// Does not touch activation; use [`crate::view::ActiveView::close`] when
	/// the session may be bound to a surface.
	pub fn close<H>(&mut self, id: &str, host: &mut H) -> bool
	where
		H: SurfaceHost + ?Sized,
	{
		let Some(session) = self.sessions.shift_remove(id) else {
			return false;
		};
		tracing::debug!(file = %session.id, buffer = %session.buffer.id(), "session.close");
		host.dispose_buffer(session.buffer);
		true
	}

	pub fn get(&self, id: &str) -> Option<&EditingSession> {
		self.sessions.get(id)
	}

	pub(crate) fn get_mut(&mut self, id: &str) -> Option<&mut EditingSession> {
		self.sessions.get_mut(id)
	}

	pub fn contains(&self, id: &str) -> bool {
		self.sessions.contains_key(id)
	}

	/// File identifiers in tab order.
	pub fn ids(&self) -> impl Iterator<Item = &FileId> + '_ {
		self.sessions.keys()
	}

	/// Sessions in tab order.
	pub fn iter(&self) -> impl Iterator<Item = &EditingSession> + '_ {
		self.sessions.values()
	}

	/// Most recently opened session.
	pub fn last(&self) -> Option<&EditingSession> {
		self.sessions.last().map(|(_, session)| session)
	}

	pub fn len(&self) -> usize {
		self.sessions.len()
	}

	pub fn is_empty(&self) -> bool {
		self.sessions.is_empty()
	}

	/// Finds the file whose session owns `buffer`.
	pub fn find_by_buffer(&self, buffer: BufferId) -> Option<&FileId> {
		self.sessions
			.values()
			.find(|s| s.buffer.id() == buffer)
			.map(|s| &s.id)
	}

	/// Live buffer content of an open file.
	pub fn content<H>(&self, id: &str, host: &H) -> Option<String>
	where
		H: SurfaceHost + ?Sized,
	{
		self.sessions.get(id).map(|s| host.text(&s.buffer))
	}

	/// Flags a session as modified. Returns true on the clean → dirty edge.
	pub fn mark_dirty(&mut self, id: &str) -> bool {
		match self.sessions.get_mut(id) {
			Some(session) if !session.dirty => {
				session.dirty = true;
				true
			}
			_ => false,
		}
	}

	/// Clears the modified flag after a successful save.
	pub fn mark_clean(&mut self, id: &str) {
		if let Some(session) = self.sessions.get_mut(id) {
			session.dirty = false;
		}
	}
}
