//! Seams to the text-editing widget and the sandboxed preview frame.
//!
//! The core never touches a widget directly. A [`SurfaceHost`] owns buffer
//! storage and the editing viewports; the core asks it to create, bind and
//! dispose buffers and to read or place cursors. A [`RenderSurface`] receives
//! compiled preview documents.
//!
//! Content change notifications flow the other way: the host calls
//! [`crate::Workspace::handle_content_changed`] with the [`BufferId`] that
//! mutated, and the ready signal of the render surface is forwarded as
//! [`crate::EditorMsg::PreviewLoaded`].

use prism_primitives::{BufferId, Language, Position};

/// Owned handle to a buffer living in a [`SurfaceHost`].
///
/// Deliberately neither `Clone` nor `Copy`: exactly one owner holds a given
/// buffer, and [`SurfaceHost::dispose_buffer`] consumes the handle so a
/// released buffer cannot be reached again.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Buffer {
	id: BufferId,
}

impl Buffer {
	/// Wraps a host-allocated id. Only hosts should mint handles.
	pub fn new(id: BufferId) -> Self {
		Self { id }
	}

	pub fn id(&self) -> BufferId {
		self.id
	}
}

/// Editing viewport a buffer can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceSlot {
	/// The main editor, always showing the active file.
	Primary,
	/// The split-view editor, showing an independent copy.
	Secondary,
}

/// Text-editing widget contract.
pub trait SurfaceHost {
	/// Allocates a buffer seeded with `content`.
	fn create_buffer(&mut self, content: &str, language: Language) -> Buffer;

	/// Releases a buffer. Hosts detach it from any surface still showing it.
	fn dispose_buffer(&mut self, buffer: Buffer);

	/// Current text of a buffer.
	fn text(&self, buffer: &Buffer) -> String;

	/// Binds `buffer` to `slot`, or leaves the slot empty with `None`.
	///
	/// Binding resets the slot's cursor to the start of the buffer.
	fn bind(&mut self, slot: SurfaceSlot, buffer: Option<&Buffer>);

	/// Live cursor of `slot`.
	fn cursor(&self, slot: SurfaceSlot) -> Position;

	fn set_cursor(&mut self, slot: SurfaceSlot, position: Position);
}

/// Sandboxed preview frame contract.
pub trait RenderSurface {
	/// Replaces the entire frame content with `document`.
	fn load(&mut self, document: String);
}
