//! In-memory surfaces for headless runs and tests.

use std::collections::HashMap;

use prism_primitives::{BufferId, Language, Position};

use crate::surface::{Buffer, RenderSurface, SurfaceHost, SurfaceSlot};

#[derive(Debug)]
struct HeadlessBuffer {
	text: String,
	language: Language,
}

#[derive(Debug, Default)]
struct HeadlessSurface {
	bound: Option<BufferId>,
	cursor: Position,
}

/// [`SurfaceHost`] keeping buffers and two viewports in memory.
///
/// Edits are simulated with [`HeadlessHost::set_text`]; callers forward the
/// returned id to [`crate::Workspace::handle_content_changed`] the same way a
/// widget change listener would.
#[derive(Debug)]
pub struct HeadlessHost {
	next_buffer_id: u64,
	buffers: HashMap<BufferId, HeadlessBuffer>,
	primary: HeadlessSurface,
	secondary: HeadlessSurface,
}

impl Default for HeadlessHost {
	fn default() -> Self {
		Self::new()
	}
}

impl HeadlessHost {
	pub fn new() -> Self {
		Self {
			next_buffer_id: 1,
			buffers: HashMap::new(),
			primary: HeadlessSurface::default(),
			secondary: HeadlessSurface::default(),
		}
	}

	/// Replaces a buffer's text. Returns false if the buffer does not exist.
	pub fn set_text(&mut self, buffer: BufferId, text: impl Into<String>) -> bool {
		match self.buffers.get_mut(&buffer) {
			Some(entry) => {
				entry.text = text.into();
				true
			}
			None => false,
		}
	}

	/// Buffer currently bound to `slot`.
	pub fn bound(&self, slot: SurfaceSlot) -> Option<BufferId> {
		self.surface(slot).bound
	}

	/// Text of the buffer bound to `slot`.
	pub fn bound_text(&self, slot: SurfaceSlot) -> Option<&str> {
		let id = self.surface(slot).bound?;
		self.buffers.get(&id).map(|b| b.text.as_str())
	}

	pub fn contains(&self, buffer: BufferId) -> bool {
		self.buffers.contains_key(&buffer)
	}

	pub fn language(&self, buffer: BufferId) -> Option<Language> {
		self.buffers.get(&buffer).map(|b| b.language)
	}

	/// Number of buffers not yet disposed.
	pub fn live_buffers(&self) -> usize {
		self.buffers.len()
	}

	fn surface(&self, slot: SurfaceSlot) -> &HeadlessSurface {
		match slot {
			SurfaceSlot::Primary => &self.primary,
			SurfaceSlot::Secondary => &self.secondary,
		}
	}

	fn surface_mut(&mut self, slot: SurfaceSlot) -> &mut HeadlessSurface {
		match slot {
			SurfaceSlot::Primary => &mut self.primary,
			SurfaceSlot::Secondary => &mut self.secondary,
		}
	}
}

impl SurfaceHost for HeadlessHost {
	fn create_buffer(&mut self, content: &str, language: Language) -> Buffer {
		let id = BufferId(self.next_buffer_id);
		self.next_buffer_id += 1;
		self.buffers.insert(
			id,
			HeadlessBuffer {
				text: content.to_owned(),
				language,
			},
		);
		Buffer::new(id)
	}

	fn dispose_buffer(&mut self, buffer: Buffer) {
		let id = buffer.id();
		self.buffers.remove(&id);
		for surface in [&mut self.primary, &mut self.secondary] {
			if surface.bound == Some(id) {
				tracing::trace!(%id, "headless.detach_disposed");
				*surface = HeadlessSurface::default();
			}
		}
	}

	fn text(&self, buffer: &Buffer) -> String {
		self.buffers
			.get(&buffer.id())
			.map(|b| b.text.clone())
			.unwrap_or_default()
	}

	fn bind(&mut self, slot: SurfaceSlot, buffer: Option<&Buffer>) {
		let surface = self.surface_mut(slot);
		surface.bound = buffer.map(Buffer::id);
		surface.cursor = Position::START;
	}

	fn cursor(&self, slot: SurfaceSlot) -> Position {
		self.surface(slot).cursor
	}

	fn set_cursor(&mut self, slot: SurfaceSlot, position: Position) {
		self.surface_mut(slot).cursor = position;
	}
}

/// [`RenderSurface`] that keeps the last loaded document.
#[derive(Debug, Default)]
pub struct CapturedPreview {
	current: Option<String>,
	loads: usize,
}

impl CapturedPreview {
	pub fn new() -> Self {
		Self::default()
	}

	/// Most recently loaded document.
	pub fn current(&self) -> Option<&str> {
		self.current.as_deref()
	}

	/// Number of documents loaded so far.
	pub fn load_count(&self) -> usize {
		self.loads
	}
}

impl RenderSurface for CapturedPreview {
	fn load(&mut self, document: String) {
		self.loads += 1;
		self.current = Some(document);
	}
}
