//! The workspace facade.
//!
//! [`Workspace`] owns every component and is the only entry point frontends
//! call into. Operations are split by concern:
//!
//! - `tabs`: opening, switching, closing tabs, split view, edit routing
//! - `identity`: create, rename, delete, import, save, export
//! - `preview`: manual refresh and message handling
//! - `lifecycle`: start-up, theme and zoom
//! - `store`: gateway access with degraded-mode fallbacks
//!
//! All state lives on one cooperative timeline. Operations that touch the
//! gateway are `async` and suspend only while awaiting it; the debounce timer
//! runs as a separate task that communicates through [`crate::msg`].

use std::sync::Arc;

use prism_primitives::FileId;

use crate::config::EditorConfig;
use crate::msg::{self, MsgReceiver, MsgSender};
use crate::notifications::{Notification, NotificationCenter};
use crate::persistence::PersistenceGateway;
use crate::preview::PreviewScheduler;
use crate::session::{EditingSession, SessionRegistry};
use crate::settings::Settings;
use crate::status::{self, StatusInfo};
use crate::surface::{RenderSurface, SurfaceHost, SurfaceSlot};
use crate::view::ActiveView;

mod identity;
mod lifecycle;
mod preview;
mod store;
mod tabs;

pub use identity::ImportedFile;

/// Editing session model and preview pipeline for one project.
pub struct Workspace<H, R> {
	config: EditorConfig,
	gateway: Arc<dyn PersistenceGateway>,
	/// Set after the first gateway failure has been reported.
	storage_degraded: bool,
	host: H,
	render: R,
	sessions: SessionRegistry,
	view: ActiveView,
	preview: PreviewScheduler,
	/// A document was emitted and the render surface has not confirmed it.
	compiling: bool,
	settings: Settings,
	notifications: NotificationCenter,
	msg_tx: MsgSender,
	msg_rx: MsgReceiver,
}

impl<H, R> Workspace<H, R>
where
	H: SurfaceHost,
	R: RenderSurface,
{
	pub fn new(config: EditorConfig, gateway: Arc<dyn PersistenceGateway>, host: H, render: R) -> Self {
		let (msg_tx, msg_rx) = msg::channel();
		let preview = PreviewScheduler::new(config.preview_debounce, msg_tx.clone());
		Self {
			config,
			gateway,
			storage_degraded: false,
			host,
			render,
			sessions: SessionRegistry::new(),
			view: ActiveView::new(),
			preview,
			compiling: false,
			settings: Settings::default(),
			notifications: NotificationCenter::new(),
			msg_tx,
			msg_rx,
		}
	}

	pub fn config(&self) -> &EditorConfig {
		&self.config
	}

	pub fn host(&self) -> &H {
		&self.host
	}

	/// Mutable access to the editing widget, for simulating user input.
	///
	/// Text changes made here must be reported through
	/// [`handle_content_changed`](Self::handle_content_changed).
	pub fn host_mut(&mut self) -> &mut H {
		&mut self.host
	}

	pub fn render(&self) -> &R {
		&self.render
	}

	pub fn sessions(&self) -> &SessionRegistry {
		&self.sessions
	}

	pub fn view(&self) -> &ActiveView {
		&self.view
	}

	/// File bound to the primary surface.
	pub fn active(&self) -> Option<&FileId> {
		self.view.active()
	}

	pub fn active_session(&self) -> Option<&EditingSession> {
		self.view
			.active()
			.and_then(|id| self.sessions.get(id.as_str()))
	}

	/// Live content of an open file.
	pub fn content(&self, id: &str) -> Option<String> {
		self.sessions.content(id, &self.host)
	}

	pub fn settings(&self) -> Settings {
		self.settings
	}

	/// True until the render surface confirms the last emitted document.
	pub fn is_compiling(&self) -> bool {
		self.compiling
	}

	/// True once a gateway call has failed.
	pub fn is_storage_degraded(&self) -> bool {
		self.storage_degraded
	}

	pub fn preview_pending(&self) -> bool {
		self.preview.is_pending()
	}

	pub fn preview_scheduler(&self) -> &PreviewScheduler {
		&self.preview
	}

	/// Sender for host callbacks such as the render surface's ready signal.
	pub fn sender(&self) -> MsgSender {
		self.msg_tx.clone()
	}

	pub fn notifications(&self) -> &NotificationCenter {
		&self.notifications
	}

	pub fn take_notifications(&mut self) -> Vec<Notification> {
		self.notifications.take_pending()
	}

	/// Current status bar contents.
	pub fn status(&self) -> StatusInfo {
		let cursor = self.host.cursor(SurfaceSlot::Primary);
		let Some(session) = self.active_session() else {
			return StatusInfo::idle(cursor);
		};
		let size = self.host.text(session.buffer()).len();
		StatusInfo {
			language: status::language_label(session.language()),
			size: Some(status::format_file_size(size)),
			cursor,
			dirty: session.is_dirty(),
		}
	}

	fn notify(&mut self, notification: Notification) {
		self.notifications.push(notification);
	}
}
