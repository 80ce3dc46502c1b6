//! Async message bus between background timers, the render surface and the
//! workspace.
//!
//! ```text
//! debounce timer ──┐
//!                  ├──► EditorMsg ──► Workspace::handle_msg()
//! render surface ──┘
//! ```
//!
//! Senders never touch workspace state; they only post messages. The owner
//! of the [`crate::Workspace`] drains them with [`crate::Workspace::pump`] or
//! awaits them one at a time with [`crate::Workspace::next_msg`].

use tokio::sync::mpsc;

/// Channel sender for background tasks and host callbacks.
pub type MsgSender = mpsc::UnboundedSender<EditorMsg>;

/// Channel receiver owned by the workspace.
pub type MsgReceiver = mpsc::UnboundedReceiver<EditorMsg>;

/// Creates a new message channel pair.
pub fn channel() -> (MsgSender, MsgReceiver) {
	mpsc::unbounded_channel()
}

/// Messages dispatched to the workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMsg {
	/// A debounce timer ran out its quiet period.
	PreviewDue {
		/// Generation of the timer that fired; stale generations are ignored.
		generation: u64,
	},
	/// The render surface finished loading the last emitted document.
	PreviewLoaded,
}
