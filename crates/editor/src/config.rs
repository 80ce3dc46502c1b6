//! Static workspace configuration.

use std::time::Duration;

use prism_primitives::FileId;

use crate::preview::DEFAULT_QUIET_PERIOD;

/// Name of the markup file preferred as the preview body.
pub const DEFAULT_ENTRY_FILE: &str = "index.html";

/// Knobs fixed for the lifetime of a [`crate::Workspace`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorConfig {
	/// Markup file used as the preview body and opened on start.
	pub entry_file: FileId,
	/// Quiet period after the last qualifying edit before the preview
	/// recompiles.
	pub preview_debounce: Duration,
	/// Whether [`crate::Workspace::start`] seeds an empty store with the
	/// welcome project.
	pub seed_defaults: bool,
}

impl Default for EditorConfig {
	fn default() -> Self {
		Self {
			entry_file: FileId::from_static(DEFAULT_ENTRY_FILE),
			preview_debounce: DEFAULT_QUIET_PERIOD,
			seed_defaults: true,
		}
	}
}
