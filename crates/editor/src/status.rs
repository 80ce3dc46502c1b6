//! Status bar contents.

use prism_primitives::{Language, Position};

/// Label shown when no file is active.
pub const NO_FILE_LABEL: &str = "Plain Text";

/// Snapshot of what the status bar displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusInfo {
	/// Language label of the active file.
	pub language: String,
	/// Human readable size of the active buffer, if a file is active.
	pub size: Option<String>,
	/// Primary surface cursor.
	pub cursor: Position,
	/// Whether the active session has unsaved edits.
	pub dirty: bool,
}

impl StatusInfo {
	pub(crate) fn idle(cursor: Position) -> Self {
		Self {
			language: NO_FILE_LABEL.to_owned(),
			size: None,
			cursor,
			dirty: false,
		}
	}
}

/// Language id with its first letter upper-cased (`html` becomes `Html`).
pub fn language_label(language: Language) -> String {
	let id = language.as_str();
	let mut chars = id.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}

/// Formats a byte count as `B`, `KB` or `MB` with one decimal.
pub fn format_file_size(bytes: usize) -> String {
	const KIB: usize = 1024;
	const MIB: usize = 1024 * 1024;

	if bytes < KIB {
		format!("{bytes} B")
	} else if bytes < MIB {
		format!("{:.1} KB", bytes as f64 / KIB as f64)
	} else {
		format!("{:.1} MB", bytes as f64 / MIB as f64)
	}
}
