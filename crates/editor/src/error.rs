//! Error types for session and identity operations.

use prism_primitives::{FileId, NameError};
use thiserror::Error;

/// Recoverable failures of workspace operations.
///
/// Every variant leaves the workspace untouched; callers report it and
/// carry on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
	/// A create or rename target already exists.
	#[error("file \"{0}\" already exists")]
	DuplicateIdentifier(FileId),

	/// The requested name is not a valid file identifier.
	#[error("invalid file name {name:?}: {reason}")]
	InvalidName {
		/// The name as entered.
		name: String,
		/// Why it was rejected.
		#[source]
		reason: NameError,
	},

	/// The operation referenced a file that is neither open nor persisted.
	#[error("unknown file \"{0}\"")]
	UnknownFile(String),
}

impl EditorError {
	pub(crate) fn invalid_name(name: &str, reason: NameError) -> Self {
		Self::InvalidName {
			name: name.to_owned(),
			reason,
		}
	}
}

/// Result type for workspace operations.
pub type Result<T> = std::result::Result<T, EditorError>;
