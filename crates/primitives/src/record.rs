use serde::{Deserialize, Serialize};

use crate::ids::FileId;
use crate::language::Language;

/// Persisted representation of a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
	pub id: FileId,
	pub language: Language,
	pub content: String,
}

impl FileRecord {
	/// Creates a record whose language is detected from the identifier.
	pub fn new(id: FileId, content: impl Into<String>) -> Self {
		let language = id.language();
		Self {
			id,
			language,
			content: content.into(),
		}
	}

	pub fn empty(id: FileId) -> Self {
		Self::new(id, String::new())
	}
}
