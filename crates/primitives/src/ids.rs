use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::language::{AssetKind, Language};

/// Characters that would introduce a directory hierarchy into a file name.
pub const PATH_SEPARATORS: [char; 2] = ['/', '\\'];

/// Reasons a string cannot be used as a [`FileId`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
	/// The name is empty.
	#[error("file name is empty")]
	Empty,
	/// The name contains `/` or `\`.
	#[error("file name {0:?} contains a path separator")]
	PathSeparator(String),
}

/// Identity of a file in the flat workspace namespace.
///
/// The identifier is the file name itself. It is never empty and never
/// contains a path separator; the extension (text after the final `.`)
/// drives language detection and preview classification.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FileId(String);

impl FileId {
	/// Validates `name` and wraps it as an identifier.
	pub fn new(name: impl Into<String>) -> Result<Self, NameError> {
		let name = name.into();
		if name.is_empty() {
			return Err(NameError::Empty);
		}
		if name.contains(PATH_SEPARATORS) {
			return Err(NameError::PathSeparator(name));
		}
		Ok(Self(name))
	}

	/// Wraps a compile-time name known to be valid.
	///
	/// # Panics
	///
	/// Panics if `name` is empty or contains a path separator.
	pub fn from_static(name: &'static str) -> Self {
		match Self::new(name) {
			Ok(id) => id,
			Err(error) => panic!("invalid static file id {name:?}: {error}"),
		}
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Returns the text after the final `.`, if any.
	pub fn extension(&self) -> Option<&str> {
		self.0.rsplit_once('.').map(|(_, ext)| ext)
	}

	/// Language inferred from the extension.
	pub fn language(&self) -> Language {
		self.extension().map(Language::from_extension).unwrap_or_default()
	}

	/// Preview classification inferred from the extension.
	pub fn asset_kind(&self) -> AssetKind {
		self.extension().map(AssetKind::from_extension).unwrap_or(AssetKind::Other)
	}
}

impl fmt::Display for FileId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl AsRef<str> for FileId {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl Borrow<str> for FileId {
	fn borrow(&self) -> &str {
		&self.0
	}
}

impl PartialEq<str> for FileId {
	fn eq(&self, other: &str) -> bool {
		self.0 == other
	}
}

impl PartialEq<&str> for FileId {
	fn eq(&self, other: &&str) -> bool {
		self.0 == *other
	}
}

impl TryFrom<String> for FileId {
	type Error = NameError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		Self::new(value)
	}
}

impl From<FileId> for String {
	fn from(id: FileId) -> Self {
		id.0
	}
}

/// Handle identifying a text buffer owned by the editing surface host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BufferId(pub u64);

impl fmt::Display for BufferId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "buffer#{}", self.0)
	}
}
