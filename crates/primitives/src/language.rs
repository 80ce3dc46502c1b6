use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

/// Language identifier attached to records and buffers.
///
/// Serialized as the lowercase identifier (`"javascript"`, `"plaintext"`).
/// Unknown identifiers decode as [`Language::Plaintext`].
#[derive(
	Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, IntoStaticStr, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(from = "String", into = "String")]
pub enum Language {
	Html,
	Css,
	Javascript,
	Typescript,
	Json,
	Markdown,
	Python,
	Php,
	Java,
	Cpp,
	C,
	Csharp,
	Go,
	Rust,
	Ruby,
	#[default]
	Plaintext,
}

impl Language {
	/// Maps a file extension (case-insensitive) to a language.
	pub fn from_extension(ext: &str) -> Self {
		match ext.to_ascii_lowercase().as_str() {
			"html" | "htm" => Self::Html,
			"css" => Self::Css,
			"js" | "jsx" => Self::Javascript,
			"ts" | "tsx" => Self::Typescript,
			"json" => Self::Json,
			"md" => Self::Markdown,
			"py" => Self::Python,
			"php" => Self::Php,
			"java" => Self::Java,
			"cpp" => Self::Cpp,
			"c" => Self::C,
			"cs" => Self::Csharp,
			"go" => Self::Go,
			"rs" => Self::Rust,
			"rb" => Self::Ruby,
			_ => Self::Plaintext,
		}
	}

	pub fn as_str(self) -> &'static str {
		self.into()
	}
}

impl From<String> for Language {
	fn from(value: String) -> Self {
		value.parse().unwrap_or_default()
	}
}

impl From<Language> for String {
	fn from(language: Language) -> Self {
		language.as_str().to_owned()
	}
}

/// Role a file plays when the preview document is assembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
	/// Page body source (`.html`, `.htm`).
	Markup,
	/// Concatenated into the style block (`.css`).
	Stylesheet,
	/// Concatenated into the guarded script block (`.js`).
	Script,
	/// Ignored by the preview.
	Other,
}

impl AssetKind {
	pub fn from_extension(ext: &str) -> Self {
		match ext.to_ascii_lowercase().as_str() {
			"html" | "htm" => Self::Markup,
			"css" => Self::Stylesheet,
			"js" => Self::Script,
			_ => Self::Other,
		}
	}

	/// Returns true when edits to a file of this kind can change the preview.
	pub fn affects_preview(self) -> bool {
		!matches!(self, Self::Other)
	}
}
