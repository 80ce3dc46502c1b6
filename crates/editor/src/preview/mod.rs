//! Live preview: document assembly and debounced recompilation.
//!
//! [`compile`] is pure. It takes a snapshot of every persisted record and a
//! lookup for live buffer content, and produces one self-contained HTML
//! document:
//!
//! ```text
//! <head>  base rule + every stylesheet joined by '\n'
//! <body>  markup (entry file, else first markup file, else placeholder)
//!         <script> try { every script joined by '\n' } catch (err) { … }
//!                  postMessage({ type: 'previewLoaded' }) to the parent
//! ```
//!
//! Stylesheets and scripts are concatenated in storage order. Open sessions
//! win over persisted content, so unsaved edits show up in the preview.
//!
//! [`PreviewScheduler`] coalesces bursts of edits into a single compile.

use std::borrow::Cow;

use prism_primitives::{AssetKind, FileId, FileRecord};

mod schedule;

pub use schedule::{DEFAULT_QUIET_PERIOD, PreviewScheduler};

/// Body shown when no markup file exists.
pub const PLACEHOLDER_MARKUP: &str =
	"<h1>No HTML file found</h1><p>Create an index.html file to see preview</p>";

/// Rule prepended to every stylesheet block.
const BASE_STYLE: &str = "body { margin: 0; padding: 20px; font-family: sans-serif; }";

/// Delay before the document reports itself loaded to its parent, in ms.
const LOADED_NOTIFY_DELAY_MS: u32 = 500;

/// Where the body markup of a compiled document came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupSource {
	/// The configured entry file.
	Entry(FileId),
	/// No entry file; the first markup record in storage order.
	FirstMarkup(FileId),
	/// No markup record at all.
	Placeholder,
}

/// Output of [`compile`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewDocument {
	/// The assembled document, ready for a [`crate::RenderSurface`].
	pub html: String,
	pub markup: MarkupSource,
	/// Stylesheets included, in concatenation order.
	pub stylesheets: Vec<FileId>,
	/// Scripts included, in concatenation order.
	pub scripts: Vec<FileId>,
}

/// Assembles the preview document.
///
/// `live` returns the content of an open session for a file, or `None` to
/// fall back to the persisted record content.
pub fn compile<F>(records: &[FileRecord], entry: &str, mut live: F) -> PreviewDocument
where
	F: FnMut(&FileId) -> Option<String>,
{
	let mut resolve = |record: &FileRecord| -> String {
		live(&record.id).unwrap_or_else(|| record.content.clone())
	};

	let (markup_source, markup) = match records.iter().find(|r| r.id.as_str() == entry) {
		Some(record) => (MarkupSource::Entry(record.id.clone()), resolve(record)),
		None => match records.iter().find(|r| r.id.asset_kind() == AssetKind::Markup) {
			Some(record) => (MarkupSource::FirstMarkup(record.id.clone()), resolve(record)),
			None => (MarkupSource::Placeholder, PLACEHOLDER_MARKUP.to_owned()),
		},
	};

	let mut stylesheets = Vec::new();
	let mut styles = Vec::new();
	let mut scripts = Vec::new();
	let mut code = Vec::new();
	for record in records {
		match record.id.asset_kind() {
			AssetKind::Stylesheet => {
				stylesheets.push(record.id.clone());
				styles.push(resolve(record));
			}
			AssetKind::Script => {
				scripts.push(record.id.clone());
				code.push(resolve(record));
			}
			AssetKind::Markup | AssetKind::Other => {}
		}
	}

	let html = assemble(
		&markup,
		&escape_closing_tags(&styles.join("\n")),
		&escape_closing_tags(&code.join("\n")),
	);

	PreviewDocument {
		html,
		markup: markup_source,
		stylesheets,
		scripts,
	}
}

fn assemble(markup: &str, styles: &str, scripts: &str) -> String {
	format!(
		r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <style>
{BASE_STYLE}
{styles}
    </style>
  </head>
  <body>
{markup}
    <script>
try {{
{scripts}
}} catch (err) {{
  console.error('Preview error:', err);
}}
setTimeout(() => {{
  if (window.parent) {{
    window.parent.postMessage({{ type: 'previewLoaded' }}, '*');
  }}
}}, {LOADED_NOTIFY_DELAY_MS});
    </script>
  </body>
</html>
"#
	)
}

/// Tags a source file must not be able to close from inside its block.
const GUARDED_TAGS: [&str; 2] = ["script", "style"];

/// Rewrites `</script` and `</style` (any case) to `<\/script` and
/// `<\/style`.
///
/// Both forms are equivalent inside JavaScript strings and CSS, but only the
/// escaped one leaves the enclosing element open.
pub(crate) fn escape_closing_tags(source: &str) -> Cow<'_, str> {
	let bytes = source.as_bytes();
	let mut escaped: Option<String> = None;
	let mut copied = 0;
	let mut cursor = 0;

	while let Some(offset) = source[cursor..].find("</") {
		let at = cursor + offset;
		let name = &bytes[at + 2..];
		let guarded = GUARDED_TAGS.iter().any(|tag| {
			name.len() >= tag.len() && name[..tag.len()].eq_ignore_ascii_case(tag.as_bytes())
		});
		if guarded {
			let out = escaped.get_or_insert_with(|| String::with_capacity(source.len() + 8));
			out.push_str(&source[copied..at]);
			out.push_str("<\\/");
			copied = at + 2;
		}
		cursor = at + 2;
	}

	match escaped {
		Some(mut out) => {
			out.push_str(&source[copied..]);
			Cow::Owned(out)
		}
		None => Cow::Borrowed(source),
	}
}
