//! Common utilities for workspace integration tests.

use std::sync::Arc;

use prism_editor::{CapturedPreview, EditorConfig, HeadlessHost, MemoryGateway, Workspace};
use prism_primitives::{FileId, FileRecord};

pub type TestWorkspace = Workspace<HeadlessHost, CapturedPreview>;

/// Builds a headless workspace over an in-memory store holding `files`.
pub fn workspace(files: &[(&'static str, &str)]) -> (TestWorkspace, Arc<MemoryGateway>) {
	let _ = tracing_subscriber::fmt::try_init();
	let gateway = Arc::new(MemoryGateway::with_records(
		files
			.iter()
			.map(|(name, content)| FileRecord::new(FileId::from_static(name), *content)),
	));
	let ws = Workspace::new(
		EditorConfig::default(),
		gateway.clone(),
		HeadlessHost::new(),
		CapturedPreview::new(),
	);
	(ws, gateway)
}

/// Replaces the text of an open file and reports the change, the way the
/// widget's change listener would.
pub fn type_into(ws: &mut TestWorkspace, id: &str, text: &str) {
	let buffer = ws
		.sessions()
		.get(id)
		.expect("file is open")
		.buffer_id();
	assert!(ws.host_mut().set_text(buffer, text));
	ws.handle_content_changed(buffer);
}
