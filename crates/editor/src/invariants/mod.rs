pub(crate) mod catalog;

use std::sync::Arc;
use std::time::Duration;

use prism_primitives::{FileId, FileRecord, Position};
use proptest::prelude::*;

use crate::config::EditorConfig;
use crate::headless::{CapturedPreview, HeadlessHost};
use crate::msg::EditorMsg;
use crate::persistence::MemoryGateway;
use crate::session::SessionRegistry;
use crate::surface::{SurfaceHost, SurfaceSlot};
use crate::view::ActiveView;
use crate::workspace::Workspace;

const FILES: [&str; 4] = ["index.html", "style.css", "script.js", "notes.md"];

#[derive(Debug, Clone, Copy)]
enum Op {
	Open(usize),
	Switch(usize),
	Close(usize),
	CloseAll,
	ToggleSplit,
}

fn op() -> impl Strategy<Value = Op> {
	let file = 0..FILES.len();
	prop_oneof![
		4 => file.clone().prop_map(Op::Open),
		4 => file.clone().prop_map(Op::Switch),
		3 => file.prop_map(Op::Close),
		1 => Just(Op::CloseAll),
		1 => Just(Op::ToggleSplit),
	]
}

#[derive(Default)]
struct Model {
	host: HeadlessHost,
	sessions: SessionRegistry,
	view: ActiveView,
}

impl Model {
	fn apply(&mut self, op: Op) {
		match op {
			Op::Open(i) => {
				let record = FileRecord::new(FileId::from_static(FILES[i]), FILES[i]);
				self.sessions.open(&record, &mut self.host);
				let _ = self.view.switch_to(&mut self.sessions, &mut self.host, FILES[i]);
			}
			Op::Switch(i) => {
				let registered = self.sessions.contains(FILES[i]);
				let switched = self
					.view
					.switch_to(&mut self.sessions, &mut self.host, FILES[i]);
				assert_eq!(switched.is_ok(), registered);
			}
			Op::Close(i) => {
				self.view.close(&mut self.sessions, &mut self.host, FILES[i]);
			}
			Op::CloseAll => {
				self.view.close_all(&mut self.sessions, &mut self.host);
			}
			Op::ToggleSplit => {
				if self.view.is_split() {
					self.view.close_split(&mut self.host);
				} else {
					self.view.open_split(&self.sessions, &mut self.host);
				}
			}
		}
	}

	fn check(&self) {
		match self.view.active() {
			Some(id) => {
				let session = self
					.sessions
					.get(id.as_str())
					.unwrap_or_else(|| panic!("active file {id} has no session"));
				assert_eq!(self.host.bound(SurfaceSlot::Primary), Some(session.buffer_id()));
			}
			None => assert_eq!(self.host.bound(SurfaceSlot::Primary), None),
		}

		let split_buffers = usize::from(self.view.split_buffer().is_some());
		assert_eq!(self.host.live_buffers(), self.sessions.len() + split_buffers);
	}
}

proptest! {
	#[test]
	fn test_active_file_is_registered(ops in prop::collection::vec(op(), 0..48)) {
		let mut model = Model::default();
		for op in ops {
			model.apply(op);
			model.check();
		}
	}
}

#[test]
fn test_reopen_returns_existing_session() {
	let mut host = HeadlessHost::new();
	let mut sessions = SessionRegistry::new();
	let record = FileRecord::new(FileId::from_static("a.js"), "v1");

	let buffer = sessions.open(&record, &mut host).buffer_id();
	host.set_text(buffer, "v2");
	sessions.mark_dirty("a.js");

	let again = sessions.open(&FileRecord::new(FileId::from_static("a.js"), "v3"), &mut host);
	assert_eq!(again.buffer_id(), buffer);
	assert!(again.is_dirty());
	assert_eq!(sessions.len(), 1);
	assert_eq!(host.live_buffers(), 1);
	assert_eq!(sessions.content("a.js", &host).as_deref(), Some("v2"));
}

#[test]
fn test_cursor_captured_before_rebind() {
	let mut model = Model::default();
	model.apply(Op::Open(0));
	model.host.set_cursor(SurfaceSlot::Primary, Position::new(3, 2));
	model.apply(Op::Open(1));

	let captured = model.sessions.get(FILES[0]).and_then(|s| s.last_cursor());
	assert_eq!(captured, Some(Position::new(3, 2)));
}

#[tokio::test]
async fn test_split_buffer_is_independent() {
	let gateway = Arc::new(MemoryGateway::with_records([FileRecord::new(
		FileId::from_static("a.js"),
		"main",
	)]));
	let mut ws = Workspace::new(
		EditorConfig::default(),
		gateway,
		HeadlessHost::new(),
		CapturedPreview::new(),
	);
	ws.open_file("a.js").await.unwrap();
	let primary = ws.active_session().unwrap().buffer_id();

	assert!(ws.toggle_split());
	let split = ws.view().split_buffer().unwrap().id();
	ws.host_mut().set_text(split, "copy edited");
	ws.handle_content_changed(split);
	assert!(!ws.active_session().unwrap().is_dirty());
	assert!(!ws.preview_pending());

	assert!(!ws.toggle_split());
	assert!(ws.host().contains(primary));
	assert_eq!(ws.host().bound(SurfaceSlot::Primary), Some(primary));
	assert_eq!(ws.content("a.js").as_deref(), Some("main"));
}

#[tokio::test]
async fn test_rejected_identity_change_mutates_nothing() {
	let gateway = Arc::new(MemoryGateway::with_records([
		FileRecord::new(FileId::from_static("a.js"), "a"),
		FileRecord::new(FileId::from_static("b.js"), "b"),
	]));
	let mut ws = Workspace::new(
		EditorConfig::default(),
		gateway.clone(),
		HeadlessHost::new(),
		CapturedPreview::new(),
	);
	ws.open_file("a.js").await.unwrap();
	let buffer = ws.active_session().unwrap().buffer_id();

	assert!(ws.rename_file("a.js", "b.js").await.is_err());
	assert!(ws.rename_file("a.js", "x/y.js").await.is_err());
	assert!(ws.create_file("b.js").await.is_err());

	assert_eq!(ws.active_session().unwrap().buffer_id(), buffer);
	assert_eq!(ws.sessions().len(), 1);
	assert_eq!(gateway.record("a.js").unwrap().content, "a");
	assert_eq!(gateway.record("b.js").unwrap().content, "b");
}

#[tokio::test(start_paused = true)]
async fn test_stale_timer_never_compiles() {
	let gateway = Arc::new(MemoryGateway::with_records([FileRecord::new(
		FileId::from_static("index.html"),
		"<p>0</p>",
	)]));
	let mut ws = Workspace::new(
		EditorConfig::default(),
		gateway,
		HeadlessHost::new(),
		CapturedPreview::new(),
	);
	ws.open_file("index.html").await.unwrap();
	let loads = ws.render().load_count();
	let buffer = ws.active_session().unwrap().buffer_id();

	ws.host_mut().set_text(buffer, "<p>1</p>");
	ws.handle_content_changed(buffer);
	let first = ws.preview_scheduler().generation();
	ws.host_mut().set_text(buffer, "<p>2</p>");
	ws.handle_content_changed(buffer);

	ws.handle_msg(EditorMsg::PreviewDue { generation: first }).await;
	assert_eq!(ws.render().load_count(), loads);

	tokio::time::sleep(ws.config().preview_debounce + Duration::from_millis(1)).await;
	ws.pump().await;
	assert_eq!(ws.render().load_count(), loads + 1);
	assert!(ws.render().current().unwrap().contains("<p>2</p>"));
}
