//! End-to-end editing flows over a headless workspace.

use std::time::Duration;

use prism_editor::{EditorMsg, MarkupSource, NotificationLevel, SurfaceSlot};
use prism_primitives::FileId;

use crate::common::{type_into, workspace};

#[tokio::test]
async fn test_start_seeds_empty_store_and_compiles_once() {
	let (mut ws, gateway) = workspace(&[]);
	ws.start().await;

	let ids: Vec<String> = gateway.ids().into_iter().map(String::from).collect();
	assert_eq!(ids, ["index.html", "script.js", "style.css"]);
	assert_eq!(ws.active().map(FileId::as_str), Some("index.html"));
	assert_eq!(ws.render().load_count(), 1);

	let document = ws.render().current().unwrap();
	assert!(document.contains("Welcome to Prism"));
	assert!(document.contains("getElementById('greet')"));
	assert!(document.contains(".card {"));
}

#[tokio::test(start_paused = true)]
async fn test_edit_burst_yields_single_compile_with_final_content() {
	let (mut ws, _) = workspace(&[("index.html", "<p>0</p>")]);
	ws.open_file("index.html").await.unwrap();
	assert_eq!(ws.render().load_count(), 1);

	for n in 1..=10 {
		type_into(&mut ws, "index.html", &format!("<p>{n}</p>"));
		tokio::time::sleep(Duration::from_millis(90)).await;
		assert_eq!(ws.pump().await, 0);
	}

	let msg = ws.next_msg().await.unwrap();
	assert!(matches!(msg, EditorMsg::PreviewDue { .. }));
	ws.handle_msg(msg).await;

	assert_eq!(ws.render().load_count(), 2);
	assert!(ws.render().current().unwrap().contains("<p>10</p>"));
	assert!(!ws.preview_pending());

	tokio::time::sleep(Duration::from_secs(5)).await;
	assert_eq!(ws.pump().await, 0);
	assert_eq!(ws.render().load_count(), 2);
}

#[tokio::test]
async fn test_rename_then_read_yields_unsaved_content() {
	let (mut ws, gateway) = workspace(&[("index.html", "<p>a</p>"), ("app.js", "let v = 1;")]);
	ws.open_file("app.js").await.unwrap();
	type_into(&mut ws, "app.js", "let v = 2;");

	ws.rename_file("app.js", "main.js").await.unwrap();

	assert_eq!(ws.export_file("main.js").await.unwrap(), "let v = 2;");
	assert!(ws.export_file("app.js").await.is_err());
	assert!(gateway.record("app.js").is_none());
	assert_eq!(ws.active().map(FileId::as_str), Some("main.js"));
	assert_eq!(ws.sessions().ids().count(), 1);

	let notes = ws.take_notifications();
	assert!(notes.iter().any(|n| n.message == "Renamed to \"main.js\""));
}

#[tokio::test]
async fn test_deleting_open_file_releases_buffer_and_record() {
	let (mut ws, gateway) = workspace(&[("index.html", ""), ("a.css", "p{}"), ("b.css", "")]);
	ws.open_file("a.css").await.unwrap();
	ws.open_file("b.css").await.unwrap();
	ws.open_file("index.html").await.unwrap();
	let buffer = ws.sessions().get("a.css").unwrap().buffer_id();

	assert!(ws.delete_file("a.css").await);
	assert!(!ws.host().contains(buffer));
	assert!(gateway.record("a.css").is_none());
	assert_eq!(ws.active().map(FileId::as_str), Some("index.html"));

	let doc = ws.refresh_preview().await;
	assert_eq!(doc.stylesheets, [FileId::from_static("b.css")]);
}

#[tokio::test]
async fn test_closing_active_tab_activates_last_remaining() {
	let (mut ws, _) = workspace(&[("a.js", ""), ("b.js", ""), ("c.js", "")]);
	for id in ["a.js", "b.js", "c.js"] {
		ws.open_file(id).await.unwrap();
	}
	ws.switch_to("a.js").await.unwrap();

	assert!(ws.close_tab("a.js"));
	assert_eq!(ws.active().map(FileId::as_str), Some("c.js"));
	let bound = ws.host().bound(SurfaceSlot::Primary);
	assert_eq!(bound, Some(ws.sessions().get("c.js").unwrap().buffer_id()));

	assert!(!ws.close_tab("a.js"));
}

#[tokio::test]
async fn test_unavailable_store_degrades_to_memory() {
	let (mut ws, gateway) = workspace(&[]);
	gateway.set_available(false);

	ws.start().await;
	assert!(ws.is_storage_degraded());
	assert_eq!(ws.active().map(FileId::as_str), Some("index.html"));
	assert!(ws.content("index.html").unwrap().contains("Welcome to Prism"));
	assert_eq!(ws.render().load_count(), 1);
	let rendered = ws.render().current().unwrap();
	assert!(rendered.contains("Welcome to Prism"));
	assert!(!rendered.contains("No HTML file found"));

	let id = ws.create_file("scratch.js").await.unwrap();
	type_into(&mut ws, id.as_str(), "console.log('kept')");
	assert!(!ws.save_active().await);
	assert!(ws.active_session().unwrap().is_dirty());
	assert_eq!(ws.content("scratch.js").as_deref(), Some("console.log('kept')"));

	let doc = ws.refresh_preview().await;
	assert_eq!(doc.markup, MarkupSource::Entry(FileId::from_static("index.html")));
	assert_eq!(doc.scripts, [FileId::from_static("scratch.js")]);
	assert!(doc.html.contains("console.log('kept')"));

	let warnings: Vec<_> = ws
		.take_notifications()
		.into_iter()
		.filter(|n| n.level == NotificationLevel::Warning)
		.collect();
	assert_eq!(warnings.len(), 1);

	gateway.set_available(true);
	assert!(ws.save_active().await);
	assert_eq!(gateway.record("scratch.js").unwrap().content, "console.log('kept')");
	assert!(!ws.active_session().unwrap().is_dirty());
}

#[tokio::test]
async fn test_preview_falls_back_without_entry_file() {
	let (mut ws, _) = workspace(&[("about.html", "<p>about</p>")]);
	let doc = ws.refresh_preview().await;
	assert_eq!(doc.markup, MarkupSource::FirstMarkup(FileId::from_static("about.html")));

	ws.delete_file("about.html").await;
	let doc = ws.refresh_preview().await;
	assert_eq!(doc.markup, MarkupSource::Placeholder);
}
