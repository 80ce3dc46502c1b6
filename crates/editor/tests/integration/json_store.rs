//! Workspace state surviving a restart through the JSON file store.

use std::sync::Arc;

use prism_editor::{CapturedPreview, EditorConfig, HeadlessHost, JsonFileGateway, Theme, Workspace};
use prism_primitives::FileId;

use crate::common::{TestWorkspace, type_into};

fn open(path: &std::path::Path) -> TestWorkspace {
	Workspace::new(
		EditorConfig::default(),
		Arc::new(JsonFileGateway::new(path)),
		HeadlessHost::new(),
		CapturedPreview::new(),
	)
}

#[tokio::test]
async fn test_saved_edits_and_settings_survive_restart() {
	let _ = tracing_subscriber::fmt::try_init();
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("prism.json");

	let mut first = open(&path);
	first.start().await;
	type_into(&mut first, "index.html", "<h1>persisted</h1>");
	assert!(first.save_active().await);
	first.create_file("extra.css").await.unwrap();
	first.cycle_theme().await;
	first.zoom_in().await;
	drop(first);

	let mut second = open(&path);
	second.start().await;
	assert!(!second.is_storage_degraded());
	assert_eq!(second.settings().theme, Theme::Light);
	assert_eq!(second.settings().font_size, 15);
	assert_eq!(second.active().map(FileId::as_str), Some("index.html"));
	assert_eq!(second.content("index.html").as_deref(), Some("<h1>persisted</h1>"));
	assert_eq!(second.export_file("extra.css").await.unwrap(), "");
	assert!(second.render().current().unwrap().contains("<h1>persisted</h1>"));
}

#[tokio::test]
async fn test_seeding_is_disabled_by_config() {
	let dir = tempfile::tempdir().unwrap();
	let config = EditorConfig {
		seed_defaults: false,
		..EditorConfig::default()
	};
	let mut ws = Workspace::new(
		config,
		Arc::new(JsonFileGateway::new(dir.path().join("empty.json"))),
		HeadlessHost::new(),
		CapturedPreview::new(),
	);
	ws.start().await;

	assert_eq!(ws.active(), None);
	assert!(ws.sessions().is_empty());
	assert!(
		ws.render()
			.current()
			.unwrap()
			.contains("No HTML file found")
	);
}
