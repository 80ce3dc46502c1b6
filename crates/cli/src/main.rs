//! Prism command line.
//!
//! Drives a headless workspace over a JSON store, so a project can be
//! inspected, edited and previewed without a browser.

mod cli;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, bail};
use clap::Parser;
use cli::{Cli, Command};
use prism_editor::status::format_file_size;
use prism_editor::{
	CapturedPreview, EditorConfig, HeadlessHost, ImportedFile, JsonFileGateway, NotificationLevel,
	PersistenceGateway, Workspace, seed,
};
use tokio::io::AsyncWriteExt;

type CliWorkspace = Workspace<HeadlessHost, CapturedPreview>;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();
	setup_tracing(cli.verbose);

	let gateway = Arc::new(JsonFileGateway::new(&cli.store));
	tracing::debug!(store = %cli.store.display(), "cli.store");

	match cli.command {
		Command::Ls => {
			let listing = list(gateway.as_ref()).await?;
			emit(None, &listing).await
		}
		Command::Seed => {
			let written = seed_store(gateway.as_ref()).await?;
			eprintln!("seeded {written} files into {}", cli.store.display());
			Ok(())
		}
		Command::New { name } => {
			let mut ws = workspace(gateway);
			let created = ws.create_file(&name).await;
			finish(&mut ws, &cli.store)?;
			println!("{}", created?);
			Ok(())
		}
		Command::Mv { from, to } => {
			let mut ws = workspace(gateway);
			let renamed = ws.rename_file(&from, &to).await;
			finish(&mut ws, &cli.store)?;
			println!("{}", renamed?);
			Ok(())
		}
		Command::Rm { name } => {
			let mut ws = workspace(gateway);
			let deleted = ws.delete_file(&name).await;
			finish(&mut ws, &cli.store)?;
			if !deleted {
				bail!("no file named {name:?}");
			}
			Ok(())
		}
		Command::Import { paths } => {
			let mut files = Vec::with_capacity(paths.len());
			for path in &paths {
				files.push(read_import(path).await?);
			}
			let mut ws = workspace(gateway);
			let imported = ws.import_files(files).await;
			finish(&mut ws, &cli.store)?;
			if imported.len() < paths.len() {
				eprintln!("skipped {} non-text files", paths.len() - imported.len());
			}
			Ok(())
		}
		Command::Export { name, out } => {
			let mut ws = workspace(gateway);
			let content = ws.export_file(&name).await;
			finish(&mut ws, &cli.store)?;
			emit(out.as_deref(), &content?).await
		}
		Command::Preview { out } => {
			let mut ws = workspace(gateway);
			let document = ws.refresh_preview().await;
			finish(&mut ws, &cli.store)?;
			tracing::info!(markup = ?document.markup, bytes = document.html.len(), "cli.preview");
			emit(out.as_deref(), &document.html).await
		}
		Command::Settings {
			cycle_theme,
			zoom_in,
			zoom_out,
		} => {
			let mut ws = workspace(gateway);
			ws.restore_settings().await;
			if cycle_theme {
				ws.cycle_theme().await;
			}
			if zoom_in {
				ws.zoom_in().await;
			}
			if zoom_out {
				ws.zoom_out().await;
			}
			finish(&mut ws, &cli.store)?;
			let settings = ws.settings();
			println!("theme: {}\nfont size: {}px", settings.theme, settings.font_size);
			Ok(())
		}
	}
}

fn workspace(gateway: Arc<JsonFileGateway>) -> CliWorkspace {
	let config = EditorConfig {
		seed_defaults: false,
		..EditorConfig::default()
	};
	Workspace::new(config, gateway, HeadlessHost::new(), CapturedPreview::new())
}

/// Prints queued notifications and fails if the store could not be used.
fn finish(ws: &mut CliWorkspace, store: &Path) -> anyhow::Result<()> {
	for notification in ws.take_notifications() {
		match notification.level {
			NotificationLevel::Warning => eprintln!("warning: {notification}"),
			NotificationLevel::Error => eprintln!("error: {notification}"),
			NotificationLevel::Info | NotificationLevel::Success => eprintln!("{notification}"),
		}
	}
	if ws.is_storage_degraded() {
		bail!("store {} could not be read or written", store.display());
	}
	Ok(())
}

/// One line per stored file: name, language and size.
async fn list(gateway: &dyn PersistenceGateway) -> anyhow::Result<String> {
	let records = gateway.get_all().await.context("reading store")?;
	let mut listing = String::new();
	for record in records {
		listing.push_str(&format!(
			"{:<24} {:<12} {}\n",
			record.id.as_str(),
			record.language.as_str(),
			format_file_size(record.content.len())
		));
	}
	Ok(listing)
}

/// Writes the welcome project into an empty store. Returns how many files
/// were written.
async fn seed_store(gateway: &dyn PersistenceGateway) -> anyhow::Result<usize> {
	let existing = gateway.get_all().await.context("reading store")?;
	if !existing.is_empty() {
		bail!("store already holds {} files", existing.len());
	}
	let records = seed::default_records();
	let count = records.len();
	for record in records {
		gateway.put(record).await.context("writing store")?;
	}
	Ok(count)
}

async fn read_import(path: &Path) -> anyhow::Result<ImportedFile> {
	let name = path
		.file_name()
		.and_then(|name| name.to_str())
		.with_context(|| format!("{} has no usable file name", path.display()))?;
	let content = tokio::fs::read_to_string(path)
		.await
		.with_context(|| format!("reading {}", path.display()))?;
	Ok(ImportedFile::new(name, content))
}

async fn emit(out: Option<&Path>, text: &str) -> anyhow::Result<()> {
	match out {
		Some(path) => tokio::fs::write(path, text)
			.await
			.with_context(|| format!("writing {}", path.display())),
		None => {
			let mut stdout = tokio::io::stdout();
			stdout.write_all(text.as_bytes()).await?;
			stdout.flush().await?;
			Ok(())
		}
	}
}

fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("prism=debug,prism_editor=debug,info")
		} else {
			EnvFilter::new("warn")
		}
	});

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.init();
}
