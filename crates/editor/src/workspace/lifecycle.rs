use serde_json::json;

use super::Workspace;
use crate::seed;
use crate::settings::{FONT_SIZE_KEY, THEME_KEY, Theme};
use crate::surface::{RenderSurface, SurfaceHost};

impl<H, R> Workspace<H, R>
where
	H: SurfaceHost,
	R: RenderSurface,
{
	/// Brings the workspace up.
	///
	/// Restores settings, seeds an empty store with the welcome project when
	/// configured to, opens the entry file if it exists and compiles the
	/// preview once.
	pub async fn start(&mut self) {
		self.restore_settings().await;

		let mut records = self.load_records().await;
		if records.is_empty() && self.config.seed_defaults {
			records = seed::default_records();
			for record in &records {
				self.persist_record(record.clone()).await;
			}
			tracing::info!(files = records.len(), "workspace.seed");
		}

		let entry = self.config.entry_file.clone();
		if let Some(record) = records.iter().find(|r| r.id == entry) {
			self.sessions.open(record, &mut self.host);
			if let Err(error) = self.view.switch_to(&mut self.sessions, &mut self.host, entry.as_str()) {
				tracing::warn!(%error, "workspace.open_entry_failed");
			}
		}

		self.refresh_preview().await;
		tracing::info!(
			files = records.len(),
			active = ?self.view.active(),
			theme = %self.settings.theme,
			font_size = self.settings.font_size,
			"workspace.start"
		);
	}

	/// Loads persisted settings. Missing or malformed values keep defaults.
	pub async fn restore_settings(&mut self) {
		if let Some(value) = self.load_setting(THEME_KEY).await {
			self.settings.apply_theme(&value);
		}
		if let Some(value) = self.load_setting(FONT_SIZE_KEY).await {
			self.settings.apply_font_size(&value);
		}
	}

	/// Advances to the next theme and persists it.
	pub async fn cycle_theme(&mut self) -> Theme {
		let theme = self.settings.theme.next();
		self.settings.theme = theme;
		self.persist_setting(THEME_KEY, json!(theme.as_str())).await;
		tracing::debug!(%theme, "settings.theme");
		theme
	}

	/// Grows the editor font by one step. Returns the resulting size.
	pub async fn zoom_in(&mut self) -> u8 {
		if self.settings.zoom_in() {
			self.persist_font_size().await;
		}
		self.settings.font_size
	}

	/// Shrinks the editor font by one step. Returns the resulting size.
	pub async fn zoom_out(&mut self) -> u8 {
		if self.settings.zoom_out() {
			self.persist_font_size().await;
		}
		self.settings.font_size
	}

	async fn persist_font_size(&mut self) {
		let size = self.settings.font_size;
		self.persist_setting(FONT_SIZE_KEY, json!(size)).await;
		tracing::debug!(size, "settings.font_size");
	}
}
