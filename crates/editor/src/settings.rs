//! User settings persisted through the gateway.

use serde_json::Value;
use strum::{Display, EnumString, IntoStaticStr};

/// Setting key for [`Settings::theme`].
pub const THEME_KEY: &str = "theme";
/// Setting key for [`Settings::font_size`].
pub const FONT_SIZE_KEY: &str = "fontSize";

pub const DEFAULT_FONT_SIZE: u8 = 14;
pub const MIN_FONT_SIZE: u8 = 8;
pub const MAX_FONT_SIZE: u8 = 36;

/// Colour theme, cycled in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum Theme {
	#[default]
	OneDark,
	Light,
	HighContrast,
}

impl Theme {
	/// The theme after this one, wrapping around.
	pub fn next(self) -> Self {
		match self {
			Self::OneDark => Self::Light,
			Self::Light => Self::HighContrast,
			Self::HighContrast => Self::OneDark,
		}
	}

	pub fn as_str(self) -> &'static str {
		self.into()
	}
}

/// Live settings of a workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
	pub theme: Theme,
	pub font_size: u8,
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			theme: Theme::default(),
			font_size: DEFAULT_FONT_SIZE,
		}
	}
}

impl Settings {
	/// Grows the font by one step. Returns false at the upper bound.
	pub fn zoom_in(&mut self) -> bool {
		if self.font_size >= MAX_FONT_SIZE {
			return false;
		}
		self.font_size += 1;
		true
	}

	/// Shrinks the font by one step. Returns false at the lower bound.
	pub fn zoom_out(&mut self) -> bool {
		if self.font_size <= MIN_FONT_SIZE {
			return false;
		}
		self.font_size -= 1;
		true
	}

	/// Applies a stored theme value. Unknown names are ignored.
	pub fn apply_theme(&mut self, value: &Value) -> bool {
		match value.as_str().and_then(|name| name.parse().ok()) {
			Some(theme) => {
				self.theme = theme;
				true
			}
			None => {
				tracing::debug!(?value, "settings.theme_ignored");
				false
			}
		}
	}

	/// Applies a stored font size, clamped to the supported range. Values
	/// that are not positive integers are ignored.
	pub fn apply_font_size(&mut self, value: &Value) -> bool {
		match value.as_u64().filter(|size| *size > 0) {
			Some(size) => {
				let clamped = size.clamp(u64::from(MIN_FONT_SIZE), u64::from(MAX_FONT_SIZE));
				self.font_size = u8::try_from(clamped).unwrap_or(DEFAULT_FONT_SIZE);
				true
			}
			None => {
				tracing::debug!(?value, "settings.font_size_ignored");
				false
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	#[test]
	fn test_theme_cycle_and_names() {
		assert_eq!(Theme::OneDark.next(), Theme::Light);
		assert_eq!(Theme::Light.next(), Theme::HighContrast);
		assert_eq!(Theme::HighContrast.next(), Theme::OneDark);
		assert_eq!(Theme::HighContrast.as_str(), "high-contrast");
		assert_eq!("one-dark".parse::<Theme>().unwrap(), Theme::OneDark);
	}

	#[test]
	fn test_zoom_is_bounded() {
		let mut settings = Settings {
			font_size: MAX_FONT_SIZE - 1,
			..Settings::default()
		};
		assert!(settings.zoom_in());
		assert!(!settings.zoom_in());
		assert_eq!(settings.font_size, MAX_FONT_SIZE);

		settings.font_size = MIN_FONT_SIZE;
		assert!(!settings.zoom_out());
		assert_eq!(settings.font_size, MIN_FONT_SIZE);
	}

	#[test]
	fn test_apply_stored_values() {
		let mut settings = Settings::default();
		assert!(settings.apply_theme(&json!("light")));
		assert!(!settings.apply_theme(&json!("solarized")));
		assert_eq!(settings.theme, Theme::Light);

		assert!(settings.apply_font_size(&json!(99)));
		assert_eq!(settings.font_size, MAX_FONT_SIZE);
		assert!(!settings.apply_font_size(&json!("big")));
		assert!(!settings.apply_font_size(&json!(0)));
		assert_eq!(settings.font_size, MAX_FONT_SIZE);
	}
}
