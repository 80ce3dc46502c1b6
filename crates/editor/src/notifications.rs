//! User notification queue.
//!
//! The workspace pushes typed notifications as operations complete or fail.
//! Frontends drain them with [`NotificationCenter::take_pending`] and own
//! toast lifecycle and presentation.

use std::collections::VecDeque;
use std::fmt;

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NotificationLevel {
	#[default]
	Info,
	Success,
	Warning,
	Error,
}

/// One message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
	pub level: NotificationLevel,
	pub message: String,
}

impl Notification {
	pub fn new(level: NotificationLevel, message: impl Into<String>) -> Self {
		Self {
			level,
			message: message.into(),
		}
	}

	pub fn info(message: impl Into<String>) -> Self {
		Self::new(NotificationLevel::Info, message)
	}

	pub fn success(message: impl Into<String>) -> Self {
		Self::new(NotificationLevel::Success, message)
	}

	pub fn warning(message: impl Into<String>) -> Self {
		Self::new(NotificationLevel::Warning, message)
	}

	pub fn error(message: impl Into<String>) -> Self {
		Self::new(NotificationLevel::Error, message)
	}
}

impl fmt::Display for Notification {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.message)
	}
}

/// Pending notifications, oldest first.
#[derive(Debug, Default)]
pub struct NotificationCenter {
	pending: VecDeque<Notification>,
}

impl NotificationCenter {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn is_empty(&self) -> bool {
		self.pending.is_empty()
	}

	pub fn push(&mut self, notification: Notification) {
		tracing::trace!(level = ?notification.level, message = %notification.message, "notify");
		self.pending.push_back(notification);
	}

	/// Drains the queue in push order.
	pub fn take_pending(&mut self) -> Vec<Notification> {
		self.pending.drain(..).collect()
	}
}
