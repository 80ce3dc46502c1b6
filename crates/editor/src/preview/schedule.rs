use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::msg::{EditorMsg, MsgSender};

/// Quiet period used when none is configured.
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(1000);

/// Single-slot debounce timer for preview compiles.
///
/// Every [`schedule`](Self::schedule) cancels the pending timer and arms a
/// new one, so a burst of edits results in one [`EditorMsg::PreviewDue`]
/// once the burst has been quiet for the full period. Each armed timer gets a
/// fresh generation; the workspace only compiles for the generation
/// [`accept`](Self::accept) confirms, which drops messages from timers that
/// fired while being cancelled.
///
/// The scheduler holds no content. What gets compiled is decided when the
/// timer is accepted.
#[derive(Debug)]
pub struct PreviewScheduler {
	quiet: Duration,
	generation: u64,
	pending: Option<CancellationToken>,
	tx: MsgSender,
}

impl PreviewScheduler {
	pub fn new(quiet: Duration, tx: MsgSender) -> Self {
		Self {
			quiet,
			generation: 0,
			pending: None,
			tx,
		}
	}

	pub fn quiet_period(&self) -> Duration {
		self.quiet
	}

	/// Generation of the most recently armed timer.
	pub fn generation(&self) -> u64 {
		self.generation
	}

	pub fn is_pending(&self) -> bool {
		self.pending.is_some()
	}

	/// Restarts the quiet period. Returns the new timer's generation.
	///
	/// Must be called from within a tokio runtime.
	pub fn schedule(&mut self) -> u64 {
		self.cancel();
		self.generation = self.generation.wrapping_add(1);

		let generation = self.generation;
		let token = CancellationToken::new();
		self.pending = Some(token.clone());

		let tx = self.tx.clone();
		let quiet = self.quiet;
		tokio::spawn(async move {
			tokio::select! {
				_ = token.cancelled() => {
					tracing::trace!(generation, "preview.debounce_cancelled");
				}
				_ = tokio::time::sleep(quiet) => {
					if tx.send(EditorMsg::PreviewDue { generation }).is_err() {
						tracing::trace!(generation, "preview.debounce_orphaned");
					}
				}
			}
		});

		tracing::trace!(generation, quiet_ms = quiet.as_millis() as u64, "preview.debounce");
		generation
	}

	/// Cancels the pending timer, if any. Returns true if one was pending.
	pub fn cancel(&mut self) -> bool {
		match self.pending.take() {
			Some(token) => {
				token.cancel();
				true
			}
			None => false,
		}
	}

	/// Consumes a fired timer. Returns true only for the generation that is
	/// still pending.
	pub fn accept(&mut self, generation: u64) -> bool {
		if self.pending.is_some() && generation == self.generation {
			self.pending = None;
			true
		} else {
			false
		}
	}
}

impl Drop for PreviewScheduler {
	fn drop(&mut self) {
		self.cancel();
	}
}
