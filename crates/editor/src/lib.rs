#![cfg_attr(test, allow(unused_crate_dependencies))]
//! Editing session model and live preview pipeline for a browser code editor.
//!
//! The crate is the core behind an editor shell: it owns which files are
//! open, which one is shown, how identity changes (create, rename, delete)
//! are sequenced against storage, and how a self-contained preview document
//! is assembled from the project's markup, stylesheets and scripts.
//!
//! # Main Types
//!
//! - [`Workspace`] - Facade owning every component below
//! - [`SessionRegistry`] - Open files in tab order, one buffer each
//! - [`ActiveView`] - Surface bindings and the switch protocol
//! - [`preview::compile`] - Pure preview document assembly
//! - [`PreviewScheduler`] - Single-slot debounce for recompiles
//! - [`PersistenceGateway`] - Async record and settings storage
//!
//! # Architecture
//!
//! ```text
//! Workspace
//! ├── sessions: SessionRegistry        // FileId → EditingSession (buffer, cursor, dirty)
//! ├── view: ActiveView                 // active FileId, split view copy
//! ├── preview: PreviewScheduler        // debounce timer → EditorMsg::PreviewDue
//! ├── gateway: dyn PersistenceGateway  // records + settings, degraded on failure
//! ├── host: impl SurfaceHost           // editing widget
//! └── render: impl RenderSurface       // sandboxed preview frame
//! ```
//!
//! The widget and the preview frame are injected, so the whole core runs
//! headless with [`HeadlessHost`] and [`CapturedPreview`].

/// Static workspace configuration.
pub mod config;
/// Error types for session and identity operations.
pub mod error;
/// In-memory surfaces for headless runs and tests.
pub mod headless;
#[cfg(test)]
mod invariants;
/// Async message bus between timers, the render surface and the workspace.
pub mod msg;
/// User notification queue.
pub mod notifications;
pub mod persistence;
pub mod preview;
/// Welcome project for empty stores.
pub mod seed;
pub mod session;
/// User settings.
pub mod settings;
/// Status bar contents.
pub mod status;
pub mod surface;
pub mod view;
mod workspace;

pub use config::EditorConfig;
pub use error::{EditorError, Result};
pub use headless::{CapturedPreview, HeadlessHost};
pub use msg::EditorMsg;
pub use notifications::{Notification, NotificationCenter, NotificationLevel};
pub use persistence::{JsonFileGateway, MemoryGateway, PersistenceError, PersistenceGateway};
pub use preview::{MarkupSource, PreviewDocument, PreviewScheduler};
pub use session::{EditingSession, SessionRegistry};
pub use settings::{Settings, Theme};
pub use status::StatusInfo;
pub use surface::{Buffer, RenderSurface, SurfaceHost, SurfaceSlot};
pub use view::ActiveView;
pub use workspace::{ImportedFile, Workspace};
