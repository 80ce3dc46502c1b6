//! Core types shared by the editing session model: file identity, language
//! detection, asset classification, cursor positions and persisted records.

/// File and buffer identifiers.
pub mod ids;
/// Language detection and preview asset classification.
pub mod language;
/// Cursor positions.
pub mod position;
/// Persisted file records.
pub mod record;

pub use ids::{BufferId, FileId, NameError, PATH_SEPARATORS};
pub use language::{AssetKind, Language};
pub use position::Position;
pub use record::FileRecord;
