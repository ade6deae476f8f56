//! Failure conditions surfaced by leaderboard operations.

use crate::kind::LeaderboardKind;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// One variant per distinct failure class, so callers can react to the
/// condition instead of matching on message text.
///
/// A missing `entry.json` during an index build is deliberately absent here:
/// it is recovered locally (warning + skip) and never reaches a caller.
#[derive(Debug, Error)]
pub enum LeaderboardError {
    /// Requested leaderboard kind is not registered.
    #[error("unknown leaderboard kind: {0}")]
    UnknownKind(String),

    /// The kind has no data directory to read entries from.
    #[error("no data directory for leaderboard {kind} at {}", .path.display())]
    MissingDataDir {
        kind: LeaderboardKind,
        path: PathBuf,
    },

    /// The index file is absent; it must be (re)built before reading.
    #[error("missing index for leaderboard {kind} at {} (run build-index first)", .path.display())]
    MissingIndex {
        kind: LeaderboardKind,
        path: PathBuf,
    },

    /// A payload was present but structurally invalid under the kind's
    /// schema. `detail` carries serde's diagnostic, which names the
    /// offending field and position.
    #[error("invalid payload {}: {detail}", .path.display())]
    Validation { path: PathBuf, detail: String },

    /// `sort_by` was given a key that names no sortable entry attribute.
    #[error("unknown sort key: {0}")]
    UnknownSortKey(String),

    /// The named template is absent from the template store.
    #[error("template not found: {0}")]
    TemplateNotFound(String),

    #[error("read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("serialize {}: {source}", .path.display())]
    Serialize {
        path: PathBuf,
        source: serde_json::Error,
    },
}
