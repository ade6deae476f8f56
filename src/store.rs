//! On-disk layout for leaderboard data.
//!
//! Every path decision lives here so the build and split directions agree
//! on where payloads, indexes, and readmes go.

use crate::error::LeaderboardError;
use crate::kind::LeaderboardKind;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const INDEX_FILE: &str = "index.json";
pub const ENTRY_FILE: &str = "entry.json";
pub const README_FILE: &str = "README.md";

/// Resolved locations for one leaderboard kind under a data root.
#[derive(Debug, Clone)]
pub struct LeaderboardPaths {
    root: PathBuf,
    kind: LeaderboardKind,
}

impl LeaderboardPaths {
    pub fn new(root: impl Into<PathBuf>, kind: LeaderboardKind) -> Self {
        Self {
            root: root.into(),
            kind,
        }
    }

    pub fn kind(&self) -> LeaderboardKind {
        self.kind
    }

    /// Directory holding this kind's index and entry directories.
    pub fn kind_dir(&self) -> PathBuf {
        self.root.join(self.kind.as_str())
    }

    pub fn index_path(&self) -> PathBuf {
        self.kind_dir().join(INDEX_FILE)
    }

    /// Entry directories under the kind directory, sorted by name so
    /// visitation order never depends on filesystem enumeration order.
    pub fn entry_dirs(&self) -> Result<Vec<PathBuf>, LeaderboardError> {
        let kind_dir = self.kind_dir();
        if !kind_dir.is_dir() {
            return Err(LeaderboardError::MissingDataDir {
                kind: self.kind,
                path: kind_dir,
            });
        }
        let mut dirs = Vec::new();
        let listing = fs::read_dir(&kind_dir).map_err(|source| LeaderboardError::Read {
            path: kind_dir.clone(),
            source,
        })?;
        for entry in listing {
            let entry = entry.map_err(|source| LeaderboardError::Read {
                path: kind_dir.clone(),
                source,
            })?;
            let path = entry.path();
            if path.is_dir() {
                dirs.push(path);
            }
        }
        dirs.sort();
        Ok(dirs)
    }
}

/// Canonical payload location inside one entry directory.
pub fn entry_payload_path(entry_dir: &Path) -> PathBuf {
    entry_dir.join(ENTRY_FILE)
}

/// Write a pretty-printed JSON document, creating parent directories.
pub fn write_json_pretty<T: Serialize>(path: &Path, value: &T) -> Result<(), LeaderboardError> {
    let bytes = serde_json::to_vec_pretty(value).map_err(|source| LeaderboardError::Serialize {
        path: path.to_path_buf(),
        source,
    })?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| LeaderboardError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, bytes).map_err(|source| LeaderboardError::Write {
        path: path.to_path_buf(),
        source,
    })
}
