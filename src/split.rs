//! Index splitter: the inverse of the build, one directory per entry.

use crate::error::LeaderboardError;
use crate::kind::LeaderboardKind;
use crate::model::{ExtraSet, Leaderboard, LeaderboardEntry, ScoreSet};
use crate::render;
use crate::store::{self, LeaderboardPaths};
use crate::validate;
use std::fs;
use std::path::PathBuf;

/// Outcome of one split.
#[derive(Debug)]
pub struct SplitReport {
    pub kind: LeaderboardKind,
    /// Entry directories written, in index order.
    pub directories: Vec<PathBuf>,
}

/// Explode a kind's index into per-entry directories.
///
/// The index must exist and validate as a whole; there is no per-entry
/// tolerance in this direction. Each entry gets its canonical payload plus
/// a generated readme, overwriting whatever was at that path. The first
/// entry that fails to render or write aborts the split, with the failing
/// path in the error.
pub fn split_index<S: ScoreSet, X: ExtraSet>(
    paths: &LeaderboardPaths,
) -> Result<SplitReport, LeaderboardError> {
    let board: Leaderboard<S, X> = validate::read_index(paths.kind(), &paths.index_path())?;

    let mut directories = Vec::new();
    for entry in &board.data {
        let dir = paths.kind_dir().join(entry_dir_name(entry));
        store::write_json_pretty(&dir.join(store::ENTRY_FILE), entry)?;

        let readme = render::render_readme(paths.kind(), entry);
        let readme_path = dir.join(store::README_FILE);
        fs::write(&readme_path, readme).map_err(|source| LeaderboardError::Write {
            path: readme_path,
            source,
        })?;

        tracing::info!(dir = %dir.display(), "wrote entry directory");
        directories.push(dir);
    }

    Ok(SplitReport {
        kind: paths.kind(),
        directories,
    })
}

/// Directory name for one entry: `{index}_{author_short}`.
///
/// Absent parts render as the literal `None`, and nothing prevents two
/// entries from producing the same name. Kept as-is; the transcript of
/// written directories makes collisions visible.
pub fn entry_dir_name<S, X>(entry: &LeaderboardEntry<S, X>) -> String {
    let index = entry
        .index
        .map(|value| value.to_string())
        .unwrap_or_else(|| "None".to_string());
    let author = entry
        .publication
        .author_short
        .as_deref()
        .unwrap_or("None");
    format!("{index}_{author}")
}
