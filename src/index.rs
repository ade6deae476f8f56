//! Index builder: many per-entry payloads into one sorted, stamped index.

use crate::error::LeaderboardError;
use crate::kind::LeaderboardKind;
use crate::model::{ExtraSet, Leaderboard, LeaderboardEntry, ScoreSet};
use crate::store::{self, LeaderboardPaths};
use crate::validate;
use chrono::{DateTime, Utc};
use std::path::PathBuf;

/// Source of the `last_modified` stamp. Injected so tests can pin it.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Outcome of one index build.
#[derive(Debug)]
pub struct BuildReport {
    pub kind: LeaderboardKind,
    pub index_path: PathBuf,
    /// Entries aggregated into the index.
    pub entries: usize,
    /// Entry directories skipped because they had no payload file.
    pub skipped: usize,
}

/// One invalid payload found by `check_entries`.
#[derive(Debug)]
pub struct CheckProblem {
    pub dir: PathBuf,
    pub detail: String,
}

/// Outcome of an entry lint pass.
#[derive(Debug)]
pub struct CheckReport {
    pub kind: LeaderboardKind,
    /// Payloads that validated.
    pub valid: usize,
    /// Directories without a payload file.
    pub skipped: usize,
    pub problems: Vec<CheckProblem>,
}

/// Build a kind's index from its entry directories.
///
/// Directories are visited lexicographically by name. A directory without
/// `entry.json` is skipped with a warning; one that holds an invalid
/// payload aborts the build. The aggregate is stamped from `clock` and
/// written once, overwriting any prior index.
pub fn build_index<S: ScoreSet, X: ExtraSet>(
    paths: &LeaderboardPaths,
    clock: &dyn Clock,
) -> Result<BuildReport, LeaderboardError> {
    let mut data: Vec<LeaderboardEntry<S, X>> = Vec::new();
    let mut skipped = 0usize;

    for entry_dir in paths.entry_dirs()? {
        let payload = store::entry_payload_path(&entry_dir);
        if !payload.is_file() {
            tracing::warn!(dir = %entry_dir.display(), "entry directory has no payload, skipping");
            skipped += 1;
            continue;
        }
        data.push(validate::read_json(&payload)?);
    }

    let board = Leaderboard::<S, X>::new(data, clock.now());
    let index_path = paths.index_path();
    store::write_json_pretty(&index_path, &board)?;
    tracing::info!(
        kind = %paths.kind(),
        entries = board.data.len(),
        skipped,
        "built index"
    );

    Ok(BuildReport {
        kind: paths.kind(),
        index_path,
        entries: board.data.len(),
        skipped,
    })
}

/// Load a kind's leaderboard, (re)building the index first when it is
/// absent or `force_update` is set.
pub fn load_data<S: ScoreSet, X: ExtraSet>(
    paths: &LeaderboardPaths,
    force_update: bool,
    clock: &dyn Clock,
) -> Result<Leaderboard<S, X>, LeaderboardError> {
    if force_update || !paths.index_path().is_file() {
        build_index::<S, X>(paths, clock)?;
    }
    validate::read_index(paths.kind(), &paths.index_path())
}

/// Lint every entry directory of a kind without building anything.
///
/// Unlike the build, an invalid payload does not abort the pass; every
/// problem is collected so authors see all of them at once.
pub fn check_entries<S: ScoreSet, X: ExtraSet>(
    paths: &LeaderboardPaths,
) -> Result<CheckReport, LeaderboardError> {
    let mut valid = 0usize;
    let mut skipped = 0usize;
    let mut problems = Vec::new();

    for entry_dir in paths.entry_dirs()? {
        let payload = store::entry_payload_path(&entry_dir);
        if !payload.is_file() {
            tracing::warn!(dir = %entry_dir.display(), "entry directory has no payload");
            skipped += 1;
            continue;
        }
        match validate::read_json::<LeaderboardEntry<S, X>>(&payload) {
            Ok(_) => valid += 1,
            Err(LeaderboardError::Validation { detail, .. }) => problems.push(CheckProblem {
                dir: entry_dir,
                detail,
            }),
            Err(err) => return Err(err),
        }
    }

    Ok(CheckReport {
        kind: paths.kind(),
        valid,
        skipped,
        problems,
    })
}
