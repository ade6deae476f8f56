mod common;

use chrono::{DateTime, TimeZone, Utc};
use common::{prosaudit_entry, write_entry};
use leaderboard_builder::error::LeaderboardError;
use leaderboard_builder::index::{build_index, Clock};
use leaderboard_builder::kind::LeaderboardKind;
use leaderboard_builder::model::prosaudit::ProsAuditScores;
use leaderboard_builder::model::LeaderboardExtras;
use leaderboard_builder::split::split_index;
use leaderboard_builder::store::LeaderboardPaths;
use serde_json::Value;
use std::fs;

struct FixedClock(DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

fn clock_at(hour: u32) -> FixedClock {
    FixedClock(Utc.with_ymd_and_hms(2024, 5, 1, hour, 0, 0).unwrap())
}

fn build(paths: &LeaderboardPaths, clock: &FixedClock) {
    build_index::<ProsAuditScores, LeaderboardExtras>(paths, clock).expect("build index");
}

fn split(paths: &LeaderboardPaths) -> Result<leaderboard_builder::split::SplitReport, LeaderboardError> {
    split_index::<ProsAuditScores, LeaderboardExtras>(paths)
}

fn index_data(paths: &LeaderboardPaths) -> Value {
    let content = fs::read_to_string(paths.index_path()).expect("read index");
    let index: Value = serde_json::from_str(&content).expect("parse index");
    index["data"].clone()
}

#[test]
fn split_then_rebuild_round_trips_canonical_payloads() {
    let temp = tempfile::tempdir().expect("tempdir");
    let paths = LeaderboardPaths::new(temp.path(), LeaderboardKind::ZrcProsaudit);
    let kind_dir = paths.kind_dir();
    write_entry(&kind_dir, "0_Smith", &prosaudit_entry(0, "Smith", "MIT", 2023));
    write_entry(&kind_dir, "1_Lee", &prosaudit_entry(1, "Lee", "ENS", 2022));

    // first pass canonicalizes the payloads
    build(&paths, &clock_at(10));
    let report = split(&paths).expect("split index");
    assert_eq!(report.directories.len(), 2);

    let smith_canonical = fs::read(kind_dir.join("0_Smith/entry.json")).unwrap();
    let lee_canonical = fs::read(kind_dir.join("1_Lee/entry.json")).unwrap();
    let data_first = index_data(&paths);

    // second pass must reproduce the same bytes, timestamp aside
    build(&paths, &clock_at(11));
    split(&paths).expect("split index again");

    assert_eq!(
        fs::read(kind_dir.join("0_Smith/entry.json")).unwrap(),
        smith_canonical
    );
    assert_eq!(
        fs::read(kind_dir.join("1_Lee/entry.json")).unwrap(),
        lee_canonical
    );
    assert_eq!(index_data(&paths), data_first);
}

#[test]
fn split_writes_a_readme_beside_each_payload() {
    let temp = tempfile::tempdir().expect("tempdir");
    let paths = LeaderboardPaths::new(temp.path(), LeaderboardKind::ZrcProsaudit);
    write_entry(
        &paths.kind_dir(),
        "0_Smith",
        &prosaudit_entry(0, "Smith", "MIT", 2023),
    );

    build(&paths, &clock_at(10));
    split(&paths).expect("split index");

    let readme =
        fs::read_to_string(paths.kind_dir().join("0_Smith/README.md")).expect("read readme");
    assert!(readme.starts_with("# model-Smith"));
    assert!(readme.contains("zrc_prosaudit"));
    assert!(readme.contains("- Institution: MIT"));
}

#[test]
fn absent_index_and_author_name_the_directory_none() {
    let temp = tempfile::tempdir().expect("tempdir");
    let paths = LeaderboardPaths::new(temp.path(), LeaderboardKind::ZrcProsaudit);

    let mut entry = prosaudit_entry(0, "Smith", "MIT", 2023);
    entry["index"] = Value::Null;
    entry["publication"]["author_short"] = Value::Null;
    write_entry(&paths.kind_dir(), "anonymous", &entry);

    build(&paths, &clock_at(10));
    split(&paths).expect("split index");

    assert!(paths.kind_dir().join("None_None/entry.json").is_file());
}

#[test]
fn split_without_an_index_is_a_missing_index_failure() {
    let temp = tempfile::tempdir().expect("tempdir");
    let paths = LeaderboardPaths::new(temp.path(), LeaderboardKind::ZrcProsaudit);
    fs::create_dir_all(paths.kind_dir()).unwrap();

    let err = split(&paths).unwrap_err();
    assert!(matches!(err, LeaderboardError::MissingIndex { .. }));
}
