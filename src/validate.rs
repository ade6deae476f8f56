//! Parsing of untrusted on-disk JSON into typed records.
//!
//! Both directions go through here: the index builder parses many small
//! entry payloads, the splitter parses one full index. A payload that fails
//! its schema is surfaced with the file and serde's field diagnostic and is
//! never silently coerced or defaulted.

use crate::error::LeaderboardError;
use crate::kind::LeaderboardKind;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Parse a raw JSON document against the schema the target type declares.
pub fn parse_str<T: DeserializeOwned>(raw: &str) -> Result<T, serde_json::Error> {
    serde_json::from_str(raw)
}

/// Read and validate one JSON document from disk.
///
/// An unreadable file is a `Read` failure; a readable file that violates
/// the schema is a `Validation` failure naming the file and field.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, LeaderboardError> {
    let bytes = fs::read(path).map_err(|source| LeaderboardError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&bytes).map_err(|err| LeaderboardError::Validation {
        path: path.to_path_buf(),
        detail: err.to_string(),
    })
}

/// Read and validate a kind's index file.
///
/// Absence is the distinct `MissingIndex` condition: the index must be
/// (re)built, not treated as malformed data.
pub fn read_index<T: DeserializeOwned>(
    kind: LeaderboardKind,
    path: &Path,
) -> Result<T, LeaderboardError> {
    if !path.is_file() {
        return Err(LeaderboardError::MissingIndex {
            kind,
            path: path.to_path_buf(),
        });
    }
    read_json(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Leaderboard, LeaderboardExtras, LeaderboardScores};

    type BaseBoard = Leaderboard<LeaderboardScores, LeaderboardExtras>;

    #[test]
    fn missing_index_file_is_distinct_from_invalid() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("index.json");
        let err = read_index::<BaseBoard>(LeaderboardKind::ZrcProsaudit, &path).unwrap_err();
        assert!(matches!(err, LeaderboardError::MissingIndex { .. }));
    }

    #[test]
    fn invalid_index_reports_validation_with_detail() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("index.json");
        std::fs::write(&path, br#"{"data": []}"#).unwrap();
        let err = read_index::<BaseBoard>(LeaderboardKind::ZrcProsaudit, &path).unwrap_err();
        match err {
            LeaderboardError::Validation { detail, .. } => {
                assert!(detail.contains("last_modified"), "got: {detail}");
            }
            other => panic!("expected validation failure, got {other:?}"),
        }
    }

    #[test]
    fn parse_str_accepts_a_valid_index() {
        let raw = r#"{"last_modified": "2024-05-01T12:00:00Z", "data": []}"#;
        let board: BaseBoard = parse_str(raw).expect("parse index");
        assert!(board.data.is_empty());
    }
}
