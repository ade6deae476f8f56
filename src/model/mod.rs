//! Record shapes shared by every leaderboard kind.
//!
//! A kind specializes the schema only through the `scores` and `extras`
//! type parameters; the publication, details, and entry-level fields are
//! fixed for all kinds.

pub mod prosaudit;

use crate::error::LeaderboardError;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Debug;

/// Kind-specific score block of an entry.
///
/// Implementations declare the fields a kind requires; the base
/// [`LeaderboardScores`] requires none. `table_cells` supplies the
/// kind-owned columns of the rendered HTML table, one string per cell.
pub trait ScoreSet: Debug + Clone + Serialize + DeserializeOwned {
    fn table_cells(&self) -> Vec<String>;
}

/// Kind-specific free-form extension block, absent by default.
pub trait ExtraSet: Debug + Clone + Serialize + DeserializeOwned {}

/// Score block of the base kind: no required fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LeaderboardScores {}

impl ScoreSet for LeaderboardScores {
    fn table_cells(&self) -> Vec<String> {
        Vec::new()
    }
}

/// Extras block of the base kind: no fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LeaderboardExtras {}

impl ExtraSet for LeaderboardExtras {}

/// Publication metadata attached to every entry.
///
/// Everything is optional except `institution`; `open_science` defaults to
/// false when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicationEntry {
    pub author_short: Option<String>,
    pub authors: Option<String>,
    pub paper_title: Option<String>,
    pub paper_ref: Option<String>,
    pub bib_ref: Option<String>,
    pub paper_url: Option<String>,
    pub pub_year: Option<i32>,
    pub team_name: Option<String>,
    pub institution: String,
    pub code: Option<String>,
    #[serde(rename = "DOI")]
    pub doi: Option<String>,
    #[serde(default)]
    pub open_science: bool,
}

/// Submission details. `parameters` is an open mapping, opaque to
/// validation beyond being a JSON object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryDetails {
    pub train_set: Option<String>,
    pub gpu_budget: Option<String>,
    #[serde(default)]
    pub parameters: BTreeMap<String, serde_json::Value>,
}

/// One validated submission record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardEntry<S, X> {
    pub model_id: Option<String>,
    #[serde(default)]
    pub submission_id: String,
    /// Stable ordinal used to name the entry's directory in the split
    /// representation.
    pub index: Option<i64>,
    pub submission_date: Option<DateTime<Utc>>,
    pub submitted_by: Option<String>,
    pub description: String,
    pub publication: PublicationEntry,
    pub details: EntryDetails,
    pub scores: S,
    pub extras: Option<X>,
}

/// The aggregate: every entry of one kind plus a freshness timestamp.
///
/// The type parameters tie `data` to the same kind's schema variant as the
/// leaderboard itself; mixing kinds is unrepresentable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Leaderboard<S, X> {
    pub last_modified: DateTime<Utc>,
    pub data: Vec<LeaderboardEntry<S, X>>,
}

impl<S: ScoreSet, X: ExtraSet> Leaderboard<S, X> {
    /// Construct from already-validated entries, stamping `last_modified`
    /// with the caller-supplied timestamp.
    pub fn new(data: Vec<LeaderboardEntry<S, X>>, last_modified: DateTime<Utc>) -> Self {
        Self {
            last_modified,
            data,
        }
    }

    /// Reorder entries in place by a named attribute.
    ///
    /// The key set is closed: entry-level fields plus the publication
    /// fields tables sort on. Sorting is stable, so ties keep their
    /// relative order. Absent values order before present ones.
    pub fn sort_by(&mut self, key: &str) -> Result<(), LeaderboardError> {
        match key {
            "model_id" => self.data.sort_by(|a, b| a.model_id.cmp(&b.model_id)),
            "submission_id" => self
                .data
                .sort_by(|a, b| a.submission_id.cmp(&b.submission_id)),
            "index" => self.data.sort_by(|a, b| a.index.cmp(&b.index)),
            "submission_date" => self
                .data
                .sort_by(|a, b| a.submission_date.cmp(&b.submission_date)),
            "submitted_by" => self
                .data
                .sort_by(|a, b| a.submitted_by.cmp(&b.submitted_by)),
            "description" => self.data.sort_by(|a, b| a.description.cmp(&b.description)),
            "author_short" => self
                .data
                .sort_by(|a, b| a.publication.author_short.cmp(&b.publication.author_short)),
            "institution" => self
                .data
                .sort_by(|a, b| a.publication.institution.cmp(&b.publication.institution)),
            "pub_year" => self
                .data
                .sort_by(|a, b| a.publication.pub_year.cmp(&b.publication.pub_year)),
            "team_name" => self
                .data
                .sort_by(|a, b| a.publication.team_name.cmp(&b.publication.team_name)),
            "open_science" => self
                .data
                .sort_by(|a, b| a.publication.open_science.cmp(&b.publication.open_science)),
            other => return Err(LeaderboardError::UnknownSortKey(other.to_string())),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    type BaseEntry = LeaderboardEntry<LeaderboardScores, LeaderboardExtras>;

    fn entry(model_id: &str, pub_year: Option<i32>) -> BaseEntry {
        BaseEntry {
            model_id: Some(model_id.to_string()),
            submission_id: String::new(),
            index: None,
            submission_date: None,
            submitted_by: None,
            description: String::new(),
            publication: PublicationEntry {
                author_short: None,
                authors: None,
                paper_title: None,
                paper_ref: None,
                bib_ref: None,
                paper_url: None,
                pub_year,
                team_name: None,
                institution: "MIT".to_string(),
                code: None,
                doi: None,
                open_science: false,
            },
            details: EntryDetails {
                train_set: None,
                gpu_budget: None,
                parameters: BTreeMap::new(),
            },
            scores: LeaderboardScores {},
            extras: None,
        }
    }

    fn board(entries: Vec<BaseEntry>) -> Leaderboard<LeaderboardScores, LeaderboardExtras> {
        let stamp = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        Leaderboard::new(entries, stamp)
    }

    #[test]
    fn parses_minimal_entry() {
        let raw = r#"{
            "description": "baseline run",
            "publication": {"institution": "MIT"},
            "details": {},
            "scores": {}
        }"#;
        let entry: BaseEntry = serde_json::from_str(raw).expect("parse entry");
        assert_eq!(entry.description, "baseline run");
        assert_eq!(entry.submission_id, "");
        assert!(entry.model_id.is_none());
        assert!(entry.extras.is_none());
        assert!(!entry.publication.open_science);
        assert!(entry.details.parameters.is_empty());
    }

    #[test]
    fn missing_institution_is_rejected() {
        let raw = r#"{
            "description": "",
            "publication": {"author_short": "Smith"},
            "details": {},
            "scores": {}
        }"#;
        let err = serde_json::from_str::<BaseEntry>(raw).unwrap_err();
        assert!(err.to_string().contains("institution"), "got: {err}");
    }

    #[test]
    fn wrong_type_for_pub_year_is_rejected() {
        let raw = r#"{
            "description": "",
            "publication": {"institution": "MIT", "pub_year": "2021"},
            "details": {},
            "scores": {}
        }"#;
        assert!(serde_json::from_str::<BaseEntry>(raw).is_err());
    }

    #[test]
    fn doi_round_trips_under_its_wire_name() {
        let raw = r#"{
            "description": "",
            "publication": {"institution": "MIT", "DOI": "10.5555/x"},
            "details": {},
            "scores": {}
        }"#;
        let entry: BaseEntry = serde_json::from_str(raw).expect("parse entry");
        assert_eq!(entry.publication.doi.as_deref(), Some("10.5555/x"));
        let dumped = serde_json::to_value(&entry).expect("dump entry");
        assert_eq!(dumped["publication"]["DOI"], "10.5555/x");
    }

    #[test]
    fn sort_by_pub_year_is_stable_across_ties() {
        let mut board = board(vec![
            entry("c", Some(2022)),
            entry("a", Some(2021)),
            entry("b", Some(2021)),
        ]);
        board.sort_by("pub_year").expect("sort");
        let order: Vec<_> = board
            .data
            .iter()
            .map(|e| e.model_id.clone().unwrap())
            .collect();
        // a and b share a year and must keep their relative order
        assert_eq!(order, ["a", "b", "c"]);
    }

    #[test]
    fn sort_by_unknown_key_fails() {
        let mut board = board(vec![entry("a", None)]);
        let err = board.sort_by("nonexistent").unwrap_err();
        assert!(matches!(err, LeaderboardError::UnknownSortKey(_)));
    }
}
