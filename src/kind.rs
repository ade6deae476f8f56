//! Leaderboard kind registry.
//!
//! The single place kinds are registered: a kind name resolves to a static
//! table of operations monomorphized over its schema variant. Adding a
//! kind means one enum variant, one schema module, and one table entry;
//! nothing else changes.

use crate::error::LeaderboardError;
use crate::index::{self, BuildReport, CheckReport, Clock};
use crate::model::prosaudit::ProsAuditScores;
use crate::model::{ExtraSet, LeaderboardExtras, ScoreSet};
use crate::render::{self, TemplateStore};
use crate::split::{self, SplitReport};
use crate::store::LeaderboardPaths;
use std::fmt;
use std::str::FromStr;

/// Symbolic names of the registered leaderboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeaderboardKind {
    ZrcProsaudit,
}

/// Every registered kind, in registration order.
pub const ALL_KINDS: &[LeaderboardKind] = &[LeaderboardKind::ZrcProsaudit];

impl LeaderboardKind {
    pub fn as_str(self) -> &'static str {
        match self {
            LeaderboardKind::ZrcProsaudit => "zrc_prosaudit",
        }
    }
}

impl fmt::Display for LeaderboardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeaderboardKind {
    type Err = LeaderboardError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        ALL_KINDS
            .iter()
            .copied()
            .find(|kind| kind.as_str() == value)
            .ok_or_else(|| LeaderboardError::UnknownKind(value.to_string()))
    }
}

/// A kind name as given on the command line: one kind, or `all`.
#[derive(Debug, Clone, Copy)]
pub enum KindSelector {
    All,
    One(LeaderboardKind),
}

impl KindSelector {
    pub fn kinds(self) -> Vec<LeaderboardKind> {
        match self {
            KindSelector::All => ALL_KINDS.to_vec(),
            KindSelector::One(kind) => vec![kind],
        }
    }
}

impl FromStr for KindSelector {
    type Err = LeaderboardError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value == "all" {
            return Ok(KindSelector::All);
        }
        Ok(KindSelector::One(value.parse()?))
    }
}

/// Operations of one schema variant, monomorphized over its score and
/// extras types. The registry hands these out; callers never see the
/// concrete types.
#[derive(Debug)]
pub struct SchemaVariantOps {
    pub build_index: fn(&LeaderboardPaths, &dyn Clock) -> Result<BuildReport, LeaderboardError>,
    pub check_entries: fn(&LeaderboardPaths) -> Result<CheckReport, LeaderboardError>,
    pub split_index: fn(&LeaderboardPaths) -> Result<SplitReport, LeaderboardError>,
    pub render_table:
        fn(&LeaderboardPaths, &TemplateStore, bool, &dyn Clock) -> Result<String, LeaderboardError>,
}

fn render_table_op<S: ScoreSet, X: ExtraSet>(
    paths: &LeaderboardPaths,
    templates: &TemplateStore,
    force_update: bool,
    clock: &dyn Clock,
) -> Result<String, LeaderboardError> {
    let board = index::load_data::<S, X>(paths, force_update, clock)?;
    render::render_table(paths.kind(), &board, templates)
}

static ZRC_PROSAUDIT_OPS: SchemaVariantOps = SchemaVariantOps {
    build_index: index::build_index::<ProsAuditScores, LeaderboardExtras>,
    check_entries: index::check_entries::<ProsAuditScores, LeaderboardExtras>,
    split_index: split::split_index::<ProsAuditScores, LeaderboardExtras>,
    render_table: render_table_op::<ProsAuditScores, LeaderboardExtras>,
};

/// Operations registered for a kind.
pub fn ops(kind: LeaderboardKind) -> &'static SchemaVariantOps {
    match kind {
        LeaderboardKind::ZrcProsaudit => &ZRC_PROSAUDIT_OPS,
    }
}

/// Resolve a kind name to its schema variant's operations.
pub fn resolve(name: &str) -> Result<(LeaderboardKind, &'static SchemaVariantOps), LeaderboardError> {
    let kind = name.parse::<LeaderboardKind>()?;
    Ok((kind, ops(kind)))
}
