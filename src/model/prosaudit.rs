//! Schema variant for the `zrc_prosaudit` leaderboard.

use super::ScoreSet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One measured category: mean score, sample count, standard deviation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProsAuditScoreEntity {
    pub score: f64,
    pub n: u64,
    pub std: f64,
}

/// ProsAudit scores: both category mappings are required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProsAuditScores {
    pub protosyntax: BTreeMap<String, ProsAuditScoreEntity>,
    pub lexical: BTreeMap<String, ProsAuditScoreEntity>,
}

impl ScoreSet for ProsAuditScores {
    fn table_cells(&self) -> Vec<String> {
        vec![summarize(&self.protosyntax), summarize(&self.lexical)]
    }
}

fn summarize(categories: &BTreeMap<String, ProsAuditScoreEntity>) -> String {
    let parts: Vec<String> = categories
        .iter()
        .map(|(name, entity)| {
            format!(
                "{name} {:.3} ± {:.3} (n={})",
                entity.score, entity.std, entity.n
            )
        })
        .collect();
    parts.join(", ")
}
