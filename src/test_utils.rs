//! Shared fixtures for unit and integration tests.

use crate::tree::build::ScoredSkillRow;

/// A scored row with zeroed aggregates.
#[must_use]
pub fn row(id: &str, name: &str, path_to: &[&str], level: &str) -> ScoredSkillRow {
    ScoredSkillRow {
        skill_id: id.to_string(),
        skill_name: name.to_string(),
        path_to: path_to.iter().map(|s| (*s).to_string()).collect(),
        min_normalized_score_upstream: 0.0,
        max_normalized_score_upstream: 0.0,
        average_normalized_score_upstream: 0.0,
        stddev_normalized_score_upstream: 0.0,
        activity_result_count_upstream: 0,
        all_scores: Vec::new(),
        num_upstream_skills: 0,
        level_on_parent: level.to_string(),
    }
}

/// Rows forming a single chain: each id's path is the previous ids plus its own.
#[must_use]
pub fn chain_rows(ids: &[&str]) -> Vec<ScoredSkillRow> {
    ids.iter()
        .enumerate()
        .map(|(i, id)| {
            let level = if i == 0 { "INTRO" } else { "BASIC" };
            row(id, id, &ids[..=i], level)
        })
        .collect()
}
