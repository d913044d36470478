//! Rebuild a prerequisite tree from the flat rows the score query emits.
//!
//! The SQL layer returns one row per reachable skill, each carrying its
//! `path_to` (ancestor id chain from the root, ending at the skill itself)
//! and score aggregates over everything upstream of it. Reconstruction walks
//! those paths: a row is an immediate child of another when its path is the
//! parent's path plus one segment.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SgError};

/// One flat row from the linked-skills score query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredSkillRow {
    pub skill_id: String,
    pub skill_name: String,
    /// Ancestor id chain from the conceptual root down to and including this
    /// skill's own id.
    pub path_to: Vec<String>,
    pub min_normalized_score_upstream: f64,
    pub max_normalized_score_upstream: f64,
    pub average_normalized_score_upstream: f64,
    pub stddev_normalized_score_upstream: f64,
    /// Performance observations contributing to the aggregates.
    pub activity_result_count_upstream: u64,
    /// Raw score samples, passed through untouched.
    #[serde(default)]
    pub all_scores: Vec<f64>,
    pub num_upstream_skills: u64,
    /// Mastery-stage label relative to the immediate parent.
    pub level_on_parent: String,
}

/// A node in the reconstructed prerequisite tree.
///
/// Self-contained value tree: every node exclusively owns its
/// `upstream_skills`, and nothing aliases the input rows after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillScoreTree {
    pub skill_id: String,
    pub skill_name: String,
    pub path_to: Vec<String>,
    pub min_normalized_score_upstream: f64,
    pub max_normalized_score_upstream: f64,
    pub average_normalized_score_upstream: f64,
    pub stddev_normalized_score_upstream: f64,
    pub activity_result_count_upstream: u64,
    #[serde(default)]
    pub all_scores: Vec<f64>,
    pub num_upstream_skills: u64,
    pub level_on_parent: String,
    pub upstream_skills: Vec<SkillScoreTree>,
}

impl SkillScoreTree {
    /// Rebuild the prerequisite tree rooted at `skill_id`.
    ///
    /// A skill reachable through more than one parent (diamonds, or cycles in
    /// bad data) is expanded once, at its first encounter; every later
    /// occurrence is a bare leaf. That keeps the recursion finite and the
    /// output free of duplicated subtrees.
    ///
    /// # Errors
    ///
    /// Returns [`SgError::SkillNotFound`] when `skill_id` has no row. Rows
    /// with malformed `path_to` chains are not detected; they simply never
    /// match as children.
    pub fn from_rows(rows: &[ScoredSkillRow], skill_id: &str) -> Result<Self> {
        let mut visited = HashSet::new();
        Self::build(rows, skill_id, &mut visited)
    }

    fn build(
        rows: &[ScoredSkillRow],
        skill_id: &str,
        visited: &mut HashSet<String>,
    ) -> Result<Self> {
        let row = rows
            .iter()
            .find(|r| r.skill_id == skill_id)
            .ok_or_else(|| SgError::SkillNotFound(skill_id.to_string()))?;

        // The visited set is shared across the whole build, not per branch.
        if !visited.insert(skill_id.to_string()) {
            return Ok(Self::from_row(row, Vec::new()));
        }

        let child_ids: Vec<&str> = rows
            .iter()
            .filter(|r| is_immediate_upstream(&row.path_to, &r.path_to))
            .map(|r| r.skill_id.as_str())
            .collect();

        let mut upstream = Vec::with_capacity(child_ids.len());
        for child_id in child_ids {
            upstream.push(Self::build(rows, child_id, visited)?);
        }

        Ok(Self::from_row(row, upstream))
    }

    fn from_row(row: &ScoredSkillRow, upstream_skills: Vec<SkillScoreTree>) -> Self {
        Self {
            skill_id: row.skill_id.clone(),
            skill_name: row.skill_name.clone(),
            path_to: row.path_to.clone(),
            min_normalized_score_upstream: row.min_normalized_score_upstream,
            max_normalized_score_upstream: row.max_normalized_score_upstream,
            average_normalized_score_upstream: row.average_normalized_score_upstream,
            stddev_normalized_score_upstream: row.stddev_normalized_score_upstream,
            activity_result_count_upstream: row.activity_result_count_upstream,
            all_scores: row.all_scores.clone(),
            num_upstream_skills: row.num_upstream_skills,
            level_on_parent: row.level_on_parent.clone(),
            upstream_skills,
        }
    }

    /// Immediate children carrying the given `level_on_parent` label.
    pub fn children_at_level(&self, level: &str) -> Vec<&SkillScoreTree> {
        self.upstream_skills
            .iter()
            .filter(|child| child.level_on_parent == level)
            .collect()
    }
}

/// True when `candidate` sits directly under `parent`: one segment longer and
/// positionally prefixed by it.
fn is_immediate_upstream(parent: &[String], candidate: &[String]) -> bool {
    candidate.len() == parent.len() + 1 && candidate.starts_with(parent)
}
