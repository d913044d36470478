//! Dependency ordering for proposed skills.
//!
//! Skill-extraction emits candidate skills with a `path_to` dependency chain
//! (names of prerequisites, root first). Before the caller persists them it
//! needs a total order where every prerequisite lands before its dependents,
//! even when a referenced prerequisite never got its own entry. The sort
//! synthesizes a placeholder for every such missing name, then runs Kahn's
//! algorithm over the combined set.

use std::collections::{HashMap, VecDeque};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Result, SgError};

/// Level assigned to placeholder skills synthesized for missing dependencies.
pub const LEVEL_NEW: &str = "NEW";

/// A candidate skill with its prerequisite chain.
///
/// Accepts both snake_case and the upstream extractor's camelCase field names
/// on input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposedSkill {
    /// Skill name. Also the graph key in the default sort (see [`sort_skills`]).
    #[serde(alias = "skillName")]
    pub name: String,
    /// Mastery-stage label (`INTRO`..`MASTER`, or [`LEVEL_NEW`] for placeholders).
    pub level: String,
    /// Names of the prerequisites leading to this skill, excluding itself.
    #[serde(alias = "pathTo", default)]
    pub path_to: Vec<String>,
}

impl ProposedSkill {
    fn placeholder(name: String) -> Self {
        Self {
            name,
            level: LEVEL_NEW.to_string(),
            path_to: Vec::new(),
        }
    }
}

/// Order skills so that every name in a skill's `path_to` precedes it.
///
/// Skills are keyed by `name`. Placeholders (`level: "NEW"`, empty `path_to`)
/// are synthesized for dependency names with no entry of their own, so the
/// sort only fails on a true cycle or on duplicate names.
///
/// # Errors
///
/// Returns [`SgError::CycleDetected`] naming the skills left unresolved when
/// the dependency graph contains a cycle, and [`SgError::InvalidInput`] when
/// two entries share a graph key.
pub fn sort_skills(skills: &[ProposedSkill]) -> Result<Vec<ProposedSkill>> {
    sort_skills_by(skills, |skill| skill.name.clone())
}

/// [`sort_skills`] with a caller-supplied graph key.
///
/// `key` maps a skill to its graph identity; `path_to` entries are matched
/// against these keys. Callers with surrogate ids can key on them instead of
/// display names without touching the algorithm.
pub fn sort_skills_by<F>(input: &[ProposedSkill], key: F) -> Result<Vec<ProposedSkill>>
where
    F: Fn(&ProposedSkill) -> String,
{
    let mut skills: Vec<ProposedSkill> = input.to_vec();

    // Node bookkeeping is insertion-ordered: `node_order` drives every queue
    // seed so ties resolve by first appearance, not hash order.
    let mut node_order: Vec<String> = Vec::new();
    let mut adjacency: HashMap<String, Vec<String>> = HashMap::new();
    let mut in_degree: HashMap<String, usize> = HashMap::new();

    for skill in &skills {
        let node = key(skill);
        if in_degree.contains_key(&node) {
            return Err(SgError::InvalidInput(format!("duplicate skill key: {node}")));
        }
        node_order.push(node.clone());
        adjacency.insert(node.clone(), Vec::new());
        in_degree.insert(node, 0);
    }

    // Worklist expansion: placeholders appended here are themselves visited
    // by the loop, so the index must track the live length.
    let synthesized_from = skills.len();
    let mut i = 0;
    while i < skills.len() {
        let deps = skills[i].path_to.clone();
        for dep in deps {
            if !in_degree.contains_key(&dep) {
                node_order.push(dep.clone());
                adjacency.insert(dep.clone(), Vec::new());
                in_degree.insert(dep.clone(), 0);
                skills.push(ProposedSkill::placeholder(dep));
            }
        }
        i += 1;
    }
    if skills.len() > synthesized_from {
        debug!(
            count = skills.len() - synthesized_from,
            "synthesized placeholder skills for missing dependencies"
        );
    }

    // One edge per occurrence: a dependency listed twice bumps the in-degree
    // twice, and drains twice.
    for skill in &skills {
        let node = key(skill);
        for dep in &skill.path_to {
            if let Some(successors) = adjacency.get_mut(dep) {
                successors.push(node.clone());
            }
            if let Some(degree) = in_degree.get_mut(&node) {
                *degree += 1;
            }
        }
    }

    // Kahn's algorithm, FIFO over first-seen order.
    let mut queue: VecDeque<String> = node_order
        .iter()
        .filter(|node| in_degree.get(node.as_str()) == Some(&0))
        .cloned()
        .collect();

    let mut sorted = Vec::with_capacity(skills.len());
    while let Some(node) = queue.pop_front() {
        let entry = skills
            .iter()
            .find(|skill| key(skill) == node)
            .cloned()
            .unwrap_or_else(|| ProposedSkill::placeholder(node.clone()));
        sorted.push(entry);

        if let Some(successors) = adjacency.get(&node) {
            for successor in successors {
                if let Some(degree) = in_degree.get_mut(successor) {
                    *degree -= 1;
                    if *degree == 0 {
                        queue.push_back(successor.clone());
                    }
                }
            }
        }
    }

    if sorted.len() != skills.len() {
        let unresolved: Vec<&str> = node_order
            .iter()
            .filter(|node| in_degree.get(node.as_str()).is_some_and(|d| *d > 0))
            .map(String::as_str)
            .collect();
        warn!(?unresolved, "topological sort could not drain the graph");
        return Err(SgError::CycleDetected(unresolved.join(", ")));
    }

    Ok(sorted)
}
