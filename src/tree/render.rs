//! Indented text rendering of a [`SkillScoreTree`] for LLM prompts.
//!
//! One line per node, pre-order, with a `--` marker repeated per indent step.
//! Children are always walked group-by-group in canonical level order so the
//! output is deterministic regardless of row order in the source query.

use itertools::Itertools;

use super::build::SkillScoreTree;

/// Canonical ordering of `level_on_parent` labels. Labels outside this list
/// rank at -1 and therefore sort ahead of `INTRO`.
pub const LEVEL_ORDER: [&str; 5] = ["INTRO", "BASIC", "INTERMEDIATE", "ADVANCED", "MASTER"];

fn level_rank(level: &str) -> i64 {
    LEVEL_ORDER
        .iter()
        .position(|l| *l == level)
        .map_or(-1, |i| i as i64)
}

fn marker(indent: usize) -> String {
    "--".repeat(indent)
}

/// Immediate children grouped by `level_on_parent`, groups ordered by
/// canonical rank (stable, so unknown labels keep first-seen order among
/// themselves).
fn level_groups(node: &SkillScoreTree) -> Vec<(&str, Vec<&SkillScoreTree>)> {
    node.upstream_skills
        .iter()
        .map(|child| child.level_on_parent.as_str())
        .unique()
        .sorted_by_key(|level| level_rank(level))
        .map(|level| (level, node.children_at_level(level)))
        .collect()
}

/// Render with `[<LEVEL> Subskills]` headers.
///
/// Each non-empty group gets a header one step deeper than the parent, and
/// its children print two steps deeper, visually nesting under the header.
#[must_use]
pub fn to_ai_string(tree: &SkillScoreTree, indent: usize) -> String {
    let mut lines = Vec::new();
    write_with_levels(tree, indent, &mut lines);
    lines.join("\n")
}

fn write_with_levels(node: &SkillScoreTree, indent: usize, lines: &mut Vec<String>) {
    lines.push(format!("{}{}", marker(indent), node.skill_name));
    for (level, children) in level_groups(node) {
        lines.push(format!("{}[{} Subskills]", marker(indent + 1), level));
        for child in children {
            write_with_levels(child, indent + 2, lines);
        }
    }
}

/// Render without group headers; children print one step deeper than the
/// parent. Lines are the skill names.
#[must_use]
pub fn to_ai_string_no_levels(tree: &SkillScoreTree, indent: usize) -> String {
    to_ai_string_no_levels_with(tree, indent, |node| node.skill_name.clone())
}

/// [`to_ai_string_no_levels`] with a caller-supplied line label.
#[must_use]
pub fn to_ai_string_no_levels_with<F>(tree: &SkillScoreTree, indent: usize, format_line: F) -> String
where
    F: Fn(&SkillScoreTree) -> String,
{
    let mut lines = Vec::new();
    write_no_levels(tree, indent, &format_line, &mut lines);
    lines.join("\n")
}

fn write_no_levels<F>(node: &SkillScoreTree, indent: usize, format_line: &F, lines: &mut Vec<String>)
where
    F: Fn(&SkillScoreTree) -> String,
{
    lines.push(format!("{}{}", marker(indent), format_line(node)));
    for (_, children) in level_groups(node) {
        for child in children {
            write_no_levels(child, indent + 1, format_line, lines);
        }
    }
}
