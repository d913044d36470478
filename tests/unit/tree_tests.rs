use sg::test_utils::{chain_rows, row};
use sg::tree::{to_ai_string, to_ai_string_no_levels, SkillScoreTree};

#[test]
fn test_children_completeness() {
    let rows = vec![
        row("root", "Root", &["root"], "INTRO"),
        row("a", "A", &["root", "a"], "BASIC"),
        row("b", "B", &["root", "b"], "INTERMEDIATE"),
        row("c", "C", &["root", "c"], "ADVANCED"),
    ];
    let tree = SkillScoreTree::from_rows(&rows, "root").unwrap();

    let mut ids: Vec<&str> = tree
        .upstream_skills
        .iter()
        .map(|c| c.skill_id.as_str())
        .collect();
    ids.sort_unstable();
    assert_eq!(ids, vec!["a", "b", "c"]);
}

#[test]
fn test_three_node_chain_serialization_shape() {
    let rows = chain_rows(&["root", "mid", "leaf"]);
    let tree = SkillScoreTree::from_rows(&rows, "root").unwrap();

    let out = to_ai_string_no_levels(&tree, 0);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(!lines[0].starts_with("--"));
    assert!(lines[1].starts_with("--") && !lines[1].starts_with("----"));
    assert!(lines[2].starts_with("----"));
}

#[test]
fn test_level_headers_cover_each_group_once() {
    let rows = vec![
        row("root", "Root", &["root"], "INTRO"),
        row("a", "A", &["root", "a"], "BASIC"),
        row("b", "B", &["root", "b"], "BASIC"),
        row("c", "C", &["root", "c"], "MASTER"),
    ];
    let tree = SkillScoreTree::from_rows(&rows, "root").unwrap();

    let out = to_ai_string(&tree, 0);
    assert_eq!(out.matches("[BASIC Subskills]").count(), 1);
    assert_eq!(out.matches("[MASTER Subskills]").count(), 1);
    assert_eq!(out.lines().count(), 6);
}

#[test]
fn test_subtree_can_be_rebuilt_from_same_rows() {
    let rows = chain_rows(&["root", "mid", "leaf"]);
    let subtree = SkillScoreTree::from_rows(&rows, "mid").unwrap();

    assert_eq!(subtree.skill_id, "mid");
    assert_eq!(subtree.upstream_skills.len(), 1);
    assert_eq!(subtree.upstream_skills[0].skill_id, "leaf");
}

#[test]
fn test_rows_roundtrip_through_json() {
    let rows = chain_rows(&["root", "mid"]);
    let json = serde_json::to_string(&rows).unwrap();
    let back: Vec<sg::tree::ScoredSkillRow> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, rows);
}
