use sg::graph::{sort_skills, ProposedSkill, LEVEL_NEW};

fn skill(name: &str, level: &str, path_to: &[&str]) -> ProposedSkill {
    ProposedSkill {
        name: name.to_string(),
        level: level.to_string(),
        path_to: path_to.iter().map(|s| (*s).to_string()).collect(),
    }
}

fn assert_order_invariant(sorted: &[ProposedSkill]) {
    let index = |name: &str| {
        sorted
            .iter()
            .position(|s| s.name == name)
            .unwrap_or_else(|| panic!("{name} missing from output"))
    };
    for s in sorted {
        for dep in &s.path_to {
            assert!(
                index(dep) < index(&s.name),
                "{dep} must precede {}",
                s.name
            );
        }
    }
}

#[test]
fn test_every_referenced_name_is_present() {
    let input = vec![
        skill("Calculus", "ADVANCED", &["Arithmetic", "Algebra"]),
        skill("Statistics", "INTERMEDIATE", &["Arithmetic"]),
    ];
    let sorted = sort_skills(&input).unwrap();

    assert!(sorted.len() >= input.len());
    for name in ["Arithmetic", "Algebra", "Calculus", "Statistics"] {
        assert!(sorted.iter().any(|s| s.name == name), "{name} missing");
    }
    assert_order_invariant(&sorted);
}

#[test]
fn test_synthesized_entries_are_marked_new() {
    let sorted = sort_skills(&[skill("Calculus", "ADVANCED", &["Algebra"])]).unwrap();
    let algebra = sorted.iter().find(|s| s.name == "Algebra").unwrap();
    assert_eq!(algebra.level, LEVEL_NEW);
    assert!(algebra.path_to.is_empty());
}

#[test]
fn test_resorting_sorted_output_holds_invariant() {
    let sorted = sort_skills(&[
        skill("Calculus", "ADVANCED", &["Arithmetic", "Algebra"]),
        skill("Algebra", "BASIC", &["Arithmetic"]),
        skill("Arithmetic", "INTRO", &[]),
    ])
    .unwrap();

    let resorted = sort_skills(&sorted).unwrap();
    assert_eq!(resorted.len(), sorted.len());
    assert_order_invariant(&resorted);
}

#[test]
fn test_two_node_cycle_throws() {
    let result = sort_skills(&[skill("A", "X", &["B"]), skill("B", "X", &["A"])]);
    assert!(result.is_err());
}

#[test]
fn test_self_dependency_is_a_cycle() {
    let result = sort_skills(&[skill("A", "X", &["A"])]);
    assert!(result.is_err());
}
