use matching::{build_match_count_query, MatchCriteria, MatchError, SkillRequirement};

fn criteria(entries: &[(&str, u8)]) -> MatchCriteria {
    MatchCriteria::from_requirements(
        entries
            .iter()
            .map(|(skill, level)| SkillRequirement {
                skill: skill.to_string(),
                min_level: *level,
            })
            .collect(),
    )
}

#[test]
fn test_or_clauses_appear_in_criteria_order() {
    let query =
        build_match_count_query(&criteria(&[("python", 4), ("go", 3), ("docker", 2)])).unwrap();

    assert_eq!(
        query,
        "MATCH (n:PEOPLE)-[r:KNOWS]->(t:TECH) WHERE \
         (t.name = 'python' AND r.skill_level >= 4) OR \
         (t.name = 'go' AND r.skill_level >= 3) OR \
         (t.name = 'docker' AND r.skill_level >= 2) \
         RETURN COUNT(DISTINCT n) AS matches"
    );
}

#[test]
fn test_single_criterion_has_no_or() {
    let query = build_match_count_query(&criteria(&[("rust", 5)])).unwrap();

    assert_eq!(
        query,
        "MATCH (n:PEOPLE)-[r:KNOWS]->(t:TECH) WHERE \
         (t.name = 'rust' AND r.skill_level >= 5) \
         RETURN COUNT(DISTINCT n) AS matches"
    );
}

#[test]
fn test_empty_criteria_fail_fast() {
    let err = build_match_count_query(&criteria(&[])).unwrap_err();
    assert!(matches!(err, MatchError::EmptyCriteria));
}

#[test]
fn test_skill_names_are_escaped() {
    let query = build_match_count_query(&criteria(&[("int'l seo", 2)])).unwrap();
    assert!(query.contains("(t.name = 'int\\'l seo' AND r.skill_level >= 2)"));
}
