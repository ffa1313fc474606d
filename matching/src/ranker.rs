use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// How many of the highest-level requirements become the effective
/// criteria for one matchmaking request.
pub const DEFAULT_TOP_K: usize = 3;

/// A single match criterion: a skill and the minimum proficiency level
/// (0–5) a person must have in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRequirement {
    pub skill: String,
    pub min_level: u8,
}

/// Order a skill map by level, highest first. The sort is stable: ties
/// keep the order the classification service returned, which it emits
/// major-to-minor.
pub fn rank(skill_map: &IndexMap<String, u8>) -> Vec<SkillRequirement> {
    let mut requirements: Vec<SkillRequirement> = skill_map
        .iter()
        .map(|(skill, level)| SkillRequirement {
            skill: skill.clone(),
            min_level: *level,
        })
        .collect();

    requirements.sort_by(|a, b| b.min_level.cmp(&a.min_level));
    requirements
}

/// The effective match criteria: at most `k` requirements, OR-combined by
/// the query builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchCriteria {
    requirements: Vec<SkillRequirement>,
}

impl MatchCriteria {
    /// Rank the map and keep the first `k` entries, or all of them when
    /// the map is smaller.
    pub fn top(skill_map: &IndexMap<String, u8>, k: usize) -> Self {
        let mut requirements = rank(skill_map);
        requirements.truncate(k);
        Self { requirements }
    }

    /// Assemble criteria directly, bypassing ranking. Intended for tests
    /// and callers that already hold an ordered requirement list.
    pub fn from_requirements(requirements: Vec<SkillRequirement>) -> Self {
        Self { requirements }
    }

    pub fn requirements(&self) -> &[SkillRequirement] {
        &self.requirements
    }

    pub fn len(&self) -> usize {
        self.requirements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&str, u8)]) -> IndexMap<String, u8> {
        entries
            .iter()
            .map(|(skill, level)| (skill.to_string(), *level))
            .collect()
    }

    #[test]
    fn test_rank_is_descending_and_stable_on_ties() {
        let ranked = rank(&map(&[("a", 3), ("b", 5), ("c", 5), ("d", 1)]));

        let order: Vec<(&str, u8)> = ranked
            .iter()
            .map(|req| (req.skill.as_str(), req.min_level))
            .collect();
        assert_eq!(order, vec![("b", 5), ("c", 5), ("a", 3), ("d", 1)]);
    }

    #[test]
    fn test_top_truncates_to_k() {
        let criteria = MatchCriteria::top(&map(&[("a", 3), ("b", 5), ("c", 5), ("d", 1)]), 3);

        let skills: Vec<&str> = criteria
            .requirements()
            .iter()
            .map(|req| req.skill.as_str())
            .collect();
        assert_eq!(skills, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_top_keeps_everything_when_the_map_is_small() {
        let criteria = MatchCriteria::top(&map(&[("a", 2), ("b", 4)]), DEFAULT_TOP_K);
        assert_eq!(criteria.len(), 2);
    }

    #[test]
    fn test_top_of_an_empty_map_is_empty() {
        let criteria = MatchCriteria::top(&IndexMap::new(), DEFAULT_TOP_K);
        assert!(criteria.is_empty());
    }
}
