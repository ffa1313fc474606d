use crate::flow::MatchError;
use crate::ranker::MatchCriteria;
use talentgraph_core::value::escape_text;

pub const PERSON_LABEL: &str = "PEOPLE";
pub const TECH_LABEL: &str = "TECH";
pub const KNOWS_RELATIONSHIP: &str = "KNOWS";
pub const SKILL_LEVEL_PROPERTY: &str = "skill_level";
/// Column name the count query returns its scalar under.
pub const MATCH_COUNT_COLUMN: &str = "matches";

/// Build the count query for a criteria set: count distinct people with a
/// KNOWS relationship to a technology node satisfying at least one
/// (skill, minimum level) pair. Criteria are OR-combined, each as one
/// parenthesized clause, in criteria order.
///
/// Empty criteria fail fast instead of producing an unbounded query.
pub fn build_match_count_query(criteria: &MatchCriteria) -> Result<String, MatchError> {
    if criteria.is_empty() {
        return Err(MatchError::EmptyCriteria);
    }

    let clauses = criteria
        .requirements()
        .iter()
        .map(|requirement| {
            format!(
                "(t.name = '{}' AND r.{} >= {})",
                escape_text(&requirement.skill),
                SKILL_LEVEL_PROPERTY,
                requirement.min_level,
            )
        })
        .collect::<Vec<_>>()
        .join(" OR ");

    Ok(format!(
        "MATCH (n:{PERSON_LABEL})-[r:{KNOWS_RELATIONSHIP}]->(t:{TECH_LABEL}) \
         WHERE {clauses} RETURN COUNT(DISTINCT n) AS {MATCH_COUNT_COLUMN}"
    ))
}
