pub mod builder;
pub mod flow;
pub mod ranker;

pub use builder::{
    build_match_count_query, KNOWS_RELATIONSHIP, MATCH_COUNT_COLUMN, PERSON_LABEL,
    SKILL_LEVEL_PROPERTY, TECH_LABEL,
};
pub use flow::{MatchCounter, MatchError, MatchResult, Matchmaker};
pub use ranker::{rank, MatchCriteria, SkillRequirement, DEFAULT_TOP_K};
