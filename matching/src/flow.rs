use crate::builder::{build_match_count_query, MATCH_COUNT_COLUMN};
use crate::ranker::{MatchCriteria, DEFAULT_TOP_K};
use async_trait::async_trait;
use classifier::{Classification, ClassifierError, SkillClassifier};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use store::{GraphReader, StoreError};
use talentgraph_core::error::{ErrorCode, TalentgraphError};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum MatchError {
    #[error("match criteria must not be empty")]
    EmptyCriteria,
    #[error("classification error: {0}")]
    Classifier(#[from] ClassifierError),
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl TalentgraphError for MatchError {
    fn error_code(&self) -> ErrorCode {
        match self {
            MatchError::EmptyCriteria => ErrorCode::InvalidArgument,
            MatchError::Classifier(err) => err.error_code(),
            MatchError::Store(err) => err.error_code(),
        }
    }
}

/// Number of distinct people satisfying the criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub matches: u64,
}

/// Executes a prepared count query against the people graph. The flow
/// talks to the store through this seam so tests can observe or stub the
/// round-trip.
#[async_trait]
pub trait MatchCounter: Send + Sync {
    async fn count_matches(&self, cypher: &str) -> Result<u64, StoreError>;
}

#[async_trait]
impl MatchCounter for GraphReader {
    async fn count_matches(&self, cypher: &str) -> Result<u64, StoreError> {
        self.fetch_count(cypher, MATCH_COUNT_COLUMN).await
    }
}

/// Orchestrates one matchmaking request: description → classification →
/// top-ranked criteria → count query.
pub struct Matchmaker {
    classifier: Arc<dyn SkillClassifier>,
    counter: Arc<dyn MatchCounter>,
}

impl Matchmaker {
    pub fn new(classifier: Arc<dyn SkillClassifier>, counter: Arc<dyn MatchCounter>) -> Self {
        Self {
            classifier,
            counter,
        }
    }

    pub async fn match_people(&self, description: &str) -> Result<MatchResult, MatchError> {
        let classification = self.classifier.classify(description).await?;

        let requirements = match classification {
            Classification::TooSpecific => {
                info!("description too ambiguous to classify, no store query issued");
                return Ok(MatchResult { matches: 0 });
            }
            Classification::Requirements(map) => lowercase_skills(map),
        };

        if requirements.is_empty() {
            warn!("classification returned no skills, no store query issued");
            return Ok(MatchResult { matches: 0 });
        }

        let criteria = MatchCriteria::top(&requirements, DEFAULT_TOP_K);
        let query = build_match_count_query(&criteria)?;
        let matches = self.counter.count_matches(&query).await?;
        info!(matches, "matchmaking query executed");

        Ok(MatchResult { matches })
    }
}

/// Skill names are compared case-insensitively against the stored graph
/// property; lower-casing happens here, before criteria are built. Names
/// colliding after lower-casing keep the first occurrence's position with
/// the last occurrence's level.
fn lowercase_skills(map: IndexMap<String, u8>) -> IndexMap<String, u8> {
    map.into_iter()
        .map(|(skill, level)| (skill.to_lowercase(), level))
        .collect()
}
