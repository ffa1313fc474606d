use crate::backend::CompletionBackend;
use crate::prompt::{build_project_prompt, TOO_SPECIFIC_SENTINEL};
use async_trait::async_trait;
use indexmap::IndexMap;
use std::sync::Arc;
use talentgraph_core::error::{ErrorCode, TalentgraphError};
use thiserror::Error;
use tracing::debug;

pub const MAX_SKILL_LEVEL: u8 = 5;

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("completion backend error: {0}")]
    Backend(#[from] anyhow::Error),
    #[error("completion response is neither a skill map nor the ambiguity sentinel")]
    MalformedResponse,
    #[error("skill level out of range for '{skill}': {level}")]
    InvalidLevel { skill: String, level: i64 },
}

impl TalentgraphError for ClassifierError {
    fn error_code(&self) -> ErrorCode {
        match self {
            ClassifierError::Backend(_) => ErrorCode::Unavailable,
            ClassifierError::MalformedResponse | ClassifierError::InvalidLevel { .. } => {
                ErrorCode::Internal
            }
        }
    }
}

/// What the completion service said about a description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Skill name → required level (0–5), in the service's major-to-minor
    /// order. That order is load-bearing: the ranker's tie-break keeps it.
    Requirements(IndexMap<String, u8>),
    /// The service declined to classify. A defined terminal outcome, not
    /// an error.
    TooSpecific,
}

#[async_trait]
pub trait SkillClassifier: Send + Sync {
    async fn classify(&self, description: &str) -> Result<Classification, ClassifierError>;
}

/// Production classifier: fixed prompt → completion backend → parsed map.
pub struct CompletionClassifier {
    backend: Arc<dyn CompletionBackend>,
}

impl CompletionClassifier {
    pub fn new(backend: Arc<dyn CompletionBackend>) -> Self {
        Self { backend }
    }
}

#[async_trait]
impl SkillClassifier for CompletionClassifier {
    async fn classify(&self, description: &str) -> Result<Classification, ClassifierError> {
        let prompt = build_project_prompt(description);
        let response = self.backend.complete(&prompt).await?;
        debug!(bytes = response.len(), "completion response received");
        parse_classification(&response)
    }
}

/// Parse a raw completion response.
///
/// A non-JSON response is acceptable only when it begins with the
/// ambiguity sentinel; any other non-JSON text is a hard failure, as is a
/// level outside 0–5.
pub fn parse_classification(response: &str) -> Result<Classification, ClassifierError> {
    let trimmed = response.trim();
    if trimmed.starts_with(TOO_SPECIFIC_SENTINEL) {
        return Ok(Classification::TooSpecific);
    }

    let parsed: IndexMap<String, i64> =
        serde_json::from_str(trimmed).map_err(|_| ClassifierError::MalformedResponse)?;

    let mut requirements = IndexMap::with_capacity(parsed.len());
    for (skill, level) in parsed {
        if !(0..=MAX_SKILL_LEVEL as i64).contains(&level) {
            return Err(ClassifierError::InvalidLevel { skill, level });
        }
        requirements.insert(skill, level as u8);
    }

    Ok(Classification::Requirements(requirements))
}
