//! Facade over the talentgraph crates: constructs the collaborators from
//! configuration and exposes the ingestion and matchmaking entry points.
//! The excluded HTTP layer integrates here and nowhere deeper.

use classifier::{CompletionBackend, CompletionClassifier, OpenAiBackend, SkillClassifier};
use ingestion::{
    build_node_writes, build_relationship_writes, RelationshipTemplate, ValidationError,
    WriteOperation,
};
use matching::{MatchError, MatchResult, Matchmaker};
use std::sync::Arc;
use store::{GraphClient, GraphReader, GraphWriter, StoreError};
use talentgraph_core::config::AppConfig;
use talentgraph_core::error::{ErrorCode, TalentgraphError};
use talentgraph_core::record::{ColumnSelection, RecordSet};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),
    #[error("match error: {0}")]
    Match(#[from] MatchError),
}

impl TalentgraphError for ServiceError {
    fn error_code(&self) -> ErrorCode {
        match self {
            ServiceError::Store(err) => err.error_code(),
            ServiceError::Match(err) => err.error_code(),
        }
    }
}

/// Per-record outcome of an ingestion call. Bad rows are reported in
/// place; the rest of the batch still runs.
#[derive(Debug)]
pub enum IngestOutcome {
    Written,
    BuildFailed(ValidationError),
    WriteFailed(StoreError),
}

impl IngestOutcome {
    pub fn is_written(&self) -> bool {
        matches!(self, IngestOutcome::Written)
    }
}

pub struct MatchmakingService {
    writer: GraphWriter,
    matchmaker: Matchmaker,
}

impl MatchmakingService {
    /// Construct every collaborator up front. Dropping the service
    /// releases the store connection pool; nothing ambient survives it.
    pub async fn connect(config: &AppConfig) -> Result<Self, ServiceError> {
        let client = GraphClient::connect(&config.graph).await?;
        let backend: Arc<dyn CompletionBackend> =
            Arc::new(OpenAiBackend::new(config.completion.clone()));
        let classifier: Arc<dyn SkillClassifier> =
            Arc::new(CompletionClassifier::new(backend));
        Ok(Self::with_components(client, classifier))
    }

    /// Assemble from pre-built collaborators, e.g. a stub classifier.
    pub fn with_components(client: GraphClient, classifier: Arc<dyn SkillClassifier>) -> Self {
        let reader = Arc::new(GraphReader::new(client.clone()));
        Self {
            writer: GraphWriter::new(client),
            matchmaker: Matchmaker::new(classifier, reader),
        }
    }

    /// Merge one node per record under `label`.
    pub async fn ingest_nodes(
        &self,
        label: &str,
        records: &RecordSet,
        selection: &ColumnSelection,
    ) -> Vec<IngestOutcome> {
        self.apply(build_node_writes(label, records, selection)).await
    }

    /// Merge one relationship per record between already-ingested nodes.
    pub async fn ingest_relationships(
        &self,
        template: &RelationshipTemplate,
        records: &RecordSet,
    ) -> Vec<IngestOutcome> {
        self.apply(build_relationship_writes(template, records)).await
    }

    /// Count people matching a free-text project description.
    pub async fn match_people(&self, description: &str) -> Result<MatchResult, ServiceError> {
        Ok(self.matchmaker.match_people(description).await?)
    }

    async fn apply(
        &self,
        built: Vec<Result<WriteOperation, ValidationError>>,
    ) -> Vec<IngestOutcome> {
        let mut outcomes = Vec::with_capacity(built.len());
        let mut operations = Vec::new();
        let mut slots = Vec::new();

        for (index, result) in built.into_iter().enumerate() {
            match result {
                Ok(operation) => {
                    operations.push(operation);
                    slots.push(index);
                    outcomes.push(IngestOutcome::Written);
                }
                Err(err) => outcomes.push(IngestOutcome::BuildFailed(err)),
            }
        }

        for report in self.writer.apply_all(&operations).await {
            if let Err(err) = report.outcome {
                outcomes[slots[report.index]] = IngestOutcome::WriteFailed(err);
            }
        }

        outcomes
    }
}
