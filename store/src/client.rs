use neo4rs::Graph;
use talentgraph_core::config::GraphConfig;
use talentgraph_core::error::{ErrorCode, TalentgraphError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("ambiguous relationship endpoints: {a_count} matches for side a, {b_count} for side b")]
    AmbiguousMatch { a_count: i64, b_count: i64 },
    #[error("graph store error: {0}")]
    Store(#[from] neo4rs::Error),
}

impl TalentgraphError for StoreError {
    fn error_code(&self) -> ErrorCode {
        match self {
            StoreError::AmbiguousMatch { .. } => ErrorCode::AmbiguousMatch,
            StoreError::Store(_) => ErrorCode::Unavailable,
        }
    }
}

/// Owns the bolt driver. Constructed once at startup and handed to the
/// writer/reader; dropping the last clone releases the connection pool.
#[derive(Clone)]
pub struct GraphClient {
    graph: Graph,
}

impl GraphClient {
    pub async fn connect(config: &GraphConfig) -> Result<Self, StoreError> {
        let graph = Graph::new(&config.uri, &config.user, &config.password).await?;
        Ok(Self { graph })
    }

    pub(crate) fn graph(&self) -> &Graph {
        &self.graph
    }
}
