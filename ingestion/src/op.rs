use talentgraph_core::error::{ErrorCode, TalentgraphError};
use thiserror::Error;

/// Column names returned by an [`EndpointGuard`] probe.
pub const GUARD_A_COLUMN: &str = "a_count";
pub const GUARD_B_COLUMN: &str = "b_count";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("column not found in record: {0}")]
    MissingColumn(String),
    #[error("node label must not be empty")]
    EmptyLabel,
    #[error("relationship name must not be empty")]
    EmptyRelationshipName,
    #[error("endpoint selector value for node '{side}' is absent")]
    AbsentEndpointValue { side: char },
    #[error("edge property '{0}' has an absent value")]
    AbsentEdgeProperty(String),
}

impl TalentgraphError for ValidationError {
    fn error_code(&self) -> ErrorCode {
        ErrorCode::InvalidArgument
    }
}

/// A single idempotent graph write. Each operation runs in its own write
/// transaction; relationship operations carry a guard probe the writer
/// runs first to enforce the endpoint-ambiguity policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOperation {
    statement: String,
    guard: Option<EndpointGuard>,
}

impl WriteOperation {
    pub(crate) fn node(statement: String) -> Self {
        Self {
            statement,
            guard: None,
        }
    }

    pub(crate) fn relationship(statement: String, guard: EndpointGuard) -> Self {
        Self {
            statement,
            guard: Some(guard),
        }
    }

    pub fn statement(&self) -> &str {
        &self.statement
    }

    pub fn guard(&self) -> Option<&EndpointGuard> {
        self.guard.as_ref()
    }
}

/// Endpoint-count probe for a relationship merge. Yields one row with
/// [`GUARD_A_COLUMN`] and [`GUARD_B_COLUMN`]; a count above one on either
/// side vetoes the merge, a count of zero lets the merge run as a no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointGuard {
    statement: String,
}

impl EndpointGuard {
    pub(crate) fn new(statement: String) -> Self {
        Self { statement }
    }

    pub fn statement(&self) -> &str {
        &self.statement
    }
}
