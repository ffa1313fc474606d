use crate::client::{GraphClient, StoreError};
use ingestion::{EndpointGuard, WriteOperation, GUARD_A_COLUMN, GUARD_B_COLUMN};
use neo4rs::query;
use tracing::{info, warn};

/// Outcome of one operation in a batch, by submission index.
#[derive(Debug)]
pub struct WriteReport {
    pub index: usize,
    pub outcome: Result<(), StoreError>,
}

impl WriteReport {
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Write-side access to the graph. Used by ingestion callers only.
pub struct GraphWriter {
    client: GraphClient,
}

impl GraphWriter {
    pub fn new(client: GraphClient) -> Self {
        Self { client }
    }

    /// Execute each operation in its own write transaction, sequentially.
    ///
    /// Best-effort, non-atomic across the batch: a failed operation is
    /// recorded under its index and the batch moves on. Nothing is retried;
    /// resubmission is the caller's call.
    pub async fn apply_all(&self, operations: &[WriteOperation]) -> Vec<WriteReport> {
        let mut reports = Vec::with_capacity(operations.len());

        for (index, operation) in operations.iter().enumerate() {
            let outcome = self.apply_one(operation).await;
            match &outcome {
                Ok(()) => info!(index, "write applied"),
                Err(err) => warn!(index, error = %err, "write failed"),
            }
            reports.push(WriteReport { index, outcome });
        }

        reports
    }

    async fn apply_one(&self, operation: &WriteOperation) -> Result<(), StoreError> {
        if let Some(guard) = operation.guard() {
            self.check_endpoints(guard).await?;
        }

        let mut txn = self.client.graph().start_txn().await?;
        if let Err(err) = txn.run(query(operation.statement())).await {
            txn.rollback().await.ok();
            return Err(err.into());
        }
        txn.commit().await?;
        Ok(())
    }

    /// More than one node on either side vetoes the merge; zero nodes is
    /// left alone, the merge itself then matches nothing and writes nothing.
    async fn check_endpoints(&self, guard: &EndpointGuard) -> Result<(), StoreError> {
        let mut rows = self.client.graph().execute(query(guard.statement())).await?;

        if let Some(row) = rows.next().await? {
            let a_count: i64 = row.get(GUARD_A_COLUMN).unwrap_or(0);
            let b_count: i64 = row.get(GUARD_B_COLUMN).unwrap_or(0);
            if a_count > 1 || b_count > 1 {
                return Err(StoreError::AmbiguousMatch { a_count, b_count });
            }
        }

        Ok(())
    }
}
