use crate::client::{GraphClient, StoreError};
use neo4rs::query;
use tracing::warn;

/// Read-side access to the graph.
pub struct GraphReader {
    client: GraphClient,
}

impl GraphReader {
    pub fn new(client: GraphClient) -> Self {
        Self { client }
    }

    /// Run a count query and return the scalar from its first row.
    ///
    /// A COUNT query always yields one row when the store behaves; an empty
    /// result set degrades to 0 with a warning instead of failing.
    pub async fn fetch_count(&self, cypher: &str, column: &str) -> Result<u64, StoreError> {
        let mut rows = self.client.graph().execute(query(cypher)).await?;

        match rows.next().await? {
            Some(row) => {
                let count: i64 = row.get(column).unwrap_or(0);
                Ok(count.max(0) as u64)
            }
            None => {
                warn!(column, "count query returned no rows, degrading to 0");
                Ok(0)
            }
        }
    }
}
