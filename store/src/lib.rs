pub mod client;
pub mod reader;
pub mod writer;

pub use client::{GraphClient, StoreError};
pub use reader::GraphReader;
pub use writer::{GraphWriter, WriteReport};

/// Re-export for callers that need raw Cypher access (e.g. test assertions).
pub use neo4rs::query;
