pub mod node;
pub mod op;
pub mod relationship;

pub use node::{build_node_write, build_node_writes};
pub use op::{EndpointGuard, ValidationError, WriteOperation, GUARD_A_COLUMN, GUARD_B_COLUMN};
pub use relationship::{
    build_relationship_write, build_relationship_writes, EdgeProperty, EndpointSelector,
    RelationshipTemplate,
};
