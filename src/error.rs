use thiserror::Error;

use crate::graphs::{EdgeId, NodeId, Weight};

/// Faults that stop a search. Not-found outcomes are ordinary results.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// Dijkstra is only correct for non-negative weights.
    #[error("edge {edge} has weight {weight}, but shortest paths require non-negative weights")]
    InvalidWeight { edge: EdgeId, weight: Weight },
}

/// Errors raised when editing a [`Graph`](crate::graphs::Graph).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    #[error("node not found: {0}")]
    NodeNotFound(NodeId),

    #[error("edge not found: {0}")]
    EdgeNotFound(EdgeId),

    #[error("edge would connect {0} to itself")]
    SelfLoop(NodeId),

    #[error("{from} and {to} are already connected")]
    DuplicateEdge { from: NodeId, to: NodeId },

    #[error("invalid edge weight: {0}")]
    InvalidWeight(Weight),
}
