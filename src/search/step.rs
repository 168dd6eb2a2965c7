use serde::Serialize;

use super::collections::{DistanceTable, FinalizedSet};
use crate::graphs::{Distance, EdgeId, NodeId};

/// One neighbor check made while relaxing the edges of a node.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EdgeRelaxation {
    pub edge: EdgeId,
    pub neighbor: NodeId,
    /// Distance of `neighbor` after the check, whether it improved or not.
    pub new_distance: Distance,
    pub improved: bool,
    /// The current node is the stored target of `edge`, so the traversal runs
    /// target to source.
    pub reversed: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum StepKind {
    Initialize,
    VisitNode,
    RelaxEdges,
    FinalizeNode,
    Complete,
}

/// A single state transition of the search. Every payload is an owned copy.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum AlgorithmStep {
    Initialize {
        distances: DistanceTable,
    },
    /// `finalized` does not yet contain `node`.
    VisitNode {
        node: NodeId,
        distances: DistanceTable,
        finalized: FinalizedSet,
    },
    RelaxEdges {
        node: NodeId,
        relaxations: Vec<EdgeRelaxation>,
    },
    /// `finalized` contains `node`.
    FinalizeNode {
        node: NodeId,
        finalized: FinalizedSet,
    },
    Complete {
        path_found: bool,
        node_path: Vec<NodeId>,
        total_cost: Distance,
    },
}

impl AlgorithmStep {
    pub fn kind(&self) -> StepKind {
        match self {
            AlgorithmStep::Initialize { .. } => StepKind::Initialize,
            AlgorithmStep::VisitNode { .. } => StepKind::VisitNode,
            AlgorithmStep::RelaxEdges { .. } => StepKind::RelaxEdges,
            AlgorithmStep::FinalizeNode { .. } => StepKind::FinalizeNode,
            AlgorithmStep::Complete { .. } => StepKind::Complete,
        }
    }

    /// The node a step is about, if any.
    pub fn node(&self) -> Option<NodeId> {
        match self {
            AlgorithmStep::VisitNode { node, .. }
            | AlgorithmStep::RelaxEdges { node, .. }
            | AlgorithmStep::FinalizeNode { node, .. } => Some(*node),
            AlgorithmStep::Initialize { .. } | AlgorithmStep::Complete { .. } => None,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.kind() == StepKind::Complete
    }
}
