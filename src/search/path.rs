use std::time::Duration;

use serde::Serialize;

use super::collections::Path;
use crate::graphs::{Distance, NodeId};

/// Answer of a one-shot shortest path query.
///
/// `path_found == false` is a regular outcome: a missing endpoint or an
/// unreachable destination, never a fault.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PathResult {
    pub path_found: bool,
    /// Source first, destination last. Empty when no path was found.
    pub node_path: Vec<NodeId>,
    /// Infinite when no path was found.
    pub total_cost: Distance,
    /// Wall-clock time of the search, for diagnostics only.
    pub elapsed: Duration,
}

impl PathResult {
    pub fn not_found() -> Self {
        PathResult {
            path_found: false,
            node_path: Vec::new(),
            total_cost: Distance::INFINITY,
            elapsed: Duration::ZERO,
        }
    }

    pub fn from_path(path: Option<Path>, elapsed: Duration) -> Self {
        match path {
            Some(Path { nodes, distance }) => PathResult {
                path_found: true,
                node_path: nodes,
                total_cost: distance,
                elapsed,
            },
            None => PathResult {
                elapsed,
                ..PathResult::not_found()
            },
        }
    }

    pub fn source(&self) -> Option<NodeId> {
        self.node_path.first().copied()
    }

    pub fn destination(&self) -> Option<NodeId> {
        self.node_path.last().copied()
    }
}
