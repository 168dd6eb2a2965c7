use serde::{Deserialize, Serialize};

use super::{EdgeId, NodeId, Weight};

/// An undirected, weighted edge.
///
/// `source` and `target` only record how the edge was stored; traversal works
/// from either endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: EdgeId,
    pub source: NodeId,
    pub target: NodeId,
    pub weight: Weight,
    #[serde(default)]
    pub name: String,
}

impl Edge {
    pub fn new(id: EdgeId, source: NodeId, target: NodeId, weight: Weight) -> Edge {
        Edge {
            id,
            source,
            target,
            weight,
            name: String::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Edge {
        self.name = name.into();
        self
    }

    /// The endpoint reached when leaving `from` over this edge.
    ///
    /// For a self-loop this is `from` itself.
    pub fn opposite(&self, from: NodeId) -> NodeId {
        if self.source == from {
            self.target
        } else {
            self.source
        }
    }

    /// True when walking from `from` runs against the stored orientation,
    /// i.e. `from` is the stored target.
    pub fn is_reversed_from(&self, from: NodeId) -> bool {
        self.target == from
    }

    pub fn touches(&self, node: NodeId) -> bool {
        self.source == node || self.target == node
    }

    pub fn joins(&self, a: NodeId, b: NodeId) -> bool {
        (self.source == a && self.target == b) || (self.source == b && self.target == a)
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}
