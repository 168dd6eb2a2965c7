use std::collections::BTreeMap;

use ahash::{HashMap, HashMapExt};
use log::warn;

use crate::graphs::{Distance, Graph, NodeId};

/// Best known distance per node, ordered by node id so snapshots are stable.
pub type DistanceTable = BTreeMap<NodeId, Distance>;

/// A reconstructed path together with its cost.
#[derive(Clone, Debug, PartialEq)]
pub struct Path {
    pub nodes: Vec<NodeId>,
    pub distance: Distance,
}

/// Distances and predecessors of one search.
pub struct DijkstraData {
    distances: DistanceTable,
    predecessors: HashMap<NodeId, NodeId>,
}

impl DijkstraData {
    /// Every node of `graph` starts at infinity, `source` at zero.
    pub fn new(graph: &Graph, source: NodeId) -> Self {
        let mut distances: DistanceTable = graph
            .nodes
            .iter()
            .map(|node| (node.id, Distance::INFINITY))
            .collect();
        distances.insert(source, 0.0);

        DijkstraData {
            distances,
            predecessors: HashMap::new(),
        }
    }

    /// Distance of a node, `None` if the node is not part of the graph.
    pub fn get_distance(&self, node: NodeId) -> Option<Distance> {
        self.distances.get(&node).copied()
    }

    pub fn get_predecessor(&self, node: NodeId) -> Option<NodeId> {
        self.predecessors.get(&node).copied()
    }

    pub fn distances(&self) -> &DistanceTable {
        &self.distances
    }

    /// Records `distance` for `head` reached from `tail` if it beats the
    /// current value. Returns whether the table changed.
    pub fn update(&mut self, tail: NodeId, head: NodeId, distance: Distance) -> bool {
        match self.distances.get_mut(&head) {
            Some(current) if distance < *current => {
                *current = distance;
                self.predecessors.insert(head, tail);
                true
            }
            _ => false,
        }
    }

    /// Walks the predecessors back from `target` to `source`.
    ///
    /// Returns `None` when `target` is unreachable or the chain breaks before
    /// reaching `source`.
    pub fn get_path(&self, source: NodeId, target: NodeId) -> Option<Path> {
        let distance = self.get_distance(target)?;
        if distance == Distance::INFINITY {
            return None;
        }

        let mut stack = vec![target];
        let mut current = target;
        while current != source {
            let Some(predecessor) = self.get_predecessor(current) else {
                warn!("predecessor chain from {} broke at {}", target, current);
                return None;
            };
            // a chain longer than the table can only be a cycle
            if stack.len() > self.predecessors.len() {
                warn!("predecessor chain from {} does not reach {}", target, source);
                return None;
            }
            stack.push(predecessor);
            current = predecessor;
        }
        stack.reverse();

        Some(Path {
            nodes: stack,
            distance,
        })
    }

    #[cfg(test)]
    pub(crate) fn set_predecessor(&mut self, node: NodeId, predecessor: NodeId) {
        self.predecessors.insert(node, predecessor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphs::{Node, Position};

    fn graph(n: u64) -> Graph {
        Graph::from_parts(
            (0..n)
                .map(|id| Node::new(NodeId(id), format!("{}", id), Position::default()))
                .collect(),
            Vec::new(),
        )
    }

    #[test]
    fn initial_distances() {
        let data = DijkstraData::new(&graph(3), NodeId(1));

        assert_eq!(data.get_distance(NodeId(0)), Some(Distance::INFINITY));
        assert_eq!(data.get_distance(NodeId(1)), Some(0.0));
        assert_eq!(data.get_distance(NodeId(7)), None);
    }

    #[test]
    fn update_only_on_strict_improvement() {
        let mut data = DijkstraData::new(&graph(3), NodeId(0));

        assert!(data.update(NodeId(0), NodeId(1), 4.0));
        assert!(!data.update(NodeId(2), NodeId(1), 4.0));
        assert_eq!(data.get_predecessor(NodeId(1)), Some(NodeId(0)));
        assert!(data.update(NodeId(2), NodeId(1), 3.0));
        assert_eq!(data.get_predecessor(NodeId(1)), Some(NodeId(2)));
        // unknown nodes are never recorded
        assert!(!data.update(NodeId(0), NodeId(9), 1.0));
    }

    #[test]
    fn path_is_ordered_from_source() {
        let mut data = DijkstraData::new(&graph(3), NodeId(0));
        data.update(NodeId(0), NodeId(1), 1.0);
        data.update(NodeId(1), NodeId(2), 2.0);

        let path = data.get_path(NodeId(0), NodeId(2)).unwrap();
        assert_eq!(path.nodes, vec![NodeId(0), NodeId(1), NodeId(2)]);
        assert_eq!(path.distance, 2.0);

        let trivial = data.get_path(NodeId(0), NodeId(0)).unwrap();
        assert_eq!(trivial.nodes, vec![NodeId(0)]);
    }

    #[test]
    fn broken_chain_is_not_a_path() {
        let mut data = DijkstraData::new(&graph(4), NodeId(0));
        data.update(NodeId(3), NodeId(2), 5.0);

        assert!(data.get_path(NodeId(0), NodeId(2)).is_none());
        assert!(data.get_path(NodeId(0), NodeId(1)).is_none());
    }

    #[test]
    fn cyclic_chain_is_not_a_path() {
        let mut data = DijkstraData::new(&graph(3), NodeId(0));
        data.update(NodeId(2), NodeId(1), 1.0);
        data.set_predecessor(NodeId(2), NodeId(1));

        assert!(data.get_path(NodeId(0), NodeId(1)).is_none());
    }
}
