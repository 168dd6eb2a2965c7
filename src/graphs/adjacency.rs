use ahash::{HashMap, HashMapExt};

use super::{Edge, Graph, NodeId};

/// Incident edges per node, borrowed from a [`Graph`].
///
/// Every edge is listed under both of its endpoints, so a self-loop shows up
/// twice under its node. Parallel edges are kept as they are.
pub struct AdjacencyIndex<'g> {
    incident: HashMap<NodeId, Vec<&'g Edge>>,
}

impl<'g> AdjacencyIndex<'g> {
    /// Edges touching `node`, in the order they appear in the graph.
    pub fn incident(&self, node: NodeId) -> &[&'g Edge] {
        self.incident.get(&node).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn degree(&self, node: NodeId) -> usize {
        self.incident(node).len()
    }

    /// Number of nodes with at least one incident edge.
    pub fn len(&self) -> usize {
        self.incident.len()
    }

    pub fn is_empty(&self) -> bool {
        self.incident.is_empty()
    }
}

pub fn build_adjacency(graph: &Graph) -> AdjacencyIndex<'_> {
    let mut incident: HashMap<NodeId, Vec<&Edge>> = HashMap::new();

    for edge in graph.edges.iter() {
        incident.entry(edge.source).or_default().push(edge);
        incident.entry(edge.target).or_default().push(edge);
    }

    AdjacencyIndex { incident }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphs::{EdgeId, Node, Position};

    fn node(id: u64) -> Node {
        Node::new(NodeId(id), format!("{}", id), Position::default())
    }

    #[test]
    fn edges_are_listed_under_both_endpoints() {
        let graph = Graph::from_parts(
            vec![node(0), node(1), node(2)],
            vec![
                Edge::new(EdgeId(0), NodeId(0), NodeId(1), 1.0),
                Edge::new(EdgeId(1), NodeId(1), NodeId(2), 1.0),
            ],
        );
        let adjacency = build_adjacency(&graph);

        assert_eq!(adjacency.degree(NodeId(0)), 1);
        assert_eq!(adjacency.degree(NodeId(1)), 2);
        assert_eq!(adjacency.degree(NodeId(2)), 1);
        assert_eq!(adjacency.incident(NodeId(2))[0].id, EdgeId(1));
        assert_eq!(adjacency.len(), 3);
    }

    #[test]
    fn parallel_edges_and_self_loops_are_kept() {
        let graph = Graph::from_parts(
            vec![node(0), node(1)],
            vec![
                Edge::new(EdgeId(0), NodeId(0), NodeId(1), 1.0),
                Edge::new(EdgeId(1), NodeId(1), NodeId(0), 2.0),
                Edge::new(EdgeId(2), NodeId(0), NodeId(0), 3.0),
            ],
        );
        let adjacency = build_adjacency(&graph);

        let ids: Vec<_> = adjacency
            .incident(NodeId(0))
            .iter()
            .map(|edge| edge.id.0)
            .collect();
        assert_eq!(ids, vec![0, 1, 2, 2]);
        assert_eq!(adjacency.degree(NodeId(1)), 2);
    }

    #[test]
    fn isolated_nodes_have_no_entries() {
        let graph = Graph::from_parts(vec![node(0)], Vec::new());
        let adjacency = build_adjacency(&graph);

        assert!(adjacency.is_empty());
        assert!(adjacency.incident(NodeId(0)).is_empty());
    }
}
