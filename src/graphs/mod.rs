use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::GraphError;

pub mod adjacency;
pub mod edge;
pub mod graph_functions;
pub mod node;

pub use adjacency::{build_adjacency, AdjacencyIndex};
pub use edge::Edge;
pub use node::{Node, Position};

pub type Weight = f64;
pub type Distance = f64;

/// Opaque identifier of a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// Opaque identifier of an edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId(pub u64);

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// A snapshot of an undirected, weighted graph.
///
/// The engine only ever borrows a graph. Nothing at the type level ties the
/// endpoints of `edges` to `nodes`; the editing methods below enforce that,
/// while the raw vectors accept anything so that callers can hand in graphs
/// with parallel edges, self-loops or broken weights.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Graph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    #[serde(default)]
    node_counter: u64,
    #[serde(default)]
    edge_counter: u64,
}

impl Graph {
    pub fn new() -> Self {
        Graph::default()
    }

    pub fn from_parts(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Graph {
            nodes,
            edges,
            node_counter: 0,
            edge_counter: 0,
        }
    }

    pub fn number_of_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn number_of_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.iter().any(|node| node.id == id)
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|node| node.id == id)
    }

    pub fn node_by_name(&self, name: &str) -> Option<&Node> {
        self.nodes.iter().find(|node| node.name == name)
    }

    /// Adds a node with a fresh id. Without a name the node is called `Node N`.
    pub fn add_node(&mut self, name: Option<&str>, position: Position) -> NodeId {
        self.node_counter += 1;
        let id = self.fresh_node_id();
        let name = match name {
            Some(name) if !name.trim().is_empty() => name.to_string(),
            _ => format!("Node {}", self.node_counter),
        };
        self.nodes.push(Node::new(id, name, position));
        id
    }

    /// Removes a node together with every edge touching it.
    pub fn remove_node(&mut self, id: NodeId) -> Result<Node, GraphError> {
        let index = self
            .nodes
            .iter()
            .position(|node| node.id == id)
            .ok_or(GraphError::NodeNotFound(id))?;

        self.edges.retain(|edge| !edge.touches(id));
        Ok(self.nodes.remove(index))
    }

    /// Connects two existing nodes. Self-loops, a second edge between the same
    /// pair (in either orientation) and negative or non-finite weights are
    /// rejected.
    pub fn add_edge(
        &mut self,
        source: NodeId,
        target: NodeId,
        weight: Weight,
        name: Option<&str>,
    ) -> Result<EdgeId, GraphError> {
        for endpoint in [source, target] {
            if !self.contains_node(endpoint) {
                return Err(GraphError::NodeNotFound(endpoint));
            }
        }
        if source == target {
            return Err(GraphError::SelfLoop(source));
        }
        if self.edge_exists(source, target) {
            return Err(GraphError::DuplicateEdge {
                from: source,
                to: target,
            });
        }
        if !weight.is_finite() || weight < 0.0 {
            return Err(GraphError::InvalidWeight(weight));
        }

        self.edge_counter += 1;
        let id = self.fresh_edge_id();
        let name = match name {
            Some(name) if !name.trim().is_empty() => name.to_string(),
            _ => format!("Edge {}", self.edge_counter),
        };
        self.edges
            .push(Edge::new(id, source, target, weight).with_name(name));
        Ok(id)
    }

    pub fn remove_edge(&mut self, id: EdgeId) -> Result<Edge, GraphError> {
        let index = self
            .edges
            .iter()
            .position(|edge| edge.id == id)
            .ok_or(GraphError::EdgeNotFound(id))?;
        Ok(self.edges.remove(index))
    }

    /// Whether an edge joins `a` and `b`, regardless of its stored orientation.
    pub fn edge_exists(&self, a: NodeId, b: NodeId) -> bool {
        self.edges.iter().any(|edge| edge.joins(a, b))
    }

    pub fn connected_edges(&self, id: NodeId) -> Vec<&Edge> {
        self.edges.iter().filter(|edge| edge.touches(id)).collect()
    }

    /// Removes everything and restarts the default naming.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
        self.node_counter = 0;
        self.edge_counter = 0;
    }

    pub fn next_node_name(&self) -> String {
        format!("Node {}", self.node_counter + 1)
    }

    pub fn next_edge_name(&self) -> String {
        format!("Edge {}", self.edge_counter + 1)
    }

    // Ids are only required to be unique, so take one past the current maximum.
    fn fresh_node_id(&self) -> NodeId {
        let max = self.nodes.iter().map(|node| node.id.0).max();
        NodeId(max.map_or(0, |max| max + 1))
    }

    fn fresh_edge_id(&self) -> EdgeId {
        let max = self.edges.iter().map(|edge| edge.id.0).max();
        EdgeId(max.map_or(0, |max| max + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> (Graph, [NodeId; 3]) {
        let mut graph = Graph::new();
        let a = graph.add_node(Some("A"), Position::default());
        let b = graph.add_node(Some("B"), Position::default());
        let c = graph.add_node(None, Position::new(3.0, 4.0));
        graph.add_edge(a, b, 1.0, None).unwrap();
        graph.add_edge(b, c, 2.0, Some("bc")).unwrap();
        graph.add_edge(c, a, 3.0, None).unwrap();
        (graph, [a, b, c])
    }

    #[test]
    fn default_names_follow_counters() {
        let (graph, [_, _, c]) = triangle();
        assert_eq!(graph.node(c).unwrap().name, "Node 3");
        assert_eq!(graph.edges[0].name, "Edge 1");
        assert_eq!(graph.edges[1].name, "bc");
        assert_eq!(graph.next_node_name(), "Node 4");
        assert_eq!(graph.next_edge_name(), "Edge 4");
    }

    #[test]
    fn add_edge_rejects_invalid_requests() {
        let (mut graph, [a, b, _]) = triangle();

        assert!(matches!(
            graph.add_edge(a, a, 1.0, None),
            Err(GraphError::SelfLoop(_))
        ));
        assert!(matches!(
            graph.add_edge(b, a, 1.0, None),
            Err(GraphError::DuplicateEdge { .. })
        ));
        assert!(matches!(
            graph.add_edge(a, NodeId(99), 1.0, None),
            Err(GraphError::NodeNotFound(NodeId(99)))
        ));

        let d = graph.add_node(None, Position::default());
        assert!(matches!(
            graph.add_edge(a, d, -1.0, None),
            Err(GraphError::InvalidWeight(_))
        ));
        assert!(matches!(
            graph.add_edge(a, d, f64::NAN, None),
            Err(GraphError::InvalidWeight(_))
        ));
        assert_eq!(graph.number_of_edges(), 3);
    }

    #[test]
    fn remove_node_drops_incident_edges() {
        let (mut graph, [a, b, c]) = triangle();
        let removed = graph.remove_node(b).unwrap();

        assert_eq!(removed.name, "B");
        assert_eq!(graph.number_of_edges(), 1);
        assert!(graph.edge_exists(a, c));
        assert!(!graph.edge_exists(a, b));
        assert!(matches!(
            graph.remove_node(b),
            Err(GraphError::NodeNotFound(_))
        ));
    }

    #[test]
    fn connected_edges_and_removal() {
        let (mut graph, [a, _, _]) = triangle();
        assert_eq!(graph.connected_edges(a).len(), 2);

        let id = graph.connected_edges(a)[0].id;
        graph.remove_edge(id).unwrap();
        assert_eq!(graph.connected_edges(a).len(), 1);
        assert!(matches!(
            graph.remove_edge(id),
            Err(GraphError::EdgeNotFound(_))
        ));
    }

    #[test]
    fn clear_resets_everything() {
        let (mut graph, _) = triangle();
        graph.clear();
        assert_eq!(graph.number_of_nodes(), 0);
        assert_eq!(graph.number_of_edges(), 0);
        assert_eq!(graph.next_node_name(), "Node 1");

        let id = graph.add_node(None, Position::default());
        assert_eq!(id, NodeId(0));
    }
}
