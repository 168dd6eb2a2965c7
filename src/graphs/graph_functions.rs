use itertools::Itertools;
use rand::prelude::*;

use super::{Distance, Edge, EdgeId, Graph, Node, NodeId, Position};
use crate::search::PathResult;

/// The cheapest edge joining `a` and `b` in either orientation.
pub fn cheapest_edge_between(graph: &Graph, a: NodeId, b: NodeId) -> Option<&Edge> {
    graph
        .edges
        .iter()
        .filter(|edge| edge.joins(a, b))
        .min_by(|x, y| x.weight.total_cmp(&y.weight))
}

/// Sum of the cheapest edges along `path`, `None` if two consecutive nodes are
/// not connected.
pub fn path_cost(graph: &Graph, path: &[NodeId]) -> Option<Distance> {
    path.iter()
        .tuple_windows()
        .map(|(&tail, &head)| cheapest_edge_between(graph, tail, head).map(|edge| edge.weight))
        .sum()
}

/// Check that a result is a plausible answer for `source` to `destination`.
///
/// This does not prove optimality, only that a found path is a connected walk
/// between the right endpoints whose weights add up to the reported cost.
pub fn validate_path(
    graph: &Graph,
    source: NodeId,
    destination: NodeId,
    result: &PathResult,
) -> Result<(), String> {
    if !result.path_found {
        if !result.node_path.is_empty() {
            return Err("path is not empty although none was found".to_string());
        }
        if result.total_cost != Distance::INFINITY {
            return Err(format!(
                "no path found but cost is {} instead of infinity",
                result.total_cost
            ));
        }
        return Ok(());
    }

    if result.source() != Some(source) {
        return Err("first node of path is not the source".to_string());
    }
    if result.destination() != Some(destination) {
        return Err("last node of path is not the destination".to_string());
    }

    let Some(cost) = path_cost(graph, &result.node_path) else {
        return Err("path contains consecutive nodes without an edge".to_string());
    };
    // sums of floats may differ in the last bits depending on the order
    if (cost - result.total_cost).abs() > 1e-9 * cost.abs().max(1.0) {
        return Err(format!(
            "path weighs {} but reported cost is {}",
            cost, result.total_cost
        ));
    }

    Ok(())
}

/// A random graph with `number_of_nodes` nodes and up to `number_of_edges`
/// edges with integral weights in `0..=max_weight`. Self-loops and parallel
/// edges are allowed, since the search must cope with both.
pub fn random_graph<R: Rng>(
    rng: &mut R,
    number_of_nodes: u64,
    number_of_edges: u64,
    max_weight: u32,
) -> Graph {
    let nodes = (0..number_of_nodes)
        .map(|id| {
            let position = Position::new(rng.gen_range(0.0..1000.0), rng.gen_range(0.0..1000.0));
            Node::new(NodeId(id), format!("Node {}", id + 1), position)
        })
        .collect();

    let edges = if number_of_nodes == 0 {
        Vec::new()
    } else {
        (0..number_of_edges)
            .map(|id| {
                let source = NodeId(rng.gen_range(0..number_of_nodes));
                let target = NodeId(rng.gen_range(0..number_of_nodes));
                let weight = rng.gen_range(0..=max_weight) as f64;
                Edge::new(EdgeId(id), source, target, weight).with_name(format!("Edge {}", id + 1))
            })
            .collect()
    };

    Graph::from_parts(nodes, edges)
}

/// A random pair of nodes of `graph`, possibly equal.
pub fn random_request<R: Rng>(graph: &Graph, rng: &mut R) -> Option<(NodeId, NodeId)> {
    let source = graph.nodes.choose(rng)?.id;
    let destination = graph.nodes.choose(rng)?.id;
    Some((source, destination))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use rand::rngs::StdRng;

    use super::*;

    fn line() -> Graph {
        let mut graph = Graph::new();
        let a = graph.add_node(Some("A"), Position::default());
        let b = graph.add_node(Some("B"), Position::default());
        let c = graph.add_node(Some("C"), Position::default());
        graph.add_edge(a, b, 2.0, None).unwrap();
        graph.add_edge(c, b, 3.0, None).unwrap();
        graph
    }

    #[test]
    fn cost_of_walk() {
        let graph = line();
        assert_eq!(path_cost(&graph, &[NodeId(0), NodeId(1), NodeId(2)]), Some(5.0));
        assert_eq!(path_cost(&graph, &[NodeId(2), NodeId(1)]), Some(3.0));
        assert_eq!(path_cost(&graph, &[NodeId(0)]), Some(0.0));
        assert_eq!(path_cost(&graph, &[NodeId(0), NodeId(2)]), None);
    }

    #[test]
    fn cheapest_of_parallel_edges() {
        let mut graph = line();
        graph
            .edges
            .push(Edge::new(EdgeId(10), NodeId(1), NodeId(0), 0.5));

        let edge = cheapest_edge_between(&graph, NodeId(0), NodeId(1)).unwrap();
        assert_eq!(edge.id, EdgeId(10));
    }

    #[test]
    fn validation_rejects_wrong_cost() {
        let graph = line();
        let mut result = PathResult {
            path_found: true,
            node_path: vec![NodeId(0), NodeId(1), NodeId(2)],
            total_cost: 5.0,
            elapsed: Duration::ZERO,
        };
        assert!(validate_path(&graph, NodeId(0), NodeId(2), &result).is_ok());

        result.total_cost = 4.0;
        assert!(validate_path(&graph, NodeId(0), NodeId(2), &result).is_err());
        assert!(validate_path(&graph, NodeId(1), NodeId(2), &result).is_err());
        assert!(validate_path(&graph, NodeId(0), NodeId(2), &PathResult::not_found()).is_ok());
    }

    #[test]
    fn random_graph_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        let graph = random_graph(&mut rng, 20, 50, 9);

        assert_eq!(graph.number_of_nodes(), 20);
        assert_eq!(graph.number_of_edges(), 50);
        assert!(graph
            .edges
            .iter()
            .all(|edge| (0.0..=9.0).contains(&edge.weight) && edge.source.0 < 20));
        assert!(random_request(&graph, &mut rng).is_some());
        assert!(random_request(&Graph::new(), &mut rng).is_none());
    }
}
