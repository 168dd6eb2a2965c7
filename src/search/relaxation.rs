use log::{debug, trace};

use super::{
    collections::{DijkstraData, FinalizedNodes, NodeDistanceQueue, Path},
    step::EdgeRelaxation,
};
use crate::{
    error::EngineError,
    graphs::{build_adjacency, AdjacencyIndex, Distance, Graph, NodeId},
};

/// State of one Dijkstra run from `source` towards `destination`.
///
/// Both the one-shot search and the step trace drive this type, so they
/// settle nodes in the same order and agree on the outcome.
pub(crate) struct Relaxation<'g> {
    adjacency: AdjacencyIndex<'g>,
    data: DijkstraData,
    queue: NodeDistanceQueue,
    finalized: FinalizedNodes,
    source: NodeId,
    destination: NodeId,
}

impl<'g> Relaxation<'g> {
    /// `None` if either endpoint is not a node of `graph`.
    pub fn new(graph: &'g Graph, source: NodeId, destination: NodeId) -> Option<Self> {
        if !graph.contains_node(source) || !graph.contains_node(destination) {
            debug!(
                "skipping search from {} to {}: endpoint not in graph",
                source, destination
            );
            return None;
        }

        let mut queue = NodeDistanceQueue::new();
        queue.insert(source, 0.0);

        Some(Relaxation {
            adjacency: build_adjacency(graph),
            data: DijkstraData::new(graph, source),
            queue,
            finalized: FinalizedNodes::new(),
            source,
            destination,
        })
    }

    pub fn data(&self) -> &DijkstraData {
        &self.data
    }

    pub fn finalized(&self) -> &FinalizedNodes {
        &self.finalized
    }

    pub fn destination(&self) -> NodeId {
        self.destination
    }

    /// Pops until a node comes out that was not finalized yet. Stale entries
    /// left behind by later improvements are dropped here.
    pub fn next_unsettled(&mut self) -> Option<NodeId> {
        while let Some(element) = self.queue.pop() {
            if !self.finalized.contains(element.node) {
                return Some(element.node);
            }
        }
        None
    }

    pub fn finalize(&mut self, node: NodeId) {
        self.finalized.expand(node);
        debug!(
            "finalized {} at distance {}",
            node,
            self.distance(node)
        );
    }

    /// Checks every edge incident to `current` and improves neighbors where
    /// possible. Every examined neighbor edge is returned, improved or not.
    ///
    /// A self-loop is reported once and never improves anything. Edges leading
    /// outside the graph and edges to finalized neighbors are not examined, but
    /// their weight is still validated.
    pub fn relax(&mut self, current: NodeId) -> Result<Vec<EdgeRelaxation>, EngineError> {
        let distance_current = self.distance(current);
        let mut relaxations: Vec<EdgeRelaxation> = Vec::new();

        for edge in self.adjacency.incident(current) {
            // NaN fails this check too
            if !(edge.weight >= 0.0) {
                return Err(EngineError::InvalidWeight {
                    edge: edge.id,
                    weight: edge.weight,
                });
            }

            if edge.is_self_loop() {
                // listed twice under `current`, recorded once
                if !relaxations.iter().any(|relaxation| relaxation.edge == edge.id) {
                    relaxations.push(EdgeRelaxation {
                        edge: edge.id,
                        neighbor: current,
                        new_distance: distance_current,
                        improved: false,
                        reversed: edge.is_reversed_from(current),
                    });
                }
                continue;
            }

            let neighbor = edge.opposite(current);
            if self.finalized.contains(neighbor) {
                continue;
            }
            let Some(distance_neighbor) = self.data.get_distance(neighbor) else {
                continue;
            };

            let alternative_distance = distance_current + edge.weight;
            let improved = self.data.update(current, neighbor, alternative_distance);
            if improved {
                trace!(
                    "{} improved to {} via {}",
                    neighbor,
                    alternative_distance,
                    edge.id
                );
                self.queue.insert(neighbor, alternative_distance);
            }

            relaxations.push(EdgeRelaxation {
                edge: edge.id,
                neighbor,
                new_distance: if improved {
                    alternative_distance
                } else {
                    distance_neighbor
                },
                improved,
                reversed: edge.is_reversed_from(current),
            });
        }

        Ok(relaxations)
    }

    /// The path to the destination, if it was settled and the predecessor
    /// chain is intact.
    pub fn path(&self) -> Option<Path> {
        if !self.finalized.contains(self.destination) {
            return None;
        }
        self.data.get_path(self.source, self.destination)
    }

    fn distance(&self, node: NodeId) -> Distance {
        self.data.get_distance(node).unwrap_or(Distance::INFINITY)
    }
}
