use std::time::Instant;

use log::debug;

use super::{path::PathResult, relaxation::Relaxation};
use crate::{
    error::EngineError,
    graphs::{Graph, NodeId},
};

/// Shortest path between two nodes of an undirected graph.
///
/// Stops as soon as `destination` is finalized. A missing endpoint or an
/// unreachable destination yields a result with `path_found == false`; only
/// a negative (or NaN) weight met on the way is an error.
pub fn calculate_path(
    graph: &Graph,
    source: NodeId,
    destination: NodeId,
) -> Result<PathResult, EngineError> {
    let start = Instant::now();
    let Some(mut search) = Relaxation::new(graph, source, destination) else {
        return Ok(PathResult::not_found());
    };

    while let Some(current) = search.next_unsettled() {
        search.finalize(current);
        if current == destination {
            break;
        }
        search.relax(current)?;
    }
    let elapsed = start.elapsed();

    let result = PathResult::from_path(search.path(), elapsed);
    debug!(
        "search {} -> {} settled {} nodes in {:?}, found: {}",
        source,
        destination,
        search.finalized().len(),
        elapsed,
        result.path_found
    );
    Ok(result)
}

/// Only the cost of the shortest path, `None` if there is none.
pub fn shortest_path_distance(
    graph: &Graph,
    source: NodeId,
    destination: NodeId,
) -> Result<Option<f64>, EngineError> {
    let result = calculate_path(graph, source, destination)?;
    Ok(result.path_found.then_some(result.total_cost))
}
