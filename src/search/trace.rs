use std::iter::FusedIterator;

use super::{relaxation::Relaxation, step::AlgorithmStep};
use crate::{
    error::EngineError,
    graphs::{Distance, Graph, NodeId},
};

#[derive(Clone, Copy)]
enum Phase {
    Initialize,
    Dequeue,
    Relax(NodeId),
    Finalize(NodeId),
    Complete,
    Done,
}

/// Lazy, single pass trace of a Dijkstra run.
///
/// Each call to `next` does just enough work to produce the following step.
/// A fault is yielded once as `Err`, after which the trace is exhausted.
/// Replaying requires a new trace from [`stream_steps`].
pub struct StepTrace<'g> {
    search: Option<Relaxation<'g>>,
    phase: Phase,
}

/// Steps of a shortest path search from `source` to `destination`.
///
/// If either endpoint is missing the trace is empty.
pub fn stream_steps(graph: &Graph, source: NodeId, destination: NodeId) -> StepTrace<'_> {
    match Relaxation::new(graph, source, destination) {
        Some(search) => StepTrace {
            search: Some(search),
            phase: Phase::Initialize,
        },
        None => StepTrace {
            search: None,
            phase: Phase::Done,
        },
    }
}

/// Runs the whole trace and buffers it.
pub fn collect_steps(
    graph: &Graph,
    source: NodeId,
    destination: NodeId,
) -> Result<Vec<AlgorithmStep>, EngineError> {
    stream_steps(graph, source, destination).collect()
}

impl<'g> StepTrace<'g> {
    fn advance(&mut self) -> Option<Result<AlgorithmStep, EngineError>> {
        let search = self.search.as_mut()?;

        loop {
            match self.phase {
                Phase::Initialize => {
                    self.phase = Phase::Dequeue;
                    return Some(Ok(AlgorithmStep::Initialize {
                        distances: search.data().distances().clone(),
                    }));
                }
                Phase::Dequeue => {
                    let Some(node) = search.next_unsettled() else {
                        self.phase = Phase::Complete;
                        continue;
                    };
                    let step = AlgorithmStep::VisitNode {
                        node,
                        distances: search.data().distances().clone(),
                        finalized: search.finalized().as_set().clone(),
                    };
                    search.finalize(node);
                    self.phase = if node == search.destination() {
                        Phase::Finalize(node)
                    } else {
                        Phase::Relax(node)
                    };
                    return Some(Ok(step));
                }
                Phase::Relax(node) => {
                    self.phase = Phase::Finalize(node);
                    match search.relax(node) {
                        Ok(relaxations) if relaxations.is_empty() => continue,
                        Ok(relaxations) => {
                            return Some(Ok(AlgorithmStep::RelaxEdges { node, relaxations }))
                        }
                        Err(err) => {
                            self.phase = Phase::Done;
                            return Some(Err(err));
                        }
                    }
                }
                Phase::Finalize(node) => {
                    self.phase = if node == search.destination() {
                        Phase::Complete
                    } else {
                        Phase::Dequeue
                    };
                    return Some(Ok(AlgorithmStep::FinalizeNode {
                        node,
                        finalized: search.finalized().as_set().clone(),
                    }));
                }
                Phase::Complete => {
                    self.phase = Phase::Done;
                    let step = match search.path() {
                        Some(path) => AlgorithmStep::Complete {
                            path_found: true,
                            node_path: path.nodes,
                            total_cost: path.distance,
                        },
                        None => AlgorithmStep::Complete {
                            path_found: false,
                            node_path: Vec::new(),
                            total_cost: Distance::INFINITY,
                        },
                    };
                    return Some(Ok(step));
                }
                Phase::Done => return None,
            }
        }
    }
}

impl<'g> Iterator for StepTrace<'g> {
    type Item = Result<AlgorithmStep, EngineError>;

    fn next(&mut self) -> Option<Self::Item> {
        let step = self.advance();
        if matches!(self.phase, Phase::Done) {
            // nothing is needed after the last step
            self.search = None;
        }
        step
    }
}

impl<'g> FusedIterator for StepTrace<'g> {}
