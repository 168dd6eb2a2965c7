//! Turns a step trace into per-node and per-edge presentation events.
//!
//! Pacing is left to the observer: [`StepObserver::proceed`] is called after
//! every step and may sleep, or stop the replay by returning
//! [`ControlFlow::Break`].

use std::ops::ControlFlow;

use itertools::Itertools;
use log::debug;

use crate::{
    error::EngineError,
    graphs::{graph_functions::cheapest_edge_between, Distance, EdgeId, Graph, NodeId},
    search::AlgorithmStep,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NodeEvent {
    /// Initial distance label.
    DistanceShown { node: NodeId, distance: Distance },
    /// The search entered this node.
    Current { node: NodeId },
    /// `animate` is set when the change comes from a relaxation.
    DistanceUpdated {
        node: NodeId,
        distance: Distance,
        animate: bool,
    },
    Visited { node: NodeId },
    OnShortestPath { node: NodeId },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeEvent {
    /// `reversed` means the wave runs from the stored target to the source.
    Relaxing { edge: EdgeId, reversed: bool },
    OnShortestPath { edge: EdgeId },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Completion {
    pub path_found: bool,
    pub node_path: Vec<NodeId>,
    pub total_cost: Distance,
}

pub trait StepObserver {
    fn node_changed(&mut self, event: NodeEvent);

    fn edge_changed(&mut self, event: EdgeEvent);

    fn completed(&mut self, _completion: &Completion) {}

    /// Called after every step.
    fn proceed(&mut self) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ReplayOutcome {
    Completed(Completion),
    Cancelled,
    /// The trace ended without a `Complete` step, e.g. a missing endpoint.
    Empty,
}

/// Feeds `steps` to `observer` until the trace ends or the observer stops.
pub fn replay<I, O>(
    graph: &Graph,
    steps: I,
    observer: &mut O,
) -> Result<ReplayOutcome, EngineError>
where
    I: IntoIterator<Item = Result<AlgorithmStep, EngineError>>,
    O: StepObserver + ?Sized,
{
    for step in steps {
        let step = step?;
        if let Some(completion) = dispatch(graph, step, observer) {
            observer.completed(&completion);
            return Ok(ReplayOutcome::Completed(completion));
        }
        if observer.proceed().is_break() {
            debug!("replay cancelled by observer");
            return Ok(ReplayOutcome::Cancelled);
        }
    }

    Ok(ReplayOutcome::Empty)
}

fn dispatch<O>(graph: &Graph, step: AlgorithmStep, observer: &mut O) -> Option<Completion>
where
    O: StepObserver + ?Sized,
{
    match step {
        AlgorithmStep::Initialize { distances } => {
            for (node, distance) in distances {
                observer.node_changed(NodeEvent::DistanceShown { node, distance });
            }
        }
        AlgorithmStep::VisitNode {
            node,
            distances,
            finalized,
        } => {
            observer.node_changed(NodeEvent::Current { node });
            for (node, distance) in distances {
                observer.node_changed(NodeEvent::DistanceUpdated {
                    node,
                    distance,
                    animate: false,
                });
            }
            for node in finalized {
                observer.node_changed(NodeEvent::Visited { node });
            }
        }
        AlgorithmStep::RelaxEdges { relaxations, .. } => {
            for relaxation in relaxations {
                observer.edge_changed(EdgeEvent::Relaxing {
                    edge: relaxation.edge,
                    reversed: relaxation.reversed,
                });
                observer.node_changed(NodeEvent::DistanceUpdated {
                    node: relaxation.neighbor,
                    distance: relaxation.new_distance,
                    animate: true,
                });
            }
        }
        AlgorithmStep::FinalizeNode { node, finalized } => {
            observer.node_changed(NodeEvent::Visited { node });
            for other in finalized.into_iter().filter(|other| *other != node) {
                observer.node_changed(NodeEvent::Visited { node: other });
            }
        }
        AlgorithmStep::Complete {
            path_found,
            node_path,
            total_cost,
        } => {
            if path_found {
                for node in node_path.iter() {
                    observer.node_changed(NodeEvent::OnShortestPath { node: *node });
                }
                for (tail, head) in node_path.iter().tuple_windows() {
                    if let Some(edge) = cheapest_edge_between(graph, *tail, *head) {
                        observer.edge_changed(EdgeEvent::OnShortestPath { edge: edge.id });
                    }
                }
            }
            return Some(Completion {
                path_found,
                node_path,
                total_cost,
            });
        }
    }
    None
}
