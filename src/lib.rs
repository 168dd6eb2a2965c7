//! Shortest paths on undirected, weighted graphs, with a replayable trace of
//! every state change the search goes through.
//!
//! [`search::calculate_path`] answers a single query, [`search::stream_steps`]
//! yields the same run one [`search::AlgorithmStep`] at a time, and
//! [`replay::replay`] turns such a trace into presentation events.

pub mod error;
pub mod graphs;
pub mod replay;
pub mod search;
pub mod utility;

pub use error::{EngineError, GraphError};
pub use graphs::{build_adjacency, AdjacencyIndex, Edge, EdgeId, Graph, Node, NodeId, Position};
pub use search::{calculate_path, stream_steps, AlgorithmStep, PathResult, StepTrace};
