pub mod collections;
pub mod dijkstra;
pub mod path;
mod relaxation;
pub mod step;
pub mod trace;

pub use dijkstra::{calculate_path, shortest_path_distance};
pub use path::PathResult;
pub use step::{AlgorithmStep, EdgeRelaxation, StepKind};
pub use trace::{collect_steps, stream_steps, StepTrace};
