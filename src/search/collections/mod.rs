pub mod dijkstra_data;
pub mod vertex_distance_queue;
pub mod vertex_expanded_data;

pub use dijkstra_data::{DijkstraData, DistanceTable, Path};
pub use vertex_distance_queue::{NodeDistanceQueue, QueueElement};
pub use vertex_expanded_data::{FinalizedNodes, FinalizedSet};
