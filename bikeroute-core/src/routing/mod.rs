//! Shortest path search over the bikeway network

pub mod dijkstra;
pub mod ksp;
pub mod paths;

pub use dijkstra::GraphPath;
pub use ksp::yen_k_shortest_paths;
pub use paths::find_paths;
