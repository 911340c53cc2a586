mod restricted_dijkstra;
mod state;

pub use restricted_dijkstra::{GraphPath, shortest_path};
