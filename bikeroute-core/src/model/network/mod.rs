//! Bikeway network graph and its spatial index

pub mod components;
pub mod graph;

pub use components::{EdgeRecord, NetworkArc, NetworkEdge, NetworkNode};
pub use graph::{BikewayNetwork, SegmentEntry};
