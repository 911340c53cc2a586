//! Data model: the read-only bikeway network and per-request values

pub mod network;
pub mod types;

pub use network::{BikewayNetwork, EdgeRecord, NetworkArc, NetworkEdge, NetworkNode};
pub use types::{Coordinate, PathSegment, RouteQueryResult, SnappedEdge};
