//! Bikeway route alternatives over a pre-noded street network.
//!
//! Query coordinates are snapped onto the nearest directed edge of a
//! [`BikewayNetwork`], then the k shortest paths between the snapped edges
//! are requested and assembled into a [`RouteQueryResult`].

pub mod algo;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod routing;
pub mod service;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use engine::{PathEngine, PathRow, RoutingEngine, SpatialEngine};
pub use error::Error;
pub use geometry::{GeometryFormat, Projection};
pub use loading::{NetworkConfig, NetworkFormat, create_network};
pub use model::{BikewayNetwork, Coordinate, PathSegment, RouteQueryResult, SnappedEdge};
pub use service::{RouteService, parse_coordinates};

/// Identifier of a network node, as assigned by the noding step
pub type NodeId = u64;
/// Identifier of a network edge, as assigned by the noding step
pub type EdgeId = u64;
/// Rank of an alternative within a k-shortest-paths answer
pub type RouteRank = u32;

/// Number of alternatives requested per query unless configured otherwise
pub const DEFAULT_PATH_COUNT: usize = 3;
