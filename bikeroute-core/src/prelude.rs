pub use crate::DEFAULT_PATH_COUNT;

// Re-export key components
pub use crate::algo::snapping::snap;
pub use crate::engine::{PathEngine, PathRow, RoutingEngine, SpatialEngine};
pub use crate::geometry::{GeometryFormat, Projection};
pub use crate::loading::{NetworkConfig, NetworkFormat, create_network};
pub use crate::model::{
    BikewayNetwork, Coordinate, EdgeRecord, PathSegment, RouteQueryResult, SnappedEdge,
};
pub use crate::routing::find_paths;
pub use crate::service::{RouteService, parse_coordinates};

// Core identifier types
pub use crate::EdgeId;
pub use crate::Error;
pub use crate::NodeId;
pub use crate::RouteRank;
