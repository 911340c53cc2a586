//! Network components - nodes, edges and traversable arcs

use geo::LineString;

use crate::{EdgeId, NodeId};

/// Edge as read from a noded network export
#[derive(Debug, Clone)]
pub struct EdgeRecord {
    pub id: EdgeId,
    pub source: NodeId,
    pub target: NodeId,
    pub facility_type: Option<String>,
    /// Geometry in the network's native projection
    pub geometry: LineString<f64>,
    /// Cost of traversing source to target, defaults to the geometric length
    pub cost: Option<f64>,
    /// Cost of traversing target to source, absent or negative for one-way edges
    pub reverse_cost: Option<f64>,
}

/// Network graph node
#[derive(Debug, Clone, Copy)]
pub struct NetworkNode {
    /// Node id from the noding step
    pub id: NodeId,
}

/// Network edge (street or bikeway segment)
#[derive(Debug, Clone)]
pub struct NetworkEdge {
    pub id: EdgeId,
    pub source: NodeId,
    pub target: NodeId,
    pub facility_type: String,
    pub geometry: LineString<f64>,
    /// Planar length in native units
    pub length: f64,
}

/// Traversable direction of a [`NetworkEdge`], stored as a graph edge weight
#[derive(Debug, Clone, Copy)]
pub struct NetworkArc {
    /// Position of the underlying edge in [`crate::BikewayNetwork::edges`]
    pub edge: usize,
    pub cost: f64,
}
