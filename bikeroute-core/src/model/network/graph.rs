use geo::{Coord, Euclidean, Length, Line, Point};
use hashbrown::HashMap;
use log::debug;
use petgraph::graph::{DiGraph, NodeIndex};
use rstar::{PointDistance, RTree, primitives::GeomWithData};

use super::components::{EdgeRecord, NetworkArc, NetworkEdge, NetworkNode};
use crate::{
    Error, NodeId,
    geometry::{GeometryFormat, Projection},
};

/// Distances closer than this (in native units) are treated as ties
const TIE_TOLERANCE: f64 = 1e-9;

/// One straight segment of a network edge, tagged with the owning edge's
/// position in [`BikewayNetwork::edges`]
pub type SegmentEntry = GeomWithData<Line<f64>, usize>;

/// Read-only bikeway network: directed graph plus spatial index over edge segments
#[derive(Debug, Clone)]
pub struct BikewayNetwork {
    pub graph: DiGraph<NetworkNode, NetworkArc>,
    pub edges: Vec<NetworkEdge>,
    node_lookup: HashMap<NodeId, NodeIndex>,
    rtree: RTree<SegmentEntry>,
    projection: Projection,
    geometry_format: GeometryFormat,
}

impl BikewayNetwork {
    /// Build the network from noded edge records.
    ///
    /// # Errors
    ///
    /// Returns an error if a record has fewer than two coordinates
    pub fn new(
        records: Vec<EdgeRecord>,
        projection: Projection,
        geometry_format: GeometryFormat,
    ) -> Result<Self, Error> {
        let mut graph = DiGraph::with_capacity(records.len(), records.len() * 2);
        let mut node_lookup: HashMap<NodeId, NodeIndex> = HashMap::with_capacity(records.len());
        let mut edges = Vec::with_capacity(records.len());
        let mut segments = Vec::new();

        for record in records {
            if record.geometry.0.len() < 2 {
                return Err(Error::InvalidData(format!(
                    "edge {} has fewer than two coordinates",
                    record.id
                )));
            }

            let source = *node_lookup
                .entry(record.source)
                .or_insert_with(|| graph.add_node(NetworkNode { id: record.source }));
            let target = *node_lookup
                .entry(record.target)
                .or_insert_with(|| graph.add_node(NetworkNode { id: record.target }));

            let edge_idx = edges.len();
            let length = Euclidean.length(&record.geometry);

            let cost = record.cost.unwrap_or(length);
            if cost >= 0.0 {
                graph.add_edge(source, target, NetworkArc { edge: edge_idx, cost });
            }
            if let Some(reverse_cost) = record.reverse_cost.filter(|c| *c >= 0.0) {
                graph.add_edge(
                    target,
                    source,
                    NetworkArc {
                        edge: edge_idx,
                        cost: reverse_cost,
                    },
                );
            }

            segments.extend(
                record
                    .geometry
                    .lines()
                    .map(|line| SegmentEntry::new(line, edge_idx)),
            );

            edges.push(NetworkEdge {
                id: record.id,
                source: record.source,
                target: record.target,
                facility_type: record.facility_type.unwrap_or_default(),
                geometry: record.geometry,
                length,
            });
        }

        debug!(
            "Indexing {} segments of {} edges",
            segments.len(),
            edges.len()
        );

        Ok(Self {
            graph,
            edges,
            node_lookup,
            rtree: RTree::bulk_load(segments),
            projection,
            geometry_format,
        })
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn projection(&self) -> Projection {
        self.projection
    }

    pub fn geometry_format(&self) -> GeometryFormat {
        self.geometry_format
    }

    pub fn node_index(&self, id: NodeId) -> Option<NodeIndex> {
        self.node_lookup.get(&id).copied()
    }

    /// Position in [`Self::edges`] of the edge closest to a native coordinate.
    ///
    /// Equally distant edges are resolved in favour of the lowest edge id.
    pub fn nearest_edge_index(&self, point: Coord<f64>) -> Option<usize> {
        let query = Point::from(point);
        let mut best: Option<(usize, f64)> = None;

        for entry in self.rtree.nearest_neighbor_iter(&query) {
            let distance = entry.distance_2(&query).sqrt();
            match best {
                None => best = Some((entry.data, distance)),
                Some((_, best_distance)) if distance - best_distance > TIE_TOLERANCE => break,
                Some((best_edge, best_distance)) => {
                    if self.edges[entry.data].id < self.edges[best_edge].id {
                        best = Some((entry.data, best_distance));
                    }
                }
            }
        }

        best.map(|(edge, _)| edge)
    }
}
