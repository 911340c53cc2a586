//! Contracts of the spatial and routing engines the route service relies on,
//! and their implementation over an in-memory [`BikewayNetwork`].

use crate::{
    BikewayNetwork, Coordinate, Error, NodeId, RouteRank, SnappedEdge, algo::snapping,
    routing::ksp,
};

/// Nearest-edge lookup over a spatially indexed network
pub trait SpatialEngine: Send + Sync {
    /// Nearest directed edge to `point`, split at the closest position.
    ///
    /// # Errors
    ///
    /// Fails when the network is empty or no edge can be found
    fn nearest_edge(&self, point: Coordinate) -> Result<SnappedEdge, Error>;
}

/// One edge of one k-shortest-paths alternative, as returned by a [`PathEngine`]
#[derive(Debug, Clone, PartialEq)]
pub struct PathRow {
    pub route_rank: RouteRank,
    pub facility_type: String,
    pub geometry: String,
    pub length: f64,
}

/// K-shortest-paths search between two network nodes
pub trait PathEngine: Send + Sync {
    /// Rows of up to `k` alternatives, ordered by ascending total cost and
    /// by traversal order within an alternative. Finding no path is not an error.
    ///
    /// # Errors
    ///
    /// Fails only on engine-level faults
    fn k_shortest_paths(
        &self,
        source: NodeId,
        target: NodeId,
        k: usize,
    ) -> Result<Vec<PathRow>, Error>;
}

/// Everything the route service needs from a backend
pub trait RoutingEngine: SpatialEngine + PathEngine {}

impl<T: SpatialEngine + PathEngine + ?Sized> RoutingEngine for T {}

impl SpatialEngine for BikewayNetwork {
    fn nearest_edge(&self, point: Coordinate) -> Result<SnappedEdge, Error> {
        snapping::nearest_snapped_edge(self, point)
    }
}

impl PathEngine for BikewayNetwork {
    fn k_shortest_paths(
        &self,
        source: NodeId,
        target: NodeId,
        k: usize,
    ) -> Result<Vec<PathRow>, Error> {
        let source_idx = self
            .node_index(source)
            .ok_or_else(|| Error::RoutingEngineError(format!("unknown source node {source}")))?;
        let target_idx = self
            .node_index(target)
            .ok_or_else(|| Error::RoutingEngineError(format!("unknown target node {target}")))?;

        let paths = ksp::yen_k_shortest_paths(self, source_idx, target_idx, k);

        let projection = self.projection();
        let format = self.geometry_format();
        let mut rows = Vec::with_capacity(paths.iter().map(|p| p.arcs.len()).sum());

        for (rank, path) in paths.iter().enumerate() {
            let route_rank = RouteRank::try_from(rank)
                .map_err(|_| Error::RoutingEngineError(format!("route rank {rank} overflows")))?;
            for &arc in &path.arcs {
                let edge = &self.edges[self.graph[arc].edge];
                rows.push(PathRow {
                    route_rank,
                    facility_type: edge.facility_type.clone(),
                    geometry: format.encode_line(&projection.line_to_wgs84(&edge.geometry))?,
                    length: edge.length,
                });
            }
        }

        Ok(rows)
    }
}
