//! Snapping query coordinates onto the nearest network edge.

use log::{trace, warn};

use crate::{
    BikewayNetwork, Coordinate, Error, SnappedEdge, SpatialEngine,
    geometry::{locate_point, split_at_location},
};

/// Snap `point` through any spatial engine.
///
/// Any engine failure is reported as [`Error::NoNearbyEdge`]: a point
/// outside the covered area is a mistake in the request.
pub fn snap<E>(engine: &E, point: Coordinate) -> Result<SnappedEdge, Error>
where
    E: SpatialEngine + ?Sized,
{
    engine.nearest_edge(point).map_err(|e| {
        if !matches!(e, Error::NoNearbyEdge) {
            warn!(
                "Snapping ({}, {}) failed: {e}",
                point.lng(),
                point.lat()
            );
        }
        Error::NoNearbyEdge
    })
}

/// Nearest edge of the network to `point`, split at the closest position.
///
/// The query point is projected into the network's native projection, the
/// nearest edge is found through the spatial index (lowest edge id on equal
/// distances), and both halves are returned as WGS84 geometry strings.
pub fn nearest_snapped_edge(
    network: &BikewayNetwork,
    point: Coordinate,
) -> Result<SnappedEdge, Error> {
    let projection = network.projection();
    let native = projection.to_native(point.into());

    let edge_idx = network
        .nearest_edge_index(native)
        .ok_or(Error::NoNearbyEdge)?;
    let edge = &network.edges[edge_idx];

    let location = locate_point(&edge.geometry, native).ok_or(Error::NoNearbyEdge)?;
    trace!(
        "Snapped ({}, {}) to edge {} at {:.6} ({:.3} away)",
        point.lng(),
        point.lat(),
        edge.id,
        location.fraction,
        location.distance
    );

    let (head, tail) = split_at_location(&edge.geometry, &location);
    let format = network.geometry_format();

    Ok(SnappedEdge {
        facility_type: edge.facility_type.clone(),
        source: edge.source,
        target: edge.target,
        line1: format.encode_line(&projection.line_to_wgs84(&head))?,
        line2: format.encode_line(&projection.line_to_wgs84(&tail))?,
    })
}
