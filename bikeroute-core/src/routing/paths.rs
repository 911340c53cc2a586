use log::debug;

use crate::{Error, PathEngine, PathRow, PathSegment, SnappedEdge};

impl From<PathRow> for PathSegment {
    fn from(row: PathRow) -> Self {
        Self {
            route_id: row.route_rank,
            facility_type: row.facility_type,
            geometry: row.geometry,
            length: row.length,
        }
    }
}

/// Request up to `k` alternatives from the start edge's source node to the
/// end edge's target node.
///
/// The engine's order is kept as is. No path is an empty result, not an error.
///
/// # Errors
///
/// Returns [`Error::RoutingEngineError`] if the engine fails
pub fn find_paths<E>(
    engine: &E,
    start: &SnappedEdge,
    end: &SnappedEdge,
    k: usize,
) -> Result<Vec<PathSegment>, Error>
where
    E: PathEngine + ?Sized,
{
    let rows = engine
        .k_shortest_paths(start.source, end.target, k)
        .map_err(|e| match e {
            Error::RoutingEngineError(_) => e,
            other => Error::RoutingEngineError(other.to_string()),
        })?;

    debug!(
        "Routing engine returned {} rows between nodes {} and {}",
        rows.len(),
        start.source,
        end.target
    );

    Ok(rows.into_iter().map(PathSegment::from).collect())
}
