//! Route query orchestration: validate, snap both endpoints, fetch alternatives.

use std::sync::Arc;

use log::debug;

use crate::{
    Coordinate, DEFAULT_PATH_COUNT, Error, PathEngine, RouteQueryResult, SpatialEngine,
    algo::snap, routing::find_paths,
};

const LONGITUDE_ERROR: &str = "Longitude must be between -180 to 180";
const LATITUDE_ERROR: &str = "Latitude must be between -90 to 90";

fn parse_longitude(raw: &str) -> Result<f64, Error> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| Coordinate::is_valid_longitude(*v))
        .ok_or_else(|| Error::InvalidCoordinate(LONGITUDE_ERROR.to_string()))
}

fn parse_latitude(raw: &str) -> Result<f64, Error> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| Coordinate::is_valid_latitude(*v))
        .ok_or_else(|| Error::InvalidCoordinate(LATITUDE_ERROR.to_string()))
}

/// Parse start and end coordinates, checking lng1, lat1, lng2, lat2 in that order.
///
/// # Errors
///
/// [`Error::InvalidCoordinate`] for the first value that is not a number or out of range
pub fn parse_coordinates(
    lng1: &str,
    lat1: &str,
    lng2: &str,
    lat2: &str,
) -> Result<(Coordinate, Coordinate), Error> {
    let start_lng = parse_longitude(lng1)?;
    let start_lat = parse_latitude(lat1)?;
    let end_lng = parse_longitude(lng2)?;
    let end_lat = parse_latitude(lat2)?;

    Ok((
        Coordinate::from_valid(start_lng, start_lat),
        Coordinate::from_valid(end_lng, end_lat),
    ))
}

/// Answers route queries against a shared, read-only engine
pub struct RouteService<E: ?Sized> {
    engine: Arc<E>,
    path_count: usize,
}

impl<E: ?Sized> Clone for RouteService<E> {
    fn clone(&self) -> Self {
        Self {
            engine: Arc::clone(&self.engine),
            path_count: self.path_count,
        }
    }
}

impl<E> RouteService<E>
where
    E: SpatialEngine + PathEngine + ?Sized,
{
    pub fn new(engine: Arc<E>) -> Self {
        Self {
            engine,
            path_count: DEFAULT_PATH_COUNT,
        }
    }

    /// Number of alternatives requested per query
    pub fn with_path_count(mut self, path_count: usize) -> Self {
        self.path_count = path_count;
        self
    }

    pub fn path_count(&self) -> usize {
        self.path_count
    }

    /// Snap both coordinates and fetch up to `path_count` alternatives between them.
    ///
    /// The two snaps are independent and run concurrently; if both fail the
    /// start point's error is reported.
    ///
    /// # Errors
    ///
    /// [`Error::NoNearbyEdge`] if either point cannot be snapped,
    /// [`Error::RoutingEngineError`] if the path search fails
    pub fn route(&self, start: Coordinate, end: Coordinate) -> Result<RouteQueryResult, Error> {
        let engine = &*self.engine;
        let (start_edge, end_edge) = rayon::join(|| snap(engine, start), || snap(engine, end));
        let start_edge = start_edge?;
        let end_edge = end_edge?;

        let paths = find_paths(engine, &start_edge, &end_edge, self.path_count)?;
        debug!(
            "Route ({}, {}) -> ({}, {}): {} path rows",
            start.lng(),
            start.lat(),
            end.lng(),
            end.lat(),
            paths.len()
        );

        Ok(RouteQueryResult {
            start_edge,
            end_edge,
            paths,
        })
    }

    /// Validate raw path parameters and answer the query.
    ///
    /// # Errors
    ///
    /// See [`parse_coordinates`] and [`RouteService::route`]
    pub fn query(
        &self,
        lng1: &str,
        lat1: &str,
        lng2: &str,
        lat2: &str,
    ) -> Result<RouteQueryResult, Error> {
        let (start, end) = parse_coordinates(lng1, lat1, lng2, lat2)?;
        self.route(start, end)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::{
        GeometryFormat, NodeId, PathRow, SnappedEdge, test_fixtures::ladder_network,
    };

    #[derive(Default)]
    struct CountingEngine {
        snaps: AtomicUsize,
        searches: AtomicUsize,
    }

    impl SpatialEngine for CountingEngine {
        fn nearest_edge(&self, _: Coordinate) -> Result<SnappedEdge, Error> {
            self.snaps.fetch_add(1, Ordering::SeqCst);
            Err(Error::NoNearbyEdge)
        }
    }

    impl PathEngine for CountingEngine {
        fn k_shortest_paths(&self, _: NodeId, _: NodeId, _: usize) -> Result<Vec<PathRow>, Error> {
            self.searches.fetch_add(1, Ordering::SeqCst);
            Ok(Vec::new())
        }
    }

    #[test]
    fn rejects_out_of_range_and_malformed_values() {
        let cases = [
            ("200", "37.77", "-122.41", "37.78", LONGITUDE_ERROR),
            ("-122.43", "91", "-122.41", "37.78", LATITUDE_ERROR),
            ("-122.43", "37.77", "-180.5", "37.78", LONGITUDE_ERROR),
            ("-122.43", "37.77", "-122.41", "-90.01", LATITUDE_ERROR),
            ("abc", "37.77", "-122.41", "37.78", LONGITUDE_ERROR),
            ("-122.43", "", "-122.41", "37.78", LATITUDE_ERROR),
            ("NaN", "37.77", "-122.41", "37.78", LONGITUDE_ERROR),
            ("-122.43", "inf", "-122.41", "37.78", LATITUDE_ERROR),
        ];

        for (lng1, lat1, lng2, lat2, expected) in cases {
            match parse_coordinates(lng1, lat1, lng2, lat2) {
                Err(Error::InvalidCoordinate(msg)) => assert_eq!(msg, expected),
                other => panic!("expected rejection for {lng1}/{lat1}/{lng2}/{lat2}, got {other:?}"),
            }
        }
    }

    #[test]
    fn first_invalid_value_wins() {
        let err = parse_coordinates("x", "y", "z", "w").unwrap_err();
        assert_eq!(err.to_string(), LONGITUDE_ERROR);
        let err = parse_coordinates("1", "y", "z", "w").unwrap_err();
        assert_eq!(err.to_string(), LATITUDE_ERROR);
    }

    #[test]
    fn end_latitude_failure_reports_latitude() {
        let err = parse_coordinates("-122.43", "37.77", "-122.41", "90.5").unwrap_err();
        assert!(matches!(err, Error::InvalidCoordinate(ref msg) if msg == LATITUDE_ERROR));
    }

    #[test]
    fn accepts_bounds() {
        let (start, end) = parse_coordinates("-180", "-90", "180", "90").unwrap();
        assert_eq!((start.lng(), start.lat()), (-180.0, -90.0));
        assert_eq!((end.lng(), end.lat()), (180.0, 90.0));
    }

    #[test]
    fn invalid_input_never_reaches_the_engine() {
        let engine = Arc::new(CountingEngine::default());
        let service = RouteService::new(Arc::clone(&engine));

        let result = service.query("200", "37.77", "-122.41", "37.78");
        assert!(matches!(result, Err(Error::InvalidCoordinate(_))));
        assert_eq!(engine.snaps.load(Ordering::SeqCst), 0);
        assert_eq!(engine.searches.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn snap_failure_skips_path_search() {
        let engine = Arc::new(CountingEngine::default());
        let service = RouteService::new(Arc::clone(&engine));

        let result = service.query("-122.43", "37.77", "-122.41", "37.78");
        assert!(matches!(result, Err(Error::NoNearbyEdge)));
        assert_eq!(engine.searches.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn full_query_returns_edges_and_paths() {
        let service = RouteService::new(Arc::new(ladder_network(GeometryFormat::GeoJson)));
        let result = service.query("0.5", "-0.1", "2.1", "0.5").unwrap();

        assert_eq!(result.start_edge.facility_type, "BIKE LANE");
        assert_eq!(result.end_edge.facility_type, "BIKE PATH");
        assert!(!result.start_edge.line1.is_empty());
        assert!(!result.end_edge.line2.is_empty());
        assert_eq!(result.paths.first().map(|p| p.route_id), Some(0));
        assert!(result.paths.iter().all(|p| p.route_id < 3));
    }

    #[test]
    fn disconnected_points_give_empty_paths() {
        let service = RouteService::new(Arc::new(ladder_network(GeometryFormat::GeoJson)));
        let result = service.query("10.5", "0.1", "0.5", "0.1").unwrap();

        assert_eq!(result.start_edge.facility_type, "CYCLE TRACK");
        assert_eq!(result.end_edge.facility_type, "BIKE LANE");
        assert!(result.paths.is_empty());
    }

    #[test]
    fn path_count_is_configurable() {
        let service =
            RouteService::new(Arc::new(ladder_network(GeometryFormat::GeoJson))).with_path_count(1);
        let result = service.query("0.5", "-0.1", "2.1", "0.5").unwrap();
        assert_eq!(service.path_count(), 1);
        assert!(result.paths.iter().all(|p| p.route_id == 0));
        assert_eq!(result.paths.len(), 3);
    }
}
