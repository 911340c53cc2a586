use geo::Coord;
use serde::Serialize;

use crate::{NodeId, RouteRank};

/// Validated WGS84 coordinate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    lng: f64,
    lat: f64,
}

impl Coordinate {
    /// Returns `None` unless longitude is within [-180, 180] and latitude within [-90, 90]
    pub fn new(lng: f64, lat: f64) -> Option<Self> {
        (Self::is_valid_longitude(lng) && Self::is_valid_latitude(lat))
            .then(|| Self::from_valid(lng, lat))
    }

    pub fn is_valid_longitude(lng: f64) -> bool {
        lng.is_finite() && (-180.0..=180.0).contains(&lng)
    }

    pub fn is_valid_latitude(lat: f64) -> bool {
        lat.is_finite() && (-90.0..=90.0).contains(&lat)
    }

    /// Caller has checked both values with the `is_valid_*` predicates
    pub(crate) fn from_valid(lng: f64, lat: f64) -> Self {
        debug_assert!(Self::is_valid_longitude(lng) && Self::is_valid_latitude(lat));
        Self { lng, lat }
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }
}

impl From<Coordinate> for Coord<f64> {
    fn from(c: Coordinate) -> Self {
        Coord { x: c.lng, y: c.lat }
    }
}

/// Network edge nearest to a query point, split at the snap point
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SnappedEdge {
    #[serde(rename = "facilityT")]
    pub facility_type: String,
    #[serde(skip)]
    pub source: NodeId,
    #[serde(skip)]
    pub target: NodeId,
    /// Edge start to snap point
    pub line1: String,
    /// Snap point to edge end
    pub line2: String,
}

/// One edge of one alternative route
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathSegment {
    #[serde(rename = "routeID")]
    pub route_id: RouteRank,
    #[serde(rename = "facilityT")]
    pub facility_type: String,
    pub geometry: String,
    pub length: f64,
}

/// Response envelope of a route query
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteQueryResult {
    pub start_edge: SnappedEdge,
    pub end_edge: SnappedEdge,
    pub paths: Vec<PathSegment>,
}
