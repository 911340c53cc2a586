//! Small networks shared by unit tests

use geo::line_string;

use crate::{BikewayNetwork, Coordinate, GeometryFormat, Projection, model::EdgeRecord};

pub(crate) fn coordinate(lng: f64, lat: f64) -> Coordinate {
    Coordinate::new(lng, lat).unwrap()
}

fn two_way(
    id: u64,
    source: u64,
    target: u64,
    facility: &str,
    geometry: geo::LineString<f64>,
    cost: f64,
) -> EdgeRecord {
    EdgeRecord {
        id,
        source,
        target,
        facility_type: Some(facility.to_string()),
        geometry,
        cost: Some(cost),
        reverse_cost: Some(cost),
    }
}

/// Two rows of three nodes joined by rungs, plus a detached one-way edge.
///
/// ```text
/// 4 --e4-- 5 --e5-- 6        7 --e9--> 8
/// |        |        |
/// e6       e7       e8
/// |        |        |
/// 1 --e1-- 2 --e2-- 3
/// ```
///
/// Simple paths from 1 to 6 by cost: e1 e2 e8 (3.0), e1 e7 e5 (3.2),
/// e6 e4 e5 (3.5), e6 e4 e7 e2 e8 (5.7).
pub(crate) fn ladder_network(format: GeometryFormat) -> BikewayNetwork {
    let records = vec![
        two_way(1, 1, 2, "BIKE LANE", line_string![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0)], 1.0),
        two_way(2, 2, 3, "BIKE LANE", line_string![(x: 1.0, y: 0.0), (x: 2.0, y: 0.0)], 1.0),
        two_way(4, 4, 5, "SHARROW", line_string![(x: 0.0, y: 1.0), (x: 1.0, y: 1.0)], 1.0),
        two_way(5, 5, 6, "SHARROW", line_string![(x: 1.0, y: 1.0), (x: 2.0, y: 1.0)], 1.0),
        two_way(6, 1, 4, "BIKE PATH", line_string![(x: 0.0, y: 0.0), (x: 0.0, y: 1.0)], 1.5),
        two_way(7, 2, 5, "BIKE PATH", line_string![(x: 1.0, y: 0.0), (x: 1.0, y: 1.0)], 1.2),
        two_way(8, 3, 6, "BIKE PATH", line_string![(x: 2.0, y: 0.0), (x: 2.0, y: 1.0)], 1.0),
        EdgeRecord {
            id: 9,
            source: 7,
            target: 8,
            facility_type: Some("CYCLE TRACK".to_string()),
            geometry: line_string![(x: 10.0, y: 0.0), (x: 11.0, y: 0.0)],
            cost: None,
            reverse_cost: None,
        },
    ];

    BikewayNetwork::new(records, Projection::Wgs84, format).unwrap()
}
