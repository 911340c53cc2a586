//! Shared fixtures for the HTTP tests.

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use bikeroute_core::prelude::*;
use bikeroute_server::{AppState, ServerConfig, build_router};
use geo::line_string;
use tower::ServiceExt;

fn edge(
    id: EdgeId,
    source: NodeId,
    target: NodeId,
    facility: &str,
    geometry: geo::LineString<f64>,
    two_way: bool,
) -> EdgeRecord {
    EdgeRecord {
        id,
        source,
        target,
        facility_type: Some(facility.to_string()),
        geometry,
        cost: None,
        reverse_cost: two_way.then_some(0.01),
    }
}

/// A 3x2 ladder of streets in San Francisco plus a detached one-way segment.
///
/// ```text
/// 4 --e4-- 5 --e5-- 6     (lat 37.78)
/// |        |        |
/// e6       e7       e8
/// |        |        |
/// 1 --e1-- 2 --e2-- 3     (lat 37.77)
/// -122.43  -122.42  -122.41
/// ```
pub fn sf_network() -> BikewayNetwork {
    let records = vec![
        edge(1, 1, 2, "BIKE LANE", line_string![(x: -122.43, y: 37.77), (x: -122.42, y: 37.77)], true),
        edge(2, 2, 3, "BIKE LANE", line_string![(x: -122.42, y: 37.77), (x: -122.41, y: 37.77)], true),
        edge(4, 4, 5, "SHARROW", line_string![(x: -122.43, y: 37.78), (x: -122.42, y: 37.78)], true),
        edge(5, 5, 6, "SHARROW", line_string![(x: -122.42, y: 37.78), (x: -122.41, y: 37.78)], true),
        edge(6, 1, 4, "BIKE PATH", line_string![(x: -122.43, y: 37.77), (x: -122.43, y: 37.78)], true),
        edge(7, 2, 5, "BIKE PATH", line_string![(x: -122.42, y: 37.77), (x: -122.42, y: 37.78)], true),
        edge(8, 3, 6, "BIKE PATH", line_string![(x: -122.41, y: 37.77), (x: -122.41, y: 37.78)], true),
        edge(9, 7, 8, "CYCLE TRACK", line_string![(x: -122.30, y: 37.70), (x: -122.29, y: 37.70)], false),
    ];
    BikewayNetwork::new(records, Projection::Wgs84, GeometryFormat::GeoJson)
        .expect("fixture network is valid")
}

pub fn test_config() -> ServerConfig {
    ServerConfig {
        network: Some(NetworkConfig::new("unused.geojson")),
        ..ServerConfig::default()
    }
}

pub fn app_with_state(state: AppState) -> Router {
    build_router(state, &test_config()).expect("router builds")
}

pub fn app() -> Router {
    app_with_state(AppState::from_network(sf_network(), DEFAULT_PATH_COUNT))
}

/// Send a GET request and return status plus parsed JSON body
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, body)
}
