//! Router, shared state and request handlers.

use std::{sync::Arc, time::Duration};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderName, HeaderValue, Method, StatusCode, header},
    routing::get,
};
use bikeroute_core::{BikewayNetwork, RouteQueryResult, RouteService, RoutingEngine, parse_coordinates};
use serde::Serialize;
use tower::limit::GlobalConcurrencyLimitLayer;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::{ApiError, ServerConfig, config::ConfigError};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    service: RouteService<dyn RoutingEngine>,
    summary: Option<NetworkSummary>,
}

#[derive(Debug, Clone, Copy, Serialize)]
struct NetworkSummary {
    nodes: usize,
    edges: usize,
}

impl AppState {
    /// State over any routing backend
    pub fn new(engine: Arc<dyn RoutingEngine>, path_count: usize) -> Self {
        Self {
            service: RouteService::new(engine).with_path_count(path_count),
            summary: None,
        }
    }

    /// State over an in-memory network, reporting its size on `/health`
    pub fn from_network(network: BikewayNetwork, path_count: usize) -> Self {
        let summary = NetworkSummary {
            nodes: network.node_count(),
            edges: network.edge_count(),
        };
        let engine: Arc<dyn RoutingEngine> = Arc::new(network);
        Self {
            summary: Some(summary),
            ..Self::new(engine, path_count)
        }
    }
}

/// Build the application router with CORS, tracing, timeout and concurrency limits.
///
/// `max_concurrent_requests` is shared by every route.
pub fn build_router(state: AppState, config: &ServerConfig) -> Result<Router, ConfigError> {
    let origin: HeaderValue = config
        .allowed_origin
        .parse()
        .map_err(|_| ConfigError::Invalid(format!("bad origin {}", config.allowed_origin)))?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET])
        .allow_headers([
            header::ACCEPT,
            header::CONTENT_TYPE,
            HeaderName::from_static("x-custom-header"),
            header::ORIGIN,
        ])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    Ok(Router::new()
        .route("/paths/{lng1}/{lat1}/{lng2}/{lat2}", get(get_paths))
        .route("/health", get(health))
        .with_state(state)
        .layer(GlobalConcurrencyLimitLayer::new(
            config.max_concurrent_requests,
        ))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_secs),
        ))
        .layer(cors)
        .layer(TraceLayer::new_for_http()))
}

async fn get_paths(
    State(state): State<AppState>,
    Path((lng1, lat1, lng2, lat2)): Path<(String, String, String, String)>,
) -> Result<Json<RouteQueryResult>, ApiError> {
    // Reject bad input before touching the engine or the blocking pool
    let (start, end) = parse_coordinates(&lng1, &lat1, &lng2, &lat2)?;

    let service = state.service.clone();
    let result = tokio::task::spawn_blocking(move || service.route(start, end))
        .await
        .map_err(|e| ApiError::Internal(format!("route worker failed: {e}")))??;

    tracing::debug!(
        rows = result.paths.len(),
        "Route {lng1},{lat1} -> {lng2},{lat2} answered"
    );
    Ok(Json(result))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Health {
    status: &'static str,
    path_count: usize,
    #[serde(flatten)]
    network: Option<NetworkSummary>,
}

async fn health(State(state): State<AppState>) -> Json<Health> {
    Json(Health {
        status: "ok",
        path_count: state.service.path_count(),
        network: state.summary,
    })
}
