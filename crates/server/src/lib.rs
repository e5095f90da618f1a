//! pmtct-server library crate
//!
//! Exposes the OpenMRS client, `build_app`, and `config` for integration
//! tests. The actual binary entrypoint is in `main.rs`.

pub mod config;
mod error;
mod middleware;
pub mod openmrs;
mod routes;

use axum::{Extension, Router, middleware as axum_mw, routing::get};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use config::Config;
use openmrs::OpenmrsClient;

/// Build the full application router with all routes and middleware.
///
/// Extracted from `main()` so integration tests can construct the app
/// against a mock OpenMRS without binding to a TCP port.
pub fn build_app(client: OpenmrsClient, config: &Config) -> Router {
    // Page routes live under the SPA base; nesting at the root is not allowed
    let pages = if config.spa_base.is_empty() {
        routes::page_routes()
    } else {
        Router::new().nest(&config.spa_base, routes::page_routes())
    };

    // Install Prometheus metrics recorder.
    // Repeated installs (one per test app) are ignored; the handle from the
    // fresh recorder is still valid for /metrics.
    let recorder = metrics_exporter_prometheus::PrometheusBuilder::new().build_recorder();
    let prometheus_handle = recorder.handle();
    let _ = metrics::set_global_recorder(recorder);

    let operational_routes = Router::new()
        .route("/health", get(routes::health::check))
        .route("/metrics", get(routes::metrics::get))
        .layer(Extension(prometheus_handle));

    // Build CORS layer
    let cors = if config.cors_origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    };

    Router::new()
        .merge(pages)
        .nest("/api", routes::api_routes())
        .merge(operational_routes)
        .with_state(client)
        .layer(axum_mw::from_fn(middleware::audit_middleware))
        .layer(axum_mw::from_fn(middleware::request_id_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(axum_mw::from_fn(middleware::metrics_middleware))
}
