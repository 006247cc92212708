//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: the shared, lock-guarded catalog and ledger
//! - `routes/`: HTTP routes + handlers (one file per domain area)
//! - `dto.rs`: request DTOs, validation and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(config: &ApiConfig) -> Router {
    let services = Arc::new(services::AppServices::from_config(config));
    build_app_with(services)
}

/// Build the router around existing services (tests inspect state directly).
pub fn build_app_with(services: Arc<services::AppServices>) -> Router {
    routes::router().layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(Extension(services)),
    )
}
