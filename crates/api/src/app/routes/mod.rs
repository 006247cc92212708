use axum::{routing::get, Router};

pub mod orders;
pub mod parts;
pub mod system;

/// Router for every endpoint.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .merge(parts::router())
        .merge(orders::router())
        .nest("/api/parts", parts::legacy_router())
        .nest("/api/orders", orders::legacy_router())
}
