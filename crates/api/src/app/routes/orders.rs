use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use partsorders_core::{DomainError, OrderNumber};

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/orders", get(list_orders).post(place_order))
        .route("/orders/:number", get(get_order))
}

/// Older `/api/...` route names, kept for existing clients.
pub fn legacy_router() -> Router {
    Router::new()
        .route("/place_order", post(place_order))
        .route("/get_orders", get(list_orders))
}

pub async fn place_order(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<Vec<dto::OrderLineRequest>>,
) -> axum::response::Response {
    let requests = match dto::validate_order_lines(&body) {
        Ok(r) => r,
        Err(e) => {
            tracing::warn!("invalid order data received: {e}");
            return errors::domain_error_to_response(e);
        }
    };

    match services.place_order(&requests) {
        Ok(order) => (StatusCode::OK, Json(dto::order_to_json(&order))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn list_orders(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    tracing::debug!("fetching all orders");
    let orders: Vec<serde_json::Value> = services.list_orders().iter().map(dto::order_to_json).collect();
    (StatusCode::OK, Json(orders)).into_response()
}

pub async fn get_order(
    Extension(services): Extension<Arc<AppServices>>,
    Path(number): Path<String>,
) -> axum::response::Response {
    let number: OrderNumber = match number.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid order number"),
    };

    match services.get_order(number) {
        Some(order) => (StatusCode::OK, Json(dto::order_to_json(&order))).into_response(),
        None => errors::domain_error_to_response(DomainError::not_found()),
    }
}
