use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use partsorders_core::{DomainError, Entity, PartId};

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/parts", get(list_parts).post(add_part))
        .route("/parts/:id", get(get_part))
}

/// Older `/api/...` route names, kept for existing clients.
pub fn legacy_router() -> Router {
    Router::new()
        .route("/get_parts", get(list_parts))
        .route("/add_parts", post(add_part))
}

pub async fn list_parts(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    tracing::debug!("fetching all parts");
    let parts: Vec<serde_json::Value> = services.list_parts().iter().map(dto::part_to_json).collect();
    (StatusCode::OK, Json(parts)).into_response()
}

pub async fn add_part(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::AddPartRequest>,
) -> axum::response::Response {
    let new_part = match body.validate() {
        Ok(p) => p,
        Err(e) => {
            tracing::warn!("invalid part data received: {e}");
            return errors::domain_error_to_response(e);
        }
    };

    let part = services.add_part(new_part);

    (
        StatusCode::CREATED,
        [(header::LOCATION, format!("/parts/{}", part.id()))],
        Json(dto::part_to_json(&part)),
    )
        .into_response()
}

pub async fn get_part(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: PartId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid part id"),
    };

    match services.get_part(id) {
        Some(part) => (StatusCode::OK, Json(dto::part_to_json(&part))).into_response(),
        None => errors::domain_error_to_response(DomainError::not_found()),
    }
}
