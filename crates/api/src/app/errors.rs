use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use partsorders_core::DomainError;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::InsufficientInventory => json_error(
            StatusCode::BAD_REQUEST,
            "insufficient_inventory",
            err.to_string(),
        ),
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", err.to_string()),
        DomainError::AmountOutOfRange => json_error(
            StatusCode::BAD_REQUEST,
            "amount_out_of_range",
            err.to_string(),
        ),
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
