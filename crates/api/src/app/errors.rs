use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use sweetshop_auth::AuthError;
use sweetshop_core::DomainError;
use sweetshop_store::StoreError;

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

/// The one 401 body. Deliberately generic: it must not reveal whether the
/// token was missing, malformed, expired, or pointed at an unknown user.
pub fn unauthorized() -> axum::response::Response {
    json_error(
        StatusCode::UNAUTHORIZED,
        "unauthorized",
        "could not validate credentials",
    )
}

pub fn domain_error_to_response(err: &DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => {
            json_error(StatusCode::UNPROCESSABLE_ENTITY, "validation_error", msg.clone())
        }
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "not found"),
        DomainError::Conflict(msg) => json_error(StatusCode::BAD_REQUEST, "conflict", msg.clone()),
        DomainError::InsufficientStock { available, requested } => json_error(
            StatusCode::BAD_REQUEST,
            "insufficient_stock",
            format!("insufficient stock: available {available}, requested {requested}"),
        ),
    }
}

pub fn store_error_to_response(err: StoreError) -> axum::response::Response {
    match err {
        StoreError::Domain(e) => domain_error_to_response(&e),
        StoreError::Backend(msg) => {
            tracing::error!("storage backend failure: {msg}");
            json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "store_error",
                "internal storage error",
            )
        }
    }
}

pub fn auth_error_to_response(err: AuthError) -> axum::response::Response {
    if err.is_identity_failure() {
        unauthorized()
    } else {
        json_error(StatusCode::FORBIDDEN, "forbidden", "not enough permissions")
    }
}
