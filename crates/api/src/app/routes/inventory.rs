//! Stock operations: restock (admin) and purchase (any authenticated user).

use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
};

use sweetshop_auth::require_admin;
use sweetshop_core::SweetId;

use crate::app::{dto, errors, services::AppServices};
use crate::context::CurrentUser;

/// GET /inventory: full catalog with stock levels.
pub async fn list_inventory(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.sweets.list_sweets().await {
        Ok(sweets) => (StatusCode::OK, Json(dto::sweets_to_json(&sweets))).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

/// POST /inventory/:id/restock (admin)
pub async fn restock(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
    Json(body): Json<dto::QuantityRequest>,
) -> axum::response::Response {
    if let Err(e) = require_admin(user.role) {
        return errors::auth_error_to_response(e);
    }

    let id = SweetId::new(id);
    match services.sweets.restock(id, body.quantity).await {
        Ok(new_stock) => (
            StatusCode::OK,
            Json(dto::stock_to_json(
                id,
                new_stock,
                format!("successfully restocked {} units", body.quantity),
            )),
        )
            .into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

/// POST /inventory/:id/purchase (any authenticated user)
pub async fn purchase(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(_user): Extension<CurrentUser>,
    Path(id): Path<i64>,
    Json(body): Json<dto::QuantityRequest>,
) -> axum::response::Response {
    let id = SweetId::new(id);
    match services.sweets.purchase(id, body.quantity).await {
        Ok(new_stock) => (
            StatusCode::OK,
            Json(dto::stock_to_json(
                id,
                new_stock,
                format!("successfully purchased {} units", body.quantity),
            )),
        )
            .into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}
