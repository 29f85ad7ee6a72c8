//! Catalog CRUD. Reads are public; writes are admin-only.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
};

use sweetshop_auth::require_admin;
use sweetshop_catalog::{NewSweet, SweetPatch};
use sweetshop_core::SweetId;

use crate::app::{dto, errors, services::AppServices};
use crate::context::CurrentUser;

/// GET /sweets
pub async fn list_sweets(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.sweets.list_sweets().await {
        Ok(sweets) => (StatusCode::OK, Json(dto::sweets_to_json(&sweets))).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

/// GET /sweets/search?q=
pub async fn search_sweets(
    Extension(services): Extension<Arc<AppServices>>,
    Query(params): Query<dto::SearchParams>,
) -> axum::response::Response {
    match services.sweets.search_sweets(&params.q).await {
        Ok(sweets) => (StatusCode::OK, Json(dto::sweets_to_json(&sweets))).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

/// GET /sweets/:id
pub async fn get_sweet(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<i64>,
) -> axum::response::Response {
    match services.sweets.get_sweet(SweetId::new(id)).await {
        Ok(Some(sweet)) => (StatusCode::OK, Json(dto::sweet_to_json(&sweet))).into_response(),
        Ok(None) => errors::json_error(StatusCode::NOT_FOUND, "not_found", "sweet not found"),
        Err(e) => errors::store_error_to_response(e),
    }
}

/// POST /sweets (admin)
pub async fn create_sweet(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(user): Extension<CurrentUser>,
    Json(draft): Json<NewSweet>,
) -> axum::response::Response {
    if let Err(e) = require_admin(user.role) {
        return errors::auth_error_to_response(e);
    }
    if let Err(e) = draft.validate() {
        return errors::domain_error_to_response(&e);
    }

    match services.sweets.insert_sweet(draft).await {
        Ok(sweet) => (StatusCode::CREATED, Json(dto::sweet_to_json(&sweet))).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

/// PUT /sweets/:id (admin): partial update; omitted fields are unchanged.
pub async fn update_sweet(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
    Json(patch): Json<SweetPatch>,
) -> axum::response::Response {
    if let Err(e) = require_admin(user.role) {
        return errors::auth_error_to_response(e);
    }
    if let Err(e) = patch.validate() {
        return errors::domain_error_to_response(&e);
    }

    match services.sweets.update_sweet(SweetId::new(id), patch).await {
        Ok(sweet) => (StatusCode::OK, Json(dto::sweet_to_json(&sweet))).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

/// DELETE /sweets/:id (admin): hard delete.
pub async fn delete_sweet(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> axum::response::Response {
    if let Err(e) = require_admin(user.role) {
        return errors::auth_error_to_response(e);
    }

    match services.sweets.delete_sweet(SweetId::new(id)).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}
