//! Registration, login, and identity introspection.

use std::sync::Arc;

use axum::{
    Json,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
};

use sweetshop_auth::NewUser;

use crate::app::{dto, errors, services::AppServices};
use crate::context::CurrentUser;

/// POST /auth/register: open registration; every new account gets the
/// `user` role.
pub async fn register(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CredentialsRequest>,
) -> axum::response::Response {
    if let Err(e) = body.validate() {
        return errors::domain_error_to_response(&e);
    }

    let new_user = NewUser::registration(body.username, &body.password);

    match services.users.insert_user(new_user).await {
        Ok(user) => (StatusCode::CREATED, Json(dto::user_to_json(&user))).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

/// POST /auth/login: check credentials, mint a bearer token.
pub async fn login(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CredentialsRequest>,
) -> axum::response::Response {
    if let Err(e) = body.validate() {
        return errors::domain_error_to_response(&e);
    }

    let user = match services.users.find_user(&body.username).await {
        Ok(user) => user,
        Err(e) => return errors::store_error_to_response(e),
    };

    // A missing user and a wrong password are indistinguishable on the wire.
    let Some(user) = user.filter(|u| u.password_matches(&body.password)) else {
        return errors::json_error(
            StatusCode::UNAUTHORIZED,
            "invalid_credentials",
            "invalid credentials",
        );
    };

    match services.tokens.issue(&user.username) {
        Ok(token) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "access_token": token,
                "token_type": "bearer",
            })),
        )
            .into_response(),
        Err(e) => errors::auth_error_to_response(e),
    }
}

/// GET /auth/me: who the presented token belongs to.
pub async fn me(Extension(user): Extension<CurrentUser>) -> axum::response::Response {
    (StatusCode::OK, Json(dto::current_user_to_json(&user))).into_response()
}
