use std::sync::Arc;

use axum::{
    extract::State,
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use crate::app::{errors, services::AppServices};
use crate::context::CurrentUser;

#[derive(Clone)]
pub struct AuthState {
    pub services: Arc<AppServices>,
}

/// Bearer-token authentication for protected routes.
///
/// Verifies the token, resolves the subject to a stored user, and attaches
/// the caller as a `CurrentUser` extension. Every failure mode (missing
/// header, bad signature, expiry, unknown subject) produces the same generic
/// 401 so a probe cannot tell which stage failed.
pub async fn auth_middleware(
    State(state): State<AuthState>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let Some(token) = extract_bearer(req.headers()) else {
        return errors::unauthorized();
    };

    let subject = match state.services.tokens.verify(token) {
        Ok(subject) => subject,
        Err(e) => {
            tracing::debug!("token rejected: {e}");
            return errors::unauthorized();
        }
    };

    let user = match state.services.users.find_user(&subject).await {
        Ok(Some(user)) => user,
        Ok(None) => return errors::unauthorized(),
        Err(e) => return errors::store_error_to_response(e),
    };

    req.extensions_mut().insert(CurrentUser::from(user));

    next.run(req).await
}

fn extract_bearer(headers: &HeaderMap) -> Option<&str> {
    let header = headers.get(axum::http::header::AUTHORIZATION)?;
    let header = header.to_str().ok()?;
    let token = header.strip_prefix("Bearer ")?.trim();

    if token.is_empty() { None } else { Some(token) }
}
