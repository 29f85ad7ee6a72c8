use axum::{
    Router,
    routing::{delete, get, post, put},
};

pub mod auth;
pub mod inventory;
pub mod sweets;
pub mod system;

/// Routes that take no token: registration, login, reads, health.
pub fn public_router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/sweets", get(sweets::list_sweets))
        .route("/sweets/search", get(sweets::search_sweets))
        .route("/sweets/:id", get(sweets::get_sweet))
        .route("/inventory", get(inventory::list_inventory))
}

/// Routes behind the bearer-auth middleware. Admin-only gates are enforced
/// inside the handlers.
pub fn protected_router() -> Router {
    Router::new()
        .route("/auth/me", get(auth::me))
        .route("/sweets", post(sweets::create_sweet))
        .route("/sweets/:id", put(sweets::update_sweet))
        .route("/sweets/:id", delete(sweets::delete_sweet))
        .route("/inventory/:id/restock", post(inventory::restock))
        .route("/inventory/:id/purchase", post(inventory::purchase))
}
