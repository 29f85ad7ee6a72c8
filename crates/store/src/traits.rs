//! Storage trait seams.
//!
//! Callers must treat these as the only way to touch shared state: every
//! mutation is all-or-nothing inside the backend, and a failed stock
//! mutation never leaves a partial decrement behind.

use async_trait::async_trait;

use sweetshop_auth::{NewUser, User};
use sweetshop_catalog::{NewSweet, Sweet, SweetPatch};
use sweetshop_core::SweetId;

use crate::StoreResult;

/// User credential records. Registration-only: no update or delete path.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a new user. Fails with a domain `Conflict` when the username
    /// is already taken.
    async fn insert_user(&self, user: NewUser) -> StoreResult<User>;

    /// Look up a user by username.
    async fn find_user(&self, username: &str) -> StoreResult<Option<User>>;
}

/// Sweet records plus the stock mutations.
#[async_trait]
pub trait SweetStore: Send + Sync {
    /// Insert a validated draft; the store assigns the id.
    async fn insert_sweet(&self, draft: NewSweet) -> StoreResult<Sweet>;

    async fn get_sweet(&self, id: SweetId) -> StoreResult<Option<Sweet>>;

    /// All sweets, ordered by id.
    async fn list_sweets(&self) -> StoreResult<Vec<Sweet>>;

    /// Case-insensitive substring search over name and category. An empty
    /// query returns everything.
    async fn search_sweets(&self, query: &str) -> StoreResult<Vec<Sweet>>;

    /// Apply a partial update; fields absent from the patch are unchanged.
    async fn update_sweet(&self, id: SweetId, patch: SweetPatch) -> StoreResult<Sweet>;

    /// Hard delete.
    async fn delete_sweet(&self, id: SweetId) -> StoreResult<()>;

    /// Increase stock by `quantity` (>= 1) and return the new level.
    async fn restock(&self, id: SweetId, quantity: i64) -> StoreResult<i64>;

    /// Decrease stock by `quantity` (>= 1) and return the new level. Fails
    /// with `InsufficientStock` when `quantity` exceeds the current stock.
    async fn purchase(&self, id: SweetId, quantity: i64) -> StoreResult<i64>;
}
