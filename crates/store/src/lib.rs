//! `sweetshop-store` — the one shared mutable resource.
//!
//! Holds user and sweet records behind storage traits. Two implementations:
//! an in-memory store for dev/test and a Postgres store for persistence.
//! Stock mutations are serialized per item by the backend (single write lock
//! in memory, row lock in Postgres) so concurrent purchases can never lose
//! an update.

pub mod error;
pub mod memory;
pub mod postgres;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use postgres::PostgresStore;
pub use traits::{SweetStore, UserStore};
