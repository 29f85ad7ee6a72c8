//! `sweetshop-catalog` — the sellable-item domain.
//!
//! This crate contains business rules for sweets, implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage).

pub mod stock;
pub mod sweet;

pub use stock::{purchase_stock, restock_stock};
pub use sweet::{NewSweet, Sweet, SweetPatch};
