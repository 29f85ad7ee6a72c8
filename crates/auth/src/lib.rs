//! `sweetshop-auth` — pure authentication/authorization boundary.
//!
//! This crate is intentionally decoupled from HTTP and storage: it hashes and
//! verifies passwords, mints and verifies bearer tokens, and gates actions by
//! role. Identity *resolution* (username → user record) belongs to the store.

pub mod error;
pub mod gate;
pub mod password;
pub mod roles;
pub mod token;
pub mod user;

pub use error::AuthError;
pub use gate::{require_admin, require_role};
pub use password::{hash_password, verify_password};
pub use roles::Role;
pub use token::{TokenConfig, Tokens};
pub use user::{NewUser, User};
