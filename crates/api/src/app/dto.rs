use serde::Deserialize;

use sweetshop_auth::User;
use sweetshop_catalog::Sweet;
use sweetshop_core::{DomainError, SweetId};

use crate::context::CurrentUser;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub username: String,
    pub password: String,
}

impl CredentialsRequest {
    /// Username 3..=50 chars, password 6..=100 chars.
    pub fn validate(&self) -> Result<(), DomainError> {
        let ulen = self.username.chars().count();
        if !(3..=50).contains(&ulen) {
            return Err(DomainError::validation(
                "username must be between 3 and 50 characters",
            ));
        }
        let plen = self.password.chars().count();
        if !(6..=100).contains(&plen) {
            return Err(DomainError::validation(
                "password must be between 6 and 100 characters",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct QuantityRequest {
    pub quantity: i64,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn user_to_json(user: &User) -> serde_json::Value {
    serde_json::json!({
        "id": user.id,
        "username": user.username,
        "role": user.role.as_str(),
    })
}

pub fn current_user_to_json(user: &CurrentUser) -> serde_json::Value {
    serde_json::json!({
        "id": user.id,
        "username": user.username,
        "role": user.role.as_str(),
    })
}

pub fn sweet_to_json(sweet: &Sweet) -> serde_json::Value {
    serde_json::json!({
        "id": sweet.id,
        "name": sweet.name,
        "category": sweet.category,
        "price": sweet.price,
        "stock": sweet.stock,
    })
}

pub fn sweets_to_json(sweets: &[Sweet]) -> serde_json::Value {
    serde_json::Value::Array(sweets.iter().map(sweet_to_json).collect())
}

pub fn stock_to_json(id: SweetId, new_stock: i64, message: String) -> serde_json::Value {
    serde_json::json!({
        "sweet_id": id,
        "new_stock": new_stock,
        "message": message,
    })
}
