//! User credential records.

use serde::{Deserialize, Serialize};

use crate::{Role, verify_password};

/// A stored user record.
///
/// # Invariants
/// - `username` is unique across all users (enforced by the store).
/// - `password_digest` is never the plaintext.
/// - Records are immutable after registration; there is no update or delete
///   path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password_digest: String,
    pub role: Role,
}

impl User {
    /// Check a login attempt against the stored digest.
    pub fn password_matches(&self, plain: &str) -> bool {
        verify_password(plain, &self.password_digest)
    }
}

/// A user record pending insertion (id is store-assigned).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub password_digest: String,
    pub role: Role,
}

impl NewUser {
    /// Build a registration record from a plaintext password.
    pub fn registration(username: impl Into<String>, password: &str) -> Self {
        Self {
            username: username.into(),
            password_digest: crate::hash_password(password),
            role: Role::User,
        }
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_hashes_password() {
        let new = NewUser::registration("alice", "sugarsugar");
        assert_ne!(new.password_digest, "sugarsugar");
        assert_eq!(new.role, Role::User);
    }

    #[test]
    fn password_matches_round_trip() {
        let new = NewUser::registration("alice", "sugarsugar");
        let user = User {
            id: 1,
            username: new.username,
            password_digest: new.password_digest,
            role: new.role,
        };
        assert!(user.password_matches("sugarsugar"));
        assert!(!user.password_matches("saltsalt"));
    }
}
