//! Role-gated access checks.
//!
//! Pure policy predicates: no IO, no business logic. Identity resolution
//! happens before these run.

use crate::{AuthError, Role};

/// Require the caller to hold exactly `required`.
pub fn require_role(role: Role, required: Role) -> Result<(), AuthError> {
    if role == required {
        Ok(())
    } else {
        Err(AuthError::InsufficientPermission)
    }
}

/// Require the caller to be an admin.
pub fn require_admin(role: Role) -> Result<(), AuthError> {
    require_role(role, Role::Admin)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_passes_admin_gate() {
        assert!(require_admin(Role::Admin).is_ok());
    }

    #[test]
    fn user_fails_admin_gate() {
        assert_eq!(
            require_admin(Role::User),
            Err(AuthError::InsufficientPermission)
        );
    }

    #[test]
    fn exact_role_is_required() {
        assert!(require_role(Role::User, Role::User).is_ok());
        assert!(require_role(Role::Admin, Role::User).is_err());
    }
}
