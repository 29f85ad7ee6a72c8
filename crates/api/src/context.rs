use sweetshop_auth::{Role, User};

/// Authenticated caller for a request.
///
/// Inserted by the auth middleware; present on all protected routes. The
/// password digest deliberately does not travel with the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: i64,
    pub username: String,
    pub role: Role,
}

impl From<User> for CurrentUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            role: user.role,
        }
    }
}
