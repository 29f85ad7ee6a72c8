use thiserror::Error;

/// Authentication/authorization error.
///
/// The first four variants all mean "the caller could not be identified" and
/// must be surfaced to clients with one generic message so a probe cannot
/// tell which stage failed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Signature mismatch or malformed token structure.
    #[error("invalid token")]
    InvalidToken,

    /// The token's expiry timestamp has passed.
    #[error("token expired")]
    ExpiredToken,

    /// The decoded claims carry no subject.
    #[error("token has no subject")]
    MissingSubject,

    /// The token subject resolves to no known user.
    #[error("unknown user")]
    UserNotFound,

    /// The caller is authenticated but lacks the required role.
    #[error("insufficient permissions")]
    InsufficientPermission,
}

impl AuthError {
    /// True for the variants that must collapse to a generic 401 message.
    pub fn is_identity_failure(&self) -> bool {
        !matches!(self, AuthError::InsufficientPermission)
    }
}
