//! Bearer token issuing and verification (HS256 JWT).
//!
//! Tokens are stateless and bearer-only: a signed claim set carrying the
//! subject's username and an absolute expiry. There is no refresh mechanism
//! and no revocation list; a token stays valid until its expiry.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, errors::ErrorKind};
use serde::{Deserialize, Serialize};

use crate::AuthError;

/// Default token lifetime.
pub const DEFAULT_TTL_MINUTES: i64 = 30;

/// Process-wide token configuration.
///
/// The same secret must back both issuing and verification for the lifetime
/// of the process; construct this once at startup and share it.
#[derive(Debug, Clone)]
pub struct TokenConfig {
    pub secret: String,
    pub ttl: Duration,
}

impl TokenConfig {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ttl: Duration::minutes(DEFAULT_TTL_MINUTES),
        }
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }
}

/// Wire-level claim set.
///
/// `sub` is optional at the serde level so that a structurally valid token
/// without a subject decodes far enough to be rejected as `MissingSubject`
/// rather than as a generic parse failure.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sub: Option<String>,
    exp: i64,
}

/// Token issuer/verifier bound to one shared secret.
pub struct Tokens {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl Tokens {
    pub fn new(config: &TokenConfig) -> Self {
        Self {
            encoding: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding: DecodingKey::from_secret(config.secret.as_bytes()),
            ttl: config.ttl,
        }
    }

    /// Mint a token for `subject` using the configured TTL.
    pub fn issue(&self, subject: &str) -> Result<String, AuthError> {
        self.issue_with_ttl(subject, self.ttl)
    }

    /// Mint a token for `subject` with an explicit TTL.
    pub fn issue_with_ttl(&self, subject: &str, ttl: Duration) -> Result<String, AuthError> {
        let claims = Claims {
            sub: Some(subject.to_string()),
            exp: (Utc::now() + ttl).timestamp(),
        };

        jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|_| AuthError::InvalidToken)
    }

    /// Verify a token and return its subject.
    ///
    /// Expiry is checked with zero leeway; signature or structure problems
    /// are indistinguishable to the caller by design.
    pub fn verify(&self, token: &str) -> Result<String, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding, &validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::ExpiredToken,
                _ => AuthError::InvalidToken,
            })?;

        match data.claims.sub {
            Some(sub) if !sub.is_empty() => Ok(sub),
            _ => Err(AuthError::MissingSubject),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens() -> Tokens {
        Tokens::new(&TokenConfig::new("test-secret"))
    }

    #[test]
    fn issue_then_verify_round_trips_subject() {
        let tokens = tokens();
        let token = tokens.issue("alice").unwrap();
        assert_eq!(tokens.verify(&token).unwrap(), "alice");
    }

    #[test]
    fn expired_token_is_rejected() {
        let tokens = tokens();
        let token = tokens
            .issue_with_ttl("alice", Duration::seconds(-120))
            .unwrap();
        assert_eq!(tokens.verify(&token), Err(AuthError::ExpiredToken));
    }

    #[test]
    fn garbage_token_is_rejected() {
        let tokens = tokens();
        assert_eq!(tokens.verify("not-a-jwt"), Err(AuthError::InvalidToken));
    }

    #[test]
    fn tampered_token_is_rejected() {
        let tokens = tokens();
        let token = tokens.issue("alice").unwrap();
        let mut tampered = token.clone();
        tampered.pop();
        assert_eq!(tokens.verify(&tampered), Err(AuthError::InvalidToken));
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let other = Tokens::new(&TokenConfig::new("other-secret"));
        let token = other.issue("alice").unwrap();
        assert_eq!(tokens().verify(&token), Err(AuthError::InvalidToken));
    }

    #[test]
    fn token_without_subject_is_rejected() {
        let claims = Claims {
            sub: None,
            exp: (Utc::now() + Duration::minutes(5)).timestamp(),
        };
        let token = jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        assert_eq!(tokens().verify(&token), Err(AuthError::MissingSubject));
    }
}
