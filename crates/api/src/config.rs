//! Process configuration.
//!
//! One explicitly constructed config object, built from the environment in
//! `main` and passed into service construction. The token secret backs both
//! issuing and verification for the process lifetime.

use chrono::Duration;

use sweetshop_auth::{TokenConfig, token::DEFAULT_TTL_MINUTES};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub jwt_secret: String,
    pub token_ttl_minutes: i64,
    /// Present selects the Postgres store; absent the in-memory store.
    pub database_url: Option<String>,
    pub bind_addr: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let jwt_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("JWT_SECRET not set; using insecure dev default");
            "dev-secret".to_string()
        });

        let token_ttl_minutes = std::env::var("TOKEN_TTL_MINUTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TTL_MINUTES);

        let database_url = std::env::var("DATABASE_URL").ok();

        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string());

        Self {
            jwt_secret,
            token_ttl_minutes,
            database_url,
            bind_addr,
        }
    }

    pub fn token_config(&self) -> TokenConfig {
        TokenConfig::new(&self.jwt_secret).with_ttl(Duration::minutes(self.token_ttl_minutes))
    }
}
