//! Shared service handles and store selection.

use std::sync::Arc;

use sweetshop_auth::{TokenConfig, Tokens};
use sweetshop_store::{MemoryStore, PostgresStore, SweetStore, UserStore};

use crate::config::AppConfig;

/// Everything the handlers need, behind one `Arc`.
pub struct AppServices {
    pub users: Arc<dyn UserStore>,
    pub sweets: Arc<dyn SweetStore>,
    pub tokens: Arc<Tokens>,
}

impl AppServices {
    /// In-memory wiring (dev/test).
    pub fn in_memory(token_config: &TokenConfig) -> Self {
        let store = Arc::new(MemoryStore::new());
        Self {
            users: store.clone(),
            sweets: store,
            tokens: Arc::new(Tokens::new(token_config)),
        }
    }

    /// Wire services from config: Postgres when `DATABASE_URL` is set,
    /// in-memory otherwise.
    pub async fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let token_config = config.token_config();

        match &config.database_url {
            Some(url) => {
                let store = PostgresStore::connect(url)
                    .await
                    .map_err(|e| anyhow::anyhow!("failed to connect to postgres: {e}"))?;
                store
                    .ensure_schema()
                    .await
                    .map_err(|e| anyhow::anyhow!("failed to ensure schema: {e}"))?;
                tracing::info!("using postgres store");

                let store = Arc::new(store);
                Ok(Self {
                    users: store.clone(),
                    sweets: store,
                    tokens: Arc::new(Tokens::new(&token_config)),
                })
            }
            None => {
                tracing::info!("DATABASE_URL not set; using in-memory store");
                Ok(Self::in_memory(&token_config))
            }
        }
    }
}
