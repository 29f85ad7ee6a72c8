use std::sync::Arc;

use sweetshop_api::{app, config::AppConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    sweetshop_observability::init();

    let config = AppConfig::from_env();
    let services = Arc::new(app::services::AppServices::from_config(&config).await?);

    let router = app::build_app(services);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, router).await?;
    Ok(())
}
