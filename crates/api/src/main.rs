use anyhow::Context;

use httpresults_api::{app, config::AppConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    httpresults_observability::init();

    let config = AppConfig::from_env();
    let app = app::build_app();

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
