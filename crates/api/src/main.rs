use anyhow::Context;

use partsorders_api::config::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    partsorders_observability::init();

    let config = ApiConfig::from_env().context("invalid configuration")?;
    if !config.seed_catalog {
        tracing::warn!("starting with an empty part catalog");
    }

    let app = partsorders_api::app::build_app(&config);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
