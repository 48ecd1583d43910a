use anyhow::Context;

use romantica_api::StorefrontConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = StorefrontConfig::from_env().context("invalid storefront configuration")?;
    romantica_observability::init_with(config.log_format);

    let app = romantica_api::app::build_app(&config);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
