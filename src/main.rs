use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use notebook_forwarder::{
    config::{ForwarderConfig, ServerConfig},
    routes,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let server = ServerConfig::from_env()?;
    let forwarder = ForwarderConfig::from_env();
    if forwarder.endpoint().is_err() {
        tracing::warn!(?forwarder, "webhook not configured, queries will fail until it is");
    }

    let state = AppState::new(forwarder)
        .context("failed to build HTTP client")?
        .shared();

    let app = routes::create_router().with_state(state);

    let listener = tokio::net::TcpListener::bind(server.addr)
        .await
        .with_context(|| format!("failed to bind {}", server.addr))?;

    tracing::info!(addr = %server.addr, "notebook forwarder listening");
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
