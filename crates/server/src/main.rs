use std::sync::Arc;

use genai::GenAiClient;
use server::auth::{AnonymousIdentity, IdentityProvider, IdentityToolkitProvider};
use server::config::ServerConfig;
use server::state::AppState;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = ServerConfig::from_env()?;

    let pool = db::create_pool(&config.database_url).await?;
    db::run_migrations(&pool).await?;

    let client = match &config.genai_base_url {
        Some(base_url) => {
            GenAiClient::with_base_url(base_url, &config.genai_api_key, &config.genai_model)
        }
        None => GenAiClient::new(&config.genai_api_key, &config.genai_model),
    };

    let identity: Arc<dyn IdentityProvider> = match &config.identity_api_key {
        Some(api_key) => Arc::new(IdentityToolkitProvider::new(api_key)),
        None => {
            tracing::warn!("IDENTITY_API_KEY not set, running anonymous-only");
            Arc::new(AnonymousIdentity)
        }
    };

    let state = AppState::new(pool, client, identity);
    let app = server::create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
