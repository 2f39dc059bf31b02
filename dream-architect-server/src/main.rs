// =============================================================================
// DreamArchitect API - Server Entry Point
// =============================================================================

mod config;
mod error;
mod routes;

use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::routes::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "dream_architect=info,dream_architect_api=info,tower_http=info"
                    .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::parse();
    let generator = config.build_generator()?;

    let state = AppState {
        generator: Arc::new(generator),
    };
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    tracing::info!("DreamArchitect API running on http://{}", config.bind);

    axum::serve(listener, app).await?;

    Ok(())
}
