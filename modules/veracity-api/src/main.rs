use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use veracity_api::{router, AppState};
use veracity_common::Config;
use veracity_scorer::Analyzer;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("veracity=info".parse()?))
        .init();

    let config = Config::from_env()?;
    let analyzer = Analyzer::from_config(&config)?;
    let state = Arc::new(AppState::new(analyzer));

    let app = router(state).layer(
        tower_http::cors::CorsLayer::new()
            .allow_origin(tower_http::cors::Any)
            .allow_methods(tower_http::cors::Any)
            .allow_headers(tower_http::cors::Any),
    );

    let addr = format!("{}:{}", config.web_host, config.web_port);
    info!("Veracity API starting on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
