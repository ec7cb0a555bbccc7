pub mod handlers;
mod types;

pub use types::ErrorResponse;

use crate::{
    Result,
    config::Config,
    forwarder::Forwarder,
    gemini::{GeminiClient, GenerativeClient},
};
use axum::{Router, extract::DefaultBodyLimit, routing::any};
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub const GENERATE_ROUTE: &str = "/api/gemini";

pub fn router(state: handlers::AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .route(GENERATE_ROUTE, any(handlers::generate))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Wires the forwarder to a client for `config.upstream.base_url`.
pub fn build_state(config: &Config) -> handlers::AppState {
    let client: Arc<dyn GenerativeClient> =
        Arc::new(GeminiClient::new(config.upstream.base_url.clone()));
    let forwarder = Forwarder::new(client, config.upstream.api_key.clone());

    handlers::AppState {
        forwarder: Arc::new(forwarder),
    }
}

pub async fn run(config: Config) -> Result<()> {
    if config.upstream.api_key.is_none() {
        warn!("GEMINI_API_KEY is not set; every request will be rejected");
    }

    let app = router(build_state(&config), config.server.max_body_bytes);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
