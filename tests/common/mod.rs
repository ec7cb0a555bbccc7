#![allow(dead_code)]

pub mod mocks;

use gemini_relay::{
    config::{Config, ServerConfig, UpstreamConfig},
    forwarder::Forwarder,
    gemini::GenerativeClient,
    server::{self, handlers::AppState},
};
use axum::Router;
use std::sync::Arc;

pub const TEST_API_KEY: &str = "test-api-key";

/// Config pointing the upstream at `base_url`, with the test credential set.
pub fn create_test_config(base_url: &str) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            ..ServerConfig::default()
        },
        upstream: UpstreamConfig {
            base_url: base_url.to_string(),
            api_key: Some(TEST_API_KEY.to_string()),
        },
    }
}

/// Router backed by the real HTTP client.
pub fn create_test_app(config: &Config) -> Router {
    server::router(server::build_state(config), config.server.max_body_bytes)
}

/// Router backed by an arbitrary client, e.g. a mock.
pub fn create_app_with_client(client: Arc<dyn GenerativeClient>, api_key: Option<&str>) -> Router {
    let state = AppState {
        forwarder: Arc::new(Forwarder::new(client, api_key.map(str::to_string))),
    };
    server::router(state, ServerConfig::default().max_body_bytes)
}
