use crate::{ForwardError, forwarder::Forwarder};
use axum::{body::Bytes, extract::State, http::Method, response::Json};
use serde_json::Value;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub forwarder: Arc<Forwarder>,
}

/// Accepts every method so that non-POST requests get the JSON 405 body
/// rather than the router's empty one.
pub async fn generate(
    State(state): State<AppState>,
    method: Method,
    body: Bytes,
) -> Result<Json<Value>, ForwardError> {
    let data = state.forwarder.forward(&method, &body).await?;
    Ok(Json(data))
}
