use serde::{Deserialize, Serialize};

/// Body of every failure response: `{ "error": <message> }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
