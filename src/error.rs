use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;

use crate::server::ErrorResponse;

pub type Result<T> = std::result::Result<T, Error>;

/// Fallback used when the upstream reports an error without a usable message.
pub const UPSTREAM_FALLBACK_MESSAGE: &str = "Error en la API de Google";

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),

    #[error("Upstream error: {0}")]
    Upstream(String),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::Upstream(msg.into())
    }
}

/// Terminal outcomes of a forwarded request other than success.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ForwardError {
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    #[error("ERROR: La API KEY no está configurada en Vercel.")]
    MissingCredential,

    #[error("{0}")]
    InvalidBody(String),

    #[error("{0}")]
    UpstreamCallFailed(String),

    #[error("{0}")]
    UpstreamReportedError(String),
}

impl ForwardError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
            Self::MissingCredential
            | Self::UpstreamCallFailed(_)
            | Self::UpstreamReportedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// The bare message reaches the caller, so transport errors must already be
// stripped of their URL (it carries the credential as a query parameter).
impl From<Error> for ForwardError {
    fn from(err: Error) -> Self {
        let message = match err {
            Error::Network(e) => e.without_url().to_string(),
            Error::Serialization(e) => e.to_string(),
            Error::Upstream(msg) => msg,
            other => other.to_string(),
        };
        Self::UpstreamCallFailed(message)
    }
}

impl IntoResponse for ForwardError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}
