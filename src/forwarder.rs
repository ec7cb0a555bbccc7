//! Translates an inbound request into one upstream `generateContent` call
//! and maps the outcome back.

use crate::{
    ForwardError,
    error::UPSTREAM_FALLBACK_MESSAGE,
    gemini::{GenerateContentRequest, GenerativeClient},
};
use axum::http::Method;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Body sent by the frontend. Every field is optional and `null` counts as
/// absent; unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InboundRequest {
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub image_base64: Option<String>,
    #[serde(default)]
    pub json: Option<bool>,
}

impl InboundRequest {
    /// Decodes a raw body. An empty body is a request with nothing set.
    pub fn decode(body: &[u8]) -> serde_json::Result<Self> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        serde_json::from_slice(body)
    }

    pub fn into_payload(self) -> GenerateContentRequest {
        GenerateContentRequest::build(
            self.prompt,
            self.image_base64,
            self.json.unwrap_or(false),
        )
    }
}

pub struct Forwarder {
    client: Arc<dyn GenerativeClient>,
    api_key: Option<String>,
}

impl Forwarder {
    pub fn new(client: Arc<dyn GenerativeClient>, api_key: Option<String>) -> Self {
        Self { client, api_key }
    }

    /// Runs one invocation. Checks happen in a fixed order: method, then
    /// credential, then body; the upstream is only contacted once all pass.
    pub async fn forward(&self, method: &Method, body: &[u8]) -> Result<Value, ForwardError> {
        if method != Method::POST {
            warn!("Rejected {} request", method);
            return Err(ForwardError::MethodNotAllowed);
        }

        let Some(api_key) = self.api_key.as_deref() else {
            error!("Upstream credential is not configured");
            return Err(ForwardError::MissingCredential);
        };

        let request = InboundRequest::decode(body).map_err(|e| {
            warn!("Failed to decode request body: {}", e);
            ForwardError::InvalidBody(e.to_string())
        })?;

        info!(
            prompt_len = request.prompt.as_deref().map_or(0, str::len),
            has_image = request.image_base64.as_deref().is_some_and(|d| !d.is_empty()),
            json_mode = request.json.unwrap_or(false),
            "Forwarding generateContent request"
        );

        let payload = request.into_payload();
        let data = self
            .client
            .generate_content(api_key, &payload)
            .await
            .map_err(|e| {
                let err = ForwardError::from(e);
                error!(error = %err, "Upstream call failed");
                err
            })?;

        interpret_response(data).inspect_err(|err| {
            error!(error = %err, "Upstream reported an error");
        })
    }
}

/// Maps a parsed upstream body to the caller-facing outcome. A truthy
/// `error` field means failure regardless of the HTTP status; anything else
/// is relayed untouched.
pub fn interpret_response(data: Value) -> Result<Value, ForwardError> {
    if data.is_null() {
        return Err(ForwardError::UpstreamCallFailed(
            "Upstream returned a null body".to_string(),
        ));
    }

    if let Some(upstream_error) = data.get("error").filter(|e| is_truthy(e)) {
        let message = match upstream_error.get("message") {
            Some(Value::String(msg)) if !msg.is_empty() => msg.clone(),
            Some(other) if is_truthy(other) => other.to_string(),
            _ => UPSTREAM_FALLBACK_MESSAGE.to_string(),
        };
        return Err(ForwardError::UpstreamReportedError(message));
    }

    Ok(data)
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_decode_empty_body() {
        assert_eq!(InboundRequest::decode(b"").unwrap(), InboundRequest::default());
        assert_eq!(InboundRequest::decode(b"  \n").unwrap(), InboundRequest::default());
    }

    #[test]
    fn test_decode_camel_case_fields() {
        let request =
            InboundRequest::decode(br#"{"prompt":"hi","imageBase64":"AAA=","json":true,"extra":1}"#)
                .unwrap();

        assert_eq!(request.prompt.as_deref(), Some("hi"));
        assert_eq!(request.image_base64.as_deref(), Some("AAA="));
        assert_eq!(request.json, Some(true));
    }

    #[test]
    fn test_decode_nulls_are_absent() {
        let request =
            InboundRequest::decode(br#"{"prompt":null,"imageBase64":null,"json":null}"#).unwrap();
        assert_eq!(request, InboundRequest::default());
    }

    #[test]
    fn test_decode_rejects_wrong_types() {
        assert!(InboundRequest::decode(br#"{"json":"yes"}"#).is_err());
        assert!(InboundRequest::decode(br#"{"prompt":42}"#).is_err());
        assert!(InboundRequest::decode(b"not json").is_err());
    }

    #[test]
    fn test_interpret_error_with_message() {
        let result = interpret_response(json!({ "error": { "message": "bad key", "code": 400 } }));
        assert_eq!(
            result,
            Err(ForwardError::UpstreamReportedError("bad key".to_string()))
        );
    }

    #[test]
    fn test_interpret_error_without_message_uses_fallback() {
        for body in [
            json!({ "error": { "code": 500 } }),
            json!({ "error": { "message": "" } }),
            json!({ "error": "quota" }),
        ] {
            assert_eq!(
                interpret_response(body),
                Err(ForwardError::UpstreamReportedError(
                    "Error en la API de Google".to_string()
                ))
            );
        }
    }

    #[test]
    fn test_interpret_falsy_error_is_success() {
        let body = json!({ "error": null, "candidates": [] });
        assert_eq!(interpret_response(body.clone()), Ok(body));

        let body = json!({ "error": false });
        assert_eq!(interpret_response(body.clone()), Ok(body));
    }

    #[test]
    fn test_interpret_relays_body_verbatim() {
        let body = json!({
            "candidates": [{ "content": { "parts": [{ "text": "hello" }], "role": "model" } }],
            "usageMetadata": { "totalTokenCount": 7 }
        });
        assert_eq!(interpret_response(body.clone()), Ok(body));
    }

    #[test]
    fn test_interpret_null_body_fails() {
        assert!(matches!(
            interpret_response(Value::Null),
            Err(ForwardError::UpstreamCallFailed(_))
        ));
    }
}
