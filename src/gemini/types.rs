//! Request payload for the `generateContent` endpoint.

use serde::Serialize;

pub const IMAGE_MIME_TYPE: &str = "image/jpeg";
pub const JSON_MIME_TYPE: &str = "application/json";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

/// A text part or an inline media part. Serialized without a tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Part {
    Text {
        #[serde(skip_serializing_if = "Option::is_none")]
        text: Option<String>,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: String,
}

impl GenerateContentRequest {
    /// Builds the payload: parts are always `[text, image?]`, and the
    /// generation config is present exactly when `json_mode` is set.
    ///
    /// The image is forwarded verbatim and labelled as JPEG; nothing is
    /// decoded or checked here.
    pub fn build(prompt: Option<String>, image_base64: Option<String>, json_mode: bool) -> Self {
        let mut parts = vec![Part::Text { text: prompt }];

        if let Some(data) = image_base64.filter(|data| !data.is_empty()) {
            parts.push(Part::InlineData {
                inline_data: InlineData {
                    mime_type: IMAGE_MIME_TYPE.to_string(),
                    data,
                },
            });
        }

        let generation_config = json_mode.then(|| GenerationConfig {
            response_mime_type: JSON_MIME_TYPE.to_string(),
        });

        Self {
            contents: vec![Content { parts }],
            generation_config,
        }
    }
}
