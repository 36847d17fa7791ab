// SPDX-License-Identifier: MPL-2.0
//! Serde types for the `generateContent` REST call.
//!
//! Only the fields this application reads or writes are modeled; the service
//! response is treated as opaque beyond the first inline image part.

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct GenerateRequest {
    pub contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(rename = "inlineData", skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct InlineData {
    #[serde(rename = "mimeType")]
    pub mime_type: String,
    /// Base64-encoded image bytes.
    pub data: String,
}

#[derive(Debug, Serialize)]
pub struct GenerationConfig {
    #[serde(rename = "imageConfig")]
    pub image_config: ImageConfig,
}

#[derive(Debug, Serialize)]
pub struct ImageConfig {
    #[serde(rename = "aspectRatio")]
    pub aspect_ratio: String,
}

#[derive(Debug, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<Content>,
}

impl GenerateRequest {
    /// Builds a single-prompt request for one square image.
    #[must_use]
    pub fn single_image(prompt: &str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                    inline_data: None,
                }],
            }],
            generation_config: GenerationConfig {
                image_config: ImageConfig {
                    aspect_ratio: "1:1".to_string(),
                },
            },
        }
    }
}

impl GenerateResponse {
    /// Returns the first inline image part of the first candidate, if any.
    ///
    /// Later candidates and non-image parts are ignored.
    #[must_use]
    pub fn first_inline_image(&self) -> Option<&InlineData> {
        self.candidates
            .first()
            .and_then(|candidate| candidate.content.as_ref())
            .and_then(|content| {
                content
                    .parts
                    .iter()
                    .find_map(|part| part.inline_data.as_ref())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_with_camel_case_keys() {
        let request = GenerateRequest::single_image("a compass rose");
        let json = serde_json::to_value(&request).expect("serialize");

        assert_eq!(json["contents"][0]["parts"][0]["text"], "a compass rose");
        assert_eq!(
            json["generationConfig"]["imageConfig"]["aspectRatio"],
            "1:1"
        );
    }

    #[test]
    fn request_omits_absent_inline_data() {
        let request = GenerateRequest::single_image("a paper plane");
        let json = serde_json::to_value(&request).expect("serialize");
        assert!(json["contents"][0]["parts"][0].get("inlineData").is_none());
    }

    #[test]
    fn first_inline_image_skips_text_parts() {
        let response: GenerateResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{
                "content": {
                    "parts": [
                        {"text": "Here is your icon"},
                        {"inlineData": {"mimeType": "image/png", "data": "AAAA"}},
                        {"inlineData": {"mimeType": "image/webp", "data": "BBBB"}}
                    ]
                }
            }]
        }))
        .expect("deserialize");

        let image = response.first_inline_image().expect("image part");
        assert_eq!(image.mime_type, "image/png");
        assert_eq!(image.data, "AAAA");
    }

    #[test]
    fn response_without_image_part_yields_none() {
        let response: GenerateResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{
                "content": {"parts": [{"text": "sorry, refused"}]}
            }]
        }))
        .expect("deserialize");

        assert!(response.first_inline_image().is_none());
    }

    #[test]
    fn empty_response_yields_none() {
        let response: GenerateResponse =
            serde_json::from_value(serde_json::json!({})).expect("deserialize");
        assert!(response.first_inline_image().is_none());
    }
}
