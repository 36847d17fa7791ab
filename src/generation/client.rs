// SPDX-License-Identifier: MPL-2.0
//! Asynchronous client for the generation endpoint.

use crate::error::GenerationError;
use crate::generation::wire::{GenerateRequest, GenerateResponse};
use crate::media::ImagePayload;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

/// Model identifier used when the config does not override it.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-image";

/// Base URL of the generative language API.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Environment variable holding the API credential, read once at startup.
pub const ENV_API_KEY: &str = "GEMINI_API_KEY";

/// Stateless client for single-attempt image generation calls.
///
/// Safe to invoke concurrently; the UI serializes calls by disabling the
/// generate action while one is outstanding.
#[derive(Debug, Clone)]
pub struct GenerationClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GenerationClient {
    /// Creates a client with an explicit credential, model, and base URL.
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, GenerationError> {
        // Build client with explicit redirect policy and user agent
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(concat!("IconForge/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GenerationError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            api_key: api_key.into(),
            base_url: trim_trailing_slash(base_url.into()),
            model: model.into(),
        })
    }

    /// Creates a client from the process environment.
    ///
    /// Fails with [`GenerationError::MissingApiKey`] when the credential
    /// variable is unset or empty.
    pub fn from_env(model: impl Into<String>, base_url: impl Into<String>) -> Result<Self, GenerationError> {
        let api_key = std::env::var(ENV_API_KEY).unwrap_or_default();
        if api_key.trim().is_empty() {
            return Err(GenerationError::MissingApiKey);
        }
        Self::new(api_key, model, base_url)
    }

    /// Endpoint URL for this client's model.
    #[must_use]
    pub fn endpoint_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    /// Sends one composed prompt and returns the first inline image.
    ///
    /// Single attempt: transport and service failures are returned as-is,
    /// with no retry or backoff. A response without an inline image part
    /// fails with [`GenerationError::NoImageData`].
    pub async fn generate(&self, prompt: &str) -> Result<ImagePayload, GenerationError> {
        let request = GenerateRequest::single_image(prompt);

        let response = self
            .http
            .post(self.endpoint_url())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| GenerationError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GenerationError::Service {
                status: status.as_u16(),
                message: truncate_message(&message),
            });
        }

        let decoded: GenerateResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::InvalidResponse(e.to_string()))?;

        let inline = decoded
            .first_inline_image()
            .ok_or(GenerationError::NoImageData)?;

        let bytes = BASE64
            .decode(&inline.data)
            .map_err(|e| GenerationError::InvalidResponse(format!("bad image base64: {e}")))?;

        Ok(ImagePayload::new(inline.mime_type.clone(), bytes))
    }
}

fn trim_trailing_slash(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}

/// Service error bodies can be large JSON blobs; keep the surfaced message short.
fn truncate_message(message: &str) -> String {
    const MAX_LEN: usize = 300;
    if message.len() <= MAX_LEN {
        message.to_string()
    } else {
        let mut end = MAX_LEN;
        while !message.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}…", &message[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_url_embeds_model_and_base() {
        let client =
            GenerationClient::new("key", DEFAULT_MODEL, DEFAULT_BASE_URL).expect("client");
        assert_eq!(
            client.endpoint_url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash-image:generateContent"
        );
    }

    #[test]
    fn trailing_slash_in_base_url_is_trimmed() {
        let client = GenerationClient::new("key", "m", "http://localhost:8080/").expect("client");
        assert_eq!(
            client.endpoint_url(),
            "http://localhost:8080/v1beta/models/m:generateContent"
        );
    }

    #[test]
    fn truncate_message_keeps_short_messages() {
        assert_eq!(truncate_message("quota exceeded"), "quota exceeded");
    }

    #[test]
    fn truncate_message_bounds_long_messages() {
        let long = "x".repeat(1000);
        let truncated = truncate_message(&long);
        assert!(truncated.chars().count() <= 301);
        assert!(truncated.ends_with('…'));
    }

    #[test]
    fn from_env_without_key_is_missing_api_key() {
        // The variable may exist in a developer environment; only assert the
        // failure shape when it is genuinely absent.
        if std::env::var(ENV_API_KEY).is_err() {
            let err = GenerationClient::from_env(DEFAULT_MODEL, DEFAULT_BASE_URL).unwrap_err();
            assert!(matches!(err, GenerationError::MissingApiKey));
        }
    }
}
