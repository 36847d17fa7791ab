// SPDX-License-Identifier: MPL-2.0
//! Inline image payloads in `data:<mime>;base64,<bytes>` form.
//!
//! The generation endpoint returns raw base64 bytes with a MIME type; history
//! entries persist the payload as a single data URI string. This module is
//! the only place that knows the wire format of that string.

use crate::error::{Error, Result};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

/// A decoded inline image: MIME type plus raw encoded image bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl ImagePayload {
    /// Wraps raw image bytes with their MIME type.
    #[must_use]
    pub fn new(mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            mime: mime.into(),
            bytes,
        }
    }

    /// Renders the payload as a `data:` URI string.
    #[must_use]
    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime, BASE64.encode(&self.bytes))
    }

    /// Parses a `data:` URI string back into a payload.
    ///
    /// Fails when the scheme, encoding marker, or base64 body is malformed.
    pub fn from_data_uri(uri: &str) -> Result<Self> {
        let rest = uri
            .strip_prefix("data:")
            .ok_or_else(|| Error::Image("not a data URI".to_string()))?;

        let (header, body) = rest
            .split_once(',')
            .ok_or_else(|| Error::Image("data URI has no payload".to_string()))?;

        let mime = header
            .strip_suffix(";base64")
            .ok_or_else(|| Error::Image("data URI is not base64-encoded".to_string()))?;

        let bytes = BASE64
            .decode(body)
            .map_err(|e| Error::Image(format!("invalid base64 payload: {e}")))?;

        Ok(Self {
            mime: mime.to_string(),
            bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_data_uri_has_expected_shape() {
        let payload = ImagePayload::new("image/png", vec![1, 2, 3]);
        let uri = payload.to_data_uri();
        assert!(uri.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn round_trip_preserves_bytes_and_mime() {
        let payload = ImagePayload::new("image/webp", vec![0, 255, 128, 7]);
        let parsed = ImagePayload::from_data_uri(&payload.to_data_uri()).expect("parse");
        assert_eq!(parsed, payload);
    }

    #[test]
    fn rejects_non_data_scheme() {
        let err = ImagePayload::from_data_uri("https://example.com/icon.png");
        assert!(err.is_err());
    }

    #[test]
    fn rejects_missing_base64_marker() {
        let err = ImagePayload::from_data_uri("data:image/png,abc");
        assert!(err.is_err());
    }

    #[test]
    fn rejects_invalid_base64_body() {
        let err = ImagePayload::from_data_uri("data:image/png;base64,@@@@");
        assert!(err.is_err());
    }
}
