// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    History(String),
    Image(String),
    Generation(GenerationError),
}

/// Specific error types for generation requests.
/// Kept separate so the UI can surface the remote failure verbatim while
/// other subsystems keep their own categories.
#[derive(Debug, Clone)]
pub enum GenerationError {
    /// No API key was found in the environment at startup.
    MissingApiKey,

    /// The HTTP call itself failed (DNS, TLS, timeout, connection reset).
    Transport(String),

    /// The service answered with a non-success status.
    Service { status: u16, message: String },

    /// The response decoded but carried no inline image part.
    NoImageData,

    /// The response body could not be decoded at all.
    InvalidResponse(String),
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationError::MissingApiKey => {
                write!(f, "No API key configured (set GEMINI_API_KEY)")
            }
            GenerationError::Transport(msg) => write!(f, "Request failed: {msg}"),
            GenerationError::Service { status, message } => {
                write!(f, "Service error ({status}): {message}")
            }
            GenerationError::NoImageData => write!(f, "No image data found in response"),
            GenerationError::InvalidResponse(msg) => write!(f, "Unexpected response: {msg}"),
        }
    }
}

impl std::error::Error for GenerationError {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::History(e) => write!(f, "History Error: {}", e),
            Error::Image(e) => write!(f, "Image Error: {}", e),
            Error::Generation(e) => write!(f, "Generation Error: {}", e),
        }
    }
}

impl From<GenerationError> for Error {
    fn from(err: GenerationError) -> Self {
        Error::Generation(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::History(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn generation_error_wraps_into_error() {
        let err: Error = GenerationError::NoImageData.into();
        assert!(matches!(
            err,
            Error::Generation(GenerationError::NoImageData)
        ));
    }

    #[test]
    fn service_error_display_includes_status() {
        let err = GenerationError::Service {
            status: 429,
            message: "quota exceeded".to_string(),
        };
        let text = format!("{}", err);
        assert!(text.contains("429"));
        assert!(text.contains("quota exceeded"));
    }

    #[test]
    fn missing_api_key_names_the_variable() {
        let text = format!("{}", GenerationError::MissingApiKey);
        assert!(text.contains("GEMINI_API_KEY"));
    }

    #[test]
    fn history_error_formats_properly() {
        let err = Error::History("bad entry".into());
        assert_eq!(format!("{}", err), "History Error: bad entry");
    }
}
