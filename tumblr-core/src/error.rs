//! Error types for the Tumblr client.
//!
//! All failure categories across the client are unified into a single
//! `TumblrError` enum with conversions from underlying library errors.
//! A non-200 HTTP status is deliberately NOT an error: it is an ordinary
//! response outcome reported through the response predicates.

use thiserror::Error;

/// Convenience type alias for Results using TumblrError.
pub type TumblrResult<T> = Result<T, TumblrError>;

/// Unified error type covering every failure category in the client.
#[derive(Error, Debug)]
pub enum TumblrError {
    // -- Construction errors --
    /// A required credential field is missing or empty. Fatal to client
    /// creation; carries the field name.
    #[error("missing credential: {0}")]
    MissingCredential(String),

    /// An action name outside the closed v1 set; carries the rejected name.
    #[error("unknown action: {0}")]
    InvalidAction(String),

    // -- Configuration errors --
    /// Failed to load or parse client configuration.
    #[error("configuration error: {0}")]
    Config(String),

    // -- Transport errors --
    /// Network-level failure (connection refused, DNS, TLS, read error).
    #[error("transport error: {0}")]
    Transport(String),

    /// The HTTP request timed out.
    #[error("request timeout: {0}")]
    Timeout(String),

    // -- Normalization errors --
    /// The response body is neither var-wrapped JSON nor valid XML, or the
    /// detected encoding failed to parse.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    // -- File/IO errors --
    /// File system operation failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for TumblrError {
    fn from(e: toml::de::Error) -> Self {
        TumblrError::Config(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credential_display() {
        let err = TumblrError::MissingCredential("email".to_string());
        assert_eq!(err.to_string(), "missing credential: email");
    }

    #[test]
    fn test_invalid_action_carries_name() {
        let err = TumblrError::InvalidAction("snorkel".to_string());
        assert_eq!(err.to_string(), "unknown action: snorkel");
    }

    #[test]
    fn test_toml_error_maps_to_config() {
        let parse: Result<toml::Value, _> = toml::from_str("not [valid");
        let err: TumblrError = parse.unwrap_err().into();
        assert!(matches!(err, TumblrError::Config(_)));
    }
}
