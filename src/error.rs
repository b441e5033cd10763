// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Catalog(String),
    Api(ApiError),
}

/// Specific error types for savings API failures.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request did not complete in time
    Timeout,

    /// The backend could not be reached
    Connect,

    /// The backend answered with a non-success status code
    Status(u16),

    /// The response body could not be decoded
    Decode(String),

    /// Generic error with raw message
    Other(String),
}

impl ApiError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ApiError::Timeout => "error-api-timeout",
            ApiError::Connect => "error-api-connect",
            ApiError::Status(_) => "error-api-status",
            ApiError::Decode(_) => "error-api-decode",
            ApiError::Other(_) => "error-api-general",
        }
    }

    /// Attempts to parse a raw transport error message into a specific
    /// `ApiError` type. This is used to categorize errors from the HTTP
    /// client without holding onto its non-`Clone` error values.
    pub fn from_message(msg: &str) -> Self {
        let msg_lower = msg.to_lowercase();

        if msg_lower.contains("timed out") || msg_lower.contains("timeout") {
            return ApiError::Timeout;
        }

        if msg_lower.contains("connect")
            || msg_lower.contains("dns")
            || msg_lower.contains("connection refused")
        {
            return ApiError::Connect;
        }

        if msg_lower.contains("decod")
            || msg_lower.contains("expected")
            || msg_lower.contains("missing field")
            || msg_lower.contains("invalid type")
        {
            return ApiError::Decode(msg.to_string());
        }

        ApiError::Other(msg.to_string())
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Timeout => write!(f, "Request timed out"),
            ApiError::Connect => write!(f, "Could not reach the backend"),
            ApiError::Status(code) => write!(f, "Backend answered with status {}", code),
            ApiError::Decode(msg) => write!(f, "Could not decode response: {}", msg),
            ApiError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Catalog(e) => write!(f, "Catalog Error: {}", e),
            Error::Api(e) => write!(f, "API Error: {}", e),
        }
    }
}

impl From<ApiError> for Error {
    fn from(err: ApiError) -> Self {
        Error::Api(err)
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
    fn catalog_error_formats_properly() {
        let err = Error::Catalog("bad item".into());
        assert_eq!(format!("{}", err), "Catalog Error: bad item");
    }

    #[test]
    fn api_error_from_message_detects_timeout() {
        assert_eq!(
            ApiError::from_message("operation timed out after 30s"),
            ApiError::Timeout
        );
    }

    #[test]
    fn api_error_from_message_detects_connect_failure() {
        assert_eq!(
            ApiError::from_message("error trying to connect: dns error"),
            ApiError::Connect
        );
    }

    #[test]
    fn api_error_from_message_detects_decode_failure() {
        match ApiError::from_message("error decoding response body: missing field `maxSaving`") {
            ApiError::Decode(msg) => assert!(msg.contains("maxSaving")),
            other => panic!("expected Decode, got {:?}", other),
        }
    }

    #[test]
    fn api_error_falls_back_to_other() {
        match ApiError::from_message("something odd") {
            ApiError::Other(msg) => assert_eq!(msg, "something odd"),
            other => panic!("expected Other, got {:?}", other),
        }
    }

    #[test]
    fn api_error_exposes_i18n_keys() {
        assert_eq!(ApiError::Timeout.i18n_key(), "error-api-timeout");
        assert_eq!(ApiError::Status(502).i18n_key(), "error-api-status");
    }
}
