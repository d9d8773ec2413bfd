// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Feed(String),
    Config(String),
    Image(String),
    Http(String),
    Api(ApiError),
}

/// Specific error types for the photo deletion API.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The server answered but refused the deletion; carries the
    /// server-provided reason when one was sent.
    Rejected(String),

    /// The server answered with a non-success HTTP status.
    Status(u16),

    /// The response body did not match the expected envelope.
    InvalidResponse(String),

    /// Network-level failure (DNS, connect, timeout).
    Transport(String),
}

impl ApiError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ApiError::Rejected(_) => "notification-delete-error-server",
            ApiError::Status(_) | ApiError::InvalidResponse(_) | ApiError::Transport(_) => {
                "notification-delete-error"
            }
        }
    }

    /// The server-provided reason, if the failure carries one worth showing.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Rejected(message) if !message.is_empty() => Some(message),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return ApiError::InvalidResponse(err.to_string());
        }
        if let Some(status) = err.status() {
            return ApiError::Status(status.as_u16());
        }
        ApiError::Transport(err.to_string())
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Rejected(message) => write!(f, "Deletion rejected: {}", message),
            ApiError::Status(code) => write!(f, "Unexpected HTTP status: {}", code),
            ApiError::InvalidResponse(msg) => write!(f, "Invalid response: {}", msg),
            ApiError::Transport(msg) => write!(f, "Network error: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Feed(e) => write!(f, "Feed Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Image(e) => write!(f, "Image Error: {}", e),
            Error::Http(e) => write!(f, "HTTP Error: {}", e),
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

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Feed(err.to_string())
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

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
