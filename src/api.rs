// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the photo API.
//!
//! Only one operation is consumed by this application: photo deletion.
//! The endpoint answers with an envelope of the shape
//! `{"data": {"status": bool, "message": string}}`; a falsy `status` is a
//! rejection and carries the server's reason in `message`.

use crate::config::ApiConfig;
use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Path of the deletion endpoint, relative to the configured base URL.
const DELETE_ENDPOINT: &str = "photos/delete";

/// Request body for a deletion.
#[derive(Debug, Serialize)]
struct DeleteRequest<'a> {
    id: &'a str,
}

/// Inner payload of the deletion response envelope.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DeleteOutcome {
    pub status: bool,
    #[serde(default)]
    pub message: String,
}

/// Deletion response envelope.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DeleteResponse {
    pub data: DeleteOutcome,
}

/// Client for the photo API.
///
/// Cheap to clone; clones share the underlying connection pool, so one
/// instance can be handed to every async task that needs it.
#[derive(Debug, Clone)]
pub struct PhotoApi {
    client: reqwest::Client,
    base_url: String,
}

impl PhotoApi {
    /// Creates a client for the given base URL.
    ///
    /// Follows up to 10 redirects, matching the posture of the rest of the
    /// application's outbound requests.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Creates a client from the `[api]` config section.
    pub fn from_config(config: &ApiConfig) -> Result<Self, ApiError> {
        Self::new(
            config.base_url.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    /// A handle to the underlying HTTP client, for callers that fetch other
    /// resources (photo bytes) through the same pool.
    #[must_use]
    pub fn client(&self) -> reqwest::Client {
        self.client.clone()
    }

    /// The URL the deletion request is posted to.
    #[must_use]
    pub fn delete_url(&self) -> String {
        format!("{}/{}", self.base_url, DELETE_ENDPOINT)
    }

    /// Requests deletion of the photo with the given id.
    ///
    /// Returns the server's acknowledgement message on success.
    ///
    /// # Errors
    ///
    /// `ApiError::Rejected` when the server refuses (falsy `status`),
    /// `ApiError::Status` on a non-success HTTP status, and
    /// `ApiError::Transport`/`ApiError::InvalidResponse` for network or
    /// envelope problems.
    pub async fn delete_photo(&self, id: &str) -> Result<String, ApiError> {
        let response = self
            .client
            .post(self.delete_url())
            .json(&DeleteRequest { id })
            .send()
            .await
            .map_err(ApiError::from)?
            .error_for_status()
            .map_err(ApiError::from)?;

        let envelope: DeleteResponse = response.json().await.map_err(ApiError::from)?;

        if envelope.data.status {
            Ok(envelope.data.message)
        } else {
            Err(ApiError::Rejected(envelope.data.message))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(base: &str) -> PhotoApi {
        PhotoApi::new(base, Duration::from_secs(5)).expect("client should build")
    }

    #[test]
    fn delete_url_joins_base_and_endpoint() {
        assert_eq!(
            api("https://api.photos.example").delete_url(),
            "https://api.photos.example/photos/delete"
        );
    }

    #[test]
    fn trailing_slash_on_base_url_is_tolerated() {
        assert_eq!(
            api("https://api.photos.example/").delete_url(),
            "https://api.photos.example/photos/delete"
        );
    }

    #[test]
    fn from_config_uses_configured_base_url() {
        let config = ApiConfig {
            base_url: "http://localhost:9000".to_string(),
            timeout_secs: 3,
        };
        let api = PhotoApi::from_config(&config).expect("client should build");
        assert_eq!(api.delete_url(), "http://localhost:9000/photos/delete");
    }

    #[test]
    fn request_body_serializes_the_id() {
        let raw = serde_json::to_string(&DeleteRequest { id: "p42" }).unwrap();
        assert_eq!(raw, r#"{"id":"p42"}"#);
    }

    #[test]
    fn success_envelope_parses() {
        let raw = r#"{"data": {"status": true, "message": "deleted"}}"#;
        let parsed: DeleteResponse = serde_json::from_str(raw).unwrap();
        assert!(parsed.data.status);
        assert_eq!(parsed.data.message, "deleted");
    }

    #[test]
    fn rejection_envelope_parses() {
        let raw = r#"{"data": {"status": false, "message": "not the owner"}}"#;
        let parsed: DeleteResponse = serde_json::from_str(raw).unwrap();
        assert!(!parsed.data.status);
        assert_eq!(parsed.data.message, "not the owner");
    }

    #[test]
    fn missing_message_defaults_to_empty() {
        let raw = r#"{"data": {"status": true}}"#;
        let parsed: DeleteResponse = serde_json::from_str(raw).unwrap();
        assert!(parsed.data.message.is_empty());
    }

    #[test]
    fn envelope_without_data_is_rejected() {
        let raw = r#"{"status": true, "message": "deleted"}"#;
        assert!(serde_json::from_str::<DeleteResponse>(raw).is_err());
    }
}
