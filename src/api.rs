// SPDX-License-Identifier: MPL-2.0
//! Savings calculator backend client.
//!
//! The calculator panel drives two POST calls: `init` whenever the bill
//! slider lands on a new mark, and `update` when the user steps through
//! system sizes. Both return the same quote payload. The client is cheap
//! to clone, so update tasks can capture it by value.

use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const INIT_ENDPOINT: &str = "/default/dynamic/user/calculator/init";
const UPDATE_ENDPOINT: &str = "/default/dynamic/user/calculator/update";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// The quote payload both calculator endpoints return.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct SavingsQuote {
    #[serde(rename = "maxSaving")]
    pub max_saving: f64,
    #[serde(rename = "minBill")]
    pub min_bill: f64,
    #[serde(rename = "maxIndex")]
    pub max_index: usize,
}

/// The backend wraps quotes in a `data` envelope.
#[derive(Debug, Deserialize)]
struct Envelope {
    data: SavingsQuote,
}

#[derive(Debug, Serialize)]
struct InitRequest {
    bill: u32,
}

#[derive(Debug, Serialize)]
struct UpdateRequest {
    bill: u32,
    index: usize,
}

/// HTTP client for the savings endpoints.
#[derive(Debug, Clone)]
pub struct SavingsClient {
    client: reqwest::Client,
    base_url: String,
}

impl SavingsClient {
    /// Creates a client for the given backend base URL.
    #[must_use]
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// The configured backend base URL, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches the initial quote for a bill value.
    pub async fn init(&self, bill: u32) -> Result<SavingsQuote, ApiError> {
        self.post_quote(INIT_ENDPOINT, &InitRequest { bill }).await
    }

    /// Fetches a re-quote for a bill value and a selected system-size index.
    pub async fn update(&self, bill: u32, index: usize) -> Result<SavingsQuote, ApiError> {
        self.post_quote(UPDATE_ENDPOINT, &UpdateRequest { bill, index })
            .await
    }

    async fn post_quote<B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<SavingsQuote, ApiError> {
        let url = format!("{}{}", self.base_url, endpoint);

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| categorize(&e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        let envelope: Envelope = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        Ok(envelope.data)
    }
}

/// Maps a transport error to an [`ApiError`] without holding onto the
/// non-`Clone` reqwest value.
fn categorize(err: &reqwest::Error) -> ApiError {
    if err.is_timeout() {
        ApiError::Timeout
    } else if err.is_connect() {
        ApiError::Connect
    } else {
        ApiError::from_message(&err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_deserializes_from_the_wire_envelope() {
        let body = r#"{"data":{"maxSaving":184.5,"minBill":215.5,"maxIndex":3}}"#;
        let envelope: Envelope = serde_json::from_str(body).expect("envelope must parse");

        assert_eq!(envelope.data.max_saving, 184.5);
        assert_eq!(envelope.data.min_bill, 215.5);
        assert_eq!(envelope.data.max_index, 3);
    }

    #[test]
    fn quote_with_missing_field_fails_to_parse() {
        let body = r#"{"data":{"maxSaving":184.5,"minBill":215.5}}"#;
        assert!(serde_json::from_str::<Envelope>(body).is_err());
    }

    #[test]
    fn init_request_serializes_the_bill() {
        let json = serde_json::to_string(&InitRequest { bill: 350 }).unwrap();
        assert_eq!(json, r#"{"bill":350}"#);
    }

    #[test]
    fn update_request_serializes_bill_and_index() {
        let json = serde_json::to_string(&UpdateRequest {
            bill: 275,
            index: 4,
        })
        .unwrap();
        assert_eq!(json, r#"{"bill":275,"index":4}"#);
    }

    #[test]
    fn new_strips_trailing_slash_from_base_url() {
        let client = SavingsClient::new("http://localhost:3000/".to_string());
        assert_eq!(client.base_url(), "http://localhost:3000");
    }
}
