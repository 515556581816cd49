use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::CreationRecord;
use crate::session::Credential;

/// Shown when a request dies before producing a usable envelope.
pub const GENERIC_FETCH_MESSAGE: &str = "Something went wrong";
/// Shown when the API reports failure without saying why.
pub const UNEXPLAINED_FAILURE_MESSAGE: &str = "Unable to fetch data";

/// The display text of both variants is the user-facing message; transport
/// causes are logged, never surfaced raw.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The API answered with an explicit failure and a reason.
    #[error("{0}")]
    ServerReported(String),
    /// The request never produced a parseable response envelope.
    #[error("{0}")]
    TransportFailure(String),
}

/// Response envelope for the user-creations endpoint. Success is signaled
/// by the flag in the body, not by the transport status.
#[derive(Debug, Deserialize)]
struct CreationsEnvelope {
    success: bool,
    #[serde(default)]
    creations: Vec<CreationRecord>,
    message: Option<String>,
}

/// Read access to the user's creation history (allows mocking for tests).
#[async_trait::async_trait]
pub trait FetchCreations: Send + Sync {
    /// Single-shot read of the signed-in user's creations, most recent
    /// first as ordered by the server. No retry, no timeout.
    async fn fetch_creations(
        &self,
        credential: &Credential,
    ) -> Result<Vec<CreationRecord>, FetchError>;
}

/// Production client for the creations API.
#[derive(Clone)]
pub struct CreationsClient {
    client: Client,
    base_url: String,
}

impl CreationsClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait::async_trait]
impl FetchCreations for CreationsClient {
    async fn fetch_creations(
        &self,
        credential: &Credential,
    ) -> Result<Vec<CreationRecord>, FetchError> {
        let url = format!("{}/api/user/get-user-creations", self.base_url);

        let response = match self.client.get(&url).bearer_auth(credential.as_str()).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("creations request failed: {}", e);
                return Err(FetchError::TransportFailure(GENERIC_FETCH_MESSAGE.to_string()));
            }
        };

        let status = response.status();
        let body = match response.bytes().await {
            Ok(body) => body,
            Err(e) => {
                warn!("failed to read creations response: {}", e);
                return Err(FetchError::TransportFailure(GENERIC_FETCH_MESSAGE.to_string()));
            }
        };

        parse_envelope(status, &body)
    }
}

/// Classify a response body. An envelope with `success: false` is a
/// server-reported failure even on a non-2xx status; a body that is not an
/// envelope at all is a transport failure.
fn parse_envelope(status: StatusCode, body: &[u8]) -> Result<Vec<CreationRecord>, FetchError> {
    match serde_json::from_slice::<CreationsEnvelope>(body) {
        Ok(envelope) if envelope.success => {
            debug!("fetched {} creation(s)", envelope.creations.len());
            Ok(envelope.creations)
        }
        Ok(envelope) => Err(FetchError::ServerReported(
            envelope
                .message
                .unwrap_or_else(|| UNEXPLAINED_FAILURE_MESSAGE.to_string()),
        )),
        Err(e) => {
            warn!("unparseable creations response (status {}): {}", status, e);
            Err(FetchError::TransportFailure(GENERIC_FETCH_MESSAGE.to_string()))
        }
    }
}
