use std::sync::RwLock;

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::Config;
use crate::models::UserProfile;

const KEYRING_SERVICE: &str = "atelier";
const KEYRING_USER: &str = "session_token";

#[derive(Error, Debug)]
pub enum SessionError {
    /// No signed-in session exists, or no credential could be issued for it.
    #[error("You must be signed in to view your dashboard")]
    AuthUnavailable,
    #[error("The session token was rejected; check it and try again")]
    InvalidToken,
    #[error("Keychain error: {0}")]
    Keyring(#[from] keyring::Error),
}

/// Short-lived bearer token proving the signed-in user's identity to the
/// backend API. Re-acquired for every fetch; never persisted.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// The token must not leak into logs.
impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Credential(..)")
    }
}

/// Access to the external identity provider (allows substituting a fake in
/// tests).
#[async_trait::async_trait]
pub trait SessionAccess: Send + Sync {
    /// Issue a short-lived credential for the current session.
    async fn acquire_credential(&self) -> Result<Credential, SessionError>;

    /// Cached profile snapshot. Synchronous and non-blocking; `None` until
    /// the first successful refresh.
    fn current_profile(&self) -> Option<UserProfile>;
}

#[derive(Debug, Deserialize)]
struct IssuedCredential {
    token: String,
}

/// Production session accessor.
///
/// The long-lived session token lives in the OS keychain and is exchanged
/// at the identity provider for a short-lived credential on every fetch.
/// The profile snapshot is cached in memory and refreshed explicitly.
pub struct IdentitySession {
    http: reqwest::Client,
    identity_base_url: String,
    entry: keyring::Entry,
    profile: RwLock<Option<UserProfile>>,
}

impl IdentitySession {
    pub fn new(config: &Config) -> Result<Self, SessionError> {
        let entry = keyring::Entry::new(KEYRING_SERVICE, KEYRING_USER)?;
        Ok(Self {
            http: reqwest::Client::new(),
            identity_base_url: config.identity_base_url.clone(),
            entry,
            profile: RwLock::new(None),
        })
    }

    fn stored_session_token(&self) -> Result<String, SessionError> {
        match self.entry.get_password() {
            Ok(token) => Ok(token),
            Err(keyring::Error::NoEntry) => {
                debug!("no session token in the keychain");
                Err(SessionError::AuthUnavailable)
            }
            Err(e) => {
                warn!("keychain read failed: {}", e);
                Err(SessionError::AuthUnavailable)
            }
        }
    }

    /// Exchange a session token for a short-lived credential.
    async fn exchange(&self, session_token: &str) -> Result<Credential, SessionError> {
        let url = format!("{}/session/token", self.identity_base_url);
        let response = match self.http.post(&url).bearer_auth(session_token).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("credential exchange failed: {}", e);
                return Err(SessionError::AuthUnavailable);
            }
        };

        if !response.status().is_success() {
            warn!("credential exchange rejected: {}", response.status());
            return Err(SessionError::AuthUnavailable);
        }

        match response.json::<IssuedCredential>().await {
            Ok(issued) => Ok(Credential::new(issued.token)),
            Err(e) => {
                warn!("malformed credential response: {}", e);
                Err(SessionError::AuthUnavailable)
            }
        }
    }

    /// Fetch the profile snapshot from the identity provider and cache it
    /// for synchronous reads.
    pub async fn refresh_profile(&self) -> Result<(), SessionError> {
        let session_token = self.stored_session_token()?;
        let url = format!("{}/session/me", self.identity_base_url);
        let response = match self.http.get(&url).bearer_auth(&session_token).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("profile request failed: {}", e);
                return Err(SessionError::AuthUnavailable);
            }
        };

        if !response.status().is_success() {
            warn!("profile request rejected: {}", response.status());
            return Err(SessionError::AuthUnavailable);
        }

        match response.json::<UserProfile>().await {
            Ok(profile) => {
                if let Ok(mut slot) = self.profile.write() {
                    *slot = Some(profile);
                }
                Ok(())
            }
            Err(e) => {
                warn!("malformed profile response: {}", e);
                Err(SessionError::AuthUnavailable)
            }
        }
    }

    /// Validate a session token by performing one credential exchange, then
    /// persist it to the keychain.
    pub async fn set_and_validate_session_token(
        &self,
        session_token: &str,
    ) -> Result<(), SessionError> {
        if self.exchange(session_token).await.is_err() {
            return Err(SessionError::InvalidToken);
        }
        self.store_session_token(session_token)
    }

    /// Persist a session token without validating it.
    pub fn store_session_token(&self, session_token: &str) -> Result<(), SessionError> {
        self.entry.set_password(session_token)?;
        Ok(())
    }

    /// Remove the stored session token and drop the cached profile.
    pub fn clear_session_token(&self) -> Result<(), SessionError> {
        if let Ok(mut slot) = self.profile.write() {
            *slot = None;
        }
        match self.entry.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Check whether a session token is stored (without validating it).
    pub fn has_session_token(&self) -> bool {
        self.entry.get_password().is_ok()
    }
}

#[async_trait::async_trait]
impl SessionAccess for IdentitySession {
    async fn acquire_credential(&self) -> Result<Credential, SessionError> {
        let session_token = self.stored_session_token()?;
        self.exchange(&session_token).await
    }

    fn current_profile(&self) -> Option<UserProfile> {
        self.profile.read().map(|profile| profile.clone()).unwrap_or(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Nothing listens on the discard port, so every exchange attempt fails
    // at the transport and no test depends on a live identity service.
    fn test_config() -> Config {
        Config {
            api_base_url: "http://127.0.0.1:9".to_string(),
            identity_base_url: "http://127.0.0.1:9".to_string(),
        }
    }

    #[test]
    fn credential_debug_hides_the_token() {
        let credential = Credential::new("sk-secret");
        assert_eq!(format!("{:?}", credential), "Credential(..)");
        assert_eq!(credential.as_str(), "sk-secret");
    }

    #[tokio::test]
    async fn acquire_without_stored_token_is_auth_unavailable() {
        let session = IdentitySession::new(&test_config()).expect("session init");
        session.clear_session_token().expect("clear token");

        let result = session.acquire_credential().await;
        assert!(matches!(result, Err(SessionError::AuthUnavailable)));
        assert!(session.current_profile().is_none());
    }

    #[tokio::test]
    async fn stored_token_round_trip() {
        let session = IdentitySession::new(&test_config()).expect("session init");

        session.store_session_token("tok").expect("store token");
        assert!(session.has_session_token());

        // The identity service is unreachable, so acquiring still fails,
        // but now past the keychain lookup.
        let result = session.acquire_credential().await;
        assert!(matches!(result, Err(SessionError::AuthUnavailable)));

        session.clear_session_token().expect("clear token");
        assert!(!session.has_session_token());
    }
}
