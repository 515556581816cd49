// Test support utilities for both unit and integration tests

use std::sync::Mutex;

use tokio::sync::oneshot;

use crate::creations::{FetchCreations, FetchError};
use crate::dashboard::Notify;
use crate::models::{CreationRecord, PublicMetadata, UserProfile};
use crate::session::{Credential, SessionAccess, SessionError};

/// Build a creation record with a recognizable prompt.
pub fn creation(id: i64) -> CreationRecord {
    CreationRecord {
        id,
        prompt: format!("prompt {id}"),
        content: String::new(),
        kind: "article".to_string(),
        created_at: None,
    }
}

/// Fake identity session: either signed in with a fixed credential or
/// signed out.
pub struct FakeSession {
    credential: Option<Credential>,
    profile: Option<UserProfile>,
}

impl FakeSession {
    pub fn signed_in() -> Self {
        Self {
            credential: Some(Credential::new("test-credential")),
            profile: None,
        }
    }

    pub fn signed_out() -> Self {
        Self {
            credential: None,
            profile: None,
        }
    }

    pub fn with_plan(plan: &str) -> Self {
        Self {
            profile: Some(UserProfile {
                public_metadata: PublicMetadata {
                    plan: Some(plan.to_string()),
                },
            }),
            ..Self::signed_in()
        }
    }
}

#[async_trait::async_trait]
impl SessionAccess for FakeSession {
    async fn acquire_credential(&self) -> Result<Credential, SessionError> {
        self.credential.clone().ok_or(SessionError::AuthUnavailable)
    }

    fn current_profile(&self) -> Option<UserProfile> {
        self.profile.clone()
    }
}

type FetchResult = Result<Vec<CreationRecord>, FetchError>;

/// Fake creations API with a single scripted response. `pending()` parks
/// the fetch until `release` is called, for in-flight tests.
pub struct FakeCreationsApi {
    response: Mutex<Option<FetchResult>>,
    gate_rx: Mutex<Option<oneshot::Receiver<FetchResult>>>,
    gate_tx: Mutex<Option<oneshot::Sender<FetchResult>>>,
}

impl FakeCreationsApi {
    pub fn returning(response: FetchResult) -> Self {
        Self {
            response: Mutex::new(Some(response)),
            gate_rx: Mutex::new(None),
            gate_tx: Mutex::new(None),
        }
    }

    /// A fetch that stays in flight until `release` is called.
    pub fn pending() -> Self {
        let (tx, rx) = oneshot::channel();
        Self {
            response: Mutex::new(None),
            gate_rx: Mutex::new(Some(rx)),
            gate_tx: Mutex::new(Some(tx)),
        }
    }

    /// Resolve a pending fetch with the given result.
    pub fn release(&self, response: FetchResult) {
        if let Some(tx) = self.gate_tx.lock().unwrap().take() {
            let _ = tx.send(response);
        }
    }
}

#[async_trait::async_trait]
impl FetchCreations for FakeCreationsApi {
    async fn fetch_creations(&self, _credential: &Credential) -> FetchResult {
        let gate = self.gate_rx.lock().unwrap().take();
        if let Some(rx) = gate {
            return rx.await.unwrap_or_else(|_| {
                Err(FetchError::TransportFailure("fetch gate dropped".to_string()))
            });
        }
        self.response
            .lock()
            .unwrap()
            .take()
            .expect("no scripted response left")
    }
}

/// Records every notification for assertions.
#[derive(Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl Notify for RecordingNotifier {
    fn error(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}
