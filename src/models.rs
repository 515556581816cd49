use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One unit of user-generated content returned by the backend.
///
/// Only `id` is required on the wire; the remaining fields are rendered
/// opaquely by the item component, so absent values fall back to defaults
/// rather than failing the whole response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreationRecord {
    pub id: i64,
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub content: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Read-only snapshot of the signed-in user's profile, as exposed by the
/// identity provider.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "publicMetadata", default)]
    pub public_metadata: PublicMetadata,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct PublicMetadata {
    #[serde(default)]
    pub plan: Option<String>,
}

impl UserProfile {
    pub fn plan(&self) -> Plan {
        Plan::from_metadata(self.public_metadata.plan.as_deref())
    }
}

/// Subscription tier derived from the profile's plan identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plan {
    Premium,
    Free,
}

impl Plan {
    /// Only the exact identifier `"premium"` counts as premium; anything
    /// else, including a missing profile, is the free tier.
    pub fn from_metadata(plan: Option<&str>) -> Self {
        match plan {
            Some("premium") => Plan::Premium,
            _ => Plan::Free,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Plan::Premium => "Premium",
            Plan::Free => "Free",
        }
    }
}
