//! Registration entries for the free-mint giveaway.
//!
//! One row per wallet. Rows are created by the claim form and read in bulk by
//! the operator dashboard; `status` and `tx_hash` are written by the external
//! fulfillment job and never by the front end.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// PostgreSQL `unique_violation`, reported when a wallet registers twice.
pub const UNIQUE_VIOLATION: &str = "23505";

/// Fulfillment status of a registration.
///
/// Unknown strings are kept verbatim in [`EntryStatus::Other`] so a new status
/// introduced by the fulfillment job survives a round trip through the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EntryStatus {
    #[default]
    Pending,
    Sent,
    Failed,
    Other(String),
}

impl EntryStatus {
    pub fn as_str(&self) -> &str {
        match self {
            EntryStatus::Pending => "pending",
            EntryStatus::Sent => "sent",
            EntryStatus::Failed => "failed",
            EntryStatus::Other(raw) => raw,
        }
    }
}

impl From<String> for EntryStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "pending" => EntryStatus::Pending,
            "sent" => EntryStatus::Sent,
            "failed" => EntryStatus::Failed,
            _ => EntryStatus::Other(raw),
        }
    }
}

impl From<EntryStatus> for String {
    fn from(status: EntryStatus) -> Self {
        match status {
            EntryStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A persisted registration row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationEntry {
    /// Opaque identifier assigned by the store, uuid or integer key
    #[serde(deserialize_with = "opaque_id")]
    pub id: String,
    pub wallet_address: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub twitter_handle: Option<String>,
    #[serde(default)]
    pub status: EntryStatus,
    pub created_at: DateTime<Utc>,
    /// Filled in by the fulfillment job once the NFT is sent
    #[serde(default)]
    pub tx_hash: Option<String>,
}

/// Accept a row id as either a JSON string or a JSON integer.
fn opaque_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Signed(i64),
        Unsigned(u64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(id) => id,
        RawId::Signed(id) => id.to_string(),
        RawId::Unsigned(id) => id.to_string(),
    })
}

/// Insert payload for a new registration.
///
/// Optional columns are serialized as explicit `null`s; the store fills in
/// `id`, `status` and `created_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRegistration {
    pub wallet_address: String,
    pub email: Option<String>,
    pub twitter_handle: Option<String>,
}

impl NewRegistration {
    /// Registration for a bare wallet address with no contact details.
    pub fn for_wallet(address: impl Into<String>) -> Self {
        Self {
            wallet_address: address.into(),
            email: None,
            twitter_handle: None,
        }
    }
}

/// Per-status counts shown on the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryStats {
    pub total: usize,
    pub pending: usize,
    pub sent: usize,
    pub failed: usize,
}

impl EntryStats {
    /// Count entries by status in a single pass.
    pub fn tally(entries: &[RegistrationEntry]) -> Self {
        entries.iter().fold(
            Self {
                total: entries.len(),
                ..Self::default()
            },
            |mut stats, entry| {
                match entry.status {
                    EntryStatus::Pending => stats.pending += 1,
                    EntryStatus::Sent => stats.sent += 1,
                    EntryStatus::Failed => stats.failed += 1,
                    EntryStatus::Other(_) => {}
                }
                stats
            },
        )
    }
}

/// Error payload returned by the record store on a rejected request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreErrorBody {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub hint: Option<String>,
}

impl StoreErrorBody {
    pub fn is_unique_violation(&self) -> bool {
        self.code.as_deref() == Some(UNIQUE_VIOLATION)
    }
}
