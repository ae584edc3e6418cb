//! Challenge documents

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Recurrence class of a challenge.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChallengeKind {
    Daily,
    Weekly,
    Monthly,
}

/// A time-boxed, one-shot completable task. Issued externally; this
/// crate only flips `completed` (false -> true, never back) and stamps
/// `completed_at` alongside it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Challenge {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: ChallengeKind,
    pub xp_reward: u64,
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    pub expires_at: DateTime<Utc>,
}

impl Challenge {
    /// Whether the challenge can no longer be completed due to time.
    pub fn expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}
