//! Achievement documents
//!
//! An achievement record's existence IS its unlocked state: nothing
//! "locked" is ever persisted, and records are immutable once created.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category an achievement is surfaced under.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AchievementCategory {
    Fitness,
    Nutrition,
    Consistency,
    Social,
    Milestone,
    Special,
}

/// An unlocked achievement. Id is store-assigned on creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: String,
    /// Display icon reference (emoji or asset key, a UI concern).
    pub icon: String,
    pub category: AchievementCategory,
    pub xp_reward: u64,
    pub unlocked_at: DateTime<Utc>,
}

/// Caller-supplied fields for an unlock; id and timestamp are stamped
/// by the ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AchievementData {
    pub title: String,
    pub description: String,
    pub icon: String,
    pub category: AchievementCategory,
    pub xp_reward: u64,
}
