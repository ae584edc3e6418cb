//! Profile Store seam
//!
//! The external document database holding user, achievement, and
//! challenge records. The engine talks to it through [`ProfileStore`];
//! [`MemoryStore`] is the in-process reference implementation.

pub mod memory;

pub use memory::MemoryStore;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::model::{Achievement, AchievementData, Challenge, Goal, PlanTier, UserProfile};

/// Partial update of a user profile document. `None` fields are left
/// untouched by the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<Goal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<PlanTier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xp: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Partial update of a challenge document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    /// `Some(None)` clears the timestamp (used by compensating rollback).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<Option<DateTime<Utc>>>,
}

/// Async document-store operations the engine depends on.
///
/// Implementations are expected to apply each call atomically at the
/// single-document level; nothing here spans documents.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Fetch a user profile by id.
    async fn get_user(&self, id: &str) -> Result<UserProfile, StoreError>;

    /// Apply a partial update to a user profile.
    async fn update_user(&self, id: &str, patch: UserPatch) -> Result<(), StoreError>;

    /// All achievements owned by a user, store-native order.
    async fn achievements_for(&self, user_id: &str) -> Result<Vec<Achievement>, StoreError>;

    /// Create an immutable achievement record; returns the assigned id.
    async fn create_achievement(
        &self,
        user_id: &str,
        data: AchievementData,
        unlocked_at: DateTime<Utc>,
    ) -> Result<String, StoreError>;

    /// All challenges owned by a user, store-native order.
    async fn challenges_for(&self, user_id: &str) -> Result<Vec<Challenge>, StoreError>;

    /// Fetch a single challenge by id.
    async fn get_challenge(&self, id: &str) -> Result<Challenge, StoreError>;

    /// Apply a partial update to a challenge.
    async fn update_challenge(&self, id: &str, patch: ChallengePatch) -> Result<(), StoreError>;
}
