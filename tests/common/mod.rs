//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use auge_core::error::StoreError;
use auge_core::model::{
    Achievement, AchievementCategory, AchievementData, Challenge, ChallengeKind, Goal, PlanTier,
    UserProfile,
};
use auge_core::progression::level_for_xp;
use auge_core::store::{ChallengePatch, MemoryStore, ProfileStore, UserPatch};

pub fn profile(id: &str, xp: u64) -> UserProfile {
    let now = Utc::now();
    UserProfile {
        id: id.to_string(),
        email: format!("{id}@example.com"),
        name: id.to_string(),
        avatar: None,
        age: None,
        height: None,
        weight: None,
        goal: Goal::Performance,
        plan: PlanTier::Base,
        xp,
        level: level_for_xp(xp),
        created_at: now,
        updated_at: now,
    }
}

pub fn challenge(id: &str, owner: &str, reward: u64, expires_in_hours: i64) -> Challenge {
    Challenge {
        id: id.to_string(),
        user_id: owner.to_string(),
        title: format!("challenge {id}"),
        description: "integration fixture".to_string(),
        kind: ChallengeKind::Daily,
        xp_reward: reward,
        completed: false,
        completed_at: None,
        expires_at: Utc::now() + Duration::hours(expires_in_hours),
    }
}

pub fn achievement_data(title: &str, reward: u64) -> AchievementData {
    AchievementData {
        title: title.to_string(),
        description: "integration fixture".to_string(),
        icon: "🏆".to_string(),
        category: AchievementCategory::Milestone,
        xp_reward: reward,
    }
}

fn write_failed() -> StoreError {
    StoreError::Write {
        detail: "injected fault".to_string(),
    }
}

/// Store double that delegates to a [`MemoryStore`] but can be told to
/// fail specific write paths, for exercising the credit saga.
pub struct FlakyStore {
    pub inner: Arc<MemoryStore>,
    pub fail_achievement_creates: AtomicBool,
    /// Remaining user updates allowed before they start failing.
    pub user_update_budget: AtomicI64,
    /// Remaining challenge updates allowed before they start failing.
    pub challenge_update_budget: AtomicI64,
}

impl FlakyStore {
    pub fn new(inner: Arc<MemoryStore>) -> Self {
        Self {
            inner,
            fail_achievement_creates: AtomicBool::new(false),
            user_update_budget: AtomicI64::new(i64::MAX),
            challenge_update_budget: AtomicI64::new(i64::MAX),
        }
    }
}

#[async_trait]
impl ProfileStore for FlakyStore {
    async fn get_user(&self, id: &str) -> Result<UserProfile, StoreError> {
        self.inner.get_user(id).await
    }

    async fn update_user(&self, id: &str, patch: UserPatch) -> Result<(), StoreError> {
        if self.user_update_budget.fetch_sub(1, Ordering::SeqCst) <= 0 {
            return Err(write_failed());
        }
        self.inner.update_user(id, patch).await
    }

    async fn achievements_for(&self, user_id: &str) -> Result<Vec<Achievement>, StoreError> {
        self.inner.achievements_for(user_id).await
    }

    async fn create_achievement(
        &self,
        user_id: &str,
        data: AchievementData,
        unlocked_at: DateTime<Utc>,
    ) -> Result<String, StoreError> {
        if self.fail_achievement_creates.load(Ordering::SeqCst) {
            return Err(write_failed());
        }
        self.inner.create_achievement(user_id, data, unlocked_at).await
    }

    async fn challenges_for(&self, user_id: &str) -> Result<Vec<Challenge>, StoreError> {
        self.inner.challenges_for(user_id).await
    }

    async fn get_challenge(&self, id: &str) -> Result<Challenge, StoreError> {
        self.inner.get_challenge(id).await
    }

    async fn update_challenge(&self, id: &str, patch: ChallengePatch) -> Result<(), StoreError> {
        if self.challenge_update_budget.fetch_sub(1, Ordering::SeqCst) <= 0 {
            return Err(write_failed());
        }
        self.inner.update_challenge(id, patch).await
    }
}
