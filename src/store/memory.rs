//! In-process reference store
//!
//! Backs tests and local development with the same seam the hosted
//! document database fills in production. Insertion order doubles as
//! store-native order.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::StoreError;
use crate::model::{Achievement, AchievementData, Challenge, UserProfile};
use crate::store::{ChallengePatch, ProfileStore, UserPatch};

/// HashMap-backed [`ProfileStore`].
#[derive(Default)]
pub struct MemoryStore {
    users: RwLock<HashMap<String, UserProfile>>,
    achievements: RwLock<Vec<Achievement>>,
    challenges: RwLock<HashMap<String, Challenge>>,
    challenge_order: RwLock<Vec<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a user profile, as account registration would.
    pub async fn insert_user(&self, profile: UserProfile) {
        self.users.write().await.insert(profile.id.clone(), profile);
    }

    /// Seed a challenge, as external challenge issuance would.
    pub async fn insert_challenge(&self, challenge: Challenge) {
        self.challenge_order.write().await.push(challenge.id.clone());
        self.challenges
            .write()
            .await
            .insert(challenge.id.clone(), challenge);
    }
}

#[async_trait]
impl ProfileStore for MemoryStore {
    async fn get_user(&self, id: &str) -> Result<UserProfile, StoreError> {
        self.users
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn update_user(&self, id: &str, patch: UserPatch) -> Result<(), StoreError> {
        let mut users = self.users.write().await;
        let user = users.get_mut(id).ok_or(StoreError::NotFound)?;
        if let Some(goal) = patch.goal {
            user.goal = goal;
        }
        if let Some(age) = patch.age {
            user.age = Some(age);
        }
        if let Some(height) = patch.height {
            user.height = Some(height);
        }
        if let Some(weight) = patch.weight {
            user.weight = Some(weight);
        }
        if let Some(plan) = patch.plan {
            user.plan = plan;
        }
        if let Some(xp) = patch.xp {
            user.xp = xp;
        }
        if let Some(level) = patch.level {
            user.level = level;
        }
        if let Some(updated_at) = patch.updated_at {
            user.updated_at = updated_at;
        }
        Ok(())
    }

    async fn achievements_for(&self, user_id: &str) -> Result<Vec<Achievement>, StoreError> {
        Ok(self
            .achievements
            .read()
            .await
            .iter()
            .filter(|a| a.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn create_achievement(
        &self,
        user_id: &str,
        data: AchievementData,
        unlocked_at: DateTime<Utc>,
    ) -> Result<String, StoreError> {
        let id = Uuid::new_v4().to_string();
        self.achievements.write().await.push(Achievement {
            id: id.clone(),
            user_id: user_id.to_string(),
            title: data.title,
            description: data.description,
            icon: data.icon,
            category: data.category,
            xp_reward: data.xp_reward,
            unlocked_at,
        });
        Ok(id)
    }

    async fn challenges_for(&self, user_id: &str) -> Result<Vec<Challenge>, StoreError> {
        let challenges = self.challenges.read().await;
        let order = self.challenge_order.read().await;
        Ok(order
            .iter()
            .filter_map(|id| challenges.get(id))
            .filter(|c| c.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn get_challenge(&self, id: &str) -> Result<Challenge, StoreError> {
        self.challenges
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn update_challenge(&self, id: &str, patch: ChallengePatch) -> Result<(), StoreError> {
        let mut challenges = self.challenges.write().await;
        let challenge = challenges.get_mut(id).ok_or(StoreError::NotFound)?;
        if let Some(completed) = patch.completed {
            challenge.completed = completed;
        }
        if let Some(completed_at) = patch.completed_at {
            challenge.completed_at = completed_at;
        }
        Ok(())
    }
}
