//! Achievement Ledger
//!
//! Append-only: an unlock creates an immutable record, and the record's
//! existence is the unlocked state. Unlocks credit XP under the same
//! atomic-or-compensated contract as challenge completion; because a
//! created achievement cannot be deleted, the profile credit is written
//! first and the record second, which keeps a failed create fully
//! compensatable.

use chrono::Utc;
use tracing::{error, info, warn};

use crate::engine::ProgressionEngine;
use crate::error::{ProgressionError, StoreError};
use crate::events::ProgressionEvent;
use crate::model::{Achievement, AchievementData};
use crate::progression::level_for_xp;
use crate::store::UserPatch;

/// Result of a successful unlock.
#[derive(Debug, Clone)]
pub struct UnlockOutcome {
    pub achievement_id: String,
    pub xp_awarded: u64,
    pub new_xp: u64,
    pub new_level: u32,
}

impl ProgressionEngine {
    /// Snapshot of all achievements owned by `user_id`, store-native
    /// order. Callers wanting recency order sort by `unlocked_at`.
    pub async fn list_achievements(
        &self,
        user_id: &str,
    ) -> Result<Vec<Achievement>, ProgressionError> {
        Ok(self.store().achievements_for(user_id).await?)
    }

    /// Record an unlock detected by external logic.
    ///
    /// At most one achievement per user+title: a repeat unlock fails
    /// with [`ProgressionError::AlreadyUnlocked`] before any write.
    pub async fn unlock_achievement(
        &self,
        user_id: &str,
        data: AchievementData,
    ) -> Result<UnlockOutcome, ProgressionError> {
        if data.title.trim().is_empty() {
            return Err(ProgressionError::InvalidInput {
                detail: "achievement title must not be empty".to_string(),
            });
        }
        if data.description.trim().is_empty() || data.icon.trim().is_empty() {
            return Err(ProgressionError::InvalidInput {
                detail: "achievement description and icon are required".to_string(),
            });
        }

        let _guard = self.lock_user(user_id).await;
        let now = Utc::now();

        let existing = self.store().achievements_for(user_id).await?;
        if existing.iter().any(|a| a.title == data.title) {
            return Err(ProgressionError::AlreadyUnlocked { title: data.title });
        }

        let user = match self.store().get_user(user_id).await {
            Ok(user) => user,
            Err(StoreError::NotFound) => {
                return Err(ProgressionError::UserNotFound {
                    user_id: user_id.to_string(),
                })
            }
            Err(err) => return Err(err.into()),
        };

        // First half: credit the reward.
        let new_xp = user.xp + data.xp_reward;
        let new_level = level_for_xp(new_xp);
        self.store()
            .update_user(
                user_id,
                UserPatch {
                    xp: Some(new_xp),
                    level: Some(new_level),
                    updated_at: Some(now),
                    ..Default::default()
                },
            )
            .await?;

        // Second half: create the immutable record.
        let title = data.title.clone();
        let xp_awarded = data.xp_reward;
        let created = self.store().create_achievement(user_id, data, now).await;

        let achievement_id = match created {
            Ok(id) => id,
            Err(create_err) => {
                warn!(user_id, %title, %create_err, "achievement create failed, restoring profile");
                let restore = self
                    .store()
                    .update_user(
                        user_id,
                        UserPatch {
                            xp: Some(user.xp),
                            level: Some(user.level),
                            updated_at: Some(user.updated_at),
                            ..Default::default()
                        },
                    )
                    .await;
                return Err(match restore {
                    Ok(()) => create_err.into(),
                    Err(restore_err) => {
                        let detail = format!(
                            "XP credited for achievement \"{title}\" but record creation \
                             failed ({create_err}) and restore failed ({restore_err})"
                        );
                        error!(user_id, %title, %detail, "integrity fault");
                        self.publish(ProgressionEvent::IntegrityFault {
                            user_id: user_id.to_string(),
                            detail: detail.clone(),
                        });
                        ProgressionError::PartialCompletion {
                            user_id: user_id.to_string(),
                            detail,
                        }
                    }
                });
            }
        };

        info!(user_id, %achievement_id, %title, xp_awarded, "achievement unlocked");
        self.publish(ProgressionEvent::AchievementUnlocked {
            user_id: user_id.to_string(),
            achievement_id: achievement_id.clone(),
            title,
            xp_awarded,
        });

        Ok(UnlockOutcome {
            achievement_id,
            xp_awarded,
            new_xp,
            new_level,
        })
    }
}
