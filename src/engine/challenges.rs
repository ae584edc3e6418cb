//! Challenge Tracker
//!
//! Listing and the one-way completion transition. Completion is the
//! system's only multi-document mutation: the challenge flag and the
//! profile XP credit must end up mutually consistent, so the two writes
//! run as a saga with a compensating rollback on partial failure.

use chrono::Utc;
use tracing::{debug, error, info, warn};

use crate::engine::ProgressionEngine;
use crate::error::{EligibilityIssue, ProgressionError, StoreError};
use crate::events::ProgressionEvent;
use crate::model::Challenge;
use crate::progression::level_for_xp;
use crate::store::{ChallengePatch, UserPatch};

/// Result of a successful completion.
#[derive(Debug, Clone)]
pub struct CompletionOutcome {
    pub challenge_id: String,
    pub xp_awarded: u64,
    pub new_xp: u64,
    pub new_level: u32,
    pub leveled_up: bool,
}

impl ProgressionEngine {
    /// Snapshot of all challenges owned by `user_id`, store-native order.
    pub async fn list_challenges(&self, user_id: &str) -> Result<Vec<Challenge>, ProgressionError> {
        Ok(self.store().challenges_for(user_id).await?)
    }

    /// Complete a challenge and credit its XP to the owner's profile.
    ///
    /// Fails with [`ProgressionError::ChallengeNotEligible`] when the
    /// challenge is missing, owned by someone else, already completed,
    /// or past its expiration. A caller whose previous attempt ended in
    /// an unknown state can simply call again: the eligibility check
    /// re-reads the completed flag, so a credit is never applied twice.
    pub async fn complete_challenge(
        &self,
        user_id: &str,
        challenge_id: &str,
    ) -> Result<CompletionOutcome, ProgressionError> {
        let _guard = self.lock_user(user_id).await;
        let now = Utc::now();

        let challenge = match self.store().get_challenge(challenge_id).await {
            Ok(challenge) => challenge,
            Err(StoreError::NotFound) => {
                return Err(not_eligible(challenge_id, EligibilityIssue::NotFound))
            }
            Err(err) => return Err(err.into()),
        };

        if challenge.user_id != user_id {
            return Err(not_eligible(challenge_id, EligibilityIssue::WrongOwner));
        }
        if challenge.completed {
            return Err(not_eligible(challenge_id, EligibilityIssue::AlreadyCompleted));
        }
        if challenge.expired_at(now) {
            return Err(not_eligible(challenge_id, EligibilityIssue::Expired));
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

        debug!(user_id, challenge_id, reward = challenge.xp_reward, "completing challenge");

        // First half: mark the challenge completed.
        self.store()
            .update_challenge(
                challenge_id,
                ChallengePatch {
                    completed: Some(true),
                    completed_at: Some(Some(now)),
                },
            )
            .await?;

        // Second half: credit XP and recompute the level.
        let new_xp = user.xp + challenge.xp_reward;
        let new_level = level_for_xp(new_xp);
        let credit = self
            .store()
            .update_user(
                user_id,
                UserPatch {
                    xp: Some(new_xp),
                    level: Some(new_level),
                    updated_at: Some(now),
                    ..Default::default()
                },
            )
            .await;

        if let Err(credit_err) = credit {
            warn!(user_id, challenge_id, %credit_err, "XP credit failed, rolling back challenge");
            let rollback = self
                .store()
                .update_challenge(
                    challenge_id,
                    ChallengePatch {
                        completed: Some(false),
                        completed_at: Some(None),
                    },
                )
                .await;
            return Err(match rollback {
                Ok(()) => credit_err.into(),
                Err(rollback_err) => {
                    let detail = format!(
                        "challenge {challenge_id} marked complete but XP credit failed \
                         ({credit_err}) and rollback failed ({rollback_err})"
                    );
                    error!(user_id, challenge_id, %detail, "integrity fault");
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

        let leveled_up = new_level > user.level;
        info!(
            user_id,
            challenge_id,
            xp_awarded = challenge.xp_reward,
            new_level,
            leveled_up,
            "challenge completed"
        );
        self.publish(ProgressionEvent::ChallengeCompleted {
            user_id: user_id.to_string(),
            challenge_id: challenge_id.to_string(),
            title: challenge.title,
            xp_awarded: challenge.xp_reward,
            new_level,
            leveled_up,
        });

        Ok(CompletionOutcome {
            challenge_id: challenge_id.to_string(),
            xp_awarded: challenge.xp_reward,
            new_xp,
            new_level,
            leveled_up,
        })
    }
}

fn not_eligible(challenge_id: &str, reason: EligibilityIssue) -> ProgressionError {
    ProgressionError::ChallengeNotEligible {
        challenge_id: challenge_id.to_string(),
        reason,
    }
}
