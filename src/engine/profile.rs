//! Profile configuration
//!
//! Applies the single partial update produced by the onboarding flow:
//! goal, biometrics, and plan, stamped with `updated_at`.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::engine::ProgressionEngine;
use crate::error::{ProgressionError, StoreError};
use crate::events::ProgressionEvent;
use crate::model::{Goal, PlanTier};
use crate::store::UserPatch;

/// Validated output of a finished onboarding flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileSetup {
    pub goal: Goal,
    pub age: u32,
    /// Centimeters.
    pub height: u32,
    /// Kilograms.
    pub weight: f64,
    pub plan: PlanTier,
}

impl ProgressionEngine {
    /// Apply an onboarding result to the user's profile.
    pub async fn configure_profile(
        &self,
        user_id: &str,
        setup: ProfileSetup,
    ) -> Result<(), ProgressionError> {
        if setup.age == 0 || setup.height == 0 {
            return Err(ProgressionError::InvalidInput {
                detail: "age and height must be positive".to_string(),
            });
        }
        if !setup.weight.is_finite() || setup.weight <= 0.0 {
            return Err(ProgressionError::InvalidInput {
                detail: "weight must be a positive number".to_string(),
            });
        }

        let _guard = self.lock_user(user_id).await;

        let result = self
            .store()
            .update_user(
                user_id,
                UserPatch {
                    goal: Some(setup.goal),
                    age: Some(setup.age),
                    height: Some(setup.height),
                    weight: Some(setup.weight),
                    plan: Some(setup.plan),
                    updated_at: Some(Utc::now()),
                    ..Default::default()
                },
            )
            .await;

        match result {
            Ok(()) => {
                info!(user_id, ?setup.goal, ?setup.plan, "profile configured");
                self.publish(ProgressionEvent::ProfileConfigured {
                    user_id: user_id.to_string(),
                });
                Ok(())
            }
            Err(StoreError::NotFound) => Err(ProgressionError::UserNotFound {
                user_id: user_id.to_string(),
            }),
            Err(err) => Err(err.into()),
        }
    }
}
