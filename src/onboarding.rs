//! Onboarding flow
//!
//! Three-step profile setup: 1) goal, 2) biometrics, 3) plan. A step can
//! only advance once its fields are filled; finishing yields the
//! [`ProfileSetup`] applied through `ProgressionEngine::configure_profile`.

use serde::{Deserialize, Serialize};

use crate::engine::ProfileSetup;
use crate::error::ProgressionError;
use crate::model::{Goal, PlanTier};

pub const FIRST_STEP: u8 = 1;
pub const LAST_STEP: u8 = 3;

/// In-progress onboarding state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OnboardingForm {
    step: u8,
    pub goal: Option<Goal>,
    pub age: Option<u32>,
    pub height: Option<u32>,
    pub weight: Option<f64>,
    pub plan: PlanTier,
}

impl OnboardingForm {
    pub fn new() -> Self {
        Self {
            step: FIRST_STEP,
            goal: None,
            age: None,
            height: None,
            weight: None,
            // Pre-selected middle tier, matching the signup default.
            plan: PlanTier::Escalada,
        }
    }

    pub fn step(&self) -> u8 {
        self.step
    }

    /// Whether the current step's fields are filled in.
    pub fn can_proceed(&self) -> bool {
        match self.step {
            1 => self.goal.is_some(),
            2 => self.age.is_some() && self.height.is_some() && self.weight.is_some(),
            _ => true,
        }
    }

    /// Advance one step if allowed. Returns the step now shown.
    pub fn next(&mut self) -> u8 {
        if self.step < LAST_STEP && self.can_proceed() {
            self.step += 1;
        }
        self.step
    }

    /// Go back one step. Returns the step now shown.
    pub fn back(&mut self) -> u8 {
        if self.step > FIRST_STEP {
            self.step -= 1;
        }
        self.step
    }

    /// Finish onboarding, validating that every step was filled.
    pub fn finish(&self) -> Result<ProfileSetup, ProgressionError> {
        let (Some(goal), Some(age), Some(height), Some(weight)) =
            (self.goal, self.age, self.height, self.weight)
        else {
            return Err(ProgressionError::InvalidInput {
                detail: "onboarding is incomplete".to_string(),
            });
        };
        Ok(ProfileSetup {
            goal,
            age,
            height,
            weight,
            plan: self.plan,
        })
    }
}

impl Default for OnboardingForm {
    fn default() -> Self {
        Self::new()
    }
}
