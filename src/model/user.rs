//! User profile document

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::progression::level_for_xp;

/// Training goal picked during onboarding.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    WeightLoss,
    MuscleGain,
    Recomposition,
    Performance,
}

/// Subscription plan tier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PlanTier {
    Base,
    Escalada,
    Auge,
}

/// A user's profile document. The id is externally assigned at account
/// registration; this crate mutates XP/level (challenge completion,
/// achievement unlock) and goal/biometrics/plan (onboarding), never
/// creates or deletes profiles.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    /// Height in centimeters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// Weight in kilograms.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    pub goal: Goal,
    pub plan: PlanTier,
    /// Accumulated experience points. Absent in legacy documents.
    #[serde(default)]
    pub xp: u64,
    /// Derived tier; must always equal `level_for_xp(xp)` after a write.
    #[serde(default = "default_level")]
    pub level: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn default_level() -> u32 {
    1
}

impl UserProfile {
    /// Whether the stored level matches the level derived from XP.
    pub fn level_consistent(&self) -> bool {
        self.level == level_for_xp(self.xp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_store_document() {
        // Shape written by the web client; xp/level may be missing.
        let doc = r#"{
            "id": "u1",
            "email": "ana@example.com",
            "name": "Ana",
            "goal": "muscle_gain",
            "plan": "escalada",
            "createdAt": "2026-01-10T12:00:00Z",
            "updatedAt": "2026-01-10T12:00:00Z"
        }"#;
        let profile: UserProfile = serde_json::from_str(doc).unwrap();
        assert_eq!(profile.goal, Goal::MuscleGain);
        assert_eq!(profile.plan, PlanTier::Escalada);
        assert_eq!(profile.xp, 0);
        assert_eq!(profile.level, 1);
        assert!(profile.level_consistent());
    }

    #[test]
    fn serializes_camel_case() {
        let profile = UserProfile {
            id: "u1".into(),
            email: "ana@example.com".into(),
            name: "Ana".into(),
            avatar: None,
            age: Some(29),
            height: Some(170),
            weight: Some(64.5),
            goal: Goal::WeightLoss,
            plan: PlanTier::Base,
            xp: 1500,
            level: 2,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["goal"], "weight_loss");
        assert_eq!(json["plan"], "base");
        assert!(json.get("createdAt").is_some());
        assert!(json.get("avatar").is_none());
    }
}
