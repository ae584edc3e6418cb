//! Domain model
//!
//! The document types held by the Profile Store. Field names serialize
//! camelCase to match the store's native document shape.

pub mod achievement;
pub mod challenge;
pub mod user;

pub use achievement::{Achievement, AchievementCategory, AchievementData};
pub use challenge::{Challenge, ChallengeKind};
pub use user::{Goal, PlanTier, UserProfile};
