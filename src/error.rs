//! Error taxonomy for the progression engine.
//!
//! Store-facing failures propagate to the caller; nothing is retried
//! internally. The one place the engine does more than propagate is the
//! challenge/achievement credit saga, whose rollback failures surface as
//! [`ProgressionError::PartialCompletion`] rather than being swallowed.

use thiserror::Error;

/// Why a challenge was not eligible for completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EligibilityIssue {
    /// No challenge with that id exists.
    NotFound,
    /// The challenge belongs to a different user.
    WrongOwner,
    /// The challenge was already completed.
    AlreadyCompleted,
    /// Current time is past the challenge's expiration.
    Expired,
}

impl std::fmt::Display for EligibilityIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            EligibilityIssue::NotFound => "not found",
            EligibilityIssue::WrongOwner => "owned by another user",
            EligibilityIssue::AlreadyCompleted => "already completed",
            EligibilityIssue::Expired => "expired",
        };
        f.write_str(s)
    }
}

/// Failures at the Profile Store seam.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("record not found")]
    NotFound,
    #[error("store write failed: {detail}")]
    Write { detail: String },
}

/// Failures surfaced by the engine operations.
#[derive(Debug, Error)]
pub enum ProgressionError {
    #[error("user {user_id} not found")]
    UserNotFound { user_id: String },

    #[error("challenge {challenge_id} is not eligible for completion: {reason}")]
    ChallengeNotEligible {
        challenge_id: String,
        reason: EligibilityIssue,
    },

    #[error("achievement \"{title}\" is already unlocked for this user")]
    AlreadyUnlocked { title: String },

    #[error("invalid input: {detail}")]
    InvalidInput { detail: String },

    /// Transient persistence failure. Retry policy is the caller's.
    #[error("store write failed: {detail}")]
    StoreWrite { detail: String },

    /// A two-document mutation half-applied and the compensating
    /// rollback also failed; the store may be inconsistent for this user.
    #[error("partial completion for user {user_id}: {detail}")]
    PartialCompletion { user_id: String, detail: String },
}

impl From<StoreError> for ProgressionError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => ProgressionError::StoreWrite {
                detail: "record not found".to_string(),
            },
            StoreError::Write { detail } => ProgressionError::StoreWrite { detail },
        }
    }
}
