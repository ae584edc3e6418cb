//! Progression event bus
//!
//! Async pub/sub for user-facing notifications. The engine owns its bus
//! instance and every event carries the acting user id explicitly; there
//! is no global singleton or ambient session state.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Events emitted by the progression engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum ProgressionEvent {
    /// A challenge was completed and its XP credited.
    ChallengeCompleted {
        user_id: String,
        challenge_id: String,
        title: String,
        xp_awarded: u64,
        new_level: u32,
        leveled_up: bool,
    },
    /// An achievement was unlocked and its XP credited.
    AchievementUnlocked {
        user_id: String,
        achievement_id: String,
        title: String,
        xp_awarded: u64,
    },
    /// Onboarding finished and the profile was configured.
    ProfileConfigured { user_id: String },
    /// A two-document mutation half-applied and rollback failed; the
    /// store may be inconsistent for this user.
    IntegrityFault { user_id: String, detail: String },
}

impl ProgressionEvent {
    /// Human-readable notification text for the UI layer.
    pub fn message(&self) -> String {
        match self {
            ProgressionEvent::ChallengeCompleted { xp_awarded, .. } => {
                format!("Desafio concluído! +{xp_awarded} XP")
            }
            ProgressionEvent::AchievementUnlocked { title, .. } => {
                format!("Conquista desbloqueada: {title}!")
            }
            ProgressionEvent::ProfileConfigured { .. } => {
                "Perfil configurado com sucesso!".to_string()
            }
            ProgressionEvent::IntegrityFault { detail, .. } => {
                format!("Falha de integridade no progresso ({detail})")
            }
        }
    }
}

/// Broadcast channel fanning progression events out to subscribers.
pub struct EventBus {
    tx: broadcast::Sender<ProgressionEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(256);
        Self { tx }
    }

    /// Publish an event to all subscribers. Dropped if nobody listens.
    pub fn publish(&self, event: ProgressionEvent) {
        let _ = self.tx.send(event);
    }

    /// Create a new subscriber.
    pub fn subscribe(&self) -> broadcast::Receiver<ProgressionEvent> {
        self.tx.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
