//! Progression Engine
//!
//! Achievement Ledger and Challenge Tracker operations over a
//! [`ProfileStore`], with per-user serialization of mutations. Every
//! operation takes the acting user id explicitly; the engine carries no
//! session state.

pub mod achievements;
pub mod challenges;
pub mod profile;

pub use achievements::UnlockOutcome;
pub use challenges::CompletionOutcome;
pub use profile::ProfileSetup;

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{broadcast, Mutex, OwnedMutexGuard};

use crate::events::{EventBus, ProgressionEvent};
use crate::store::ProfileStore;

pub struct ProgressionEngine {
    store: Arc<dyn ProfileStore>,
    events: EventBus,
    user_locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl ProgressionEngine {
    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        Self {
            store,
            events: EventBus::new(),
            user_locks: Mutex::new(HashMap::new()),
        }
    }

    /// Subscribe to progression notifications.
    pub fn subscribe(&self) -> broadcast::Receiver<ProgressionEvent> {
        self.events.subscribe()
    }

    pub(crate) fn store(&self) -> &dyn ProfileStore {
        self.store.as_ref()
    }

    pub(crate) fn publish(&self, event: ProgressionEvent) {
        self.events.publish(event);
    }

    /// Serialize mutations per user id. Operations for different users
    /// proceed concurrently; two mutations for the same user never
    /// interleave their store writes.
    pub(crate) async fn lock_user(&self, user_id: &str) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.user_locks.lock().await;
            // A strong count of 1 means only the map holds the lock:
            // nobody is waiting on it, so the entry can go.
            locks.retain(|_, lock| Arc::strong_count(lock) > 1);
            locks
                .entry(user_id.to_string())
                .or_insert_with(|| Arc::new(Mutex::new(())))
                .clone()
        };
        lock.lock_owned().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[tokio::test]
    async fn idle_user_locks_are_evicted() {
        let engine = ProgressionEngine::new(Arc::new(MemoryStore::new()));
        {
            let _guard = engine.lock_user("u1").await;
            assert_eq!(engine.user_locks.lock().await.len(), 1);
        }
        // The next acquisition sweeps the now-idle entry.
        let _guard = engine.lock_user("u2").await;
        let locks = engine.user_locks.lock().await;
        assert_eq!(locks.len(), 1);
        assert!(locks.contains_key("u2"));
    }

    #[tokio::test]
    async fn held_locks_survive_the_sweep() {
        let engine = ProgressionEngine::new(Arc::new(MemoryStore::new()));
        let _held = engine.lock_user("u1").await;
        let _other = engine.lock_user("u2").await;
        assert!(engine.user_locks.lock().await.contains_key("u1"));
    }
}
