//! Meu Auge progression core
//!
//! The gamified progression engine behind the Meu Auge app:
//! - Pure XP -> level arithmetic and display formatting
//! - Append-only achievement ledger
//! - One-way challenge completion with XP crediting
//! - Onboarding profile setup and the static plan catalog
//!
//! Persistence lives in an external document store reached through the
//! [`store::ProfileStore`] trait; user-facing notifications fan out over
//! the engine's event bus.

pub mod engine;
pub mod error;
pub mod events;
pub mod model;
pub mod onboarding;
pub mod plans;
pub mod progression;
pub mod store;

// Re-exports for convenience
pub use engine::{CompletionOutcome, ProfileSetup, ProgressionEngine, UnlockOutcome};
pub use error::{EligibilityIssue, ProgressionError, StoreError};
pub use events::{EventBus, ProgressionEvent};
pub use store::{MemoryStore, ProfileStore};
