//! Application state shared across handlers.

use database::{Database, DeletePolicy};
use summary_core::SummaryEngine;

use crate::session::SessionIssuer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Database connection.
    pub db: Database,
    /// Summary engine with its injected summarizer.
    pub engine: SummaryEngine,
    /// Session token issuer.
    pub sessions: SessionIssuer,
    /// What deleting a summary does to its bullets.
    pub delete_policy: DeletePolicy,
}

impl AppState {
    /// Create new application state.
    pub fn new(db: Database, engine: SummaryEngine, sessions: SessionIssuer) -> Self {
        Self {
            db,
            engine,
            sessions,
            delete_policy: DeletePolicy::default(),
        }
    }

    /// Set the delete policy.
    pub fn with_delete_policy(mut self, policy: DeletePolicy) -> Self {
        self.delete_policy = policy;
        self
    }
}
