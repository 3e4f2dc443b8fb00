//! Authoritative session state: token and username.
//!
//! DESIGN
//! ======
//! The session store is the single source of truth for authentication state.
//! `is_logged_in` is derived from the token on every read, never cached. All
//! operations are total: persistence failures are logged, not surfaced —
//! losing the persisted copy only costs a re-login after restart.
//!
//! The username is informational only. It never drives an authorization
//! decision and is not persisted.

use std::sync::{Arc, RwLock};

use crate::storage::TokenStore;

#[derive(Default)]
struct SessionState {
    token: String,
    username: String,
}

/// Holder of the current authentication token and username, persisted
/// through a [`TokenStore`] backend.
pub struct SessionStore {
    state: RwLock<SessionState>,
    store: Arc<dyn TokenStore>,
}

impl SessionStore {
    /// Create a session over the given persistence backend. The in-memory
    /// state starts empty; call [`initialize`](Self::initialize) to pick up
    /// a token persisted by a previous run.
    #[must_use]
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        Self { state: RwLock::new(SessionState::default()), store }
    }

    /// Load the persisted token into memory. The username always starts
    /// empty regardless of what a previous run knew.
    pub fn initialize(&self) {
        let token = self.store.load();
        if let Ok(mut state) = self.state.write() {
            state.token = token;
            state.username.clear();
        }
    }

    /// Replace the token and persist it. Called after a successful login.
    pub fn set_token(&self, token: &str) {
        if let Ok(mut state) = self.state.write() {
            state.token = token.to_owned();
        }
        if let Err(error) = self.store.save(token) {
            tracing::warn!(%error, "failed to persist session token");
        }
    }

    /// Replace the username. Purely observational; not persisted.
    pub fn set_user(&self, name: &str) {
        if let Ok(mut state) = self.state.write() {
            state.username = name.to_owned();
        }
    }

    /// Clear token and username and remove the persisted token. Idempotent:
    /// logging out of an already-empty session is a no-op.
    pub fn logout(&self) {
        if let Ok(mut state) = self.state.write() {
            state.token.clear();
            state.username.clear();
        }
        if let Err(error) = self.store.clear() {
            tracing::warn!(%error, "failed to remove persisted session token");
        }
    }

    /// Whether a token is present. Recomputed on every call.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        !self.token().is_empty()
    }

    /// Current token; empty when unauthenticated.
    #[must_use]
    pub fn token(&self) -> String {
        self.state
            .read()
            .map(|state| state.token.clone())
            .unwrap_or_default()
    }

    /// Current username; empty until [`set_user`](Self::set_user) is called.
    #[must_use]
    pub fn username(&self) -> String {
        self.state
            .read()
            .map(|state| state.username.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
