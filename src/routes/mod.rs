//! Route table and navigation guard.
//!
//! DESIGN
//! ======
//! The view space splits into two regions: public (the login view only) and
//! protected (everything else). [`check`] is the sole transition function
//! between them — a pure decision over (target metadata, logged-in state),
//! evaluated synchronously before a transition commits, so it is testable
//! without any real router. [`Navigator`] is the thin stateful shell that
//! applies it and tracks the current route.

use std::sync::{Arc, Mutex};

use crate::session::SessionStore;

// =============================================================================
// ROUTE TABLE
// =============================================================================

/// Console views. Every route except [`Route::Login`] requires
/// authentication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Dashboard,
    Accounts,
    Cron,
    Push,
    Config,
}

impl Route {
    /// Default landing view for an authenticated user.
    pub const DEFAULT: Self = Self::Dashboard;

    #[must_use]
    pub fn requires_auth(self) -> bool {
        !matches!(self, Self::Login)
    }

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Dashboard => "/dashboard",
            Self::Accounts => "/account",
            Self::Cron => "/system/cron",
            Self::Push => "/system/push",
            Self::Config => "/system/config",
        }
    }
}

// =============================================================================
// GUARD
// =============================================================================

/// Outcome of a guard evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    RedirectToLogin,
    RedirectToDefault,
}

/// Decide a route transition. First matching rule wins:
///
/// 1. target requires auth and not logged in → redirect to login
/// 2. logged in and target is the login view → redirect to the default view
/// 3. otherwise → allow
#[must_use]
pub fn check(target: Route, logged_in: bool) -> GuardDecision {
    if target.requires_auth() && !logged_in {
        return GuardDecision::RedirectToLogin;
    }
    if logged_in && target == Route::Login {
        return GuardDecision::RedirectToDefault;
    }
    GuardDecision::Allow
}

// =============================================================================
// NAVIGATOR
// =============================================================================

/// Current-route holder. Every transition goes through the guard; there is
/// no pending state — each decision settles before the next one is taken.
pub struct Navigator {
    session: Arc<SessionStore>,
    current: Mutex<Route>,
}

impl Navigator {
    /// Start on the login view, the only route reachable while logged out.
    #[must_use]
    pub fn new(session: Arc<SessionStore>) -> Self {
        Self { session, current: Mutex::new(Route::Login) }
    }

    /// Attempt a transition to `target`; returns the route actually settled
    /// on after the guard has spoken.
    pub fn navigate(&self, target: Route) -> Route {
        let settled = match check(target, self.session.is_logged_in()) {
            GuardDecision::Allow => target,
            GuardDecision::RedirectToLogin => Route::Login,
            GuardDecision::RedirectToDefault => Route::DEFAULT,
        };
        if let Ok(mut current) = self.current.lock() {
            *current = settled;
        }
        settled
    }

    /// Forced redirect to login after an authorization failure. Idempotent:
    /// repeated triggers collapse onto the same settled state.
    pub fn force_login(&self) {
        if let Ok(mut current) = self.current.lock() {
            *current = Route::Login;
        }
    }

    #[must_use]
    pub fn current(&self) -> Route {
        self.current
            .lock()
            .map(|current| *current)
            .unwrap_or(Route::Login)
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
