//! Shared route-guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes all apply the same decision: wait while the provider has
//! not answered, redirect to `/login` (remembering where the user was going)
//! when nobody is signed in, render otherwise. The decision is a pure function
//! so it can be tested without a router.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::state::auth::SessionState;

/// Path of the login view.
pub const LOGIN_PATH: &str = "/login";
/// Where users land after login when no intent was recorded.
pub const DEFAULT_LANDING_PATH: &str = "/";

/// Remembered destination of a redirected navigation attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationIntent {
    /// The protected path the user tried to reach.
    pub target_path: String,
    /// The view the user was sent to; only it may consume the intent.
    pub origin_path: String,
}

/// Outcome of guarding a protected view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Provider has not answered yet: show a neutral loading indicator.
    Loading,
    /// Signed in: render the requested view.
    Render,
    /// Signed out: go to `to` and record `intent`.
    Redirect { to: String, intent: NavigationIntent },
}

/// Decide what a protected view at `requested_path` should do for `state`.
pub fn decide(state: &SessionState, requested_path: &str) -> GuardDecision {
    if state.is_loading {
        return GuardDecision::Loading;
    }
    if state.identity.is_some() {
        return GuardDecision::Render;
    }
    GuardDecision::Redirect {
        to: LOGIN_PATH.to_owned(),
        intent: NavigationIntent { target_path: requested_path.to_owned(), origin_path: LOGIN_PATH.to_owned() },
    }
}

/// Single-slot holder for the pending [`NavigationIntent`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigationIntents {
    pending: Option<NavigationIntent>,
}

impl NavigationIntents {
    /// Remember `intent`, replacing any earlier one.
    pub fn record(&mut self, intent: NavigationIntent) {
        self.pending = Some(intent);
    }

    pub fn pending(&self) -> Option<&NavigationIntent> {
        self.pending.as_ref()
    }

    /// Consume the intent after a successful login on `consumer_path`.
    ///
    /// Returns the remembered target when the intent was issued for
    /// `consumer_path`, otherwise the default landing path. The slot is empty
    /// afterwards either way.
    pub fn take_destination(&mut self, consumer_path: &str) -> String {
        match self.pending.take() {
            Some(intent) if intent.origin_path == consumer_path => intent.target_path,
            _ => DEFAULT_LANDING_PATH.to_owned(),
        }
    }

    /// Drop any pending intent.
    pub fn discard(&mut self) {
        self.pending = None;
    }
}
