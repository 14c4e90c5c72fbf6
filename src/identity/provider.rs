//! Identity provider boundary.
//!
//! DESIGN
//! ======
//! Providers are producers of identity-change events; the session store is
//! their only consumer. Each subscriber gets its own unbounded channel from a
//! [`ChangeFeed`], primed with the provider's current identity so the first
//! event arrives exactly once even when nobody is signed in.

#[cfg(test)]
#[path = "provider_test.rs"]
mod provider_test;

use std::sync::{Arc, Mutex, PoisonError};

use futures::channel::mpsc;

use super::error::ProviderRejection;
use super::types::Identity;

/// One identity-change notification: the new identity, or `None` when signed out.
pub type IdentityChange = Option<Identity>;

/// Receiving half of a provider subscription. Dropping or closing it
/// unsubscribes.
pub type IdentityChanges = mpsc::UnboundedReceiver<IdentityChange>;

/// Calls the application makes against an external identity provider.
///
/// Futures are `?Send`: every provider runs on the browser's single thread.
#[async_trait::async_trait(?Send)]
pub trait IdentityProvider: Send + Sync {
    /// Create an account and sign it in.
    ///
    /// # Errors
    ///
    /// Returns a [`ProviderRejection`] when the provider refuses the account.
    async fn create_account(&self, email: &str, password: &str) -> Result<Identity, ProviderRejection>;

    /// Set display name and photo on the signed-in account. Providers publish
    /// the updated identity on their change feed once it is stored.
    ///
    /// # Errors
    ///
    /// Returns a [`ProviderRejection`] when no account is signed in or the
    /// update is refused.
    async fn update_profile(&self, display_name: &str, photo_url: Option<&str>)
    -> Result<Identity, ProviderRejection>;

    /// Sign in with email and password.
    ///
    /// # Errors
    ///
    /// Returns a [`ProviderRejection`] when the credentials are refused.
    async fn sign_in(&self, email: &str, password: &str) -> Result<Identity, ProviderRejection>;

    /// Run the interactive federated consent flow and sign in with its result.
    ///
    /// # Errors
    ///
    /// Returns a [`ProviderRejection`] when the flow is cancelled, denied, or
    /// the provider refuses the federated credential.
    async fn sign_in_with_popup(&self) -> Result<Identity, ProviderRejection>;

    /// End the current session.
    ///
    /// # Errors
    ///
    /// Returns a [`ProviderRejection`] when the provider cannot clear the session.
    async fn sign_out(&self) -> Result<(), ProviderRejection>;

    /// Subscribe to identity changes. The current identity is delivered first.
    fn subscribe(&self) -> IdentityChanges;

    /// Revalidate a session persisted by an earlier page load, publishing
    /// `None` if the provider no longer accepts it. Providers without
    /// persistence have nothing to do.
    async fn restore_session(&self) {}
}

/// Fan-out of identity changes to every live subscriber.
#[derive(Clone, Debug, Default)]
pub struct ChangeFeed {
    subscribers: Arc<Mutex<Vec<mpsc::UnboundedSender<IdentityChange>>>>,
}

impl ChangeFeed {
    /// Register a subscriber and deliver `current` to it immediately.
    pub fn subscribe(&self, current: IdentityChange) -> IdentityChanges {
        let (tx, rx) = mpsc::unbounded();
        // The receiver is alive, so this cannot fail.
        let _ = tx.unbounded_send(current);
        self.subscribers.lock().unwrap_or_else(PoisonError::into_inner).push(tx);
        rx
    }

    /// Deliver `change` to every subscriber, dropping closed ones.
    pub fn publish(&self, change: &IdentityChange) {
        let mut subscribers = self.subscribers.lock().unwrap_or_else(PoisonError::into_inner);
        subscribers.retain(|tx| tx.unbounded_send(change.clone()).is_ok());
    }

    /// Number of subscribers still attached as of the last publish.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}
