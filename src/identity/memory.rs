//! In-process identity provider.
//!
//! Backs the `memory` identity backend used for offline development and the
//! gateway/session tests. Account rules mirror what the hosted provider
//! enforces (6-character minimum, unique emails) so pages behave the same way
//! against either backend.

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use super::error::{
    EMAIL_ALREADY_IN_USE, INVALID_CREDENTIAL, NO_CURRENT_USER, POPUP_CLOSED, ProviderRejection, USER_NOT_FOUND,
    WEAK_PASSWORD, WRONG_PASSWORD,
};
use super::provider::{ChangeFeed, IdentityChanges, IdentityProvider};
use super::types::{GOOGLE_PROVIDER_ID, Identity, PASSWORD_PROVIDER_ID, ProviderInfo};

/// Shortest password the provider itself accepts.
pub const PROVIDER_MIN_PASSWORD_LEN: usize = 6;

/// What the next federated popup flow should do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FederatedOutcome {
    /// Consent granted for this account.
    Grant(Identity),
    /// User closed the popup.
    Cancel,
}

#[derive(Debug)]
struct Account {
    password: String,
    identity: Identity,
}

#[derive(Debug, Default)]
struct Inner {
    accounts: HashMap<String, Account>,
    current: Option<Identity>,
    federated: Option<FederatedOutcome>,
    next_uid: u64,
}

/// Identity provider holding accounts in memory.
#[derive(Debug, Default)]
pub struct MemoryIdentityProvider {
    inner: Mutex<Inner>,
    feed: ChangeFeed,
    calls: AtomicUsize,
}

impl MemoryIdentityProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provider that starts with `identity` already signed in, as if a
    /// session had been restored.
    pub fn signed_in(identity: Identity) -> Self {
        let provider = Self::default();
        provider.lock().current = Some(identity);
        provider
    }

    /// Configure the outcome of the next popup flow.
    pub fn set_federated_outcome(&self, outcome: FederatedOutcome) {
        self.lock().federated = Some(outcome);
    }

    /// Number of provider calls issued so far (subscriptions excluded).
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Currently signed-in identity, as the provider sees it.
    pub fn current(&self) -> Option<Identity> {
        self.lock().current.clone()
    }

    /// Drop the current session without a sign-out call, as when the hosted
    /// session expires.
    pub fn expire_session(&self) {
        self.lock().current = None;
        self.feed.publish(&None);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn record_call(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }

    fn sign_in_as(&self, identity: Identity) -> Identity {
        self.lock().current = Some(identity.clone());
        self.feed.publish(&Some(identity.clone()));
        identity
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_ascii_lowercase()
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.ends_with('.'),
        None => false,
    }
}

#[async_trait::async_trait(?Send)]
impl IdentityProvider for MemoryIdentityProvider {
    async fn create_account(&self, email: &str, password: &str) -> Result<Identity, ProviderRejection> {
        self.record_call();
        let email = normalize_email(email);
        if !looks_like_email(&email) {
            return Err(ProviderRejection::new(INVALID_CREDENTIAL, "malformed email"));
        }
        if password.chars().count() < PROVIDER_MIN_PASSWORD_LEN {
            return Err(ProviderRejection::new(WEAK_PASSWORD, "Password should be at least 6 characters"));
        }

        let identity = {
            let mut inner = self.lock();
            if inner.accounts.contains_key(&email) {
                return Err(ProviderRejection::new(EMAIL_ALREADY_IN_USE, "email exists"));
            }
            inner.next_uid += 1;
            let identity = Identity {
                uid: format!("mem-{}", inner.next_uid),
                display_name: None,
                email: Some(email.clone()),
                photo_url: None,
                provider: ProviderInfo { provider_id: PASSWORD_PROVIDER_ID.to_owned(), ..ProviderInfo::default() },
            };
            inner.accounts.insert(
                email,
                Account { password: password.to_owned(), identity: identity.clone() },
            );
            identity
        };
        Ok(self.sign_in_as(identity))
    }

    async fn update_profile(
        &self,
        display_name: &str,
        photo_url: Option<&str>,
    ) -> Result<Identity, ProviderRejection> {
        self.record_call();
        let updated = {
            let mut inner = self.lock();
            let Some(current) = inner.current.as_mut() else {
                return Err(ProviderRejection::new(NO_CURRENT_USER, "no signed-in account"));
            };
            current.display_name = Some(display_name.to_owned());
            current.photo_url = photo_url.map(str::to_owned);
            let updated = current.clone();
            if let Some(email) = updated.email.as_deref() {
                if let Some(account) = inner.accounts.get_mut(email) {
                    account.identity = updated.clone();
                }
            }
            updated
        };
        self.feed.publish(&Some(updated.clone()));
        Ok(updated)
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<Identity, ProviderRejection> {
        self.record_call();
        let email = normalize_email(email);
        if !looks_like_email(&email) {
            return Err(ProviderRejection::new(INVALID_CREDENTIAL, "malformed email"));
        }
        let identity = {
            let inner = self.lock();
            let Some(account) = inner.accounts.get(&email) else {
                return Err(ProviderRejection::new(USER_NOT_FOUND, "no account for email"));
            };
            if account.password != password {
                return Err(ProviderRejection::new(WRONG_PASSWORD, "password mismatch"));
            }
            account.identity.clone()
        };
        Ok(self.sign_in_as(identity))
    }

    async fn sign_in_with_popup(&self) -> Result<Identity, ProviderRejection> {
        self.record_call();
        let outcome = self.lock().federated.take();
        match outcome {
            Some(FederatedOutcome::Grant(mut identity)) => {
                identity.provider.provider_id = GOOGLE_PROVIDER_ID.to_owned();
                Ok(self.sign_in_as(identity))
            }
            Some(FederatedOutcome::Cancel) | None => {
                Err(ProviderRejection::new(POPUP_CLOSED, "the popup was closed before sign-in completed"))
            }
        }
    }

    async fn sign_out(&self) -> Result<(), ProviderRejection> {
        self.record_call();
        self.lock().current = None;
        self.feed.publish(&None);
        Ok(())
    }

    fn subscribe(&self) -> IdentityChanges {
        let current = self.lock().current.clone();
        self.feed.subscribe(current)
    }
}
