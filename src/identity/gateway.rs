//! Identity gateway: the four auth operations pages are allowed to perform.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages call the gateway; the gateway calls the configured
//! [`IdentityProvider`]. The gateway never writes the session store: the
//! provider's change feed does, one notification cycle after an operation
//! resolves. Callers that need the new identity immediately use the value an
//! operation returns.
//!
//! ERROR HANDLING
//! ==============
//! Client-side preconditions (challenge token, password policy) fail before
//! any provider call. Provider rejections are mapped to [`AuthError`] once
//! and returned; nothing is retried.

#[cfg(test)]
#[path = "gateway_test.rs"]
mod gateway_test;

use std::sync::Arc;

use super::error::AuthError;
use super::password;
use super::provider::IdentityProvider;
use super::types::{Credentials, Identity, Registration};

/// Front door for register / login / federated login / logout.
#[derive(Clone)]
pub struct IdentityGateway {
    provider: Arc<dyn IdentityProvider>,
}

impl IdentityGateway {
    /// Gateway over `provider`. Register, login, and federated login all
    /// need a non-empty bot-verification token.
    pub fn new(provider: Arc<dyn IdentityProvider>) -> Self {
        Self { provider }
    }

    /// The provider this gateway talks to.
    pub fn provider(&self) -> &Arc<dyn IdentityProvider> {
        &self.provider
    }

    fn check_challenge(challenge: &str) -> Result<(), AuthError> {
        if challenge.trim().is_empty() {
            return Err(AuthError::ChallengeNotCompleted);
        }
        Ok(())
    }

    /// Create an account, then set its display name and photo.
    ///
    /// # Errors
    ///
    /// `ChallengeNotCompleted` or `PasswordPolicyViolation` before any
    /// provider call; `EmailAlreadyInUse`, `WeakPassword`, or `ProviderError`
    /// when the provider refuses.
    pub async fn register(&self, registration: Registration, challenge: &str) -> Result<Identity, AuthError> {
        Self::check_challenge(challenge)?;
        password::validate(&registration.password).map_err(AuthError::PasswordPolicyViolation)?;

        log::debug!("register: creating account for {}", registration.email);
        let created = self
            .provider
            .create_account(&registration.email, &registration.password)
            .await
            .map_err(|rejection| {
                log::warn!("register: create account rejected: {rejection}");
                AuthError::from(rejection)
            })?;

        let photo_url = registration.photo_url.as_deref().map(str::trim).filter(|url| !url.is_empty());
        let updated = self
            .provider
            .update_profile(registration.display_name.trim(), photo_url)
            .await
            .map_err(|rejection| {
                log::warn!("register: profile update for {} rejected: {rejection}", created.uid);
                AuthError::from(rejection)
            })?;

        log::info!("register: account {} created", updated.uid);
        Ok(updated)
    }

    /// Sign in with email and password.
    ///
    /// # Errors
    ///
    /// `ChallengeNotCompleted` before any provider call; `UserNotFound`,
    /// `WrongPassword`, `InvalidCredential`, or `ProviderError` when the
    /// provider refuses.
    pub async fn login(&self, credentials: Credentials, challenge: &str) -> Result<Identity, AuthError> {
        Self::check_challenge(challenge)?;

        log::debug!("login: signing in {}", credentials.email);
        let identity = self
            .provider
            .sign_in(credentials.email.trim(), &credentials.password)
            .await
            .map_err(|rejection| {
                log::warn!("login: rejected: {rejection}");
                AuthError::from(rejection)
            })?;

        log::info!("login: {} signed in", identity.uid);
        Ok(identity)
    }

    /// Sign in through the federated consent popup.
    ///
    /// # Errors
    ///
    /// `ChallengeNotCompleted` before the popup opens; `ProviderError` when the
    /// flow is cancelled, denied, or refused.
    pub async fn login_with_federated_provider(&self, challenge: &str) -> Result<Identity, AuthError> {
        Self::check_challenge(challenge)?;

        log::debug!("federated login: opening consent flow");
        let identity = self.provider.sign_in_with_popup().await.map_err(|rejection| {
            log::warn!("federated login: {rejection}");
            AuthError::ProviderError(rejection.to_string())
        })?;

        log::info!("federated login: {} signed in", identity.uid);
        Ok(identity)
    }

    /// End the current session.
    ///
    /// # Errors
    ///
    /// `ProviderError` when the provider cannot clear the session.
    pub async fn logout(&self) -> Result<(), AuthError> {
        self.provider.sign_out().await.map_err(|rejection| {
            log::warn!("logout: {rejection}");
            AuthError::ProviderError(rejection.to_string())
        })?;
        log::info!("logout: session cleared");
        Ok(())
    }
}
