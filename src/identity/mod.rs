//! Account identity: providers, the gateway over them, and shared types.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages call into [`gateway::IdentityGateway`] for register, login, and
//! logout. The gateway validates locally, then delegates to an
//! [`provider::IdentityProvider`]. Providers announce every sign-in state
//! change on their change feed; the session store in `state::auth` is the
//! only consumer of that feed.
//!
//! DESIGN
//! ======
//! The provider is a trait object so the browser build can use the hosted
//! Identity Toolkit while tests and the offline configuration use
//! [`memory::MemoryIdentityProvider`].

pub mod error;
pub mod firebase;
pub mod gateway;
pub mod memory;
pub mod password;
pub mod popup;
pub mod provider;
pub mod types;

use std::sync::Arc;

use crate::config::{AppConfig, IdentityBackend};
use provider::IdentityProvider;

/// Build the identity provider named by `config`.
///
/// The firebase backend needs a browser; outside of it the in-memory provider
/// is used regardless of configuration.
pub fn provider_for(config: &AppConfig) -> Arc<dyn IdentityProvider> {
    match config.identity_backend {
        IdentityBackend::Firebase => firebase_provider(config),
        IdentityBackend::Memory => {
            log::info!("identity: using in-memory provider");
            Arc::new(memory::MemoryIdentityProvider::new())
        }
    }
}

#[cfg(feature = "hydrate")]
fn firebase_provider(config: &AppConfig) -> Arc<dyn IdentityProvider> {
    let api_key = config.firebase_api_key.clone().unwrap_or_default();
    Arc::new(firebase::FirebaseIdentityProvider::new(api_key, config.google_client_id.clone()))
}

#[cfg(not(feature = "hydrate"))]
fn firebase_provider(_config: &AppConfig) -> Arc<dyn IdentityProvider> {
    Arc::new(memory::MemoryIdentityProvider::new())
}
