//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login
//! redirects and identity-dependent rendering.
//!
//! DESIGN
//! ======
//! [`SessionStore`] owns the one [`SessionState`] of the application. The
//! identity provider's change feed is its only writer; everything else reads
//! snapshots or registers an observer. The app bridges the store into Leptos
//! by registering an observer that copies each snapshot into an
//! `RwSignal<SessionState>` context.
//!
//! Handles are `Arc<Mutex<_>>` so the store satisfies Leptos context bounds;
//! execution is single-threaded and no lock is held while observers run or
//! across an await.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use futures::StreamExt as _;
use futures::future::{AbortHandle, Abortable};

use crate::identity::provider::{IdentityChange, IdentityChanges, IdentityProvider};
use crate::identity::types::Identity;

/// Who is signed in right now, and whether the provider has answered yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub identity: Option<Identity>,
    /// True until the provider's first notification has been applied.
    pub is_loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { identity: None, is_loading: true }
    }
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    /// Email of the signed-in identity, if any.
    pub fn email(&self) -> Option<&str> {
        self.identity.as_ref().and_then(|identity| identity.email.as_deref())
    }
}

/// Handle returned by [`SessionStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

type Observer = Arc<dyn Fn(&SessionState) + Send + Sync>;

#[derive(Default)]
struct Inner {
    state: SessionState,
    observers: Vec<(ObserverId, Observer)>,
    next_observer: u64,
    changes: Option<IdentityChanges>,
    subscribed: bool,
    listener: Option<AbortHandle>,
    torn_down: bool,
}

/// Process-wide session container with subscribe/notify.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<Mutex<Inner>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Subscribe to `provider`'s identity changes. Only the first call per
    /// store does anything.
    pub fn initialize(&self, provider: &dyn IdentityProvider) {
        let mut inner = self.lock();
        if inner.subscribed || inner.torn_down {
            log::warn!("session store: initialize called again; ignoring");
            return;
        }
        inner.subscribed = true;
        inner.changes = Some(provider.subscribe());
        log::debug!("session store: subscribed to identity provider");
    }

    /// Apply notifications as they arrive until the feed closes or
    /// [`teardown`](Self::teardown) runs. Spawn this once after
    /// [`initialize`](Self::initialize); later calls return a future that
    /// completes immediately and leave the running listener in place.
    pub fn listen(&self) -> impl Future<Output = ()> + 'static {
        let (handle, registration) = AbortHandle::new_pair();
        let changes = {
            let mut inner = self.lock();
            if inner.torn_down {
                handle.abort();
            }
            if inner.listener.is_some() {
                log::warn!("session store: already listening; ignoring");
                None
            } else {
                inner.listener = Some(handle);
                inner.changes.take()
            }
        };
        let store = self.clone();
        let pump = async move {
            let Some(mut changes) = changes else {
                log::warn!("session store: listen called without an active subscription");
                return;
            };
            while let Some(change) = changes.next().await {
                store.apply(change);
            }
            log::debug!("session store: identity feed closed");
        };
        async move {
            let _ = Abortable::new(pump, registration).await;
        }
    }

    /// Apply every notification already delivered, without waiting. Returns
    /// how many were applied.
    pub fn pump(&self) -> usize {
        let mut applied = 0;
        loop {
            let change = {
                let mut inner = self.lock();
                let Some(changes) = inner.changes.as_mut() else {
                    break;
                };
                match changes.try_recv() {
                    Ok(change) => change,
                    Err(_) => break,
                }
            };
            self.apply(change);
            applied += 1;
        }
        applied
    }

    /// Sole writer of the session state.
    fn apply(&self, change: IdentityChange) {
        let (snapshot, observers) = {
            let mut inner = self.lock();
            log::debug!(
                "session store: identity {}",
                change.as_ref().map_or("cleared", |identity| identity.uid.as_str())
            );
            inner.state.identity = change;
            inner.state.is_loading = false;
            let observers: Vec<Observer> = inner.observers.iter().map(|(_, observer)| observer.clone()).collect();
            (inner.state.clone(), observers)
        };
        for observer in observers {
            observer(&snapshot);
        }
    }

    /// Snapshot of the current state.
    pub fn current(&self) -> SessionState {
        self.lock().state.clone()
    }

    /// Register `observer`; it runs synchronously after every update.
    pub fn subscribe(&self, observer: impl Fn(&SessionState) + Send + Sync + 'static) -> ObserverId {
        let mut inner = self.lock();
        let id = ObserverId(inner.next_observer);
        inner.next_observer += 1;
        inner.observers.push((id, Arc::new(observer)));
        id
    }

    pub fn unsubscribe(&self, id: ObserverId) {
        self.lock().observers.retain(|(observer_id, _)| *observer_id != id);
    }

    /// Stop listening and unsubscribe from the provider. Safe to call more
    /// than once.
    pub fn teardown(&self) {
        let mut inner = self.lock();
        if inner.torn_down {
            return;
        }
        inner.torn_down = true;
        if let Some(listener) = inner.listener.take() {
            listener.abort();
        }
        if let Some(mut changes) = inner.changes.take() {
            changes.close();
        }
        log::debug!("session store: torn down");
    }
}
