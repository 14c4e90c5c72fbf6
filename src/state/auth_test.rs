use std::sync::atomic::{AtomicUsize, Ordering};

use futures::executor::block_on;

use super::*;
use crate::identity::memory::MemoryIdentityProvider;
use crate::identity::provider::ChangeFeed;
use crate::identity::types::ProviderInfo;

fn identity(uid: &str) -> Identity {
    Identity {
        uid: uid.to_owned(),
        display_name: None,
        email: Some(format!("{uid}@example.com")),
        photo_url: None,
        provider: ProviderInfo::default(),
    }
}

/// Provider stub whose change feed is driven directly by the test.
#[derive(Default)]
struct ScriptedProvider {
    feed: ChangeFeed,
    subscriptions: AtomicUsize,
}

#[async_trait::async_trait(?Send)]
impl IdentityProvider for ScriptedProvider {
    async fn create_account(&self, _: &str, _: &str) -> Result<Identity, crate::identity::error::ProviderRejection> {
        unreachable!()
    }
    async fn update_profile(
        &self,
        _: &str,
        _: Option<&str>,
    ) -> Result<Identity, crate::identity::error::ProviderRejection> {
        unreachable!()
    }
    async fn sign_in(&self, _: &str, _: &str) -> Result<Identity, crate::identity::error::ProviderRejection> {
        unreachable!()
    }
    async fn sign_in_with_popup(&self) -> Result<Identity, crate::identity::error::ProviderRejection> {
        unreachable!()
    }
    async fn sign_out(&self) -> Result<(), crate::identity::error::ProviderRejection> {
        unreachable!()
    }
    fn subscribe(&self) -> IdentityChanges {
        self.subscriptions.fetch_add(1, Ordering::SeqCst);
        self.feed.subscribe(None)
    }
}

// =============================================================
// SessionState defaults
// =============================================================

#[test]
fn session_state_default_is_loading_without_identity() {
    let state = SessionState::default();
    assert!(state.identity.is_none());
    assert!(state.is_loading);
    assert!(!state.is_authenticated());
}

#[test]
fn new_store_reports_loading_before_initialize() {
    let store = SessionStore::new();
    assert_eq!(store.current(), SessionState::default());
    assert_eq!(store.pump(), 0);
}

// =============================================================
// Loading flag
// =============================================================

#[test]
fn first_notification_clears_loading_even_when_signed_out() {
    let provider = ScriptedProvider::default();
    let store = SessionStore::new();
    store.initialize(&provider);
    assert!(store.current().is_loading);

    assert_eq!(store.pump(), 1);

    let state = store.current();
    assert!(!state.is_loading);
    assert!(state.identity.is_none());
}

#[test]
fn loading_stays_false_for_any_later_sequence() {
    let provider = ScriptedProvider::default();
    let store = SessionStore::new();
    store.initialize(&provider);
    store.pump();

    let sequence = [Some(identity("a")), None, None, Some(identity("b")), Some(identity("c")), None];
    for change in sequence {
        provider.feed.publish(&change);
        assert_eq!(store.pump(), 1);
        let state = store.current();
        assert!(!state.is_loading);
        assert_eq!(state.identity, change);
    }
}

#[test]
fn pump_applies_queued_notifications_in_order() {
    let provider = ScriptedProvider::default();
    let store = SessionStore::new();
    store.initialize(&provider);
    provider.feed.publish(&Some(identity("a")));
    provider.feed.publish(&Some(identity("b")));

    assert_eq!(store.pump(), 3);
    assert_eq!(store.current().identity, Some(identity("b")));
}

// =============================================================
// Observers
// =============================================================

#[test]
fn observers_see_every_update_synchronously() {
    let provider = ScriptedProvider::default();
    let store = SessionStore::new();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    store.subscribe(move |state| sink.lock().unwrap().push(state.clone()));
    store.initialize(&provider);
    provider.feed.publish(&Some(identity("a")));

    store.pump();

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0], SessionState { identity: None, is_loading: false });
    assert_eq!(seen[1], SessionState { identity: Some(identity("a")), is_loading: false });
}

#[test]
fn observer_may_read_store_while_notified() {
    let provider = ScriptedProvider::default();
    let store = SessionStore::new();
    let reader = store.clone();
    let matched = Arc::new(AtomicUsize::new(0));
    let counter = matched.clone();
    store.subscribe(move |state| {
        if reader.current() == *state {
            counter.fetch_add(1, Ordering::SeqCst);
        }
    });
    store.initialize(&provider);
    store.pump();
    assert_eq!(matched.load(Ordering::SeqCst), 1);
}

#[test]
fn unsubscribed_observer_is_not_called() {
    let provider = ScriptedProvider::default();
    let store = SessionStore::new();
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let id = store.subscribe(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    store.unsubscribe(id);
    store.initialize(&provider);
    store.pump();
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

// =============================================================
// Lifecycle
// =============================================================

#[test]
fn initialize_subscribes_only_once() {
    let provider = ScriptedProvider::default();
    let store = SessionStore::new();
    store.initialize(&provider);
    store.initialize(&provider);
    assert_eq!(provider.subscriptions.load(Ordering::SeqCst), 1);
}

#[test]
fn teardown_is_idempotent_and_unsubscribes() {
    let provider = ScriptedProvider::default();
    let store = SessionStore::new();
    store.initialize(&provider);
    store.pump();

    store.teardown();
    store.teardown();
    provider.feed.publish(&Some(identity("late")));

    assert_eq!(store.pump(), 0);
    assert_eq!(store.current().identity, None);
    assert_eq!(provider.feed.subscriber_count(), 0);
}

#[test]
fn initialize_after_teardown_is_ignored() {
    let provider = ScriptedProvider::default();
    let store = SessionStore::new();
    store.teardown();
    store.initialize(&provider);
    assert_eq!(provider.subscriptions.load(Ordering::SeqCst), 0);
}

#[test]
fn listen_applies_changes_until_feed_closes() {
    let provider = MemoryIdentityProvider::new();
    let store = SessionStore::new();
    store.initialize(&provider);
    block_on(provider.create_account("fern@example.com", "Abcdef1!")).unwrap();

    // Closing the store's own receiver after the queued events ends the loop.
    let listener = store.listen();
    drop(provider);
    block_on(listener);

    let state = store.current();
    assert!(!state.is_loading);
    assert_eq!(state.email(), Some("fern@example.com"));
}

#[test]
fn listen_returns_immediately_after_teardown() {
    let provider = ScriptedProvider::default();
    let store = SessionStore::new();
    store.initialize(&provider);
    store.teardown();
    block_on(store.listen());
    assert!(store.current().is_loading);
}

#[test]
fn second_listen_keeps_first_listener_abortable() {
    let provider = ScriptedProvider::default();
    let store = SessionStore::new();
    store.initialize(&provider);

    let first = store.listen();
    block_on(store.listen());

    // The feed is still open, so `first` only finishes if teardown aborts it.
    store.teardown();
    block_on(first);
    assert!(store.current().is_loading);
}
