use futures::executor::block_on;

use super::*;
use crate::identity::memory::{FederatedOutcome, MemoryIdentityProvider};
use crate::identity::password::PasswordRule;
use crate::identity::types::ProviderInfo;
use crate::state::auth::SessionStore;

const TOKEN: &str = "challenge-token";

fn setup() -> (Arc<MemoryIdentityProvider>, IdentityGateway, SessionStore) {
    let provider = Arc::new(MemoryIdentityProvider::new());
    let gateway = IdentityGateway::new(provider.clone());
    let store = SessionStore::new();
    store.initialize(provider.as_ref());
    store.pump();
    (provider, gateway, store)
}

fn registration(password: &str) -> Registration {
    Registration {
        email: "fern@example.com".to_owned(),
        password: password.to_owned(),
        display_name: " Fern ".to_owned(),
        photo_url: Some("https://img.example/fern.png".to_owned()),
    }
}

fn credentials(password: &str) -> Credentials {
    Credentials { email: "fern@example.com".to_owned(), password: password.to_owned() }
}

// =============================================================
// Client-side preconditions
// =============================================================

#[test]
fn login_with_empty_challenge_fails_without_provider_call() {
    let (provider, gateway, _store) = setup();
    let err = block_on(gateway.login(credentials("Abcdef1!"), "")).unwrap_err();
    assert_eq!(err, AuthError::ChallengeNotCompleted);
    assert_eq!(provider.call_count(), 0);
}

#[test]
fn whitespace_challenge_counts_as_empty() {
    let (provider, gateway, _store) = setup();
    let err = block_on(gateway.login_with_federated_provider("   ")).unwrap_err();
    assert_eq!(err, AuthError::ChallengeNotCompleted);
    assert_eq!(provider.call_count(), 0);
}

#[test]
fn register_checks_challenge_before_password_policy() {
    let (provider, gateway, _store) = setup();
    let err = block_on(gateway.register(registration("short"), "")).unwrap_err();
    assert_eq!(err, AuthError::ChallengeNotCompleted);
    assert_eq!(provider.call_count(), 0);
}

#[test]
fn register_rejects_policy_violation_without_provider_call() {
    let (provider, gateway, _store) = setup();
    let err = block_on(gateway.register(registration("abcdefgh"), TOKEN)).unwrap_err();
    assert_eq!(err, AuthError::PasswordPolicyViolation(PasswordRule::Uppercase));
    assert_eq!(provider.call_count(), 0);
}

#[test]
fn every_sign_in_operation_requires_challenge() {
    let (provider, gateway, _store) = setup();
    provider.set_federated_outcome(FederatedOutcome::Grant(Identity {
        uid: "g-1".to_owned(),
        display_name: None,
        email: Some("ivy@example.com".to_owned()),
        photo_url: None,
        provider: ProviderInfo::default(),
    }));

    let register = block_on(gateway.register(registration("Abcdef1!"), "")).unwrap_err();
    let login = block_on(gateway.login(credentials("Abcdef1!"), "")).unwrap_err();
    let federated = block_on(gateway.login_with_federated_provider("")).unwrap_err();

    assert_eq!(register, AuthError::ChallengeNotCompleted);
    assert_eq!(login, AuthError::ChallengeNotCompleted);
    assert_eq!(federated, AuthError::ChallengeNotCompleted);
    assert_eq!(provider.call_count(), 0);
}

// =============================================================
// Register
// =============================================================

#[test]
fn register_returns_identity_with_profile_applied() {
    let (_provider, gateway, _store) = setup();
    let identity = block_on(gateway.register(registration("Abcdef1!"), TOKEN)).unwrap();
    assert_eq!(identity.display_name.as_deref(), Some("Fern"));
    assert_eq!(identity.photo_url.as_deref(), Some("https://img.example/fern.png"));
}

#[test]
fn register_updates_store_only_after_notification_cycle() {
    let (_provider, gateway, store) = setup();
    let identity = block_on(gateway.register(registration("Abcdef1!"), TOKEN)).unwrap();

    assert!(store.current().identity.is_none(), "store is written by the feed, not the gateway");
    store.pump();
    assert_eq!(store.current().identity, Some(identity));
}

#[test]
fn register_blank_photo_is_omitted() {
    let (_provider, gateway, _store) = setup();
    let mut input = registration("Abcdef1!");
    input.photo_url = Some("   ".to_owned());
    let identity = block_on(gateway.register(input, TOKEN)).unwrap();
    assert_eq!(identity.photo_url, None);
}

#[test]
fn register_duplicate_email_maps_to_email_already_in_use() {
    let (_provider, gateway, _store) = setup();
    block_on(gateway.register(registration("Abcdef1!"), TOKEN)).unwrap();
    let err = block_on(gateway.register(registration("Abcdef1!"), TOKEN)).unwrap_err();
    assert_eq!(err, AuthError::EmailAlreadyInUse);
}

// =============================================================
// Login / logout
// =============================================================

#[test]
fn login_failures_are_typed() {
    let (_provider, gateway, _store) = setup();
    block_on(gateway.register(registration("Abcdef1!"), TOKEN)).unwrap();
    block_on(gateway.logout()).unwrap();

    assert_eq!(block_on(gateway.login(credentials("Wrong1!!"), TOKEN)).unwrap_err(), AuthError::WrongPassword);

    let unknown = Credentials { email: "moss@example.com".to_owned(), password: "Abcdef1!".to_owned() };
    assert_eq!(block_on(gateway.login(unknown, TOKEN)).unwrap_err(), AuthError::UserNotFound);

    let malformed = Credentials { email: "moss".to_owned(), password: "Abcdef1!".to_owned() };
    assert_eq!(block_on(gateway.login(malformed, TOKEN)).unwrap_err(), AuthError::InvalidCredential);
}

#[test]
fn login_then_notification_cycle_sets_identity() {
    let (_provider, gateway, store) = setup();
    block_on(gateway.register(registration("Abcdef1!"), TOKEN)).unwrap();
    block_on(gateway.logout()).unwrap();
    store.pump();

    let identity = block_on(gateway.login(credentials("Abcdef1!"), TOKEN)).unwrap();
    store.pump();

    assert_eq!(store.current().identity, Some(identity));
}

#[test]
fn logout_then_notification_cycle_clears_identity() {
    let (_provider, gateway, store) = setup();
    block_on(gateway.register(registration("Abcdef1!"), TOKEN)).unwrap();
    store.pump();
    assert!(store.current().is_authenticated());

    block_on(gateway.logout()).unwrap();
    store.pump();

    assert!(store.current().identity.is_none());
    assert!(!store.current().is_loading);
}

// =============================================================
// Federated login
// =============================================================

#[test]
fn federated_cancel_is_provider_error() {
    let (provider, gateway, _store) = setup();
    provider.set_federated_outcome(FederatedOutcome::Cancel);
    let err = block_on(gateway.login_with_federated_provider(TOKEN)).unwrap_err();
    assert!(matches!(err, AuthError::ProviderError(_)));
}

#[test]
fn federated_grant_behaves_like_login() {
    let (provider, gateway, store) = setup();
    provider.set_federated_outcome(FederatedOutcome::Grant(Identity {
        uid: "g-1".to_owned(),
        display_name: Some("Ivy".to_owned()),
        email: Some("ivy@example.com".to_owned()),
        photo_url: None,
        provider: ProviderInfo::default(),
    }));

    let identity = block_on(gateway.login_with_federated_provider(TOKEN)).unwrap();
    store.pump();

    assert_eq!(store.current().identity, Some(identity));
}
