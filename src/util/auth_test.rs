use super::*;
use crate::identity::types::{Identity, ProviderInfo};

fn signed_in() -> SessionState {
    SessionState {
        identity: Some(Identity {
            uid: "u1".to_owned(),
            display_name: Some("Alice".to_owned()),
            email: Some("alice@example.com".to_owned()),
            photo_url: None,
            provider: ProviderInfo::default(),
        }),
        is_loading: false,
    }
}

fn signed_out() -> SessionState {
    SessionState { identity: None, is_loading: false }
}

#[test]
fn loading_never_renders_or_redirects() {
    let state = SessionState::default();
    assert_eq!(decide(&state, "/my-tips"), GuardDecision::Loading);
}

#[test]
fn loading_wins_even_if_identity_present() {
    let mut state = signed_in();
    state.is_loading = true;
    assert_eq!(decide(&state, "/my-tips"), GuardDecision::Loading);
}

#[test]
fn signed_in_renders() {
    assert_eq!(decide(&signed_in(), "/share-tip"), GuardDecision::Render);
}

#[test]
fn signed_out_redirects_to_login_with_intent() {
    let decision = decide(&signed_out(), "/tip/abc");
    assert_eq!(
        decision,
        GuardDecision::Redirect {
            to: LOGIN_PATH.to_owned(),
            intent: NavigationIntent { target_path: "/tip/abc".to_owned(), origin_path: LOGIN_PATH.to_owned() },
        }
    );
}

#[test]
fn login_after_redirect_returns_to_original_target() {
    let mut intents = NavigationIntents::default();
    let GuardDecision::Redirect { intent, .. } = decide(&signed_out(), "/my-tips") else {
        panic!("expected redirect");
    };
    intents.record(intent);

    assert_eq!(intents.take_destination(LOGIN_PATH), "/my-tips");
}

#[test]
fn intent_is_consumed_exactly_once() {
    let mut intents = NavigationIntents::default();
    intents.record(NavigationIntent { target_path: "/my-tips".to_owned(), origin_path: LOGIN_PATH.to_owned() });

    assert_eq!(intents.take_destination(LOGIN_PATH), "/my-tips");
    assert_eq!(intents.take_destination(LOGIN_PATH), DEFAULT_LANDING_PATH);
    assert!(intents.pending().is_none());
}

#[test]
fn login_without_intent_goes_to_default_landing() {
    let mut intents = NavigationIntents::default();
    assert_eq!(intents.take_destination(LOGIN_PATH), DEFAULT_LANDING_PATH);
}

#[test]
fn intent_from_other_origin_is_not_honored() {
    let mut intents = NavigationIntents::default();
    intents.record(NavigationIntent { target_path: "/my-tips".to_owned(), origin_path: LOGIN_PATH.to_owned() });
    assert_eq!(intents.take_destination("/register"), DEFAULT_LANDING_PATH);
    assert!(intents.pending().is_none());
}

#[test]
fn discard_drops_pending_intent() {
    let mut intents = NavigationIntents::default();
    intents.record(NavigationIntent { target_path: "/share-tip".to_owned(), origin_path: LOGIN_PATH.to_owned() });
    intents.discard();
    assert_eq!(intents.take_destination(LOGIN_PATH), DEFAULT_LANDING_PATH);
}

#[test]
fn newer_intent_replaces_older() {
    let mut intents = NavigationIntents::default();
    intents.record(NavigationIntent { target_path: "/share-tip".to_owned(), origin_path: LOGIN_PATH.to_owned() });
    intents.record(NavigationIntent { target_path: "/my-tips".to_owned(), origin_path: LOGIN_PATH.to_owned() });
    assert_eq!(intents.take_destination(LOGIN_PATH), "/my-tips");
}
