use super::*;

use crate::identity::password::PasswordRule;

#[test]
fn credential_failures_use_their_own_message() {
    assert_eq!(login_failure_message(&AuthError::UserNotFound), "No account found with this email");
    assert_eq!(login_failure_message(&AuthError::WrongPassword), "Incorrect password");
    assert_eq!(login_failure_message(&AuthError::InvalidCredential), "Invalid email or password");
    assert_eq!(
        login_failure_message(&AuthError::ChallengeNotCompleted),
        "Please complete the reCAPTCHA verification"
    );
}

#[test]
fn provider_errors_fall_back_to_generic_login_message() {
    let err = AuthError::ProviderError("auth/internal-error: boom".to_owned());
    assert_eq!(login_failure_message(&err), LOGIN_FALLBACK);
}

#[test]
fn google_failures_collapse_to_one_message() {
    let closed = AuthError::ProviderError("auth/popup-closed-by-user: closed".to_owned());
    assert_eq!(google_failure_message(&closed), GOOGLE_FALLBACK);
    assert_eq!(google_failure_message(&AuthError::WrongPassword), GOOGLE_FALLBACK);
    assert_eq!(
        google_failure_message(&AuthError::PasswordPolicyViolation(PasswordRule::MinLength)),
        GOOGLE_FALLBACK
    );
}

#[test]
fn google_missing_challenge_keeps_specific_message() {
    assert_eq!(
        google_failure_message(&AuthError::ChallengeNotCompleted),
        "Please complete the reCAPTCHA verification"
    );
}
