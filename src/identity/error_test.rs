use super::*;

#[test]
fn known_codes_map_to_typed_errors() {
    let cases = [
        (EMAIL_ALREADY_IN_USE, AuthError::EmailAlreadyInUse),
        (WEAK_PASSWORD, AuthError::WeakPassword),
        (USER_NOT_FOUND, AuthError::UserNotFound),
        (WRONG_PASSWORD, AuthError::WrongPassword),
        (INVALID_CREDENTIAL, AuthError::InvalidCredential),
    ];
    for (code, expected) in cases {
        assert_eq!(AuthError::from(ProviderRejection::new(code, "x")), expected, "code {code}");
    }
}

#[test]
fn unknown_codes_fall_back_to_provider_error() {
    let err = AuthError::from(ProviderRejection::new(POPUP_CLOSED, "closed"));
    assert_eq!(err, AuthError::ProviderError("auth/popup-closed-by-user: closed".to_owned()));
}

#[test]
fn user_message_uses_fallback_only_for_catch_all() {
    assert_eq!(
        AuthError::ProviderError("boom".to_owned()).user_message("Login failed. Please try again."),
        "Login failed. Please try again."
    );
    assert_eq!(AuthError::WrongPassword.user_message("ignored"), "Incorrect password");
}

#[test]
fn policy_violation_displays_rule_message() {
    let err = AuthError::PasswordPolicyViolation(PasswordRule::MinLength);
    assert_eq!(err.to_string(), "Password must be at least 8 characters long");
}
