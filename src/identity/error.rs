//! Typed failures for identity operations.
//!
//! ERROR HANDLING
//! ==============
//! Providers report a [`ProviderRejection`] carrying a canonical `auth/*`
//! code. The gateway folds those codes into [`AuthError`], which is what pages
//! turn into toast messages. Nothing here is retried or treated as fatal.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use super::password::PasswordRule;

pub const EMAIL_ALREADY_IN_USE: &str = "auth/email-already-in-use";
pub const WEAK_PASSWORD: &str = "auth/weak-password";
pub const USER_NOT_FOUND: &str = "auth/user-not-found";
pub const WRONG_PASSWORD: &str = "auth/wrong-password";
pub const INVALID_CREDENTIAL: &str = "auth/invalid-credential";
pub const USER_DISABLED: &str = "auth/user-disabled";
pub const POPUP_CLOSED: &str = "auth/popup-closed-by-user";
pub const POPUP_BLOCKED: &str = "auth/popup-blocked";
pub const POPUP_DENIED: &str = "auth/popup-denied";
pub const POPUP_TIMEOUT: &str = "auth/popup-timeout";
pub const OPERATION_NOT_ALLOWED: &str = "auth/operation-not-allowed";
pub const NO_CURRENT_USER: &str = "auth/no-current-user";
pub const SESSION_EXPIRED: &str = "auth/user-token-expired";
pub const NETWORK_FAILED: &str = "auth/network-request-failed";
pub const INTERNAL_ERROR: &str = "auth/internal-error";

/// A request the identity provider refused or could not complete.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{code}: {message}")]
pub struct ProviderRejection {
    /// Canonical `auth/*` code.
    pub code: String,
    /// Provider-supplied detail.
    pub message: String,
}

impl ProviderRejection {
    pub fn new(code: &str, message: impl Into<String>) -> Self {
        Self { code: code.to_owned(), message: message.into() }
    }
}

/// Failure of an identity gateway operation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("{0}")]
    PasswordPolicyViolation(PasswordRule),
    #[error("Please complete the reCAPTCHA verification")]
    ChallengeNotCompleted,
    #[error("Email already in use")]
    EmailAlreadyInUse,
    #[error("Password is too weak")]
    WeakPassword,
    #[error("No account found with this email")]
    UserNotFound,
    #[error("Incorrect password")]
    WrongPassword,
    #[error("Invalid email or password")]
    InvalidCredential,
    #[error("identity provider error: {0}")]
    ProviderError(String),
}

impl AuthError {
    /// Message for a toast, using `fallback` for the catch-all variant.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::ProviderError(_) => fallback.to_owned(),
            other => other.to_string(),
        }
    }
}

impl From<ProviderRejection> for AuthError {
    fn from(rejection: ProviderRejection) -> Self {
        match rejection.code.as_str() {
            EMAIL_ALREADY_IN_USE => Self::EmailAlreadyInUse,
            WEAK_PASSWORD => Self::WeakPassword,
            USER_NOT_FOUND => Self::UserNotFound,
            WRONG_PASSWORD => Self::WrongPassword,
            INVALID_CREDENTIAL => Self::InvalidCredential,
            _ => Self::ProviderError(rejection.to_string()),
        }
    }
}
