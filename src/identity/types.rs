//! Identity value types shared by providers, the gateway, and the session store.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Provider id for email + password accounts.
pub const PASSWORD_PROVIDER_ID: &str = "password";
/// Provider id for accounts federated through Google.
pub const GOOGLE_PROVIDER_ID: &str = "google.com";

/// The signed-in principal as reported by the identity provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Provider-assigned unique identifier.
    pub uid: String,
    /// Display name, if the account has one.
    pub display_name: Option<String>,
    /// Account email, if known.
    pub email: Option<String>,
    /// Profile image URL, if set.
    pub photo_url: Option<String>,
    /// How the account was authenticated.
    pub provider: ProviderInfo,
}

/// Provider metadata attached to an [`Identity`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderInfo {
    /// Sign-in method (`"password"`, `"google.com"`).
    pub provider_id: String,
    /// Account creation time (milliseconds since epoch, as reported).
    pub created_at: Option<String>,
    /// Last sign-in time (milliseconds since epoch, as reported).
    pub last_sign_in_at: Option<String>,
}

impl Identity {
    /// Name to show in navigation chrome: display name, then email, then a
    /// generic label.
    pub fn label(&self) -> String {
        self.display_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .or(self.email.as_deref())
            .unwrap_or("Gardener")
            .to_owned()
    }
}

/// Email + password pair for credential sign-in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Input for creating a new account.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub display_name: String,
    pub photo_url: Option<String>,
}
