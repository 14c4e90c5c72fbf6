//! Identity provider backed by the Identity Toolkit REST API.
//!
//! ARCHITECTURE
//! ============
//! Credential calls go straight to `accounts:*` endpoints with `gloo-net`.
//! The resulting ID/refresh tokens and identity are persisted to
//! `localStorage`, so a reload restores the session the same way the hosted
//! SDK does: the stored identity is the first change notification, and
//! `restore_session` then refreshes the token and
//! signs the user out if the session has expired.
//!
//! ERROR HANDLING
//! ==============
//! REST error messages (`EMAIL_EXISTS`, `INVALID_PASSWORD`, ...) are mapped to
//! canonical `auth/*` codes here; transport failures become
//! `auth/network-request-failed`.

#[cfg(test)]
#[path = "firebase_test.rs"]
mod firebase_test;

#[cfg(any(test, feature = "hydrate"))]
use serde::{Deserialize, Serialize};

#[cfg(any(test, feature = "hydrate"))]
use super::error::{
    EMAIL_ALREADY_IN_USE, INTERNAL_ERROR, INVALID_CREDENTIAL, OPERATION_NOT_ALLOWED, ProviderRejection,
    SESSION_EXPIRED, USER_DISABLED, USER_NOT_FOUND, WEAK_PASSWORD, WRONG_PASSWORD,
};
#[cfg(any(test, feature = "hydrate"))]
use super::types::{Identity, ProviderInfo};

#[cfg(any(test, feature = "hydrate"))]
const IDENTITY_TOOLKIT_BASE: &str = "https://identitytoolkit.googleapis.com/v1";
#[cfg(any(test, feature = "hydrate"))]
const SECURE_TOKEN_BASE: &str = "https://securetoken.googleapis.com/v1";
#[cfg(feature = "hydrate")]
const SESSION_STORAGE_KEY: &str = "gardenhub_session";

#[cfg(any(test, feature = "hydrate"))]
fn accounts_endpoint(operation: &str, api_key: &str) -> String {
    format!("{IDENTITY_TOOLKIT_BASE}/accounts:{operation}?key={api_key}")
}

#[cfg(any(test, feature = "hydrate"))]
fn token_endpoint(api_key: &str) -> String {
    format!("{SECURE_TOKEN_BASE}/token?key={api_key}")
}

/// Map an Identity Toolkit error message to a canonical rejection.
///
/// Messages look like `EMAIL_EXISTS` or
/// `WEAK_PASSWORD : Password should be at least 6 characters`.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn rejection_from_rest_message(message: &str) -> ProviderRejection {
    let (head, detail) = message.split_once(" : ").unwrap_or((message, ""));
    let head = head.trim();
    let code = match head {
        "EMAIL_EXISTS" => EMAIL_ALREADY_IN_USE,
        "WEAK_PASSWORD" => WEAK_PASSWORD,
        "EMAIL_NOT_FOUND" => USER_NOT_FOUND,
        "INVALID_PASSWORD" => WRONG_PASSWORD,
        "INVALID_LOGIN_CREDENTIALS" | "INVALID_EMAIL" | "MISSING_PASSWORD" | "MISSING_EMAIL" | "INVALID_IDP_RESPONSE" => {
            INVALID_CREDENTIAL
        }
        "USER_DISABLED" => USER_DISABLED,
        "OPERATION_NOT_ALLOWED" | "PASSWORD_LOGIN_DISABLED" => OPERATION_NOT_ALLOWED,
        "TOKEN_EXPIRED" | "INVALID_ID_TOKEN" | "INVALID_REFRESH_TOKEN" | "USER_NOT_FOUND" | "CREDENTIAL_TOO_OLD_LOGIN_AGAIN" => {
            SESSION_EXPIRED
        }
        _ => INTERNAL_ERROR,
    };
    let detail = if detail.trim().is_empty() { head } else { detail.trim() };
    ProviderRejection::new(code, detail)
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Deserialize)]
struct RestErrorBody {
    error: RestError,
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Deserialize)]
struct RestError {
    message: String,
}

/// Response shape shared by `signUp`, `signInWithPassword`, `update`, and
/// `signInWithIdp`.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AuthResponse {
    local_id: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    photo_url: Option<String>,
    #[serde(default)]
    id_token: Option<String>,
    #[serde(default)]
    refresh_token: Option<String>,
}

#[cfg(any(test, feature = "hydrate"))]
impl AuthResponse {
    fn into_identity(self, provider_id: &str) -> Identity {
        Identity {
            uid: self.local_id,
            display_name: self.display_name.filter(|name| !name.is_empty()),
            email: self.email,
            photo_url: self.photo_url.filter(|url| !url.is_empty()),
            provider: ProviderInfo { provider_id: provider_id.to_owned(), ..ProviderInfo::default() },
        }
    }
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Deserialize)]
struct LookupResponse {
    #[serde(default)]
    users: Vec<LookupUser>,
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LookupUser {
    local_id: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    photo_url: Option<String>,
    #[serde(default)]
    created_at: Option<String>,
    #[serde(default)]
    last_login_at: Option<String>,
    #[serde(default)]
    provider_user_info: Vec<ProviderUserInfo>,
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProviderUserInfo {
    provider_id: String,
}

#[cfg(any(test, feature = "hydrate"))]
impl LookupUser {
    fn into_identity(self, fallback_provider: &str) -> Identity {
        let provider_id = self
            .provider_user_info
            .into_iter()
            .next()
            .map_or_else(|| fallback_provider.to_owned(), |info| info.provider_id);
        Identity {
            uid: self.local_id,
            display_name: self.display_name.filter(|name| !name.is_empty()),
            email: self.email,
            photo_url: self.photo_url.filter(|url| !url.is_empty()),
            provider: ProviderInfo {
                provider_id,
                created_at: self.created_at,
                last_sign_in_at: self.last_login_at,
            },
        }
    }
}

/// `securetoken` refresh response (snake_case on the wire).
#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Deserialize)]
struct TokenResponse {
    id_token: String,
    refresh_token: String,
}

/// What survives a page reload.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
struct StoredSession {
    identity: Identity,
    id_token: String,
    refresh_token: String,
}

// =============================================================================
// PROVIDER
// =============================================================================

#[cfg(feature = "hydrate")]
pub use browser::FirebaseIdentityProvider;

#[cfg(feature = "hydrate")]
mod browser {
    use std::sync::{Mutex, MutexGuard, PoisonError};

    use serde::de::DeserializeOwned;

    use super::*;
    use crate::identity::error::{NETWORK_FAILED, NO_CURRENT_USER};
    use crate::identity::popup;
    use crate::identity::provider::{ChangeFeed, IdentityChanges, IdentityProvider};
    use crate::identity::types::{GOOGLE_PROVIDER_ID, PASSWORD_PROVIDER_ID};

    /// Browser identity provider over the Identity Toolkit REST API.
    pub struct FirebaseIdentityProvider {
        api_key: String,
        google_client_id: Option<String>,
        session: Mutex<Option<StoredSession>>,
        feed: ChangeFeed,
    }

    impl FirebaseIdentityProvider {
        /// Build the provider, picking up any session persisted by an earlier page load.
        pub fn new(api_key: String, google_client_id: Option<String>) -> Self {
            Self { api_key, google_client_id, session: Mutex::new(load_session()), feed: ChangeFeed::default() }
        }

        fn lock(&self) -> MutexGuard<'_, Option<StoredSession>> {
            self.session.lock().unwrap_or_else(PoisonError::into_inner)
        }

        async fn lookup(&self, id_token: &str, fallback_provider: &str) -> Result<Identity, ProviderRejection> {
            let body = serde_json::json!({ "idToken": id_token });
            let response: LookupResponse = post_json(&accounts_endpoint("lookup", &self.api_key), &body).await?;
            response
                .users
                .into_iter()
                .next()
                .map(|user| user.into_identity(fallback_provider))
                .ok_or_else(|| ProviderRejection::new(SESSION_EXPIRED, "account no longer exists"))
        }

        fn establish(&self, identity: Identity, id_token: String, refresh_token: String, publish: bool) -> Identity {
            let stored = StoredSession { identity: identity.clone(), id_token, refresh_token };
            save_session(&stored);
            *self.lock() = Some(stored);
            if publish {
                self.feed.publish(&Some(identity.clone()));
            }
            identity
        }

        fn clear(&self) {
            clear_stored_session();
            *self.lock() = None;
            self.feed.publish(&None);
        }

        fn tokens_from(response: &AuthResponse) -> Result<(String, String), ProviderRejection> {
            match (&response.id_token, &response.refresh_token) {
                (Some(id_token), Some(refresh_token)) => Ok((id_token.clone(), refresh_token.clone())),
                _ => Err(ProviderRejection::new(INTERNAL_ERROR, "provider response carried no session tokens")),
            }
        }
    }

    #[async_trait::async_trait(?Send)]
    impl IdentityProvider for FirebaseIdentityProvider {
        async fn create_account(&self, email: &str, password: &str) -> Result<Identity, ProviderRejection> {
            let body = serde_json::json!({ "email": email, "password": password, "returnSecureToken": true });
            let response: AuthResponse = post_json(&accounts_endpoint("signUp", &self.api_key), &body).await?;
            let (id_token, refresh_token) = Self::tokens_from(&response)?;
            let identity = response.into_identity(PASSWORD_PROVIDER_ID);
            Ok(self.establish(identity, id_token, refresh_token, true))
        }

        async fn update_profile(
            &self,
            display_name: &str,
            photo_url: Option<&str>,
        ) -> Result<Identity, ProviderRejection> {
            let Some(current) = self.lock().clone() else {
                return Err(ProviderRejection::new(NO_CURRENT_USER, "no signed-in account"));
            };
            let mut body = serde_json::json!({
                "idToken": current.id_token,
                "displayName": display_name,
                "returnSecureToken": true,
            });
            match photo_url {
                Some(url) => body["photoUrl"] = serde_json::Value::from(url),
                None => body["deleteAttribute"] = serde_json::json!(["PHOTO_URL"]),
            }
            let response: AuthResponse = post_json(&accounts_endpoint("update", &self.api_key), &body).await?;

            let mut identity = current.identity.clone();
            identity.display_name = Some(display_name.to_owned());
            identity.photo_url = photo_url.map(str::to_owned);
            let id_token = response.id_token.unwrap_or(current.id_token);
            let refresh_token = response.refresh_token.unwrap_or(current.refresh_token);
            Ok(self.establish(identity, id_token, refresh_token, true))
        }

        async fn sign_in(&self, email: &str, password: &str) -> Result<Identity, ProviderRejection> {
            let body = serde_json::json!({ "email": email, "password": password, "returnSecureToken": true });
            let response: AuthResponse =
                post_json(&accounts_endpoint("signInWithPassword", &self.api_key), &body).await?;
            let (id_token, refresh_token) = Self::tokens_from(&response)?;
            let identity = match self.lookup(&id_token, PASSWORD_PROVIDER_ID).await {
                Ok(identity) => identity,
                Err(_) => response.into_identity(PASSWORD_PROVIDER_ID),
            };
            Ok(self.establish(identity, id_token, refresh_token, true))
        }

        async fn sign_in_with_popup(&self) -> Result<Identity, ProviderRejection> {
            let Some(client_id) = self.google_client_id.as_deref() else {
                return Err(ProviderRejection::new(OPERATION_NOT_ALLOWED, "federated sign-in is not configured"));
            };
            let google_token = popup::request_google_id_token(client_id).await?;
            let request_uri = web_sys::window()
                .and_then(|window| window.location().origin().ok())
                .unwrap_or_else(|| "http://localhost".to_owned());
            let body = serde_json::json!({
                "postBody": format!("id_token={google_token}&providerId={GOOGLE_PROVIDER_ID}"),
                "requestUri": request_uri,
                "returnIdpCredential": true,
                "returnSecureToken": true,
            });
            let response: AuthResponse =
                post_json(&accounts_endpoint("signInWithIdp", &self.api_key), &body).await?;
            let (id_token, refresh_token) = Self::tokens_from(&response)?;
            let identity = response.into_identity(GOOGLE_PROVIDER_ID);
            Ok(self.establish(identity, id_token, refresh_token, true))
        }

        async fn sign_out(&self) -> Result<(), ProviderRejection> {
            self.clear();
            Ok(())
        }

        fn subscribe(&self) -> IdentityChanges {
            let current = self.lock().as_ref().map(|stored| stored.identity.clone());
            self.feed.subscribe(current)
        }

        async fn restore_session(&self) {
            let Some(stored) = self.lock().clone() else {
                return;
            };
            let body = serde_json::json!({
                "grant_type": "refresh_token",
                "refresh_token": stored.refresh_token,
            });
            match post_json::<TokenResponse>(&token_endpoint(&self.api_key), &body).await {
                Ok(tokens) => {
                    let identity = match self.lookup(&tokens.id_token, &stored.identity.provider.provider_id).await {
                        Ok(identity) => identity,
                        Err(_) => stored.identity.clone(),
                    };
                    let changed = identity != stored.identity;
                    self.establish(identity, tokens.id_token, tokens.refresh_token, changed);
                    log::debug!("identity: restored session refreshed");
                }
                Err(rejection) if rejection.code == NETWORK_FAILED => {
                    log::warn!("identity: could not refresh session, keeping it: {rejection}");
                }
                Err(rejection) => {
                    log::info!("identity: stored session no longer valid: {rejection}");
                    self.clear();
                }
            }
        }
    }

    async fn post_json<T: DeserializeOwned>(url: &str, body: &serde_json::Value) -> Result<T, ProviderRejection> {
        let request = gloo_net::http::Request::post(url)
            .json(body)
            .map_err(|e| ProviderRejection::new(INTERNAL_ERROR, e.to_string()))?;
        let resp = request.send().await.map_err(|e| ProviderRejection::new(NETWORK_FAILED, e.to_string()))?;
        if !resp.ok() {
            let status = resp.status();
            let message = resp
                .json::<RestErrorBody>()
                .await
                .map_or_else(|_| format!("status {status}"), |body| body.error.message);
            return Err(rejection_from_rest_message(&message));
        }
        resp.json::<T>().await.map_err(|e| ProviderRejection::new(INTERNAL_ERROR, e.to_string()))
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }

    fn load_session() -> Option<StoredSession> {
        let raw = storage()?.get_item(SESSION_STORAGE_KEY).ok().flatten()?;
        match serde_json::from_str(&raw) {
            Ok(stored) => Some(stored),
            Err(e) => {
                log::warn!("identity: discarding unreadable stored session: {e}");
                clear_stored_session();
                None
            }
        }
    }

    fn save_session(stored: &StoredSession) {
        let Some(storage) = storage() else {
            return;
        };
        if let Ok(raw) = serde_json::to_string(stored) {
            let _ = storage.set_item(SESSION_STORAGE_KEY, &raw);
        }
    }

    fn clear_stored_session() {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(SESSION_STORAGE_KEY);
        }
    }
}
