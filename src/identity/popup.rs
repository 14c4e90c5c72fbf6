//! Google consent popup used for federated sign-in.
//!
//! The popup runs Google's implicit OpenID flow and lands back on
//! [`POPUP_CALLBACK_PATH`] on our own origin, where the `id_token` sits in the
//! URL fragment. The opener polls the popup until that page is readable,
//! takes the token, and closes the window.

#[cfg(test)]
#[path = "popup_test.rs"]
mod popup_test;

#[cfg(any(test, feature = "hydrate"))]
use super::error::{POPUP_DENIED, ProviderRejection};

/// Route the popup returns to after consent.
pub const POPUP_CALLBACK_PATH: &str = "/auth/popup";

#[cfg(any(test, feature = "hydrate"))]
const GOOGLE_AUTHORIZE_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";

#[cfg(feature = "hydrate")]
const POPUP_POLL_MS: u64 = 250;
/// Five minutes of polling before giving up.
#[cfg(feature = "hydrate")]
const POPUP_MAX_POLLS: u32 = 1200;

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn google_authorize_url(client_id: &str, redirect_uri: &str, state: &str) -> String {
    format!(
        "{GOOGLE_AUTHORIZE_URL}?client_id={}&redirect_uri={}&response_type=id_token&scope={}&nonce={state}&state={state}&prompt=select_account",
        urlencoding::encode(client_id),
        urlencoding::encode(redirect_uri),
        urlencoding::encode("openid email profile"),
    )
}

/// Read the popup's URL fragment.
///
/// Returns `None` while the fragment carries neither a token nor an error,
/// which is the case until Google redirects back.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn parse_popup_fragment(fragment: &str, expected_state: &str) -> Option<Result<String, ProviderRejection>> {
    let mut id_token = None;
    let mut error = None;
    let mut state = None;
    for pair in fragment.trim_start_matches('#').split('&') {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        let value = urlencoding::decode(value).map(|v| v.into_owned()).unwrap_or_else(|_| value.to_owned());
        match key {
            "id_token" => id_token = Some(value),
            "error" => error = Some(value),
            "state" => state = Some(value),
            _ => {}
        }
    }

    if let Some(error) = error {
        return Some(Err(ProviderRejection::new(POPUP_DENIED, error)));
    }
    let token = id_token?;
    if state.as_deref() != Some(expected_state) {
        return Some(Err(ProviderRejection::new(POPUP_DENIED, "state mismatch in consent response")));
    }
    Some(Ok(token))
}

/// Open the consent popup and wait for Google's `id_token`.
///
/// # Errors
///
/// Returns a [`ProviderRejection`] when the popup is blocked, closed, denied,
/// or does not finish within five minutes.
#[cfg(feature = "hydrate")]
pub async fn request_google_id_token(client_id: &str) -> Result<String, ProviderRejection> {
    use super::error::{INTERNAL_ERROR, POPUP_BLOCKED, POPUP_CLOSED, POPUP_TIMEOUT};

    let window = web_sys::window().ok_or_else(|| ProviderRejection::new(INTERNAL_ERROR, "no browser window"))?;
    let origin = window
        .location()
        .origin()
        .map_err(|_| ProviderRejection::new(INTERNAL_ERROR, "cannot read window origin"))?;
    let redirect_uri = format!("{origin}{POPUP_CALLBACK_PATH}");
    let state = uuid::Uuid::new_v4().simple().to_string();
    let url = google_authorize_url(client_id, &redirect_uri, &state);

    let popup = window
        .open_with_url_and_target_and_features(&url, "gardenhub-federated", "width=500,height=640")
        .ok()
        .flatten()
        .ok_or_else(|| ProviderRejection::new(POPUP_BLOCKED, "the browser blocked the sign-in popup"))?;

    for _ in 0..POPUP_MAX_POLLS {
        gloo_timers::future::sleep(std::time::Duration::from_millis(POPUP_POLL_MS)).await;
        if popup.closed().unwrap_or(true) {
            return Err(ProviderRejection::new(POPUP_CLOSED, "the popup was closed before sign-in completed"));
        }
        // Unreadable while the popup is on Google's origin.
        let Ok(href) = popup.location().href() else {
            continue;
        };
        if !href.starts_with(&redirect_uri) {
            continue;
        }
        let fragment = popup.location().hash().unwrap_or_default();
        if let Some(result) = parse_popup_fragment(&fragment, &state) {
            let _ = popup.close();
            return result;
        }
    }

    let _ = popup.close();
    Err(ProviderRejection::new(POPUP_TIMEOUT, "sign-in popup timed out"))
}
