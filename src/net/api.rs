//! REST helpers for the tips and gardeners API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` against the
//! configured base URL. Server-side (SSR): stubs returning an error, since
//! data is only fetched after hydration.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result<_, String>` so pages can toast a failure and
//! keep rendering; nothing here panics or retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Gardener, Tip, TipDraft};

#[cfg(any(test, feature = "hydrate"))]
fn tips_endpoint(base: &str) -> String {
    format!("{base}/api/tips")
}

#[cfg(any(test, feature = "hydrate"))]
fn trending_tips_endpoint(base: &str) -> String {
    format!("{base}/api/tips/trending")
}

#[cfg(any(test, feature = "hydrate"))]
fn tip_endpoint(base: &str, id: &str) -> String {
    format!("{base}/api/tips/{}", urlencoding::encode(id))
}

#[cfg(any(test, feature = "hydrate"))]
fn like_tip_endpoint(base: &str, id: &str) -> String {
    format!("{}/like", tip_endpoint(base, id))
}

#[cfg(any(test, feature = "hydrate"))]
fn user_tips_endpoint(base: &str, email: &str) -> String {
    format!("{base}/api/tips/user/{}", urlencoding::encode(email))
}

#[cfg(any(test, feature = "hydrate"))]
fn gardeners_endpoint(base: &str) -> String {
    format!("{base}/api/gardeners")
}

#[cfg(any(test, feature = "hydrate"))]
fn active_gardeners_endpoint(base: &str) -> String {
    format!("{base}/api/gardeners/active")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(what: &str, status: u16) -> String {
    format!("{what} failed: {status}")
}

#[cfg(not(feature = "hydrate"))]
const SERVER_UNAVAILABLE: &str = "not available on server";

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str, what: &str) -> Result<T, String> {
    let resp = gloo_net::http::Request::get(url).send().await.map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(request_failed_message(what, resp.status()));
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

/// Fetch every tip via `GET /api/tips`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with a non-OK status.
pub async fn fetch_tips(base: &str) -> Result<Vec<Tip>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&tips_endpoint(base), "list tips").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = base;
        Err(SERVER_UNAVAILABLE.to_owned())
    }
}

/// Fetch the most-liked tips via `GET /api/tips/trending`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with a non-OK status.
pub async fn fetch_trending_tips(base: &str) -> Result<Vec<Tip>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&trending_tips_endpoint(base), "trending tips").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = base;
        Err(SERVER_UNAVAILABLE.to_owned())
    }
}

/// Fetch one tip via `GET /api/tips/:id`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with a non-OK status.
pub async fn fetch_tip(base: &str, id: &str) -> Result<Tip, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&tip_endpoint(base, id), "load tip").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (base, id);
        Err(SERVER_UNAVAILABLE.to_owned())
    }
}

/// Fetch the tips shared by `email` via `GET /api/tips/user/:email`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with a non-OK status.
pub async fn fetch_user_tips(base: &str, email: &str) -> Result<Vec<Tip>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&user_tips_endpoint(base, email), "list user tips").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (base, email);
        Err(SERVER_UNAVAILABLE.to_owned())
    }
}

/// Create a tip via `POST /api/tips`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with a non-OK status.
pub async fn create_tip(base: &str, draft: &TipDraft) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&tips_endpoint(base))
            .json(draft)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("create tip", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (base, draft);
        Err(SERVER_UNAVAILABLE.to_owned())
    }
}

/// Replace a tip's fields via `PUT /api/tips/:id`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with a non-OK status.
pub async fn update_tip(base: &str, id: &str, draft: &TipDraft) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::put(&tip_endpoint(base, id))
            .json(draft)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("update tip", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (base, id, draft);
        Err(SERVER_UNAVAILABLE.to_owned())
    }
}

/// Add one like via `PATCH /api/tips/:id/like`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with a non-OK status.
pub async fn like_tip(base: &str, id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::patch(&like_tip_endpoint(base, id))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("like tip", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (base, id);
        Err(SERVER_UNAVAILABLE.to_owned())
    }
}

/// Delete a tip via `DELETE /api/tips/:id`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with a non-OK status.
pub async fn delete_tip(base: &str, id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&tip_endpoint(base, id))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("delete tip", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (base, id);
        Err(SERVER_UNAVAILABLE.to_owned())
    }
}

/// Fetch every gardener profile via `GET /api/gardeners`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with a non-OK status.
pub async fn fetch_gardeners(base: &str) -> Result<Vec<Gardener>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&gardeners_endpoint(base), "list gardeners").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = base;
        Err(SERVER_UNAVAILABLE.to_owned())
    }
}

/// Fetch the featured active gardeners via `GET /api/gardeners/active`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with a non-OK status.
pub async fn fetch_active_gardeners(base: &str) -> Result<Vec<Gardener>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&active_gardeners_endpoint(base), "active gardeners").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = base;
        Err(SERVER_UNAVAILABLE.to_owned())
    }
}
