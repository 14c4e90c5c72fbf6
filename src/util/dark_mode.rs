//! Theme initialization and toggle.
//!
//! Reads the user's preference from `localStorage` and toggles the `dark`
//! class on the `<html>` element. Toggle writes back to `localStorage`.
//! Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! no-op so server rendering stays deterministic (always light).

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "gardenhub_theme";
#[cfg(any(test, feature = "hydrate"))]
const DARK: &str = "dark";
#[cfg(any(test, feature = "hydrate"))]
const LIGHT: &str = "light";

/// Resolve a stored theme value, deferring to the system preference when
/// nothing usable is stored.
#[cfg(any(test, feature = "hydrate"))]
fn resolve_preference(stored: Option<&str>, system_prefers_dark: bool) -> bool {
    match stored {
        Some(DARK) => true,
        Some(LIGHT) => false,
        _ => system_prefers_dark,
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn stored_value(enabled: bool) -> &'static str {
    if enabled { DARK } else { LIGHT }
}

/// Read the theme preference.
///
/// Returns `true` if the user previously chose dark, or if the system prefers
/// dark and no preference is stored.
pub fn read_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        let stored = window
            .local_storage()
            .ok()
            .flatten()
            .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten());
        let system_prefers_dark = window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .is_some_and(|mq| mq.matches());
        resolve_preference(stored.as_deref(), system_prefers_dark)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Add or remove the `dark` class on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            let classes = el.class_list();
            let _ = if enabled { classes.add_1("dark") } else { classes.remove_1("dark") };
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Toggle the theme and persist the new preference.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(STORAGE_KEY, stored_value(next));
        }
    }
    next
}
