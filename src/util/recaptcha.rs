//! Bridge to Google's reCAPTCHA v2 widget.
//!
//! The widget script is loaded with `render=explicit`; the login and register
//! pages render one widget each into their own container and read the
//! response token before submitting. Everything goes through
//! `window.grecaptcha` with `js_sys::Reflect` since the script has no Rust
//! bindings.

#[cfg(test)]
#[path = "recaptcha_test.rs"]
mod recaptcha_test;

use crate::config::{AppConfig, DEV_CHALLENGE_TOKEN};

/// Script tag source for explicit rendering.
pub const SCRIPT_URL: &str = "https://www.google.com/recaptcha/api.js?render=explicit";

/// Handle returned by `grecaptcha.render`.
pub type WidgetId = f64;

#[cfg(feature = "hydrate")]
mod browser {
    use js_sys::{Array, Function, Object, Reflect};
    use wasm_bindgen::{JsCast, JsValue};

    use super::WidgetId;

    fn grecaptcha() -> Option<Object> {
        let window = web_sys::window()?;
        let value = Reflect::get(&window, &JsValue::from_str("grecaptcha")).ok()?;
        value.dyn_into::<Object>().ok()
    }

    fn call(method: &str, args: &Array) -> Option<JsValue> {
        let target = grecaptcha()?;
        let function = Reflect::get(&target, &JsValue::from_str(method)).ok()?.dyn_into::<Function>().ok()?;
        function.apply(&target, args).ok()
    }

    /// Whether the widget script has finished loading.
    pub fn is_ready() -> bool {
        grecaptcha()
            .and_then(|target| Reflect::get(&target, &JsValue::from_str("render")).ok())
            .is_some_and(|render| render.is_function())
    }

    /// Render a widget into `container`.
    pub fn render(container: &web_sys::HtmlElement, site_key: &str) -> Option<WidgetId> {
        let options = Object::new();
        Reflect::set(&options, &JsValue::from_str("sitekey"), &JsValue::from_str(site_key)).ok()?;
        call("render", &Array::of2(container, &options))?.as_f64()
    }

    /// Current response token; empty until the user solves the challenge.
    pub fn response(widget: WidgetId) -> String {
        call("getResponse", &Array::of1(&JsValue::from_f64(widget)))
            .and_then(|value| value.as_string())
            .unwrap_or_default()
    }

    /// Clear the widget so the next attempt needs a fresh token.
    pub fn reset(widget: WidgetId) {
        let _ = call("reset", &Array::of1(&JsValue::from_f64(widget)));
    }
}

#[cfg(feature = "hydrate")]
pub use browser::{is_ready, render};

/// Token to submit with a sign-in attempt: the development token when the
/// bypass is configured, otherwise the widget response.
pub fn challenge_token(config: &AppConfig, widget: Option<WidgetId>) -> String {
    if config.challenge_bypass {
        return DEV_CHALLENGE_TOKEN.to_owned();
    }
    token(widget)
}

/// Token for the challenge in `widget`, or empty when no widget is rendered.
pub fn token(widget: Option<WidgetId>) -> String {
    #[cfg(feature = "hydrate")]
    {
        widget.map(browser::response).unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = widget;
        String::new()
    }
}

/// Reset `widget` if one is rendered.
pub fn reset(widget: Option<WidgetId>) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(widget) = widget {
            browser::reset(widget);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = widget;
    }
}
