//! Bot-verification widget container.
//!
//! Renders nothing when no site key is configured. Otherwise it waits for the
//! widget script, renders one widget into its container, and publishes the
//! widget handle so the owning page can read and reset the token.

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::util::recaptcha::WidgetId;

#[cfg(feature = "hydrate")]
const SCRIPT_POLL_MS: u32 = 100;
#[cfg(feature = "hydrate")]
const SCRIPT_MAX_POLLS: u32 = 100;

#[component]
pub fn RecaptchaWidget(widget: RwSignal<Option<WidgetId>>) -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let container = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    if let Some(site_key) = config.recaptcha_site_key.clone() {
        Effect::new(move || {
            let Some(el) = container.get() else {
                return;
            };
            if widget.get_untracked().is_some() {
                return;
            }
            let site_key = site_key.clone();
            leptos::task::spawn_local(async move {
                for _ in 0..SCRIPT_MAX_POLLS {
                    if crate::util::recaptcha::is_ready() {
                        let rendered = crate::util::recaptcha::render(&el, &site_key);
                        if rendered.is_none() {
                            log::warn!("recaptcha: widget did not render");
                        }
                        let _ = widget.try_set(rendered);
                        return;
                    }
                    gloo_timers::future::TimeoutFuture::new(SCRIPT_POLL_MS).await;
                }
                log::warn!("recaptcha: script never loaded");
            });
        });
    }

    #[cfg(not(feature = "hydrate"))]
    let _ = widget;

    let enabled = config.challenge_widget_enabled();
    view! {
        <Show when=move || enabled>
            <div class="recaptcha" node_ref=container></div>
        </Show>
    }
}
