//! Form for sharing a new tip.
//!
//! The owner fields are filled from the signed-in identity and are not
//! editable; the API trusts them as sent.

#[cfg(test)]
#[path = "share_tip_test.rs"]
mod share_tip_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::tip_form::TipFields;
use crate::config::AppConfig;
use crate::identity::types::Identity;
use crate::net::types::TipDraft;
use crate::state::auth::SessionState;
use crate::state::toast::{self, ToastState};

/// Blank draft owned by `identity`.
fn draft_for(identity: Option<&Identity>) -> TipDraft {
    TipDraft {
        user_email: identity.and_then(|i| i.email.clone()).unwrap_or_default(),
        user_name: identity.and_then(|i| i.display_name.clone()).unwrap_or_default(),
        ..TipDraft::default()
    }
}

/// Message for the first blank required field, if any.
fn missing_field_message(draft: &TipDraft) -> Option<String> {
    draft.first_missing_field().map(|field| format!("{field} is required"))
}

#[component]
pub fn ShareTipPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let draft = RwSignal::new(draft_for(session.get_untracked().identity.as_ref()));
    let busy = RwSignal::new(false);

    Effect::new(move || {
        let owner = draft_for(session.get().identity.as_ref());
        draft.update(|d| {
            d.user_email = owner.user_email;
            d.user_name = owner.user_name;
        });
    });

    let on_cancel_navigate = navigate.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let tip = draft.get_untracked();
        if let Some(message) = missing_field_message(&tip) {
            toast::error(toasts, message);
            return;
        }
        busy.set(true);
        let base = config.api_url.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::create_tip(&base, &tip).await {
                Ok(()) => {
                    toast::success(toasts, "Tip shared successfully!");
                    navigate("/my-tips", NavigateOptions::default());
                }
                Err(e) => {
                    log::warn!("share tip: {e}");
                    toast::error(toasts, "Failed to share tip. Please try again.");
                }
            }
            let _ = busy.try_set(false);
        });
    };

    view! {
        <div class="page page--narrow">
            <header class="page__header">
                <h1 class="page__title">"Share Your Garden Tip"</h1>
                <p class="page__subtitle">"Help others grow by sharing your gardening wisdom"</p>
            </header>

            <form class="card tip-form" on:submit=on_submit>
                <TipFields draft/>
                <div class="tip-form__actions">
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Sharing..." } else { "Share Tip" }}
                    </button>
                    <button
                        class="btn btn--outline"
                        type="button"
                        on:click=move |_| on_cancel_navigate("/my-tips", NavigateOptions::default())
                    >
                        "Cancel"
                    </button>
                </div>
            </form>
        </div>
    }
}
