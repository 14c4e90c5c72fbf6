//! Edit form for one of the signed-in gardener's tips.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::loading_spinner::LoadingSpinner;
use crate::components::tip_form::TipFields;
use crate::config::AppConfig;
use crate::net::types::TipDraft;
use crate::state::toast::{self, ToastState};

#[component]
pub fn UpdateTipPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let params = use_params_map();
    let navigate = use_navigate();
    let tip_id = move || params.read().get("id").unwrap_or_default();

    let draft = RwSignal::new(TipDraft::default());
    let busy = RwSignal::new(false);

    let base = config.api_url.clone();
    let original = LocalResource::new(move || {
        let base = base.clone();
        let id = tip_id();
        async move {
            match crate::net::api::fetch_tip(&base, &id).await {
                Ok(tip) => {
                    let _ = draft.try_set(TipDraft::from(&tip));
                    true
                }
                Err(e) => {
                    log::warn!("update tip: load {id}: {e}");
                    toast::error(toasts, "Failed to load tip details");
                    false
                }
            }
        }
    });

    let on_cancel_navigate = navigate.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let tip = draft.get_untracked();
        if let Some(field) = tip.first_missing_field() {
            toast::error(toasts, format!("{field} is required"));
            return;
        }
        busy.set(true);
        let base = config.api_url.clone();
        let id = tip_id();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::update_tip(&base, &id, &tip).await {
                Ok(()) => {
                    toast::success(toasts, "Tip updated successfully!");
                    navigate("/my-tips", NavigateOptions::default());
                }
                Err(e) => {
                    log::warn!("update tip: {id}: {e}");
                    toast::error(toasts, "Failed to update tip. Please try again.");
                }
            }
            let _ = busy.try_set(false);
        });
    };

    view! {
        <div class="page page--narrow">
            <header class="page__header">
                <h1 class="page__title">"Update Your Garden Tip"</h1>
                <p class="page__subtitle">"Make changes to your shared tip"</p>
            </header>

            <Suspense fallback=|| view! { <LoadingSpinner/> }>
                {move || {
                    original.get().map(|found| {
                        (!found).then(|| view! {
                            <div class="empty-state">
                                <h2>"Tip not found"</h2>
                                <a class="btn btn--primary" href="/my-tips">"Back to My Tips"</a>
                            </div>
                        })
                    })
                }}
            </Suspense>

            <form class="card tip-form" hidden=move || original.get() != Some(true) on:submit=on_submit>
                <TipFields draft/>
                <div class="tip-form__actions">
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Updating..." } else { "Update Tip" }}
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
