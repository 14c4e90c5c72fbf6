//! Full view of a single tip with a like button.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::loading_spinner::LoadingSpinner;
use crate::config::AppConfig;
use crate::net::types::Tip;
use crate::state::toast::{self, ToastState};

#[component]
pub fn TipDetailsPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let params = use_params_map();
    let tip_id = move || params.read().get("id").unwrap_or_default();

    let base = config.api_url.clone();
    let tip = LocalResource::new(move || {
        let base = base.clone();
        let id = tip_id();
        async move {
            match crate::net::api::fetch_tip(&base, &id).await {
                Ok(tip) => Some(tip),
                Err(e) => {
                    log::warn!("tip details: {id}: {e}");
                    toast::error(toasts, "Failed to load tip details");
                    None
                }
            }
        }
    });

    let base = config.api_url;
    let on_like = move |_: leptos::ev::MouseEvent| {
        let base = base.clone();
        let id = tip_id();
        leptos::task::spawn_local(async move {
            match crate::net::api::like_tip(&base, &id).await {
                Ok(()) => {
                    toast::success(toasts, "Tip liked!");
                    tip.refetch();
                }
                Err(e) => {
                    log::warn!("tip details: like {id}: {e}");
                    toast::error(toasts, "Failed to like tip");
                }
            }
        });
    };

    view! {
        <div class="page page--narrow">
            <Suspense fallback=|| view! { <LoadingSpinner/> }>
                {
                    let on_like = on_like.clone();
                    move || {
                        tip.get().map(|loaded| match loaded {
                            Some(loaded) => tip_view(loaded, on_like.clone()).into_any(),
                            None => view! {
                                <div class="empty-state">
                                    <h2>"Tip not found"</h2>
                                    <a class="btn btn--primary" href="/browse-tips">"Back to Browse Tips"</a>
                                </div>
                            }
                                .into_any(),
                        })
                    }
                }
            </Suspense>
        </div>
    }
}

fn tip_view(tip: Tip, on_like: impl FnMut(leptos::ev::MouseEvent) + Send + 'static) -> impl IntoView {
    let badge = format!("badge {}", tip.difficulty_level.badge_class());
    let shared_on = tip.created_date().map(|date| view! { <span>{format!("Shared on {date}")}</span> });

    view! {
        <button class="btn btn--ghost" on:click=|_| go_back()>"\u{2190} Back"</button>
        <article class="tip-details">
            <img class="tip-details__image" src=tip.image_url.clone() alt=tip.title.clone()/>
            <div class="tip-details__body">
                <div class="tip-details__tags">
                    <span class="tag">{tip.category.clone()}</span>
                    <span class=badge>{tip.difficulty_level.as_str()}</span>
                    <span class="tag">{tip.availability.as_str()}</span>
                </div>
                <h1 class="tip-details__title">{tip.title.clone()}</h1>
                <p class="tip-details__plant">"Plant Type: " <strong>{tip.plant_type.clone()}</strong></p>
                <p class="tip-details__description">{tip.description.clone()}</p>
                <div class="tip-details__author">
                    <p>"Shared by " <strong>{tip.user_name.clone()}</strong></p>
                    <p>{format!("Contact: {}", tip.user_email)}</p>
                    {shared_on}
                </div>
                <button class="btn btn--primary tip-details__like" on:click=on_like>
                    {format!("\u{2665} Like ({})", tip.total_liked)}
                </button>
            </div>
        </article>
    }
}

fn go_back() {
    #[cfg(feature = "hydrate")]
    if let Some(history) = web_sys::window().and_then(|window| window.history().ok()) {
        let _ = history.back();
    }
}
