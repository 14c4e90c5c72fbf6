//! Tips shared by the signed-in gardener, with edit and delete actions.

#[cfg(test)]
#[path = "my_tips_test.rs"]
mod my_tips_test;

use leptos::prelude::*;

use crate::components::loading_spinner::LoadingSpinner;
use crate::config::AppConfig;
use crate::net::types::Tip;
use crate::state::auth::SessionState;
use crate::state::toast::{self, ToastState};

#[cfg(any(test, feature = "hydrate"))]
fn delete_prompt(title: &str) -> String {
    format!("Do you want to delete \"{title}\"? This action cannot be undone!")
}

/// Ask the user to confirm deleting `title`. Always `false` outside a browser.
fn confirm_delete(title: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(&delete_prompt(title)).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = title;
        false
    }
}

#[component]
pub fn MyTipsPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let base = config.api_url.clone();
    let tips = LocalResource::new(move || {
        let base = base.clone();
        let email = session.with(|state| state.email().map(str::to_owned));
        async move {
            let Some(email) = email else {
                return Vec::new();
            };
            crate::net::api::fetch_user_tips(&base, &email).await.unwrap_or_else(|e| {
                log::warn!("my tips: {e}");
                toast::error(toasts, "Failed to load your tips");
                Vec::new()
            })
        }
    });

    let base = config.api_url;
    let on_delete = Callback::new(move |(id, title): (String, String)| {
        if !confirm_delete(&title) {
            return;
        }
        let base = base.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_tip(&base, &id).await {
                Ok(()) => {
                    toast::success(toasts, "Tip deleted successfully!");
                    tips.refetch();
                }
                Err(e) => {
                    log::warn!("my tips: delete {id}: {e}");
                    toast::error(toasts, "Failed to delete tip");
                }
            }
        });
    });

    view! {
        <div class="page">
            <header class="page__header page__header--split">
                <div>
                    <h1 class="page__title">"My Garden Tips"</h1>
                    <p class="page__subtitle">"Manage all the tips you've shared with the community"</p>
                </div>
                <a class="btn btn--primary" href="/share-tip">"+ Share New Tip"</a>
            </header>

            <Suspense fallback=|| view! { <LoadingSpinner/> }>
                {move || {
                    tips.get().map(|list| {
                        if list.is_empty() {
                            view! {
                                <div class="empty-state">
                                    <p>"You haven't shared any tips yet."</p>
                                    <a class="btn btn--primary" href="/share-tip">"Share Your First Tip"</a>
                                </div>
                            }
                                .into_any()
                        } else {
                            view! {
                                <table class="tips-table">
                                    <thead>
                                        <tr>
                                            <th>"Image"</th>
                                            <th>"Title"</th>
                                            <th>"Category"</th>
                                            <th>"Difficulty"</th>
                                            <th>"Status"</th>
                                            <th>"Likes"</th>
                                            <th>"Actions"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {list.into_iter().map(|tip| owned_tip_row(tip, on_delete)).collect_view()}
                                    </tbody>
                                </table>
                            }
                                .into_any()
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}

fn owned_tip_row(tip: Tip, on_delete: Callback<(String, String)>) -> impl IntoView {
    let badge = format!("badge {}", tip.difficulty_level.badge_class());
    let delete_args = (tip.id.clone(), tip.title.clone());
    view! {
        <tr>
            <td><img class="tips-table__thumb" src=tip.image_url.clone() alt=tip.title.clone()/></td>
            <td>{tip.title.clone()}</td>
            <td>{tip.category.clone()}</td>
            <td><span class=badge>{tip.difficulty_level.as_str()}</span></td>
            <td>{tip.availability.as_str()}</td>
            <td>{tip.total_liked}</td>
            <td class="tips-table__actions">
                <a class="btn btn--small" href=format!("/update-tip/{}", tip.id)>"Edit"</a>
                <button class="btn btn--small btn--danger" on:click=move |_| on_delete.run(delete_args.clone())>
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
