//! Public list of every tip with a difficulty filter.

#[cfg(test)]
#[path = "browse_tips_test.rs"]
mod browse_tips_test;

use leptos::prelude::*;

use crate::components::loading_spinner::LoadingSpinner;
use crate::config::AppConfig;
use crate::net::types::{Difficulty, Tip};

/// Tips matching `filter`; `None` keeps everything.
fn filter_tips(tips: &[Tip], filter: Option<Difficulty>) -> Vec<Tip> {
    tips.iter().filter(|tip| filter.is_none_or(|level| tip.difficulty_level == level)).cloned().collect()
}

fn summary(shown: usize, total: usize) -> String {
    format!("Showing {shown} of {total} tips")
}

#[component]
pub fn BrowseTipsPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let filter = RwSignal::new(None::<Difficulty>);

    let tips = LocalResource::new(move || {
        let base = config.api_url.clone();
        async move {
            crate::net::api::fetch_tips(&base).await.unwrap_or_else(|e| {
                log::warn!("browse tips: {e}");
                Vec::new()
            })
        }
    });

    view! {
        <div class="page">
            <header class="page__header">
                <h1 class="page__title">"Browse Garden Tips"</h1>
                <p class="page__subtitle">"Discover tips and tricks shared by our gardening community"</p>
            </header>

            <div class="filter-bar">
                <label for="difficulty-filter">"Filter by Difficulty:"</label>
                <select
                    id="difficulty-filter"
                    class="input-field"
                    on:change=move |ev| filter.set(Difficulty::parse(&event_target_value(&ev)))
                >
                    <option value="All">"All"</option>
                    {Difficulty::ALL
                        .into_iter()
                        .map(|level| view! { <option value=level.as_str()>{level.as_str()}</option> })
                        .collect_view()}
                </select>
            </div>

            <Suspense fallback=|| view! { <LoadingSpinner/> }>
                {move || {
                    tips.get().map(|all| {
                        let shown = filter_tips(&all, filter.get());
                        let caption = summary(shown.len(), all.len());
                        if shown.is_empty() {
                            view! {
                                <p class="page__caption">{caption}</p>
                                <p class="empty-state">"No tips found for this difficulty level."</p>
                            }
                                .into_any()
                        } else {
                            view! {
                                <p class="page__caption">{caption}</p>
                                <table class="tips-table">
                                    <thead>
                                        <tr>
                                            <th>"Image"</th>
                                            <th>"Title"</th>
                                            <th>"Category"</th>
                                            <th>"Difficulty"</th>
                                            <th>"Likes"</th>
                                            <th>"Action"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {shown.into_iter().map(tip_row).collect_view()}
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

fn tip_row(tip: Tip) -> impl IntoView {
    let badge = format!("badge {}", tip.difficulty_level.badge_class());
    view! {
        <tr>
            <td><img class="tips-table__thumb" src=tip.image_url.clone() alt=tip.title.clone()/></td>
            <td>
                <div class="tips-table__title">{tip.title.clone()}</div>
                <div class="tips-table__plant">{tip.plant_type.clone()}</div>
            </td>
            <td>{tip.category.clone()}</td>
            <td><span class=badge>{tip.difficulty_level.as_str()}</span></td>
            <td>{format!("\u{2665} {}", tip.total_liked)}</td>
            <td><a class="btn btn--small" href=format!("/tip/{}", tip.id)>"See More"</a></td>
        </tr>
    }
}
