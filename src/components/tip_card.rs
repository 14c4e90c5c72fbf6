//! Card for a trending tip with a like button.

use leptos::prelude::*;

use crate::net::types::Tip;

#[component]
pub fn TipCard(tip: Tip, on_like: Callback<String>) -> impl IntoView {
    let id = tip.id.clone();
    let details_href = format!("/tip/{}", tip.id);
    let badge = format!("badge {}", tip.difficulty_level.badge_class());

    view! {
        <article class="card tip-card">
            <div class="tip-card__media">
                <img class="tip-card__image" src=tip.image_url.clone() alt=tip.title.clone()/>
                <span class=badge>{tip.difficulty_level.as_str()}</span>
            </div>
            <span class="tip-card__category">{tip.category.clone()}</span>
            <h3 class="tip-card__title">{tip.title.clone()}</h3>
            <p class="tip-card__description">{tip.description.clone()}</p>
            <div class="tip-card__footer">
                <button class="tip-card__like" on:click=move |_| on_like.run(id.clone())>
                    <span aria-hidden="true">"\u{2665}"</span>
                    <span class="tip-card__likes">{tip.total_liked}</span>
                </button>
                <a class="tip-card__details" href=details_href>"View Details \u{2192}"</a>
            </div>
        </article>
    }
}
