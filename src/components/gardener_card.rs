//! Profile card for a community gardener.

use leptos::prelude::*;

use crate::net::types::Gardener;

#[component]
pub fn GardenerCard(gardener: Gardener) -> impl IntoView {
    let active = gardener.is_active();
    let status_class = if active { "status-pill status-pill--active" } else { "status-pill status-pill--inactive" };
    let experience = (!gardener.experience.is_empty()).then(|| gardener.experience.clone());

    view! {
        <article class="card gardener-card">
            <img class="gardener-card__photo" src=gardener.image_url.clone() alt=gardener.name.clone()/>
            <h3 class="gardener-card__name">{gardener.name.clone()}</h3>
            <p class="gardener-card__meta">{format!("{} years \u{2022} {}", gardener.age, gardener.gender)}</p>
            <span class=status_class>{gardener.status.clone()}</span>
            <p class="gardener-card__bio">{gardener.bio.clone()}</p>
            <div class="gardener-card__footer">
                {experience.map(|experience| view! {
                    <span class="gardener-card__experience">"Experience: " <strong>{experience}</strong></span>
                })}
                <span class="gardener-card__tips">{format!("{} tips", gardener.total_shared_tips)}</span>
            </div>
        </article>
    }
}
