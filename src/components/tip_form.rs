//! Input fields shared by the share and update tip pages.
//!
//! The owning page supplies the `<form>`, its submit handler, and the action
//! buttons; this component only binds every editable field of a
//! [`TipDraft`] signal. Owner email and name are shown read-only.

use leptos::prelude::*;

use crate::net::types::{Availability, CATEGORIES, Difficulty, TipDraft};

#[component]
pub fn TipFields(draft: RwSignal<TipDraft>) -> impl IntoView {
    view! {
        <div class="form-field">
            <label for="title">"Title *"</label>
            <input
                id="title"
                class="input-field"
                type="text"
                required
                placeholder="e.g., How I Grow Tomatoes Indoors"
                prop:value=move || draft.get().title
                on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
            />
        </div>

        <div class="form-field">
            <label for="plant-type">"Plant Type/Topic *"</label>
            <input
                id="plant-type"
                class="input-field"
                type="text"
                required
                placeholder="e.g., Tomatoes, Herbs, Succulents"
                prop:value=move || draft.get().plant_type
                on:input=move |ev| draft.update(|d| d.plant_type = event_target_value(&ev))
            />
        </div>

        <div class="form-field">
            <label for="difficulty">"Difficulty Level *"</label>
            <select
                id="difficulty"
                class="input-field"
                prop:value=move || draft.get().difficulty_level.as_str()
                on:change=move |ev| {
                    if let Some(level) = Difficulty::parse(&event_target_value(&ev)) {
                        draft.update(|d| d.difficulty_level = level);
                    }
                }
            >
                {Difficulty::ALL
                    .into_iter()
                    .map(|level| view! { <option value=level.as_str()>{level.as_str()}</option> })
                    .collect_view()}
            </select>
        </div>

        <div class="form-field">
            <label for="category">"Category *"</label>
            <select
                id="category"
                class="input-field"
                prop:value=move || draft.get().category
                on:change=move |ev| draft.update(|d| d.category = event_target_value(&ev))
            >
                {CATEGORIES
                    .into_iter()
                    .map(|category| view! { <option value=category>{category}</option> })
                    .collect_view()}
            </select>
        </div>

        <div class="form-field">
            <label for="description">"Description *"</label>
            <textarea
                id="description"
                class="input-field input-field--area"
                rows="6"
                required
                placeholder="Share detailed information about your gardening tip..."
                prop:value=move || draft.get().description
                on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
            ></textarea>
        </div>

        <div class="form-field">
            <label for="image-url">"Image URL *"</label>
            <input
                id="image-url"
                class="input-field"
                type="url"
                required
                placeholder="https://example.com/image.jpg"
                prop:value=move || draft.get().image_url
                on:input=move |ev| draft.update(|d| d.image_url = event_target_value(&ev))
            />
        </div>

        <div class="form-field">
            <label for="availability">"Availability *"</label>
            <select
                id="availability"
                class="input-field"
                prop:value=move || draft.get().availability.as_str()
                on:change=move |ev| {
                    if let Some(availability) = Availability::parse(&event_target_value(&ev)) {
                        draft.update(|d| d.availability = availability);
                    }
                }
            >
                {Availability::ALL
                    .into_iter()
                    .map(|a| view! { <option value=a.as_str()>{a.as_str()}</option> })
                    .collect_view()}
            </select>
        </div>

        <div class="form-grid">
            <div class="form-field">
                <label>"Your Email (Read-only)"</label>
                <input class="input-field input-field--readonly" type="email" readonly prop:value=move || draft.get().user_email/>
            </div>
            <div class="form-field">
                <label>"Your Name (Read-only)"</label>
                <input class="input-field input-field--readonly" type="text" readonly prop:value=move || draft.get().user_name/>
            </div>
        </div>
    }
}
