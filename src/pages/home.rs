//! Landing page: event slider, featured gardeners, trending tips.
//!
//! SYSTEM CONTEXT
//! ==============
//! Public route. Gardeners and trending tips are fetched after hydration;
//! liking a tip refetches the trending list so its order reflects the new
//! counts.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::gardener_card::GardenerCard;
use crate::components::loading_spinner::LoadingSpinner;
use crate::components::tip_card::TipCard;
use crate::config::AppConfig;
use crate::net::types::{Gardener, Tip};

/// Autoplay interval of the event slider.
pub const SLIDE_INTERVAL_MS: u32 = 5000;

/// One slide of the event slider.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slide {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub date: &'static str,
    pub button_text: &'static str,
}

pub const SLIDES: [Slide; 3] = [
    Slide {
        title: "Community Garden Meetup",
        description: "Join us for a hands-on workshop on composting and sustainable gardening practices",
        image: "https://images.unsplash.com/photo-1416879595882-3373a0480b5b?w=1200&h=600&fit=crop",
        date: "March 15, 2024",
        button_text: "Learn More",
    },
    Slide {
        title: "Spring Planting Festival",
        description: "Celebrate the season with fellow gardeners and learn about the best spring vegetables",
        image: "https://images.unsplash.com/photo-1592150621744-aca64f48394a?w=1200&h=600&fit=crop",
        date: "April 1, 2024",
        button_text: "Join Event",
    },
    Slide {
        title: "Hydroponics Workshop",
        description: "Discover the future of urban gardening with our expert-led hydroponics session",
        image: "https://images.unsplash.com/photo-1585320806297-9794b3e4eeae?w=1200&h=600&fit=crop",
        date: "April 20, 2024",
        button_text: "Register Now",
    },
];

const STATS: [(&str, &str); 3] = [("500+", "Active Gardeners"), ("1,200+", "Gardening Tips"), ("50+", "Monthly Events")];

/// Index of the slide after `current`, wrapping around.
fn next_slide(current: usize, len: usize) -> usize {
    if len == 0 { 0 } else { (current + 1) % len }
}

/// Index of the slide before `current`, wrapping around.
fn previous_slide(current: usize, len: usize) -> usize {
    if len == 0 { 0 } else { (current + len - 1) % len }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let gardeners = RwSignal::new(Vec::<Gardener>::new());
    let trending = RwSignal::new(Vec::<Tip>::new());
    let loading = RwSignal::new(true);

    #[cfg(feature = "hydrate")]
    {
        let base = config.api_url.clone();
        leptos::task::spawn_local(async move {
            let (gardeners_res, tips_res) = futures::join!(
                crate::net::api::fetch_active_gardeners(&base),
                crate::net::api::fetch_trending_tips(&base),
            );
            match gardeners_res {
                Ok(list) => {
                    let _ = gardeners.try_set(list);
                }
                Err(e) => log::warn!("home: active gardeners: {e}"),
            }
            match tips_res {
                Ok(list) => {
                    let _ = trending.try_set(list);
                }
                Err(e) => log::warn!("home: trending tips: {e}"),
            }
            let _ = loading.try_set(false);
        });
    }

    let base = config.api_url.clone();
    let on_like = Callback::new(move |id: String| {
        let base = base.clone();
        leptos::task::spawn_local(async move {
            if let Err(e) = crate::net::api::like_tip(&base, &id).await {
                log::warn!("home: like {id}: {e}");
                return;
            }
            match crate::net::api::fetch_trending_tips(&base).await {
                Ok(list) => {
                    let _ = trending.try_set(list);
                }
                Err(e) => log::warn!("home: trending refresh: {e}"),
            }
        });
    });

    view! {
        <Show when=move || !loading.get() fallback=|| view! { <LoadingSpinner/> }>
            <EventSlider/>

            <section class="section section--welcome">
                <h2 class="welcome__title">
                    "Welcome to " <span class="welcome__accent">"GardenHub"</span>
                </h2>
                <p class="welcome__lead">
                    "Connect with passionate gardeners, share your growing tips, and cultivate knowledge together"
                </p>
            </section>

            <section class="section">
                <h2 class="section__title">"Featured Gardeners"</h2>
                <p class="section__subtitle">"Meet our active community members"</p>
                <div class="card-grid">
                    <For
                        each=move || gardeners.get()
                        key=|gardener| gardener.id.clone()
                        children=|gardener| view! { <GardenerCard gardener/> }
                    />
                </div>
                <div class="section__more">
                    <a class="btn btn--primary" href="/explore-gardeners">"Explore All Gardeners"</a>
                </div>
            </section>

            <section class="section">
                <h2 class="section__title">"Top Trending Tips"</h2>
                <p class="section__subtitle">"Most loved gardening tips from our community"</p>
                <div class="card-grid">
                    <For
                        each=move || trending.get()
                        key=|tip| (tip.id.clone(), tip.total_liked)
                        children=move |tip| view! { <TipCard tip on_like/> }
                    />
                </div>
                <div class="section__more">
                    <a class="btn btn--primary" href="/browse-tips">"Browse All Tips"</a>
                </div>
            </section>

            <section class="section section--stats">
                <div class="stats">
                    {STATS
                        .into_iter()
                        .map(|(value, label)| view! {
                            <div class="stats__item">
                                <div class="stats__value">{value}</div>
                                <div class="stats__label">{label}</div>
                            </div>
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="section section--newsletter">
                <h2 class="section__title">"Stay Updated with Our Newsletter"</h2>
                <p class="section__subtitle">
                    "Get weekly gardening tips, event updates, and exclusive content delivered to your inbox"
                </p>
                <form class="newsletter" on:submit=|ev| ev.prevent_default()>
                    <input class="input-field" type="email" placeholder="Enter your email"/>
                    <button class="btn btn--primary" type="submit">"Subscribe Now"</button>
                </form>
            </section>
        </Show>
    }
}

/// Autoplaying hero slider; pauses while hovered.
#[component]
fn EventSlider() -> impl IntoView {
    let active = RwSignal::new(0usize);
    let paused = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::TimeoutFuture::new(SLIDE_INTERVAL_MS).await;
                if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                if paused.get_untracked() {
                    continue;
                }
                let _ = active.try_update(|index| *index = next_slide(*index, SLIDES.len()));
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    view! {
        <section
            class="slider"
            on:mouseenter=move |_| paused.set(true)
            on:mouseleave=move |_| paused.set(false)
        >
            {SLIDES
                .into_iter()
                .enumerate()
                .map(|(index, slide)| view! {
                    <div
                        class="slider__slide"
                        class:slider__slide--active=move || active.get() == index
                        style:background-image=format!("url({})", slide.image)
                    >
                        <div class="slider__overlay"></div>
                        <div class="slider__content">
                            <span class="slider__date">{slide.date}</span>
                            <h2 class="slider__title">{slide.title}</h2>
                            <p class="slider__description">{slide.description}</p>
                            <button class="btn btn--primary">{slide.button_text} " \u{2192}"</button>
                        </div>
                    </div>
                })
                .collect_view()}
            <button
                class="slider__arrow slider__arrow--prev"
                aria-label="Previous slide"
                on:click=move |_| active.update(|index| *index = previous_slide(*index, SLIDES.len()))
            >
                "\u{2039}"
            </button>
            <button
                class="slider__arrow slider__arrow--next"
                aria-label="Next slide"
                on:click=move |_| active.update(|index| *index = next_slide(*index, SLIDES.len()))
            >
                "\u{203a}"
            </button>
            <div class="slider__dots">
                {(0..SLIDES.len())
                    .map(|index| view! {
                        <button
                            class="slider__dot"
                            class:slider__dot--active=move || active.get() == index
                            aria-label=format!("Go to slide {}", index + 1)
                            on:click=move |_| active.set(index)
                        ></button>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
