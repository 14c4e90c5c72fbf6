//! Route wrapper that only renders its children for a signed-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps every protected page in the router. The decision itself lives in
//! `util::auth::decide`; this component only turns it into a spinner, the
//! children, or a replace-navigation to `/login` with the intent recorded.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::loading_spinner::LoadingSpinner;
use crate::state::auth::SessionState;
use crate::util::auth::{GuardDecision, NavigationIntents, decide};

#[component]
pub fn PrivateRoute(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let intents = expect_context::<RwSignal<NavigationIntents>>();
    let location = use_location();
    let navigate = use_navigate();

    let decision = Memo::new(move |_| decide(&session.get(), &location.pathname.get()));

    Effect::new(move || {
        if let GuardDecision::Redirect { to, intent } = decision.get() {
            log::debug!("guard: redirecting {} to {to}", intent.target_path);
            intents.update(|pending| pending.record(intent));
            navigate(&to, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    move || match decision.get() {
        GuardDecision::Render => children().into_any(),
        GuardDecision::Loading => view! { <LoadingSpinner/> }.into_any(),
        GuardDecision::Redirect { .. } => ().into_any(),
    }
}
