//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome (navbar, footer, toasts), shared cards and
//! form fields, and the route guard, reading shared state from Leptos context
//! providers installed by `app::App`.

pub mod footer;
pub mod gardener_card;
pub mod loading_spinner;
pub mod navbar;
pub mod private_route;
pub mod recaptcha;
pub mod tip_card;
pub mod tip_form;
pub mod toaster;
