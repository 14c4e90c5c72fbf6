//! Application state shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` holds the session store and the snapshot type the route guard reads;
//! `toast` and `ui` hold presentation-only state.

pub mod auth;
pub mod toast;
pub mod ui;
