//! Route-level page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module maps to one route in `app::App`. Pages read shared state from
//! context, call the REST helpers in `net::api` or the identity gateway, and
//! report outcomes through toasts.

pub mod auth_popup;
pub mod browse_tips;
pub mod explore_gardeners;
pub mod home;
pub mod login;
pub mod my_tips;
pub mod not_found;
pub mod register;
pub mod share_tip;
pub mod tip_details;
pub mod update_tip;
