//! Utility helpers shared across UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (theme storage, the bot-check
//! widget) and route-protection decisions from page and component logic.

pub mod auth;
pub mod dark_mode;
pub mod recaptcha;
