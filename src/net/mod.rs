//! Networking modules for the tips REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and `types` defines the wire schema shared
//! with the tips backend.

pub mod api;
pub mod types;
