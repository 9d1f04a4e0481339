//! Networking modules for the JSON API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs REST calls and `types` defines the shared wire schema.

pub mod api;
pub mod types;
