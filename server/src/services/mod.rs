//! Domain services used by HTTP routes and the session gate.
//!
//! ARCHITECTURE
//! ============
//! Service modules own persistence and decision logic so route handlers can
//! stay focused on protocol translation and cookie plumbing.

pub mod gate;
pub mod project;
pub mod session;
pub mod user;
