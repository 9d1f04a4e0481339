//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `nav`, `projects`, `toast`) so
//! individual components can depend on small focused models.

pub mod auth;
pub mod nav;
pub mod projects;
pub mod toast;
