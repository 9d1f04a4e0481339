//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome while reading/writing shared state from
//! Leptos context providers.

pub mod dashboard_layout;
pub mod dashboard_nav;
pub mod project_card;
pub mod toast_stack;
