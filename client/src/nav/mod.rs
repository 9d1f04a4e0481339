//! Dashboard navigation: static menu configuration and the render projection
//! the sidebar component draws from.
//!
//! ARCHITECTURE
//! ============
//! `menu` is pure configuration, `view` turns configuration plus
//! [`NavigationState`](crate::state::nav::NavigationState) into a plain data
//! tree. The Leptos component only maps that tree to markup, so every
//! visibility and highlighting rule is testable without a DOM.

pub mod menu;
pub mod view;
