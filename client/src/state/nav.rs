//! Per-instance sidebar state.
//!
//! DESIGN
//! ======
//! Two independent dimensions: the sidebar width mode and the set of open
//! groups. Collapsing the sidebar hides submenus without forgetting which
//! groups were open, so expanding it again restores the previous tree.
//! Transitions are pure and return the next state.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use std::collections::BTreeSet;

/// Sidebar width mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SidebarMode {
    #[default]
    Expanded,
    /// Icons only: labels, badges, submenus and logout are hidden.
    Collapsed,
}

impl SidebarMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Expanded => Self::Collapsed,
            Self::Collapsed => Self::Expanded,
        }
    }
}

/// Navigation state owned by one mounted sidebar.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigationState {
    open_groups: BTreeSet<String>,
    sidebar: SidebarMode,
}

impl NavigationState {
    /// Expanded sidebar, every group closed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn toggle_sidebar(mut self) -> Self {
        self.sidebar = self.sidebar.toggled();
        self
    }

    /// Flip one group's open state; other groups are untouched.
    #[must_use]
    pub fn toggle_group(mut self, title: &str) -> Self {
        if !self.open_groups.remove(title) {
            self.open_groups.insert(title.to_owned());
        }
        self
    }

    #[must_use]
    pub fn sidebar(&self) -> SidebarMode {
        self.sidebar
    }

    #[must_use]
    pub fn is_collapsed(&self) -> bool {
        self.sidebar == SidebarMode::Collapsed
    }

    /// Logical open state, independent of the sidebar mode.
    #[must_use]
    pub fn is_group_open(&self, title: &str) -> bool {
        self.open_groups.contains(title)
    }

    /// Whether a group's children are on screen right now.
    #[must_use]
    pub fn shows_submenu(&self, title: &str) -> bool {
        self.is_group_open(title) && !self.is_collapsed()
    }
}
