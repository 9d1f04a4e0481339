//! Render projection for the dashboard sidebar.
//!
//! [`project`] is the whole render contract: it decides what is on screen for
//! a given menu, state, route and login flag. The component never re-derives
//! visibility on its own.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use super::menu::{Badge, Icon, MenuItem};
use crate::state::nav::NavigationState;

/// Product name shown in the sidebar header.
pub const BRAND: &str = "Tavio";

/// Everything the sidebar draws for one render pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SidebarView {
    pub collapsed: bool,
    /// Header text; hidden when collapsed.
    pub brand: Option<&'static str>,
    pub primary: Vec<NavEntry>,
    pub footer: Vec<NavEntry>,
    pub show_logout: bool,
}

/// One row in a rendered menu.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavEntry {
    Link(LinkView),
    Group(GroupView),
}

impl NavEntry {
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Self::Link(link) => link.title,
            Self::Group(group) => group.title,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkView {
    pub title: &'static str,
    pub icon: Icon,
    pub path: &'static str,
    pub active: bool,
    pub show_label: bool,
    /// Present only when the item has a badge and the sidebar is expanded.
    pub badge: Option<Badge>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupView {
    pub title: &'static str,
    pub icon: Icon,
    /// Logical open state; drives the chevron.
    pub open: bool,
    pub show_label: bool,
    pub badge: Option<Badge>,
    /// Empty unless the group is open and the sidebar is expanded.
    pub children: Vec<NavEntry>,
}

/// Project menus and state into what the sidebar shows. Returns `None` when
/// the caller is not logged in: no rows, no toggles, no logout control.
#[must_use]
pub fn project(
    primary: &[MenuItem],
    footer: &[MenuItem],
    state: &NavigationState,
    current_path: &str,
    is_logged_in: bool,
) -> Option<SidebarView> {
    if !is_logged_in {
        return None;
    }
    let expanded = !state.is_collapsed();
    let entries = |items: &[MenuItem]| project_items(items, state, current_path, expanded);

    Some(SidebarView {
        collapsed: !expanded,
        brand: expanded.then_some(BRAND),
        primary: entries(primary),
        footer: entries(footer),
        show_logout: expanded,
    })
}

fn project_items(items: &[MenuItem], state: &NavigationState, current_path: &str, expanded: bool) -> Vec<NavEntry> {
    items
        .iter()
        .map(|item| project_item(item, state, current_path, expanded))
        .collect()
}

fn project_item(item: &MenuItem, state: &NavigationState, current_path: &str, expanded: bool) -> NavEntry {
    let badge = item.badge().filter(|_| expanded).cloned();
    match item {
        MenuItem::Leaf { title, icon, path, .. } => NavEntry::Link(LinkView {
            title: *title,
            icon: *icon,
            path: *path,
            active: item.is_active(current_path),
            show_label: expanded,
            badge,
        }),
        MenuItem::Group { title, icon, children, .. } => {
            let children = if state.shows_submenu(title) {
                project_items(children, state, current_path, expanded)
            } else {
                Vec::new()
            };
            NavEntry::Group(GroupView {
                title: *title,
                icon: *icon,
                open: state.is_group_open(title),
                show_label: expanded,
                badge,
                children,
            })
        }
    }
}
