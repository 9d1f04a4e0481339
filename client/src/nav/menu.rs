//! Sidebar menu configuration.
//!
//! Menus are rebuilt from these constructors on every render; nothing here is
//! mutated at runtime. Sibling titles must be unique within a level. Group
//! titles also key the sidebar's open/closed state, which is flat, so a group
//! title must be unique across the whole tree, not only among its siblings.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use std::fmt;

/// Opaque visual token for a menu entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    LayoutDashboard,
    FolderOpen,
    FileText,
    HelpCircle,
    Settings,
}

impl Icon {
    /// Glyph drawn in place of an icon font.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Self::LayoutDashboard => "\u{25A6}",
            Self::FolderOpen => "\u{1F4C2}",
            Self::FileText => "\u{1F5CE}",
            Self::HelpCircle => "?",
            Self::Settings => "\u{2699}",
        }
    }
}

/// Display-only annotation next to a menu entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Badge {
    Count(u32),
    Label(&'static str),
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(n) => write!(f, "{n}"),
            Self::Label(s) => f.write_str(s),
        }
    }
}

/// A sidebar entry: either a direct link or an expandable group.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MenuItem {
    Leaf {
        title: &'static str,
        icon: Icon,
        path: &'static str,
        badge: Option<Badge>,
    },
    Group {
        title: &'static str,
        icon: Icon,
        badge: Option<Badge>,
        children: Vec<MenuItem>,
    },
}

impl MenuItem {
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Self::Leaf { title, .. } | Self::Group { title, .. } => *title,
        }
    }

    #[must_use]
    pub fn icon(&self) -> Icon {
        match self {
            Self::Leaf { icon, .. } | Self::Group { icon, .. } => *icon,
        }
    }

    #[must_use]
    pub fn badge(&self) -> Option<&Badge> {
        match self {
            Self::Leaf { badge, .. } | Self::Group { badge, .. } => badge.as_ref(),
        }
    }

    /// Destination of a leaf. Groups have none.
    #[must_use]
    pub fn path(&self) -> Option<&'static str> {
        match self {
            Self::Leaf { path, .. } => Some(*path),
            Self::Group { .. } => None,
        }
    }

    /// Exact string match against the current route; groups never match.
    #[must_use]
    pub fn is_active(&self, current_path: &str) -> bool {
        self.path() == Some(current_path)
    }
}

fn leaf(title: &'static str, icon: Icon, path: &'static str, badge: Option<u32>) -> MenuItem {
    MenuItem::Leaf { title, icon, path, badge: badge.map(Badge::Count) }
}

/// Main sidebar menu. Group titles here and in [`footer_menu`] must not
/// repeat at any depth.
#[must_use]
pub fn primary_menu() -> Vec<MenuItem> {
    vec![
        leaf("Dashboard", Icon::LayoutDashboard, "/dashboard", None),
        MenuItem::Group {
            title: "Files",
            icon: Icon::FolderOpen,
            badge: None,
            children: vec![
                leaf("Recent", Icon::FileText, "/files/recent", Some(8)),
                leaf("Sent", Icon::FileText, "/files/sent", Some(2)),
                leaf("Uploaded", Icon::FileText, "/files/uploaded", None),
                leaf("Draft", Icon::FileText, "/files/draft", Some(4)),
                leaf("Deleted", Icon::FileText, "/files/deleted", Some(6)),
            ],
        },
    ]
}

/// Menu pinned to the bottom of the sidebar.
#[must_use]
pub fn footer_menu() -> Vec<MenuItem> {
    vec![
        leaf("Help", Icon::HelpCircle, "/help", None),
        leaf("Settings", Icon::Settings, "/settings", None),
    ]
}

/// Title of the leaf whose path is exactly `path`, searching both menus.
#[must_use]
pub fn title_for_path(path: &str) -> Option<&'static str> {
    fn search(items: &[MenuItem], path: &str) -> Option<&'static str> {
        items.iter().find_map(|item| match item {
            MenuItem::Leaf { title, path: p, .. } => (*p == path).then_some(*title),
            MenuItem::Group { children, .. } => search(children, path),
        })
    }
    search(&primary_menu(), path).or_else(|| search(&footer_menu(), path))
}
