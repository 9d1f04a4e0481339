use super::*;
use crate::nav::menu::{footer_menu, primary_menu};

fn render(state: &NavigationState, path: &str) -> SidebarView {
    project(&primary_menu(), &footer_menu(), state, path, true).expect("logged-in sidebar renders")
}

fn link<'a>(entries: &'a [NavEntry], title: &str) -> &'a LinkView {
    entries
        .iter()
        .find_map(|e| match e {
            NavEntry::Link(link) if link.title == title => Some(link),
            _ => None,
        })
        .unwrap_or_else(|| panic!("no link titled {title}"))
}

fn group<'a>(entries: &'a [NavEntry], title: &str) -> &'a GroupView {
    entries
        .iter()
        .find_map(|e| match e {
            NavEntry::Group(group) if group.title == title => Some(group),
            _ => None,
        })
        .unwrap_or_else(|| panic!("no group titled {title}"))
}

fn active_titles(entries: &[NavEntry]) -> Vec<&'static str> {
    let mut out = Vec::new();
    for entry in entries {
        match entry {
            NavEntry::Link(link) if link.active => out.push(link.title),
            NavEntry::Link(_) => {}
            NavEntry::Group(group) => out.extend(active_titles(&group.children)),
        }
    }
    out
}

// =============================================================
// Login gating
// =============================================================

#[test]
fn logged_out_renders_nothing() {
    let states = [
        NavigationState::new(),
        NavigationState::new().toggle_group("Files"),
        NavigationState::new().toggle_sidebar(),
    ];
    for state in &states {
        assert_eq!(project(&primary_menu(), &footer_menu(), state, "/dashboard", false), None);
    }
}

// =============================================================
// Scenarios
// =============================================================

#[test]
fn initial_mount_on_dashboard() {
    let view = render(&NavigationState::new(), "/dashboard");
    assert!(!view.collapsed);
    assert_eq!(view.brand, Some("Tavio"));
    assert!(view.show_logout);

    let dashboard = link(&view.primary, "Dashboard");
    assert!(dashboard.active);
    assert!(dashboard.show_label);

    let files = group(&view.primary, "Files");
    assert!(!files.open);
    assert!(files.children.is_empty());
    assert_eq!(active_titles(&view.primary), ["Dashboard"]);
}

#[test]
fn files_open_on_sent_highlights_sent_with_badge() {
    let state = NavigationState::new().toggle_group("Files");
    let view = render(&state, "/files/sent");

    let files = group(&view.primary, "Files");
    assert!(files.open);
    let titles: Vec<_> = files.children.iter().map(NavEntry::title).collect();
    assert_eq!(titles, ["Recent", "Sent", "Uploaded", "Draft", "Deleted"]);

    let sent = link(&files.children, "Sent");
    assert!(sent.active);
    assert_eq!(sent.badge, Some(Badge::Count(2)));
    assert_eq!(link(&files.children, "Uploaded").badge, None);

    assert_eq!(active_titles(&view.primary), ["Sent"]);
    assert!(!link(&view.primary, "Dashboard").active);
}

// =============================================================
// Highlighting
// =============================================================

#[test]
fn highlighting_is_exact_match_only() {
    let state = NavigationState::new().toggle_group("Files");
    assert_eq!(active_titles(&render(&state, "/files/recent").primary), ["Recent"]);
    assert!(active_titles(&render(&state, "/files").primary).is_empty());
    assert!(active_titles(&render(&state, "/files/recent/").primary).is_empty());
    assert!(active_titles(&render(&state, "/dashboard/extra").primary).is_empty());
}

#[test]
fn footer_links_follow_same_rule() {
    let view = render(&NavigationState::new(), "/settings");
    assert!(link(&view.footer, "Settings").active);
    assert!(!link(&view.footer, "Help").active);
}

// =============================================================
// Collapsed sidebar
// =============================================================

#[test]
fn collapsed_hides_labels_badges_submenus_and_logout() {
    let state = NavigationState::new().toggle_group("Files").toggle_sidebar();
    let view = render(&state, "/files/recent");

    assert!(view.collapsed);
    assert_eq!(view.brand, None);
    assert!(!view.show_logout);

    let files = group(&view.primary, "Files");
    assert!(files.open, "logical open state survives collapse");
    assert!(files.children.is_empty());
    assert!(!files.show_label);
    assert!(!link(&view.primary, "Dashboard").show_label);
    assert!(view.footer.iter().all(|e| matches!(e, NavEntry::Link(l) if !l.show_label && l.badge.is_none())));
}

#[test]
fn collapsed_still_highlights_visible_leaf() {
    let state = NavigationState::new().toggle_sidebar();
    assert!(link(&render(&state, "/dashboard").primary, "Dashboard").active);
}

#[test]
fn reexpanding_restores_open_group() {
    let open = NavigationState::new().toggle_group("Files");
    let reopened = open.toggle_sidebar().toggle_sidebar();
    let view = render(&reopened, "/files/recent");

    let files = group(&view.primary, "Files");
    assert!(files.open);
    assert_eq!(files.children.len(), 5);
    assert_eq!(link(&files.children, "Recent").badge, Some(Badge::Count(8)));
}

#[test]
fn toggling_unknown_group_changes_nothing_visible() {
    let view_before = render(&NavigationState::new(), "/dashboard");
    let view_after = render(&NavigationState::new().toggle_group("Reports"), "/dashboard");
    assert_eq!(view_before, view_after);
}

// =============================================================
// Navigation
// =============================================================

#[test]
fn route_change_keeps_open_groups_and_moves_highlight() {
    let state = NavigationState::new().toggle_group("Files");
    let before = render(&state, "/dashboard");
    let after = render(&state, "/files/sent");

    assert!(group(&before.primary, "Files").open);
    assert_eq!(active_titles(&before.primary), ["Dashboard"]);

    let files = group(&after.primary, "Files");
    assert!(files.open);
    assert!(link(&files.children, "Sent").active);
    assert_eq!(active_titles(&after.primary), ["Sent"]);
}

#[test]
fn route_change_keeps_collapsed_mode() {
    let state = NavigationState::new().toggle_sidebar();
    for path in ["/dashboard", "/files/sent", "/help", "/settings"] {
        let view = render(&state, path);
        assert!(view.collapsed, "{path}");
        assert!(!view.show_logout, "{path}");
    }
}
