//! Collapsible dashboard sidebar.
//!
//! DESIGN
//! ======
//! The component owns its [`NavigationState`]. It mounts once per dashboard
//! shell, so open groups and width mode carry across child routes and reset
//! only when the shell itself unmounts.
//! All visibility rules live in [`crate::nav::view::project`]; this module
//! only maps the projected tree to markup and wires the toggles.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::nav::menu::{footer_menu, primary_menu};
use crate::nav::view::{GroupView, LinkView, NavEntry, SidebarView, project};
use crate::state::auth::AuthState;
use crate::state::nav::NavigationState;
use crate::state::toast::ToastState;

/// Dashboard sidebar. Renders nothing unless `is_logged_in` is true.
#[component]
pub fn DashboardNav(#[prop(into)] is_logged_in: Signal<bool>) -> impl IntoView {
    let location = use_location();
    let nav = RwSignal::new(NavigationState::new());
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let on_logout = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = crate::util::auth::run_logout(crate::net::api::logout).await;
            if !outcome.signed_out {
                log::warn!("{}", outcome.notice.message);
            }
            crate::components::toast_stack::notify(toasts, outcome.notice);
            if outcome.signed_out {
                // The layout's unauth redirect takes it from here.
                auth.update(|a| a.user = None);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (auth, toasts);
    });

    move || {
        let sidebar = project(
            &primary_menu(),
            &footer_menu(),
            &nav.get(),
            &location.pathname.get(),
            is_logged_in.get(),
        )?;
        Some(render_sidebar(sidebar, nav, on_logout))
    }
}

fn render_sidebar(sidebar: SidebarView, nav: RwSignal<NavigationState>, on_logout: Callback<()>) -> AnyView {
    let SidebarView { collapsed, brand, primary, footer, show_logout } = sidebar;

    view! {
        <aside class="dashboard-nav" class:dashboard-nav--collapsed=collapsed>
            <div class="dashboard-nav__header">
                {brand.map(|brand| view! { <span class="dashboard-nav__brand">{brand}</span> })}
                <button
                    class="dashboard-nav__toggle"
                    title="Toggle sidebar"
                    aria-label="Toggle sidebar"
                    aria-expanded=if collapsed { "false" } else { "true" }
                    on:click=move |_| nav.update(|s| *s = std::mem::take(s).toggle_sidebar())
                >
                    "\u{2630}"
                </button>
            </div>

            <div class="dashboard-nav__main">
                <nav class="dashboard-nav__list">{render_entries(primary, nav)}</nav>
            </div>

            <div class="dashboard-nav__footer">
                <nav class="dashboard-nav__list">
                    {render_entries(footer, nav)}
                    {show_logout
                        .then(|| {
                            view! {
                                <button class="btn dashboard-nav__logout" on:click=move |_| on_logout.run(())>
                                    "Logout"
                                </button>
                            }
                        })}
                </nav>
            </div>
        </aside>
    }
    .into_any()
}

fn render_entries(entries: Vec<NavEntry>, nav: RwSignal<NavigationState>) -> AnyView {
    entries
        .into_iter()
        .map(|entry| match entry {
            NavEntry::Link(link) => render_link(link),
            NavEntry::Group(group) => render_group(group, nav),
        })
        .collect_view()
        .into_any()
}

fn render_link(link: LinkView) -> AnyView {
    let LinkView { title, icon, path, active, show_label, badge } = link;

    view! {
        <a
            href=path
            class="dashboard-nav__item"
            class:dashboard-nav__item--active=active
            aria-current=active.then_some("page")
            title=title
        >
            <span class="dashboard-nav__icon" aria-hidden="true">{icon.glyph()}</span>
            {show_label.then(|| view! { <span class="dashboard-nav__label">{title}</span> })}
            {badge.map(|badge| view! { <span class="dashboard-nav__badge">{badge.to_string()}</span> })}
        </a>
    }
    .into_any()
}

fn render_group(group: GroupView, nav: RwSignal<NavigationState>) -> AnyView {
    let GroupView { title, icon, open, show_label, badge, children } = group;
    let submenu = (!children.is_empty()).then(|| {
        view! { <div class="dashboard-nav__submenu">{render_entries(children, nav)}</div> }
    });

    view! {
        <div class="dashboard-nav__group">
            <button
                class="dashboard-nav__item dashboard-nav__group-toggle"
                class:dashboard-nav__item--open=open
                aria-expanded=if open { "true" } else { "false" }
                title=title
                on:click=move |_| nav.update(|s| *s = std::mem::take(s).toggle_group(title))
            >
                <span class="dashboard-nav__icon" aria-hidden="true">{icon.glyph()}</span>
                {show_label
                    .then(|| {
                        view! {
                            <span class="dashboard-nav__label">{title}</span>
                            <span class="dashboard-nav__trail">
                                {badge.map(|badge| view! { <span class="dashboard-nav__badge">{badge.to_string()}</span> })}
                                <span class="dashboard-nav__chevron" aria-hidden="true">
                                    {if open { "\u{25BE}" } else { "\u{25B8}" }}
                                </span>
                            </span>
                        }
                    })}
            </button>
            {submenu}
        </div>
    }
    .into_any()
}
