//! Session-gated dashboard layout: sidebar beside page content.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_navigate;

use crate::components::dashboard_nav::DashboardNav;
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

/// Parent view for every dashboard route. Content and sidebar appear only for
/// a loaded, signed-in user; otherwise a placeholder shows while the redirect
/// runs. Child routes render into the outlet, so the sidebar is mounted once.
#[component]
pub fn DashboardLayout() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    let is_logged_in = Signal::derive(move || auth.get().is_logged_in());

    view! {
        <Title text="Dashboard | Tavio"/>
        <Show
            when=move || is_logged_in.get()
            fallback=move || {
                view! {
                    <div class="dashboard-shell dashboard-shell--pending">
                        <p>{move || if auth.get().loading { "Loading..." } else { "Redirecting to sign in..." }}</p>
                    </div>
                }
            }
        >
            <div class="dashboard-shell">
                <DashboardNav is_logged_in=is_logged_in/>
                <main class="dashboard-shell__main">
                    <Outlet/>
                </main>
            </div>
        </Show>
    }
}
