//! Dashboard page listing the signed-in user's projects.

use leptos::prelude::*;

use crate::components::project_card::ProjectCard;
use crate::state::auth::AuthState;
use crate::state::projects::ProjectsState;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let projects = RwSignal::new(ProjectsState { loading: true, ..ProjectsState::default() });
    let requested = RwSignal::new(false);

    // Fetch once, after auth resolves to a user.
    Effect::new(move || {
        if requested.get_untracked() || !auth.get().is_logged_in() {
            return;
        }
        requested.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_projects().await;
            projects.update(|s| s.finish(result));
        });
    });

    let greeting = move || {
        auth.get()
            .user
            .map(|u| format!("Welcome back, {}", u.name))
            .unwrap_or_default()
    };

    view! {
        <section class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Dashboard"</h1>
                <p class="dashboard-page__greeting">{greeting}</p>
            </header>
            <Show when=move || projects.get().error.is_some()>
                <p class="dashboard-page__error">{move || projects.get().error.unwrap_or_default()}</p>
            </Show>
            <Show
                when=move || !projects.get().loading
                fallback=|| view! { <p class="dashboard-page__loading">"Loading projects..."</p> }
            >
                <div class="dashboard-page__cards">
                    {move || {
                        let items = projects.get().items;
                        if items.is_empty() {
                            view! { <p class="dashboard-page__empty">"No projects yet."</p> }.into_any()
                        } else {
                            items
                                .into_iter()
                                .map(|project| view! { <ProjectCard project=project/> })
                                .collect_view()
                                .into_any()
                        }
                    }}
                </div>
            </Show>
        </section>
    }
}
