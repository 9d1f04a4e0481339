//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos::server::SharedValue;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::dashboard_layout::DashboardLayout;
use crate::components::toast_stack::ToastStack;
use crate::pages::{dashboard::DashboardPage, home::HomePage, section::SectionPage, signin::SignInPage};
use crate::state::{auth::AuthState, toast::ToastState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// On a gated request the server render provides a signed-in [`AuthState`]
/// as context; everywhere else auth starts pending. `SharedValue` carries the
/// server's choice into hydration so both sides render the same markup, and
/// the browser only asks `/api/auth/me` when auth is still pending.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let initial = SharedValue::new(|| use_context::<AuthState>().unwrap_or_else(AuthState::pending)).into_inner();
    let auth = RwSignal::new(initial);
    let toasts = RwSignal::new(ToastState::default());

    provide_context(auth);
    provide_context(toasts);

    #[cfg(feature = "hydrate")]
    {
        if auth.get_untracked().loading {
            leptos::task::spawn_local(async move {
                let user = crate::net::api::fetch_current_user().await;
                auth.set(AuthState { user, loading: false });
            });
        }
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/tavio.css"/>
        <Title text="Tavio"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("signin") view=SignInPage/>
                <Route path=StaticSegment("signup") view=SignInPage/>
                // One layout instance spans every dashboard route so the
                // sidebar keeps its state across navigation.
                <ParentRoute path=StaticSegment("") view=DashboardLayout>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=(StaticSegment("files"), ParamSegment("section")) view=SectionPage/>
                    <Route path=StaticSegment("help") view=SectionPage/>
                    <Route path=StaticSegment("settings") view=SectionPage/>
                </ParentRoute>
            </Routes>
        </Router>
        <ToastStack/>
    }
}
