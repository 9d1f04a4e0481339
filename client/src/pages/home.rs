//! Public landing page.

use leptos::prelude::*;

use crate::nav::view::BRAND;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="landing">
            <header class="landing__header">
                <span class="landing__brand">{BRAND}</span>
                <nav class="landing__links">
                    <a class="btn" href="/signin">"Sign in"</a>
                    <a class="btn btn--primary" href="/signup">"Get started"</a>
                </nav>
            </header>
            <section class="landing__hero">
                <h1>"Transform Your Data into Insights"</h1>
                <p class="landing__lede">
                    "Upload datasets, build charts, and share dashboards with your team."
                </p>
                <a class="btn btn--primary" href="/signup">"Start for free"</a>
            </section>
        </div>
    }
}
