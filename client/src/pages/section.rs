//! Placeholder page for menu sections without content yet.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::nav::menu::title_for_path;

/// Heading for a section route, taken from the menu configuration.
pub(crate) fn section_title(path: &str) -> &'static str {
    title_for_path(path).unwrap_or("Not found")
}

#[component]
pub fn SectionPage() -> impl IntoView {
    let location = use_location();
    let title = move || section_title(&location.pathname.get());

    view! {
        <section class="section-page">
            <h1>{title}</h1>
            <p class="section-page__body">"Nothing here yet."</p>
        </section>
    }
}

#[cfg(test)]
#[path = "section_test.rs"]
mod section_test;
