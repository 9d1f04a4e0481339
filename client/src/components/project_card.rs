//! Card for one project in the dashboard list.

use leptos::prelude::*;

use crate::net::types::Project;
use crate::state::projects::project_meta;

#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let meta = project_meta(&project);
    let Project { name, description, tags, thumbnail, .. } = project;

    view! {
        <article class="project-card">
            {thumbnail.map(|src| view! { <img class="project-card__thumb" src=src alt=""/> })}
            <h3 class="project-card__name">{name}</h3>
            {description.map(|text| view! { <p class="project-card__description">{text}</p> })}
            <span class="project-card__meta">{meta}</span>
            <ul class="project-card__tags">
                {tags.into_iter().map(|tag| view! { <li class="project-card__tag">{tag}</li> }).collect_view()}
            </ul>
        </article>
    }
}
