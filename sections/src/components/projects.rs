//! Project showcase.

use leptos::prelude::*;

use super::{Icon, Picture, RichBlock, SectionHeading, ICON_CHECK};
use crate::types::{Project, ProjectsProps};

/// Projects section.
#[component]
pub fn ProjectsSection(props: ProjectsProps) -> impl IntoView {
    let style = format!("background-color: {}", props.background_color);
    view! {
        <section id=props.id class="section projects" style=style>
            <div class="container">
                <SectionHeading badge="Projetos" title=props.title />
                <RichBlock text=props.description class="rich-text heading" />
                {props
                    .projects
                    .into_iter()
                    .map(|project| view! { <ProjectCard project=project /> })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let alt = project.title.clone();
    let features = project
        .features
        .into_iter()
        .map(|feature| {
            view! {
                <li>
                    <span class="check-list__icon"><Icon path=ICON_CHECK size="14" /></span>
                    <span inner_html=feature.text.0></span>
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <article class="card project">
            <div class="project__image">
                <Picture src=project.image alt=alt />
            </div>
            <div>
                <h3 class="card__title">{project.title}</h3>
                <p>{project.subtitle}</p>
                <ul class="check-list">{features}</ul>
            </div>
        </article>
    }
}
