//! Mission cards.

use leptos::prelude::*;

use super::{Picture, RichBlock, SectionHeading};
use crate::types::MissionProps;

/// Mission section.
#[component]
pub fn MissionSection(props: MissionProps) -> impl IntoView {
    let style = format!("background-color: {}", props.background_color);
    let title_style = format!("color: {}", props.text_color);

    let cards = props
        .items
        .into_iter()
        .map(|item| {
            view! {
                <article class="card animate-slide-up">
                    {item.icon.map(|icon| view! { <Picture src=Some(icon) alt="" class="card__icon" /> })}
                    <h3 class="card__title" style=title_style.clone()>{item.title}</h3>
                    <RichBlock text=item.content />
                </article>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section id=props.id class="section mission" style=style>
            <div class="container">
                <SectionHeading badge="Missão" title=props.title />
                <div class="card-grid card-grid--3">{cards}</div>
            </div>
        </section>
    }
}
