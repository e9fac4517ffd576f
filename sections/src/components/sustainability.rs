//! UN sustainable development goal cards.

use leptos::prelude::*;

use super::{Picture, RichBlock, SectionHeading};
use crate::types::SustainabilityGoalsProps;

/// Sustainability goals section.
#[component]
pub fn SustainabilityGoalsSection(props: SustainabilityGoalsProps) -> impl IntoView {
    let style = format!("background-color: {}", props.background_color);

    let cards = props
        .goals
        .into_iter()
        .map(|goal| {
            let badge_style = format!("background-color: {}", goal.icon_bg_color);
            let badge = match goal.icon {
                Some(icon) => view! { <Picture src=Some(icon) alt=goal.number /> }.into_any(),
                None => goal.number.into_any(),
            };
            view! {
                <article class="card goal animate-slide-up">
                    <div class="goal__badge" style=badge_style>{badge}</div>
                    <RichBlock text=goal.title class="card__title" />
                    <RichBlock text=goal.description />
                </article>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section id=props.id class="section goals" style=style>
            <div class="container">
                <SectionHeading badge="ODS" title=props.heading />
                <p class="heading" style="margin-top: -3rem">{props.intro_text}</p>
                <div class="card-grid card-grid--5">{cards}</div>
            </div>
        </section>
    }
}
