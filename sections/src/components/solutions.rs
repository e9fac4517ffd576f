//! Business models: production for industry and module rental.

use leptos::prelude::*;

use super::{Icon, Picture, RichBlock, SectionHeading, ICON_CHECK};
use crate::types::{Solution, SolutionsProps};

/// Solutions section.
#[component]
pub fn SolutionsSection(props: SolutionsProps) -> impl IntoView {
    let style = format!(
        "background-color: {}; color: {}",
        props.background_color, props.text_color
    );

    view! {
        <section id=props.id class="section solutions" style=style>
            <div class="container">
                <SectionHeading badge="Soluções" title=props.title />
                <p class="heading" style="margin-top: -3rem">{props.subtitle}</p>
                {props.logo_image.map(|src| view! { <Picture src=Some(src) alt="Renu" class="about__logo" /> })}

                <h3 class="accent-title">{props.model1_title}</h3>
                <div class="card-grid card-grid--2">
                    <SolutionCard solution=props.producer_solution />
                    <SolutionCard solution=props.company_solution />
                </div>

                <h3 class="accent-title" style="margin-top: 4rem">{props.model2_title}</h3>
                <RichBlock text=props.model2_description />
                <Picture src=props.business_model_image alt="Modelo de negócio" />

                <div class="card split" style="margin-top: 2rem">
                    <Picture src=props.secondary_logo alt="Renu" class="about__logo" />
                    <RichBlock text=props.info_text />
                </div>
                <div class="split" style="margin-top: 2rem">
                    <Picture src=props.small_image alt="Cana" />
                    <RichBlock text=props.cane_text />
                </div>
            </div>
        </section>
    }
}

#[component]
fn SolutionCard(solution: Solution) -> impl IntoView {
    let bullets = solution
        .benefits
        .into_iter()
        .map(|benefit| {
            let class = if benefit.highlighted {
                "solution__benefit solution__benefit--highlighted"
            } else {
                "solution__benefit"
            };
            view! {
                <li class=class>
                    <span class="check-list__icon"><Icon path=ICON_CHECK size="14" /></span>
                    <span inner_html=benefit.text.0></span>
                </li>
            }
        })
        .collect::<Vec<_>>();
    let alt = solution.title.clone();

    view! {
        <article class="card">
            <Picture src=solution.image alt=alt />
            <h4 class="card__title">{solution.title}</h4>
            <RichBlock text=solution.description />
            <ul class="check-list">{bullets}</ul>
        </article>
    }
}
