//! Testimonials carousel.

use leptos::prelude::*;

use super::{Carousel, Picture, SectionHeading};
use crate::types::{Testimonial, TestimonialsProps};

/// Carousel root id used when the section has no id of its own.
pub const DEFAULT_ROOT_ID: &str = "testimonials";

/// Testimonials section.
#[component]
pub fn TestimonialsSection(props: TestimonialsProps) -> impl IntoView {
    let root_id = format!(
        "{}-carousel",
        props.id.as_deref().unwrap_or(DEFAULT_ROOT_ID)
    );
    let items = props
        .slides
        .into_iter()
        .map(|slide| view! { <TestimonialCard slide=slide /> }.into_any())
        .collect::<Vec<_>>();
    let subtitle = (!props.subtitle.trim().is_empty())
        .then(|| view! { <p class="heading" style="margin-top: -3rem">{props.subtitle.clone()}</p> });

    view! {
        <section id=props.id class="section testimonials">
            <div class="container">
                <SectionHeading badge="Depoimentos" title=props.title />
                {subtitle}
                <Carousel
                    root_id=root_id
                    items=items
                    infinite=props.infinite
                    interval_secs=props.interval
                    arrows=props.arrows
                    dots=props.dots
                />
            </div>
        </section>
    }
}

#[component]
fn TestimonialCard(slide: Testimonial) -> impl IntoView {
    view! {
        <div class="testimonial">
            <p>{slide.description}</p>
            <div class="testimonial__author">
                <Picture src=slide.avatar alt=slide.alt width=56 height=56 />
                <div>
                    <strong>{slide.name}</strong>
                    <p>{slide.position}</p>
                </div>
            </div>
        </div>
    }
}
