//! Partner logo marquee.

use leptos::prelude::*;

use super::{Picture, SectionHeading};
use crate::types::{Logo, LogosProps};

/// Logos section. The strip is rendered twice so the `sliding` animation
/// loops without a gap.
#[component]
pub fn LogosSection(props: LogosProps) -> impl IntoView {
    let strip = |logos: &[Logo]| {
        logos
            .iter()
            .map(|logo| {
                view! {
                    <Picture
                        src=logo.src.clone()
                        alt=logo.alt.clone()
                        width=logo.width.unwrap_or(110)
                        height=logo.height.unwrap_or(25)
                    />
                }
            })
            .collect::<Vec<_>>()
    };
    let marquee = (!props.logos.is_empty()).then(|| {
        let first = strip(&props.logos);
        let second = strip(&props.logos);
        view! {
            <div class="marquee">
                <div class="animate-sliding">
                    {first}
                    {second}
                </div>
            </div>
        }
    });

    view! {
        <section id=props.id class="section logos">
            <div class="container">
                <SectionHeading badge="Parceiros" title=props.title />
                {marquee}
            </div>
        </section>
    }
}
