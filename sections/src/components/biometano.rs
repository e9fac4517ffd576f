//! "Porque biometano?" explainer.

use leptos::prelude::*;

use super::{Icon, Picture, RichBlock, SectionHeading};
use crate::types::BiometanoProps;

/// Biomethane section: illustration, explainer and benefit tiles.
#[component]
pub fn BiometanoSection(props: BiometanoProps) -> impl IntoView {
    let benefits = props
        .benefits
        .into_iter()
        .map(|benefit| {
            view! {
                <div class="card">
                    <Icon path=benefit.icon.path() size="48" class="card__icon" />
                    <h3 class="card__title">{benefit.title}</h3>
                    <p>{benefit.description}</p>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section id=props.id class="section biometano">
            <div class="container">
                <SectionHeading badge="Biometano" title=props.title />
                <div class="split">
                    <div class="split__media animate-fade-in">
                        <Picture src=props.image alt="Biometano" />
                    </div>
                    <RichBlock text=props.content />
                </div>
                <div class="card-grid card-grid--4" style="margin-top: 3rem">{benefits}</div>
            </div>
        </section>
    }
}
