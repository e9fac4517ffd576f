//! "Quem somos" in its two layouts.

use leptos::prelude::*;

use super::{Picture, RichBlock, SectionHeading};
use crate::types::{AboutLayout, AboutProps, Partner};

/// About section; [`AboutLayout`] picks the arrangement.
#[component]
pub fn AboutSection(props: AboutProps) -> impl IntoView {
    let style = format!("background-color: {}", props.background_color);
    let id = props.id.clone();
    let body = match props.layout {
        AboutLayout::Badged => badged(props).into_any(),
        AboutLayout::Split => split(props).into_any(),
    };
    view! {
        <section id=id class="section about" style=style>
            <div class="container">{body}</div>
        </section>
    }
}

fn badged(props: AboutProps) -> impl IntoView {
    view! {
        <SectionHeading badge="Sobre Nós" title=props.title />
        <div class="about__grid">
            <RichBlock text=props.content class="rich-text animate-slide-in-right" />
            <div class="about__logo animate-float">
                <Picture src=props.logo alt="Renu" width=300 height=300 />
            </div>
        </div>
        <div class="card animate-slide-up" style="margin-top: 6rem">
            <RichBlock text=props.partners_info />
            <div class="partners">{partner_tiles(props.partners, Vec::new())}</div>
        </div>
    }
}

fn split(props: AboutProps) -> impl IntoView {
    view! {
        <div class="about__grid">
            <div class="about__logo animate-float">
                <Picture src=props.logo alt="Renu" width=300 height=300 />
            </div>
            <div>
                <h2 class="accent-title">{props.title}</h2>
                <RichBlock text=props.content />
            </div>
        </div>
        <div style="margin-top: 4rem">
            <RichBlock text=props.partners_info />
            <div class="partners">
                {partner_tiles(props.partners, props.placeholder_partners)}
            </div>
        </div>
    }
}

/// Partner logos; named placeholder tiles stand in while the list is empty.
fn partner_tiles(partners: Vec<Partner>, placeholders: Vec<String>) -> impl IntoView {
    if partners.is_empty() {
        return placeholders
            .into_iter()
            .map(|name| view! { <div class="placeholder placeholder--tile">{name}</div> })
            .collect::<Vec<_>>()
            .into_any();
    }
    partners
        .into_iter()
        .map(|partner| {
            let href = partner.url.unwrap_or_else(|| "#".to_string());
            view! {
                <a class="card" href=href target="_blank" rel="noopener noreferrer">
                    <Picture src=partner.image alt=partner.name width=160 height=60 />
                </a>
            }
        })
        .collect::<Vec<_>>()
        .into_any()
}
