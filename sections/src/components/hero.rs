//! Full-height banner with the floating chat link.

use leptos::prelude::*;

use super::{CtaButton, Icon, Picture, RichBlock, ICON_CHAT};
use crate::types::HeroProps;

/// Hero banner.
#[component]
pub fn HeroSection(props: HeroProps) -> impl IntoView {
    let bg_style = props
        .background_image
        .as_deref()
        .map(|url| format!("background-image: url('{url}')"));
    let chat_href = format!("mailto:{}", props.chat_email.trim());

    view! {
        <section id=props.id class="hero">
            <div class="hero__bg animate-slow-zoom" style=bg_style></div>
            <div class="hero__overlay"></div>
            <div class="container hero__content animate-fade-in">
                {(!props.title.is_empty()).then(|| {
                    view! {
                        <h1 class="hero__title" inner_html=props.title.0.clone()></h1>
                    }
                })}
                {props.logo.map(|logo| {
                    view! {
                        <Picture
                            src=logo.src
                            alt=logo.alt
                            class="hero__logo"
                        />
                    }
                })}
                <RichBlock text=props.subtitle class="hero__subtitle animate-slide-up" />
                {props.cta.map(|cta| view! { <div class="cta-row"><CtaButton cta=cta /></div> })}
            </div>
            <a class="btn btn--solid chat-button" href=chat_href>
                <Icon path=ICON_CHAT size="20" />
                {props.chat_button_text}
            </a>
        </section>
    }
}
