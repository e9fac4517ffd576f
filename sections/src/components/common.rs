//! Small building blocks shared by several sections.

use leptos::prelude::*;

use crate::rich_text::RichText;
use crate::types::{Alignment, Cta};

/// Badge + title + three-bar divider used on top of most sections.
#[component]
pub fn SectionHeading(
    /// Small pill above the title
    badge: &'static str,
    /// Section title
    #[prop(into)]
    title: String,
    /// Horizontal alignment
    #[prop(default = Alignment::Center)]
    align: Alignment,
) -> impl IntoView {
    let class = format!("heading heading--{}", align.as_str());
    view! {
        <div class=class>
            <span class="heading__badge">{badge}</span>
            <h2 class="heading__title">{title}</h2>
            <div class="heading__divider">
                <span></span>
                <span></span>
                <span></span>
            </div>
        </div>
    }
}

/// Image, or an empty placeholder box when there is no source.
#[component]
pub fn Picture(
    src: Option<String>,
    #[prop(into)] alt: String,
    /// Extra class on the `<img>` or placeholder
    #[prop(default = "")]
    class: &'static str,
    #[prop(optional)] width: Option<u32>,
    #[prop(optional)] height: Option<u32>,
) -> impl IntoView {
    match src.filter(|s| !s.trim().is_empty()) {
        Some(src) => view! {
            <img
                class=class
                src=src
                alt=alt
                width=width.map(|w| w.to_string())
                height=height.map(|h| h.to_string())
                loading="lazy"
            />
        }
        .into_any(),
        None => {
            let class = format!("placeholder {class}");
            view! { <div class=class role="img" aria-label=alt></div> }.into_any()
        }
    }
}

/// Call-to-action link styled as a button.
#[component]
pub fn CtaButton(cta: Cta) -> impl IntoView {
    let class = match cta.style {
        crate::types::CtaStyle::Solid => "btn btn--solid",
        crate::types::CtaStyle::Outline => "btn btn--outline",
        crate::types::CtaStyle::Ghost => "btn btn--ghost",
    };
    view! {
        <a id=cta.id class=class href=cta.href>{cta.text}</a>
    }
}

/// Row of CTA buttons, aligned.
#[component]
pub fn CtaRow(ctas: Vec<Cta>, #[prop(default = Alignment::Left)] align: Alignment) -> impl IntoView {
    (!ctas.is_empty()).then(|| {
        let class = format!("cta-row cta-row--{}", align.as_str());
        view! {
            <div class=class>
                {ctas.into_iter().map(|cta| view! { <CtaButton cta=cta /> }).collect::<Vec<_>>()}
            </div>
        }
    })
}

/// Rich-text field injected as markup. Renders nothing when empty.
#[component]
pub fn RichBlock(
    text: RichText,
    #[prop(default = "rich-text")] class: &'static str,
) -> impl IntoView {
    (!text.is_empty()).then(|| view! { <div class=class inner_html=text.0></div> })
}
