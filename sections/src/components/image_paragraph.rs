//! Benefit list next to an image.

use leptos::prelude::*;

use super::{CtaRow, Icon, Picture, ICON_CHECK};
use crate::types::{ImageWithParagraphProps, Placement};

/// Image with paragraph section.
#[component]
pub fn ImageWithParagraphSection(props: ImageWithParagraphProps) -> impl IntoView {
    let mut class = String::from("section image-paragraph");
    if props.disable_spacing.top {
        class.push_str(" section--flush-top");
    }
    if props.disable_spacing.bottom {
        class.push_str(" section--flush-bottom");
    }
    let grid_class = match props.placement {
        Placement::Left => "split split--image-left",
        Placement::Right => "split",
    };
    let style = format!("background-color: {}", props.background_color);
    let title_style = format!("text-align: {}", props.title_placement.as_str());
    let default_icon_color = props.icon_border_color;

    let bullets = props
        .benefits
        .into_iter()
        .map(|benefit| {
            let color = benefit
                .icon_color
                .unwrap_or_else(|| default_icon_color.clone());
            let icon_style = format!("color: {color}");
            view! {
                <li>
                    <span class="check-list__icon" style=icon_style>
                        <Icon path=ICON_CHECK size="14" />
                    </span>
                    <span class="rich-text" inner_html=benefit.text.0></span>
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section id=props.id class=class style=style>
            <div class="container">
                <div class=grid_class>
                    <div class="split__text">
                        <h2 class="accent-title" style=title_style>{props.title}</h2>
                        <ul class="check-list">{bullets}</ul>
                        <CtaRow ctas=props.cta align=props.cta_placement />
                    </div>
                    <div class="split__media">
                        <Picture src=props.image alt="" />
                    </div>
                </div>
            </div>
        </section>
    }
}
