//! Server-rendered carousel markup.
//!
//! The initial indicator and arrow state comes from the same [`Slider`]
//! the browser client runs, mounted over `()`. The client finds the root
//! through `data-slider-root` and reads its options back from the data
//! attributes.

use std::time::Duration;

use leptos::prelude::*;

use super::{Icon, ICON_ARROW_LEFT, ICON_ARROW_RIGHT};
use crate::slider::{Slider, SliderOptions};

/// Horizontally scrolling carousel with optional arrows and dots.
#[component]
pub fn Carousel(
    /// DOM id of the carousel root
    #[prop(into)]
    root_id: String,
    /// Slide contents, in order
    items: Vec<AnyView>,
    /// Wrap around at the ends
    #[prop(default = true)]
    infinite: bool,
    /// Autoplay period in seconds, 0 disables it
    #[prop(default = 0)]
    interval_secs: u32,
    /// Show previous/next buttons
    #[prop(default = true)]
    arrows: bool,
    /// Show dot indicators
    #[prop(default = true)]
    dots: bool,
) -> impl IntoView {
    let interval = (interval_secs > 0).then(|| Duration::from_secs(u64::from(interval_secs)));
    let slider = Slider::mount(
        (),
        items.len(),
        SliderOptions {
            infinite,
            interval,
            root_id: root_id.clone(),
        },
    );
    let interval_ms = interval.map_or(0, |d| d.as_millis()).to_string();
    let dot_style = format!("animation-duration: {interval_secs}s");

    let slides = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let slide_id = format!("{root_id}::{index}");
            view! {
                <li id=slide_id class="carousel-item" data-slider-item=index.to_string()>
                    {item}
                </li>
            }
        })
        .collect::<Vec<_>>();

    let indicators = dots.then(|| {
        view! {
            <ul class="carousel-dots">
                {slider
                    .indicators()
                    .into_iter()
                    .map(|dot| {
                        let label = format!("Ir para o slide {}", dot.index + 1);
                        view! {
                            <li>
                                <button
                                    type="button"
                                    data-dot=dot.index.to_string()
                                    aria-label=label
                                    aria-current=dot.active.to_string()
                                    disabled=dot.active
                                >
                                    <div class="dot" style=dot_style.clone()></div>
                                </button>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        }
    });

    let buttons = arrows.then(|| {
        view! {
            <div class="carousel-arrows">
                <button
                    type="button"
                    class="btn-circle"
                    data-slide="prev"
                    aria-label="Anterior"
                    disabled={!slider.can_go_prev()}
                >
                    <Icon path=ICON_ARROW_LEFT size="24" />
                </button>
                <button
                    type="button"
                    class="btn-circle"
                    data-slide="next"
                    aria-label="Próximo"
                    disabled={!slider.can_go_next()}
                >
                    <Icon path=ICON_ARROW_RIGHT size="24" />
                </button>
            </div>
        }
    });

    view! {
        <div
            id=root_id
            class="carousel-root"
            data-slider-root=""
            data-infinite=infinite.to_string()
            data-interval-ms=interval_ms
        >
            <ul class="carousel" data-slider-track="">
                {slides}
            </ul>
            <div class="carousel-controls">
                {indicators}
                {buttons}
            </div>
        </div>
    }
}
