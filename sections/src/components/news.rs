//! Press coverage cards.

use leptos::prelude::*;

use super::{Picture, SectionHeading};
use crate::types::{NewsItem, NewsProps};

/// News section.
#[component]
pub fn NewsSection(props: NewsProps) -> impl IntoView {
    view! {
        <section id=props.id class="section news">
            <div class="container">
                <SectionHeading badge="Notícias" title=props.title />
                <div class="card-grid card-grid--3">
                    {props
                        .items
                        .into_iter()
                        .map(|item| view! { <NewsCard item=item /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn NewsCard(item: NewsItem) -> impl IntoView {
    let strip_style = item
        .highlight
        .map(|color| format!("background-color: {color}"));
    let logo_style = item
        .logo_background
        .map(|color| format!("background-color: {color}"));
    let href = item.url.unwrap_or_else(|| "#".to_string());
    let source_alt = item.source_name.clone().unwrap_or_default();
    let alt = item.name.clone();

    view! {
        <a class="card news-card" href=href target="_blank" rel="noopener noreferrer">
            <div class="news-card__strip" style=strip_style></div>
            <div class="news-card__source">
                {item.source.map(|src| view! { <img src=src alt=source_alt style=logo_style /> })}
                {item.source_name.map(|name| view! { <span>{name}</span> })}
            </div>
            <Picture src=item.image alt=alt />
            <div class="news-card__body">
                {item.date.map(|date| view! { <time>{date}</time> })}
                <h3 class="card__title">{item.name}</h3>
            </div>
        </a>
    }
}
