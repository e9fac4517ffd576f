//! Fixed navigation bar with a CSS-only mobile drawer.

use leptos::prelude::*;

use super::{CtaButton, Icon, ICON_LIST};
use crate::types::HeaderProps;

const DRAWER_ID: &str = "header-drawer";

/// Site header: logo, anchor links, buttons, language switcher.
#[component]
pub fn HeaderSection(props: HeaderProps) -> impl IntoView {
    let HeaderProps {
        logo,
        links,
        buttons,
        languages,
    } = props;

    let nav_links = |links: &[crate::types::Link]| {
        links
            .iter()
            .map(|link| view! { <a href=link.href.clone()>{link.label.clone()}</a> })
            .collect::<Vec<_>>()
    };
    let logo_label = logo.alt.clone();
    let desktop_links = nav_links(&links);
    let drawer_links = nav_links(&links);

    let langs = languages
        .into_iter()
        .enumerate()
        .map(|(idx, lang)| {
            let class = if idx == 0 {
                "site-header__lang site-header__lang--active"
            } else {
                "site-header__lang"
            };
            view! { <span class=class data-lang=lang.code>{lang.label}</span> }
        })
        .collect::<Vec<_>>();

    view! {
        <header class="site-header">
            <input id=DRAWER_ID type="checkbox" class="drawer-toggle" />
            <div class="container site-header__bar">
                <a class="site-header__logo" href="/" aria-label=logo_label>
                    <img src=logo.src alt=logo.alt width=logo.width.map(|w| w.to_string()) />
                </a>
                <nav class="site-header__nav">{desktop_links}</nav>
                <div class="site-header__langs">{langs}</div>
                {buttons.into_iter().map(|cta| view! { <CtaButton cta=cta /> }).collect::<Vec<_>>()}
                <label for=DRAWER_ID class="drawer-button" aria-label="Abrir menu">
                    <Icon path=ICON_LIST size="28" />
                </label>
            </div>
            <nav class="drawer container">{drawer_links}</nav>
        </header>
    }
}
