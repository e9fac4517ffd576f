//! Root document component - the complete HTML page.

use leptos::prelude::*;

use super::SectionView;
use crate::styles::SITE_CSS;
use crate::types::Page;
use crate::ClientAssets;

/// The complete HTML document for a page.
#[component]
pub fn PageDocument(page: Page, assets: ClientAssets) -> impl IntoView {
    let Page {
        title,
        lang,
        sections,
    } = page;

    view! {
        <html lang=lang>
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{title}</title>
                <style inner_html=SITE_CSS></style>
            </head>
            <body>
                <main>
                    {sections
                        .into_iter()
                        .map(|section| view! { <SectionView section=section /> })
                        .collect::<Vec<_>>()}
                </main>
                <ClientScript assets=assets />
            </body>
        </html>
    }
}

/// Bootstrap for the wasm client; nothing when no glue path is set.
#[component]
fn ClientScript(assets: ClientAssets) -> impl IntoView {
    assets
        .bootstrap_script()
        .map(|script| view! { <script type="module" inner_html=script></script> })
}
