//! # renu-sections
//!
//! Leptos SSR sections for the Renu Energia website.
//!
//! Every block of the homepage (header, hero, about, mission, biomethane
//! explainer, solutions, sustainability goals, projects, news, partner
//! logos, testimonials, footer) is a Leptos component driven by a
//! serde-loadable props struct. [`render_page`] turns a [`types::Page`]
//! into one static HTML document.
//!
//! ## Features
//!
//! - **Static output** - Pure SSR, no hydration
//! - **Forgiving props** - Every field has a documented default
//! - **Shared carousel core** - [`slider`] runs on the server for the
//!   initial markup and in the wasm client for interaction
//! - **Mailto contact form** - [`contact`] builds the link, no backend
//!
//! ## Quick Start
//!
//! ```rust
//! use renu_sections::{render_page, ClientAssets, types::Page};
//!
//! let html = render_page(&Page::default(), &ClientAssets::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("PORQUE BIOMETANO ?"));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Props for every section and the [`types::Page`] list
//! - [`components`] - Leptos UI components
//! - [`styles`] - The shared stylesheet
//! - [`slider`] - Carousel state, navigation and autoplay
//! - [`contact`] - Contact form to `mailto:` link
//! - [`rich_text`] - Filters applied to editor-authored HTML

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![recursion_limit = "256"]

pub mod components;
pub mod contact;
pub mod rich_text;
pub mod slider;
pub mod styles;
pub mod types;

use components::PageDocument;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use tracing::debug;
use types::Page;

/// Render a complete HTML page.
///
/// Rich text is rendered as it stands in `page`; run
/// [`Page::filter_rich_text`] first to escape or sanitize it.
///
/// # Example
///
/// ```rust
/// use renu_sections::{render_page, ClientAssets, types::{Page, Section, HeroProps}};
///
/// let page = Page {
///     sections: vec![Section::Hero(HeroProps::default())],
///     ..Default::default()
/// };
/// let html = render_page(&page, &ClientAssets::default());
/// assert!(html.contains("Inicie uma conversa"));
/// ```
pub fn render_page(page: &Page, assets: &ClientAssets) -> String {
    debug!(
        title = %page.title,
        sections = page.sections.len(),
        client = assets.wasm_glue_path.is_some(),
        "rendering page"
    );

    let doc = view! {
        <PageDocument page=page.clone() assets=assets.clone() />
    };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Where the browser client is served from.
///
/// With no glue path the page is fully static: carousels show their
/// first slide and the contact form falls back to the browser default.
///
/// ```rust
/// use renu_sections::ClientAssets;
///
/// let assets = ClientAssets {
///     wasm_glue_path: Some("/pkg/renu_sections_wasm.js".into()),
/// };
/// assert!(assets.bootstrap_script().unwrap().contains("init()"));
/// ```
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct ClientAssets {
    /// URL of the wasm-bindgen JS glue (`--target web`)
    pub wasm_glue_path: Option<String>,
}

impl ClientAssets {
    /// Module script that loads and starts the client, if configured.
    pub fn bootstrap_script(&self) -> Option<String> {
        let path = self
            .wasm_glue_path
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())?;
        // A JSON string literal is a valid JS string literal.
        let literal = serde_json::to_string(path).ok()?;
        Some(format!("import init from {literal};\ninit();"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contact::SubmitAction;
    use rich_text::EscapeMarkup;
    use types::{
        AboutLayout, AboutProps, FooterProps, ImageWithParagraphProps, LogosProps, Placement,
        Section, TestimonialsProps,
    };

    fn only(section: Section) -> Page {
        Page {
            sections: vec![section],
            ..Default::default()
        }
    }

    #[test]
    fn renders_default_homepage() {
        let html = render_page(&Page::default(), &ClientAssets::default());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("lang=\"pt-BR\""));
        assert!(html.contains("Renu Energia | Biometano"));
        assert!(html.contains("@keyframes float"));
        assert!(html.contains("QUEM SOMOS!"));
        assert!(html.contains("id=\"nossos-contatos\""));
        assert!(html.contains("Todos os direitos reservados."));
        // no client configured
        assert!(!html.contains("<script"));
    }

    #[test]
    fn stylesheet_is_inlined_once() {
        let html = render_page(&Page::default(), &ClientAssets::default());
        assert_eq!(html.matches("<style").count(), 1);
        assert_eq!(html.matches("@keyframes slideUp").count(), 1);
    }

    #[test]
    fn rich_text_is_injected_as_markup() {
        let html = render_page(
            &only(Section::About(AboutProps::default())),
            &ClientAssets::default(),
        );
        assert!(html.contains("<p>A Renu é uma plataforma integrada"));
    }

    #[test]
    fn escape_filter_neutralizes_markup() {
        let mut page = only(Section::About(AboutProps {
            content: "<script>alert(1)</script>".into(),
            ..Default::default()
        }));
        page.filter_rich_text(&EscapeMarkup);
        let html = render_page(&page, &ClientAssets::default());

        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn about_split_layout_shows_partner_placeholders() {
        let html = render_page(
            &only(Section::About(AboutProps {
                layout: AboutLayout::Split,
                ..Default::default()
            })),
            &ClientAssets::default(),
        );
        assert!(html.contains("accent-title"));
        assert!(html.contains("Drys Capital"));
        assert!(html.contains("Electy"));
    }

    #[test]
    fn missing_image_renders_placeholder() {
        let html = render_page(
            &only(Section::ImageWithParagraph(ImageWithParagraphProps {
                image: None,
                placement: Placement::Left,
                ..Default::default()
            })),
            &ClientAssets::default(),
        );
        assert!(html.contains("class=\"placeholder"));
        assert!(html.contains("split--image-left"));
    }

    #[test]
    fn testimonials_render_carousel_contract() {
        let html = render_page(
            &only(Section::Testimonials(TestimonialsProps {
                interval: 5,
                ..Default::default()
            })),
            &ClientAssets::default(),
        );

        assert!(html.contains("data-slider-root"));
        assert!(html.contains("id=\"depoimentos-carousel\""));
        assert!(html.contains("data-interval-ms=\"5000\""));
        assert!(html.contains("data-infinite=\"true\""));
        assert_eq!(html.matches("data-slider-item=").count(), 5);
        assert_eq!(html.matches("data-dot=").count(), 5);
        assert_eq!(html.matches("aria-current=\"true\"").count(), 1);
        assert!(html.contains("data-slide=\"prev\""));
        assert!(html.contains("animation-duration: 5s"));
    }

    #[test]
    fn finite_carousel_starts_with_prev_disabled() {
        let html = render_page(
            &only(Section::Testimonials(TestimonialsProps {
                infinite: false,
                ..Default::default()
            })),
            &ClientAssets::default(),
        );
        let prev = html.find("data-slide=\"prev\"").expect("prev button");
        let next = html.find("data-slide=\"next\"").expect("next button");
        let prev_tag = &html[html[..prev].rfind('<').unwrap_or(0)..next];
        assert!(prev_tag.contains("disabled"));
        assert!(html.contains("data-infinite=\"false\""));
    }

    #[test]
    fn carousel_controls_can_be_hidden() {
        let html = render_page(
            &only(Section::Testimonials(TestimonialsProps {
                arrows: false,
                dots: false,
                ..Default::default()
            })),
            &ClientAssets::default(),
        );
        assert!(!html.contains("data-dot="));
        assert!(!html.contains("data-slide="));
        assert_eq!(html.matches("data-slider-item=").count(), 5);
    }

    #[test]
    fn empty_logo_list_renders_no_marquee() {
        let html = render_page(
            &only(Section::Logos(LogosProps::default())),
            &ClientAssets::default(),
        );
        assert!(!html.contains("animate-sliding\""));
        assert!(html.contains("Nossos parceiros"));
    }

    #[test]
    fn footer_form_carries_mailto_template() {
        let mut footer = FooterProps::default();
        footer.form.submit_action = SubmitAction::Navigate;
        let html = render_page(&only(Section::Footer(footer)), &ClientAssets::default());

        assert!(html.contains("id=\"nossos-contatos-form\""));
        assert!(html.contains("data-mailto-recipient=\"contato@renuenergia.com.br\""));
        assert!(html.contains("data-mailto-subject=\"Contato do site via formulário\""));
        assert!(html.contains("data-submit-action=\"navigate\""));
        assert_eq!(html.matches("<input").count(), 4);
        assert_eq!(html.matches("<textarea").count(), 1);
    }

    #[test]
    fn every_footer_form_gets_its_own_id() {
        let second = FooterProps {
            id: Some("contato-rodape".into()),
            ..Default::default()
        };
        let anonymous = FooterProps {
            id: None,
            ..Default::default()
        };
        let page = Page {
            sections: vec![
                Section::Footer(FooterProps::default()),
                Section::Footer(second),
                Section::Footer(anonymous),
            ],
            ..Default::default()
        };
        let html = render_page(&page, &ClientAssets::default());

        assert_eq!(html.matches("id=\"nossos-contatos-form\"").count(), 1);
        assert_eq!(html.matches("id=\"contato-rodape-form\"").count(), 1);
        assert_eq!(html.matches("id=\"contact_form\"").count(), 1);
        assert_eq!(html.matches("data-mailto-recipient=").count(), 3);
    }

    #[test]
    fn client_script_is_emitted_when_configured() {
        let assets = ClientAssets {
            wasm_glue_path: Some("/pkg/renu_sections_wasm.js".into()),
        };
        let html = render_page(&Page::default(), &assets);
        assert!(html.contains("<script type=\"module\">"));
        assert!(html.contains("import init from \"/pkg/renu_sections_wasm.js\";"));
    }

    #[test]
    fn blank_glue_path_means_no_client() {
        let assets = ClientAssets {
            wasm_glue_path: Some("   ".into()),
        };
        assert_eq!(assets.bootstrap_script(), None);
    }
}
