//! Leptos UI components for rendering the site.
//!
//! Each section is a `#[component]` taking its props struct from
//! [`crate::types`]. Shared pieces (heading, picture, buttons, icons,
//! carousel) are reused across sections.
//!
//! # Component Hierarchy
//!
//! ```text
//! PageDocument
//! ├── SectionView (per configured section)
//! │   ├── HeaderSection
//! │   ├── HeroSection
//! │   ├── AboutSection / MissionSection / BiometanoSection / SolutionsSection
//! │   ├── SustainabilityGoalsSection / ImageWithParagraphSection / ProjectsSection
//! │   ├── NewsSection / LogosSection
//! │   ├── TestimonialsSection
//! │   │   └── Carousel
//! │   └── FooterSection (contact form)
//! └── ClientScript
//! ```
//!
//! # Usage
//!
//! Components are typically used via [`crate::render_page`], but can be
//! used directly:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use renu_sections::components::HeroSection;
//! use renu_sections::types::HeroProps;
//!
//! view! { <HeroSection props=HeroProps::default() /> }
//! ```

mod about;
mod biometano;
mod carousel;
mod common;
mod document;
mod footer;
mod header;
mod hero;
mod icons;
mod image_paragraph;
mod logos;
mod mission;
mod news;
mod projects;
mod section;
mod solutions;
mod sustainability;
mod testimonials;

pub use about::AboutSection;
pub use biometano::BiometanoSection;
pub use carousel::Carousel;
pub use common::{CtaButton, CtaRow, Picture, RichBlock, SectionHeading};
pub use document::PageDocument;
pub use footer::{contact_form_id, FooterSection, CONTACT_FORM_ID, CONTACT_FORM_SELECTOR};
pub use header::HeaderSection;
pub use hero::HeroSection;
pub use icons::*;
pub use image_paragraph::ImageWithParagraphSection;
pub use logos::LogosSection;
pub use mission::MissionSection;
pub use news::NewsSection;
pub use projects::ProjectsSection;
pub use section::SectionView;
pub use solutions::SolutionsSection;
pub use sustainability::SustainabilityGoalsSection;
pub use testimonials::{TestimonialsSection, DEFAULT_ROOT_ID};
