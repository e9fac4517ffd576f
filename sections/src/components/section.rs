//! Dispatch from a [`Section`] value to its component.

use leptos::prelude::*;

use super::{
    AboutSection, BiometanoSection, FooterSection, HeaderSection, HeroSection,
    ImageWithParagraphSection, LogosSection, MissionSection, NewsSection, ProjectsSection,
    SolutionsSection, SustainabilityGoalsSection, TestimonialsSection,
};
use crate::types::Section;

/// Render one configured section.
#[component]
pub fn SectionView(section: Section) -> impl IntoView {
    tracing::debug!(kind = section.kind(), "rendering section");
    match section {
        Section::Header(props) => view! { <HeaderSection props=props /> }.into_any(),
        Section::Hero(props) => view! { <HeroSection props=props /> }.into_any(),
        Section::About(props) => view! { <AboutSection props=props /> }.into_any(),
        Section::Mission(props) => view! { <MissionSection props=props /> }.into_any(),
        Section::Biometano(props) => view! { <BiometanoSection props=props /> }.into_any(),
        Section::Solutions(props) => view! { <SolutionsSection props=props /> }.into_any(),
        Section::SustainabilityGoals(props) => {
            view! { <SustainabilityGoalsSection props=props /> }.into_any()
        }
        Section::ImageWithParagraph(props) => {
            view! { <ImageWithParagraphSection props=props /> }.into_any()
        }
        Section::Projects(props) => view! { <ProjectsSection props=props /> }.into_any(),
        Section::News(props) => view! { <NewsSection props=props /> }.into_any(),
        Section::Logos(props) => view! { <LogosSection props=props /> }.into_any(),
        Section::Testimonials(props) => view! { <TestimonialsSection props=props /> }.into_any(),
        Section::Footer(props) => view! { <FooterSection props=props /> }.into_any(),
    }
}
