//! Section props: the configuration surface filled in by site editors.
//!
//! These types define what each section accepts. They're designed to be:
//!
//! - **Serializable** - Loaded from TOML/JSON via serde, camelCase keys
//! - **Forgiving** - Every field is optional; omitted fields take the
//!   documented default (`#[serde(default)]` everywhere)
//! - **Default-able** - `Default` carries the live site's content, so a
//!   bare `Page::default()` renders the full homepage
//!
//! # Example
//!
//! ```rust
//! use renu_sections::types::{Page, Section, TestimonialsProps};
//!
//! let page = Page {
//!     sections: vec![Section::Testimonials(TestimonialsProps {
//!         title: "O que dizem nossos clientes".into(),
//!         interval: 5,
//!         ..Default::default()
//!     })],
//!     ..Default::default()
//! };
//! assert_eq!(page.sections.len(), 1);
//! ```

use serde::{Deserialize, Serialize};

use crate::contact::{MailtoTemplate, SubmitAction};
use crate::rich_text::{RichText, RichTextFilter};

const LOGO_URL: &str = "https://ozksgdmyrqcxcwhnbepg.supabase.co/storage/v1/object/public/assets/1527/67120bcd-936a-4ea5-a760-02ed5c4a3d04";
const AVATAR_URL: &str = "https://ozksgdmyrqcxcwhnbepg.supabase.co/storage/v1/object/public/assets/1527/7286de42-e9c5-4fcb-ae8b-b992eea4b78e";
const PARAGRAPH_IMAGE_URL: &str = "https://ozksgdmyrqcxcwhnbepg.supabase.co/storage/v1/object/public/assets/4763/772e246e-1959-46ac-a309-3f25ab20af6f";

// =============================================================================
// Shared building blocks
// =============================================================================

/// Image with alt text and optional intrinsic size.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Logo {
    /// Image URL; `None` renders a placeholder
    pub src: Option<String>,
    /// Alternative text
    pub alt: String,
    /// Intrinsic width in pixels
    pub width: Option<u32>,
    /// Intrinsic height in pixels
    pub height: Option<u32>,
}

impl Logo {
    fn renu(alt: &str) -> Self {
        Self {
            src: Some(LOGO_URL.into()),
            alt: alt.into(),
            ..Default::default()
        }
    }
}

/// Plain labelled link.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Link {
    /// Visible text
    pub label: String,
    /// Target URL
    pub href: String,
}

impl Link {
    fn new(label: &str, href: &str) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// Visual weight of a call-to-action button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CtaStyle {
    /// Filled green button
    #[default]
    Solid,
    /// Bordered, transparent background
    Outline,
    /// Text-only
    Ghost,
}

/// Call-to-action button.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Cta {
    /// Optional DOM id (analytics hooks)
    pub id: Option<String>,
    /// Target URL
    pub href: String,
    /// Button label
    pub text: String,
    /// Button style
    pub style: CtaStyle,
}

/// Horizontal alignment used by titles and CTA rows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    /// Start of the line
    #[default]
    Left,
    /// End of the line
    Right,
    /// Centered
    Center,
}

impl Alignment {
    /// CSS modifier class suffix.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Center => "center",
        }
    }
}

/// Side an image sits on next to its text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    /// Image on the left
    Left,
    /// Image on the right
    #[default]
    Right,
}

// =============================================================================
// Page
// =============================================================================

/// Ordered list of sections plus document metadata.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Page {
    /// `<title>` of the document
    pub title: String,
    /// `lang` attribute of the document
    pub lang: String,
    /// Sections in render order
    pub sections: Vec<Section>,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            title: "Renu Energia | Biometano".into(),
            lang: "pt-BR".into(),
            sections: vec![
                Section::Header(HeaderProps::default()),
                Section::Hero(HeroProps::default()),
                Section::Biometano(BiometanoProps::default()),
                Section::About(AboutProps::default()),
                Section::Mission(MissionProps::default()),
                Section::Solutions(SolutionsProps::default()),
                Section::ImageWithParagraph(ImageWithParagraphProps::default()),
                Section::SustainabilityGoals(SustainabilityGoalsProps::default()),
                Section::Projects(ProjectsProps::default()),
                Section::News(NewsProps::default()),
                Section::Logos(LogosProps::default()),
                Section::Testimonials(TestimonialsProps::default()),
                Section::Footer(FooterProps::default()),
            ],
        }
    }
}

impl Page {
    /// Run every rich-text field of every section through `filter`.
    pub fn filter_rich_text(&mut self, filter: &dyn RichTextFilter) {
        for section in &mut self.sections {
            for text in section.rich_text_mut() {
                text.apply(filter);
            }
        }
    }
}

/// One configurable page block, tagged by `type`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Section {
    /// Fixed navigation bar
    Header(HeaderProps),
    /// Full-height banner
    Hero(HeroProps),
    /// "Quem somos" block
    About(AboutProps),
    /// Mission cards
    Mission(MissionProps),
    /// "Porque biometano?" explainer
    Biometano(BiometanoProps),
    /// Business models
    Solutions(SolutionsProps),
    /// UN sustainable development goals
    SustainabilityGoals(SustainabilityGoalsProps),
    /// Benefit list next to an image
    ImageWithParagraph(ImageWithParagraphProps),
    /// Project showcase
    Projects(ProjectsProps),
    /// Press coverage cards
    News(NewsProps),
    /// Partner logo marquee
    Logos(LogosProps),
    /// Testimonials carousel
    Testimonials(TestimonialsProps),
    /// Footer with contact form
    Footer(FooterProps),
}

impl Section {
    /// Short machine name, matches the serde tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Header(_) => "header",
            Self::Hero(_) => "hero",
            Self::About(_) => "about",
            Self::Mission(_) => "mission",
            Self::Biometano(_) => "biometano",
            Self::Solutions(_) => "solutions",
            Self::SustainabilityGoals(_) => "sustainability_goals",
            Self::ImageWithParagraph(_) => "image_with_paragraph",
            Self::Projects(_) => "projects",
            Self::News(_) => "news",
            Self::Logos(_) => "logos",
            Self::Testimonials(_) => "testimonials",
            Self::Footer(_) => "footer",
        }
    }

    /// Mutable access to every rich-text field of this section.
    pub fn rich_text_mut(&mut self) -> Vec<&mut RichText> {
        match self {
            Self::Hero(p) => vec![&mut p.title, &mut p.subtitle],
            Self::About(p) => vec![&mut p.content, &mut p.partners_info],
            Self::Mission(p) => p.items.iter_mut().map(|i| &mut i.content).collect(),
            Self::Biometano(p) => vec![&mut p.content],
            Self::Solutions(p) => {
                let mut out = vec![&mut p.model2_description, &mut p.info_text, &mut p.cane_text];
                for solution in [&mut p.producer_solution, &mut p.company_solution] {
                    out.push(&mut solution.description);
                    out.extend(solution.benefits.iter_mut().map(|b| &mut b.text));
                }
                out
            }
            Self::SustainabilityGoals(p) => p
                .goals
                .iter_mut()
                .flat_map(|g| [&mut g.title, &mut g.description])
                .collect(),
            Self::ImageWithParagraph(p) => p.benefits.iter_mut().map(|b| &mut b.text).collect(),
            Self::Projects(p) => {
                let mut out = vec![&mut p.description];
                for project in &mut p.projects {
                    out.extend(project.features.iter_mut().map(|f| &mut f.text));
                }
                out
            }
            Self::Header(_)
            | Self::News(_)
            | Self::Logos(_)
            | Self::Testimonials(_)
            | Self::Footer(_) => Vec::new(),
        }
    }
}

// =============================================================================
// Header
// =============================================================================

/// Entry of the language switcher.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageOption {
    /// Language code, e.g. `BR`
    pub code: String,
    /// Visible label
    pub label: String,
}

/// Navigation bar props.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeaderProps {
    /// Brand logo, links to `/`
    pub logo: Logo,
    /// Navigation links
    pub links: Vec<Link>,
    /// Buttons after the links
    pub buttons: Vec<Cta>,
    /// Language switcher entries; the first is highlighted
    pub languages: Vec<LanguageOption>,
}

impl Default for HeaderProps {
    fn default() -> Self {
        Self {
            logo: Logo::renu("Renu"),
            links: vec![
                Link::new("Porque biometano?", "#biometano"),
                Link::new("A Renu", "#quem-somos"),
                Link::new("Para Consumidores", "#para-consumidores"),
                Link::new("Para Produtores Rurais", "#solucoes"),
                Link::new("Nossos Contatos", "#nossos-contatos"),
            ],
            buttons: Vec::new(),
            languages: vec![
                LanguageOption {
                    code: "BR".into(),
                    label: "BR".into(),
                },
                LanguageOption {
                    code: "EN".into(),
                    label: "EN".into(),
                },
            ],
        }
    }
}

// =============================================================================
// Hero
// =============================================================================

/// Full-height banner props.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeroProps {
    /// Section anchor
    pub id: Option<String>,
    /// Background image URL
    pub background_image: Option<String>,
    /// Logo shown under the title
    pub logo: Option<Logo>,
    /// Big title (rich text); hidden when empty
    pub title: RichText,
    /// Subtitle (rich text)
    pub subtitle: RichText,
    /// Main call to action
    pub cta: Option<Cta>,
    /// Label of the floating chat button
    pub chat_button_text: String,
    /// Address the floating chat button writes to
    pub chat_email: String,
}

impl Default for HeroProps {
    fn default() -> Self {
        Self {
            id: Some("inicio".into()),
            background_image: None,
            logo: None,
            title: RichText::default(),
            subtitle: "Reduzindo seus custos de combustível de forma sustentável e limpa por meio do biometano".into(),
            cta: None,
            chat_button_text: "Inicie uma conversa".into(),
            chat_email: crate::contact::DEFAULT_RECIPIENT.into(),
        }
    }
}

// =============================================================================
// About
// =============================================================================

/// Layout variant of the About section.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AboutLayout {
    /// Badge + title + divider heading, text left, logo right
    #[default]
    Badged,
    /// Accent-bar title, logo left, text right, partner placeholders
    Split,
}

/// Partner logo tile.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Partner {
    /// Logo URL
    pub image: Option<String>,
    /// Partner name (alt text)
    pub name: String,
    /// Partner site
    pub url: Option<String>,
}

/// "Quem somos" props.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AboutProps {
    /// Section anchor
    pub id: Option<String>,
    /// Which layout to render
    pub layout: AboutLayout,
    /// Section title
    pub title: String,
    /// Company logo URL
    pub logo: Option<String>,
    /// Section background color
    pub background_color: String,
    /// Main content (rich text)
    pub content: RichText,
    /// Text above the partner logos (rich text)
    pub partners_info: RichText,
    /// Partner logos
    pub partners: Vec<Partner>,
    /// Names shown as tiles when `partners` is empty (split layout)
    pub placeholder_partners: Vec<String>,
}

impl Default for AboutProps {
    fn default() -> Self {
        Self {
            id: Some("quem-somos".into()),
            layout: AboutLayout::default(),
            title: "QUEM SOMOS!".into(),
            logo: None,
            background_color: "#f5f7f4".into(),
            content: "<p>A Renu é uma plataforma integrada de geração e distribuição de biometano.</p>\
                <p>Geramos biometano a partir de uma gama de pequenos e médios produtores de suínos e gado e o comercializamos por meio de contratos de fornecimento.</p>\
                <p>Além disso, temos uma solução de aluguel de módulos de biometano direto para o produtor rural, que pode gerar biometano para consumo próprio.</p>"
                .into(),
            partners_info: "<p>Somos uma empresa investida e incubada pelo braço de transição energética da Drys Investimentos, que é uma gestora de recursos baseada em São Paulo.</p>\
                <p>O braço de transição energética da Drys também conta com um investimento na Electy, energytech que comercializa energia limpa de forma 100% digital.</p>"
                .into(),
            partners: Vec::new(),
            placeholder_partners: vec!["Drys Capital".into(), "Electy".into()],
        }
    }
}

// =============================================================================
// Mission
// =============================================================================

/// One mission card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MissionItem {
    /// Card title
    pub title: String,
    /// Card body (rich text)
    pub content: RichText,
    /// Icon URL
    pub icon: Option<String>,
}

/// Mission cards props.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MissionProps {
    /// Section anchor
    pub id: Option<String>,
    /// Main title
    pub title: String,
    /// Section background color
    pub background_color: String,
    /// Card title color
    pub text_color: String,
    /// Mission statements
    pub items: Vec<MissionItem>,
}

impl Default for MissionProps {
    fn default() -> Self {
        let item = |title: &str, content: &str| MissionItem {
            title: title.into(),
            content: content.into(),
            icon: None,
        };
        Self {
            id: Some("missao".into()),
            title: "Transformamos resíduos em energia limpa, impulsionando a sustentabilidade.".into(),
            background_color: "#f5f7f4".into(),
            text_color: "#0e503c".into(),
            items: vec![
                item(
                    "Nosso objetivo",
                    "é contribuir para a transição para uma economia mais limpa e circular, com foco na geração de energia renovável por meio da valorização de resíduos.",
                ),
                item(
                    "Comprometidos com um futuro mais verde",
                    "buscamos transformar resíduos em fontes de energia renovável, oferecendo alternativas que aliam sustentabilidade e viabilidade econômica.",
                ),
                item(
                    "Reconhecemos os desafios ambientais da gestão de resíduos",
                    "e buscamos soluções inovadoras para convertê-los em energia limpa, transformando-os em oportunidades que promovem sustentabilidade, rentabilidade e um amanhã mais sustentável.",
                ),
            ],
        }
    }
}

// =============================================================================
// Biometano
// =============================================================================

/// Icon drawn next to a biomethane benefit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BenefitIcon {
    /// Leaf
    #[default]
    Eco,
    /// Lightning bolt
    Energy,
    /// Coin
    Economy,
    /// Muted speaker
    Noise,
}

/// One biomethane benefit.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Benefit {
    /// Icon
    pub icon: BenefitIcon,
    /// Short title
    pub title: String,
    /// One-line description
    pub description: String,
}

/// "Porque biometano?" props.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BiometanoProps {
    /// Section anchor
    pub id: Option<String>,
    /// Section title
    pub title: String,
    /// Illustration URL
    pub image: Option<String>,
    /// Explainer (rich text)
    pub content: RichText,
    /// Benefit tiles
    pub benefits: Vec<Benefit>,
}

impl Default for BiometanoProps {
    fn default() -> Self {
        let benefit = |icon, title: &str, description: &str| Benefit {
            icon,
            title: title.into(),
            description: description.into(),
        };
        Self {
            id: Some("biometano".into()),
            title: "PORQUE BIOMETANO ?".into(),
            image: None,
            content: "<p>Biometano é um produto derivado da purificação (upgrade) do biogás, que é o gás retirado do processo de decomposição anaeróbica (na ausência de oxigênio) de resíduos orgânicos. Estes resíduos orgânicos podem vir de lixo, esgoto urbano, agricultura, pecuária, suinocultura e gado leiteiro.</p>\
                <p>O biogás tem em sua composição principalmente a presença do metano (CH4) e dióxido de carbono (CO2), variando entre 50 a 70% do total e, em menores quantidades, o gás sulfídrico (H2S), a umidade (H2O) e outros gases, como o nitrogênio (N2).</p>\
                <p>O processo de upgrading do biogás, leva a purificação e separação do metano e do dióxido de carbono, produzindo o biometano.</p>"
                .into(),
            benefits: vec![
                benefit(
                    BenefitIcon::Eco,
                    "Sustentável",
                    "Redução de mais de 85% das emissões de carbono no transporte",
                ),
                benefit(
                    BenefitIcon::Energy,
                    "Energia Renovável",
                    "Fonte de energia limpa e renovável",
                ),
                benefit(
                    BenefitIcon::Economy,
                    "Economia",
                    "Redução entre 20% a 30% dos custos com combustível",
                ),
                benefit(
                    BenefitIcon::Noise,
                    "Redução de Efeitos sonoros",
                    "Menor ruído em comparação com diesel",
                ),
            ],
        }
    }
}

// =============================================================================
// Solutions
// =============================================================================

/// Bullet of a solution card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolutionBenefit {
    /// Bullet text (rich text)
    pub text: RichText,
    /// Emphasized bullet
    pub highlighted: bool,
}

/// One business model card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Solution {
    /// Card title
    pub title: String,
    /// Card description (rich text)
    pub description: RichText,
    /// Illustration URL
    pub image: Option<String>,
    /// Bullets
    pub benefits: Vec<SolutionBenefit>,
}

fn solution(title: &str, description: &str, benefits: &[(&str, bool)]) -> Solution {
    Solution {
        title: title.into(),
        description: description.into(),
        image: None,
        benefits: benefits
            .iter()
            .map(|(text, highlighted)| SolutionBenefit {
                text: (*text).into(),
                highlighted: *highlighted,
            })
            .collect(),
    }
}

/// Business models props.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SolutionsProps {
    /// Section anchor
    pub id: Option<String>,
    /// Section title
    pub title: String,
    /// Line under the title
    pub subtitle: String,
    /// Section background color
    pub background_color: String,
    /// Section text color
    pub text_color: String,
    /// Logo next to the title
    pub logo_image: Option<String>,
    /// Heading of the first model
    pub model1_title: String,
    /// Card for rural producers
    pub producer_solution: Solution,
    /// Card for consuming companies
    pub company_solution: Solution,
    /// Heading of the second model
    pub model2_title: String,
    /// Description of the second model (rich text)
    pub model2_description: RichText,
    /// Diagram of the business model
    pub business_model_image: Option<String>,
    /// Logo in the info strip
    pub secondary_logo: Option<String>,
    /// Info strip text (rich text)
    pub info_text: RichText,
    /// Small illustration next to `cane_text`
    pub small_image: Option<String>,
    /// Sugar cane exchange note (rich text)
    pub cane_text: RichText,
}

impl Default for SolutionsProps {
    fn default() -> Self {
        Self {
            id: Some("solucoes".into()),
            title: "Nossas Soluções".into(),
            subtitle: "Soluções inovadoras para produção de biometano".into(),
            background_color: "#ffffff".into(),
            text_color: "#0F172A".into(),
            logo_image: None,
            model1_title: "1. Modelo de produção de Biometano e comercialização para a indústria".into(),
            producer_solution: solution(
                "Pequenos e Médios Produtores",
                "Instalação de módulos de biometano para purificação do biogás gerado na operação de produtores de gado e suínos",
                &[
                    ("Renda extra mensal recorrente", false),
                    ("Suporte técnico para instalação e manutenção da Renu", true),
                    ("Garantia em caso de problemas técnicos", false),
                    ("Treinamento gratuito na propriedade rural e comercialidade", false),
                ],
            ),
            company_solution: solution(
                "Empresas",
                "Fornecimento de biometano para empresas consumidoras de diesel",
                &[
                    ("Garantia de volume e nível de serviço contratado", true),
                    ("Menor risco operacional: sem riscos de biometano", false),
                    ("Visibilidade e previsibilidade de custos a longo prazo", false),
                    ("Crédito redução e compensação de carbono", false),
                    ("Flexibilidade: suporte para biometano desde na planta", false),
                    ("Economia de 20-30% do custo com combustível", false),
                    ("Auxílio na conversão de frotas para biometano", false),
                ],
            ),
            model2_title: "2. Modelo de locação de módulos de produção de biometano para produtores rurais".into(),
            model2_description: "O produtor utiliza o módulo e evita desembolso de compra para aquisição".into(),
            business_model_image: None,
            secondary_logo: None,
            info_text: "A Renu é proprietária de módulos de purificação de biogás em biometano".into(),
            small_image: None,
            cane_text: "Troca de Cana por Capex e economia relacionada com a logística".into(),
        }
    }
}

// =============================================================================
// Sustainability goals
// =============================================================================

/// One UN sustainable development goal card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SustainabilityGoal {
    /// Goal number, e.g. `"7"`
    pub number: String,
    /// Card title (rich text)
    pub title: RichText,
    /// Card body (rich text)
    pub description: RichText,
    /// Icon URL; the goal number is drawn when absent
    pub icon: Option<String>,
    /// Badge background color
    pub icon_bg_color: String,
}

/// Sustainability goals props.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SustainabilityGoalsProps {
    /// Section anchor
    pub id: Option<String>,
    /// Section heading
    pub heading: String,
    /// Paragraph under the heading
    pub intro_text: String,
    /// Section background color
    pub background_color: String,
    /// Goal cards
    pub goals: Vec<SustainabilityGoal>,
}

impl Default for SustainabilityGoalsProps {
    fn default() -> Self {
        let goal = |number: &str, description: &str, color: &str| SustainabilityGoal {
            number: number.into(),
            title: format!("ODS {number}:").into(),
            description: description.into(),
            icon: None,
            icon_bg_color: color.into(),
        };
        Self {
            id: Some("ods".into()),
            heading: "Alinhando Objetivos Globais a Sustentabilidade Local".into(),
            intro_text: "Nossos projetos estão alinhados às metas globais da ONU, contribuindo diretamente para o alcance de diversos ODS:".into(),
            background_color: "#f5f7f4".into(),
            goals: vec![
                goal(
                    "7",
                    "Transformamos resíduos orgânicos em biometano, uma fonte renovável e limpa de energia, reduzindo a dependência de combustíveis fósseis",
                    "#FCB712",
                ),
                goal(
                    "11",
                    "Tornamos a gestão de resíduos mais eficiente, promovendo cidades mais limpas, saudáveis e organizadas.",
                    "#F99D26",
                ),
                goal(
                    "12",
                    "Valorizamos resíduos como insumos para geração de energia, reduzindo desperdícios e maximizando o reaproveitamento.",
                    "#CF8D2A",
                ),
                goal(
                    "13",
                    "Reduzimos emissões de gases de efeito estufa, contribuindo diretamente para a mitigação das mudanças climáticas.",
                    "#3F7E44",
                ),
                goal(
                    "17",
                    "Buscamos parcerias com órgãos públicos para transformar desafios locais em soluções sustentáveis.",
                    "#19486A",
                ),
            ],
        }
    }
}

// =============================================================================
// Image with paragraph
// =============================================================================

/// Bullet of the benefit list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BenefitItem {
    /// Bullet text (rich text)
    pub text: RichText,
    /// Check icon color; falls back to the section's `icon_border_color`
    pub icon_color: Option<String>,
}

/// Spacing switches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisableSpacing {
    /// Drop the top padding
    pub top: bool,
    /// Drop the bottom padding
    pub bottom: bool,
}

/// Benefit list next to an image.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImageWithParagraphProps {
    /// Section anchor
    pub id: Option<String>,
    /// Section title
    pub title: String,
    /// Title alignment
    pub title_placement: Alignment,
    /// Bullets
    pub benefits: Vec<BenefitItem>,
    /// Section background color
    pub background_color: String,
    /// Default check icon color
    pub icon_border_color: String,
    /// Image URL
    pub image: Option<String>,
    /// Image side
    pub placement: Placement,
    /// Buttons under the list
    pub cta: Vec<Cta>,
    /// Button row alignment
    pub cta_placement: Alignment,
    /// Spacing switches
    pub disable_spacing: DisableSpacing,
}

impl Default for ImageWithParagraphProps {
    fn default() -> Self {
        let bullets = [
            "Nossa solução se aplica a empresas baseadas no interior do país, próximas de regiões de produção agrícola",
            "A Renu produz e fornece biometano seguindo as especificações e nível de serviço acordados",
            "Possibilitamos a substituição do diesel pelo biometano em sua frota de caminhões e maquinário industrial",
            "A produção de biometano é descentralizada, gerando menores riscos operacionais e maior estabilidade no fornecimento",
            "O consumidor terá baixa necessidade de Capex (investimentos), focado apenas na substituição da frota por veículos movidos a biometano. Além disso, o projeto é implementado de forma faseada.",
            "Ao adotar 100% de biometano na frota, é possível obter redução de mais de 85% da emissão de carbono",
            "A utilização de biometano permite economia financeira relevante, com redução de 20% a 30% dos custos totais com combustível na sua empresa",
        ];
        Self {
            id: Some("para-consumidores".into()),
            title: "PARA CONSUMIDORES".into(),
            title_placement: Alignment::Left,
            benefits: bullets
                .iter()
                .map(|text| BenefitItem {
                    text: (*text).into(),
                    icon_color: None,
                })
                .collect(),
            background_color: "#F9FAFB".into(),
            icon_border_color: "#10B981".into(),
            image: Some(PARAGRAPH_IMAGE_URL.into()),
            placement: Placement::Right,
            cta: Vec::new(),
            cta_placement: Alignment::Left,
            disable_spacing: DisableSpacing::default(),
        }
    }
}

// =============================================================================
// Projects
// =============================================================================

/// Bullet of a project card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectFeature {
    /// Bullet text (rich text)
    pub text: RichText,
}

/// One showcased project.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    /// Project name
    pub title: String,
    /// Line under the name
    pub subtitle: String,
    /// Main image URL
    pub image: Option<String>,
    /// Bullets
    pub features: Vec<ProjectFeature>,
}

/// Project showcase props.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectsProps {
    /// Section anchor
    pub id: Option<String>,
    /// Section title
    pub title: String,
    /// Paragraph under the title (rich text); hidden when empty
    pub description: RichText,
    /// Projects
    pub projects: Vec<Project>,
    /// Section background color
    pub background_color: String,
}

impl Default for ProjectsProps {
    fn default() -> Self {
        let features = [
            "Planta no estado do PR, cerca de 400km de São Paulo/SP;",
            "<strong>Localização privilegiada</strong>, na beira de rodovia, próxima a grandes empresas geradoras de resíduos e consumidoras de gás;",
            "Operação atual contempla capacidade de (i) 50 ton/dia de resíduos (gate fee); (ii) 5 mil m³/dia de biogás, queimado no flare;",
            "A empresa possui <strong>terreno para expansão</strong> das operações, já incluído na transação;",
        ];
        Self {
            id: Some("projetos".into()),
            title: "Nossos Projetos".into(),
            description: "Conheça os cases de sucesso da Renu Energia".into(),
            projects: vec![Project {
                title: "A Usina de Biodigestão em Jacarezinho".into(),
                subtitle: "Planta em localização privilegiada e com área para expansão".into(),
                image: Some(PARAGRAPH_IMAGE_URL.into()),
                features: features
                    .iter()
                    .map(|text| ProjectFeature {
                        text: (*text).into(),
                    })
                    .collect(),
            }],
            background_color: "#f5f7f4".into(),
        }
    }
}

// =============================================================================
// News
// =============================================================================

/// One press coverage card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NewsItem {
    /// Headline
    pub name: String,
    /// Article URL
    pub url: Option<String>,
    /// Publication date as displayed
    pub date: Option<String>,
    /// Outlet logo URL
    pub source: Option<String>,
    /// Outlet name
    pub source_name: Option<String>,
    /// Article image URL
    pub image: Option<String>,
    /// Color of the strip on top of the card
    pub highlight: Option<String>,
    /// Background behind the outlet logo
    pub logo_background: Option<String>,
}

/// Press coverage props.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NewsProps {
    /// Section anchor
    pub id: Option<String>,
    /// Section title
    pub title: String,
    /// Cards
    pub items: Vec<NewsItem>,
}

impl Default for NewsProps {
    fn default() -> Self {
        Self {
            id: Some("noticias".into()),
            title: "O que falam sobre nós".into(),
            items: Vec::new(),
        }
    }
}

// =============================================================================
// Logos
// =============================================================================

/// Partner logo marquee props.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LogosProps {
    /// Section anchor
    pub id: Option<String>,
    /// Section title
    pub title: String,
    /// Logos, scrolled in a loop
    pub logos: Vec<Logo>,
}

impl Default for LogosProps {
    fn default() -> Self {
        Self {
            id: Some("parceiros".into()),
            title: "Nossos parceiros".into(),
            logos: Vec::new(),
        }
    }
}

// =============================================================================
// Testimonials
// =============================================================================

/// One testimonial slide.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Testimonial {
    /// Quote
    pub description: String,
    /// Avatar URL
    pub avatar: Option<String>,
    /// Avatar alt text
    pub alt: String,
    /// Person name
    pub name: String,
    /// Role and company
    pub position: String,
}

/// Testimonials carousel props.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TestimonialsProps {
    /// Section anchor; also the carousel root id
    pub id: Option<String>,
    /// Section title
    pub title: String,
    /// Paragraph under the title; hidden when empty
    pub subtitle: String,
    /// Slides
    pub slides: Vec<Testimonial>,
    /// Show previous/next buttons
    pub arrows: bool,
    /// Show dot indicators
    pub dots: bool,
    /// Autoplay interval in seconds; 0 disables autoplay
    pub interval: u32,
    /// Wrap around at the ends
    pub infinite: bool,
}

impl Default for TestimonialsProps {
    fn default() -> Self {
        let slide = Testimonial {
            description: "Showcase customer feedback that emphasizes your product or service's key features and addresses prospective clients' concerns. Display endorsements from customer groups that mirror your target audience.".into(),
            avatar: Some(AVATAR_URL.into()),
            alt: "Avatar".into(),
            name: "Name Surname".into(),
            position: "Position, Company name".into(),
        };
        Self {
            id: Some("depoimentos".into()),
            title: "This is where you'll put your customer testimonials".into(),
            subtitle: String::new(),
            slides: vec![slide; 5],
            arrows: true,
            dots: true,
            interval: 0,
            infinite: true,
        }
    }
}

// =============================================================================
// Footer
// =============================================================================

/// Social network of a footer icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SocialNetwork {
    /// Facebook
    Facebook,
    /// Instagram
    Instagram,
    /// LinkedIn
    Linkedin,
    /// X (Twitter)
    #[serde(rename = "X - Twitter", alias = "X")]
    X,
    /// YouTube
    Youtube,
}

/// Footer social link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Social {
    /// Network (selects the icon)
    pub network: SocialNetwork,
    /// Profile URL
    pub href: String,
}

/// Contact form wiring.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactFormProps {
    /// Recipient and subject of the generated link
    pub mailto: MailtoTemplate,
    /// What the client does with the link
    pub submit_action: SubmitAction,
}

/// Footer props.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FooterProps {
    /// Section anchor
    pub id: Option<String>,
    /// Logo above the link columns
    pub footer_logo: Logo,
    /// Support column title
    pub support_title: String,
    /// Support address
    pub support_email: String,
    /// Support phone
    pub support_phone: String,
    /// Contact column title
    pub contact_title: String,
    /// Contact address
    pub contact_email: String,
    /// Sponsor column title
    pub sponsor_title: String,
    /// Sponsor links
    pub sponsor_items: Vec<Link>,
    /// Links column title
    pub links_title: String,
    /// Site links
    pub links_items: Vec<Link>,
    /// Form heading
    pub form_title: String,
    /// Form intro
    pub form_description: String,
    /// Form wiring
    pub form: ContactFormProps,
    /// Copyright line
    pub copyright: String,
    /// Social icons
    pub social: Vec<Social>,
}

impl Default for FooterProps {
    fn default() -> Self {
        Self {
            id: Some("nossos-contatos".into()),
            footer_logo: Logo::renu("Logo do Rodapé"),
            support_title: "Suporte".into(),
            support_email: "contato@renuenergia.com.br".into(),
            support_phone: "+55 (11) 3049-3000".into(),
            contact_title: "Contato".into(),
            contact_email: "contato@renuenergia.com.br".into(),
            sponsor_title: "Sponsor".into(),
            sponsor_items: vec![Link::new("Drýs Capital", "https://dryscapital.com.br/")],
            links_title: "Links".into(),
            links_items: vec![
                Link::new("Renu", "/"),
                Link::new("Para Consumidores", "/"),
                Link::new("Para Produtores Rurais", "/"),
            ],
            form_title: "Inicie uma conversa conosco".into(),
            form_description: "Entre em contato com nossa equipe de vendas para ver como podemos ajudar".into(),
            form: ContactFormProps::default(),
            copyright: "© 2024 Renu Energia. Todos os direitos reservados.".into(),
            social: vec![
                Social {
                    network: SocialNetwork::Facebook,
                    href: "https://facebook.com".into(),
                },
                Social {
                    network: SocialNetwork::Instagram,
                    href: "https://instagram.com".into(),
                },
                Social {
                    network: SocialNetwork::Linkedin,
                    href: "https://linkedin.com".into(),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_page_has_every_section_once() {
        let page = Page::default();
        let kinds: Vec<&str> = page.sections.iter().map(Section::kind).collect();
        assert_eq!(kinds.first(), Some(&"header"));
        assert_eq!(kinds.last(), Some(&"footer"));
        assert_eq!(kinds.len(), 13);
    }

    #[test]
    fn omitted_fields_take_defaults() {
        let section: Section =
            serde_json::from_str(r#"{"type":"mission","title":"Outro título"}"#).expect("parse");
        let Section::Mission(props) = section else {
            panic!("expected mission");
        };
        assert_eq!(props.title, "Outro título");
        assert_eq!(props.background_color, "#f5f7f4");
        assert_eq!(props.items.len(), 3);
    }

    #[test]
    fn camel_case_keys_and_layout_tag() {
        let section: Section = serde_json::from_str(
            r##"{"type":"about","layout":"split","backgroundColor":"#000","partners":[{"name":"Electy"}]}"##,
        )
        .expect("parse");
        let Section::About(props) = section else {
            panic!("expected about");
        };
        assert_eq!(props.layout, AboutLayout::Split);
        assert_eq!(props.background_color, "#000");
        assert_eq!(props.partners[0].name, "Electy");
        assert_eq!(props.partners[0].image, None);
    }

    #[test]
    fn social_network_accepts_authoring_tool_label() {
        let social: Social =
            serde_json::from_str(r#"{"network":"X - Twitter","href":"https://x.com"}"#)
                .expect("parse");
        assert_eq!(social.network, SocialNetwork::X);
    }

    #[test]
    fn rich_text_fields_are_reachable() {
        let mut section = Section::Solutions(SolutionsProps::default());
        // 3 model fields + 2 descriptions + 4 + 7 bullets
        assert_eq!(section.rich_text_mut().len(), 16);

        let mut header = Section::Header(HeaderProps::default());
        assert!(header.rich_text_mut().is_empty());
    }
}
