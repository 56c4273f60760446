//! Copy and card data for the landing page.
//!
//! Everything here is plain data so the page can be re-skinned through the
//! JSON config block in `index.html` without touching components.

use serde::{Deserialize, Serialize};

/// Artwork pool used when a card does not bring its own image.
const CARD_IMAGES: &[&str] = &[
    "/images/cards/card-image-1.png",
    "/images/cards/card-image-2.png",
    "/images/cards/card-image-3.png",
    "/images/cards/card-image-4.png",
    "/images/cards/card-image-5.png",
];

/// Icon shown next to every card label.
pub const LABEL_ICON: &str = "/images/icons/lightning.svg";

/// Image for the card at `index`, cycling through the pool.
pub fn card_image(index: usize) -> String {
    CARD_IMAGES[index % CARD_IMAGES.len()].to_string()
}

/// Highlighted statistic laid over a card's artwork.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardOverlay {
    /// Big number
    pub stat: String,
    /// Caption under the number
    pub text: String,
}

/// One card in the plans carousel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanCard {
    /// Small caption above the card
    pub label: String,
    /// Card heading
    pub title: String,
    /// Body text
    pub description: String,
    /// Background artwork URL
    #[serde(default)]
    pub image: Option<String>,
    /// Fixed card width in pixels; the stylesheet default applies when absent
    #[serde(default)]
    pub width: Option<u32>,
    /// Optional statistic over the artwork
    #[serde(default)]
    pub overlay: Option<CardOverlay>,
}

impl PlanCard {
    fn new(label: &str, title: &str, description: &str) -> Self {
        Self {
            label: label.into(),
            title: title.into(),
            description: description.into(),
            image: None,
            width: None,
            overlay: None,
        }
    }

    fn with_art(mut self, index: usize, width: u32) -> Self {
        self.image = Some(card_image(index));
        self.width = Some(width);
        self
    }

    /// Inline style carrying the card width as a CSS custom property.
    pub fn width_style(&self) -> Option<String> {
        self.width.map(|w| format!("--card-width: {w}px"))
    }

    /// Inline style for the artwork block.
    pub fn image_style(&self) -> Option<String> {
        self.image
            .as_deref()
            .filter(|url| !url.is_empty())
            .map(|url| format!("background-image: url({url})"))
    }
}

/// Cards shown when no custom list is configured.
pub fn default_plan_cards() -> Vec<PlanCard> {
    vec![
        PlanCard::new(
            "Plan de carrera seguro",
            "Consulta de carrera gratuita",
            "Obtendrás un plan personalizado basado en tus fortalezas, objetivos y experiencia.",
        )
        .with_art(0, 527),
        PlanCard::new(
            "Habilidades tech en demanda",
            "Bootcamp en línea",
            "Aprende de forma práctica todo lo necesario para convertirte en Analista de Datos.",
        )
        .with_art(1, 654),
        PlanCard::new(
            "¡Estás listo para ser contratado!",
            "Acelerador de carrera",
            "Trabajarás 1 a 1 con un coach personal para elaborar un CV llamativo, armar un \
             portafolio de proyectos reales y llegar a tus entrevistas preparado.",
        )
        .with_art(2, 658),
        PlanCard::new(
            "Mentorías guiadas",
            "Sesiones 1:1 con expertos",
            "Obtén respuestas puntuales y guía constante para mantener el ritmo de estudio.",
        )
        .with_art(3, 618),
        PlanCard {
            overlay: Some(CardOverlay {
                stat: "6".into(),
                text: "países en LATAM donde podrás asistir a nuestros eventos y conocer a \
                       otros miembros de la comunidad"
                    .into(),
            }),
            ..PlanCard::new(
                "Una red que te respalda",
                "Networking con profesionales",
                "Conectarás con personas afines, para compartir logros y seguir creciendo juntos.",
            )
            .with_art(4, 692)
        },
        PlanCard::new(
            "Portafolio en marcha",
            "Proyectos prácticos guiados",
            "Construye piezas reales para tu portafolio mientras recibes retroalimentación \
             personalizada.",
        )
        .with_art(5, 600),
    ]
}

/// Split cards into the featured one and the ones that fill the track.
///
/// An empty list falls back to the defaults. With a single card it is both
/// featured and the only card on the track, so the carousel is never empty.
pub fn split_featured(cards: Vec<PlanCard>) -> (PlanCard, Vec<PlanCard>) {
    let mut cards = if cards.is_empty() {
        default_plan_cards()
    } else {
        cards
    };
    if cards.len() == 1 {
        return (cards[0].clone(), cards);
    }
    let featured = cards.remove(0);
    (featured, cards)
}

/// Page copy, section by section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LandingCopy {
    /// Top banner heading
    pub header_title: String,
    /// Top banner button
    pub header_button: String,
    /// Hero eyebrow tag
    pub hero_eyebrow: String,
    /// Hero heading
    pub hero_title: String,
    /// Hero paragraph
    pub hero_description: String,
    /// Hero call to action
    pub hero_cta: String,
    /// Plans eyebrow tag
    pub plans_eyebrow: String,
    /// Plans heading, also the carousel's accessible name
    pub plans_title: String,
    /// Plans paragraph
    pub plans_description: String,
    /// Stories eyebrow tag
    pub stories_eyebrow: String,
    /// Stories heading
    pub stories_title: String,
    /// Stories paragraph
    pub stories_description: String,
    /// Number of placeholder tiles under the stories copy
    pub stories_placeholders: usize,
    /// Closing heading
    pub footer_title: String,
    /// Closing button
    pub footer_button: String,
}

impl Default for LandingCopy {
    fn default() -> Self {
        Self {
            header_title: "Tu primer empleo tech paso a paso".into(),
            header_button: "Agenda una consulta".into(),
            hero_eyebrow: "Tu camino".into(),
            hero_title: "Conviértete en Analista de Datos".into(),
            hero_description: "Sigue un plan claro y enfocado en resultados con el \
                               acompañamiento de especialistas en carrera."
                .into(),
            hero_cta: "Agenda una consulta".into(),
            plans_eyebrow: "Planes personalizados".into(),
            plans_title: "Elegí el acompañamiento ideal para tu objetivo".into(),
            plans_description: "Desplaza para revisar las propuestas claves del programa.".into(),
            stories_eyebrow: "Resultados reales".into(),
            stories_title: "Historias de quienes ya dieron el salto".into(),
            stories_description: "Conecta con la comunidad, aprende de sus experiencias y \
                                  descubre cómo potenciar tu perfil profesional."
                .into(),
            stories_placeholders: 3,
            footer_title: "Empieza hoy tu cambio de carrera".into(),
            footer_button: "Quiero mi consulta gratuita".into(),
        }
    }
}
