use reqwest::Url;

use crate::models::{PlatformLink, Recommendation};

/// Render-ready projection of one [`Recommendation`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub image_src: String,
    pub image_alt: String,
    pub heading: String,
    pub category: String,
    pub explanation: String,
    pub links: Vec<PlatformLink>,
}

impl Card {
    /// Builds a card, resolving platform links against `search_base`
    pub fn new(recommendation: &Recommendation, search_base: &Url) -> Self {
        Self {
            image_src: recommendation.image_url.clone(),
            image_alt: recommendation.product_name.clone(),
            heading: recommendation.product_name.clone(),
            category: recommendation.category.clone(),
            explanation: recommendation.explanation.clone(),
            links: recommendation.search_links(search_base),
        }
    }
}

/// What the container currently shows
///
/// `Idle` only exists before the first trigger. Every trigger moves to `Loading`
/// and then to exactly one of the three terminal states.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PanelState {
    #[default]
    Idle,
    Loading,
    Populated(Vec<Card>),
    Empty,
    Error,
}

impl PanelState {
    /// Builds the terminal state for a successfully fetched batch
    pub fn from_recommendations(recommendations: &[Recommendation], search_base: &Url) -> Self {
        if recommendations.is_empty() {
            return PanelState::Empty;
        }

        PanelState::Populated(
            recommendations
                .iter()
                .map(|rec| Card::new(rec, search_base))
                .collect(),
        )
    }

    /// Cards on display; empty for every state but `Populated`
    pub fn cards(&self) -> &[Card] {
        match self {
            PanelState::Populated(cards) => cards,
            _ => &[],
        }
    }

    /// Short label used in logs
    pub fn label(&self) -> &'static str {
        match self {
            PanelState::Idle => "idle",
            PanelState::Loading => "loading",
            PanelState::Populated(_) => "populated",
            PanelState::Empty => "empty",
            PanelState::Error => "error",
        }
    }
}
