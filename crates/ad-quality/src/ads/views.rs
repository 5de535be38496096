use serde::Serialize;

use super::domain::{Ad, AdId, Typology};

/// Listing projection exposed to general visitors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublicAdView {
    pub id: AdId,
    pub typology: Typology,
    pub description: String,
    pub picture_urls: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub house_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub garden_size: Option<u32>,
}

impl From<&Ad> for PublicAdView {
    fn from(ad: &Ad) -> Self {
        Self {
            id: ad.id,
            typology: ad.typology,
            description: ad.description.clone(),
            picture_urls: ad.picture_urls(),
            house_size: ad.house_size,
            garden_size: ad.garden_size,
        }
    }
}

/// Quality-desk projection, which also reveals the score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QualityAdView {
    #[serde(flatten)]
    pub listing: PublicAdView,
    pub score: Option<u32>,
}

impl From<&Ad> for QualityAdView {
    fn from(ad: &Ad) -> Self {
        Self {
            listing: PublicAdView::from(ad),
            score: ad.score,
        }
    }
}
