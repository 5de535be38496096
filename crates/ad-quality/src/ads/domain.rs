use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier wrapper for stored advertisements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AdId(pub u32);

impl fmt::Display for AdId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ad-{}", self.0)
    }
}

/// Structural category of the advertised property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Typology {
    Flat,
    Chalet,
    Garage,
}

impl Typology {
    pub fn label(&self) -> &'static str {
        match self {
            Typology::Flat => "FLAT",
            Typology::Chalet => "CHALET",
            Typology::Garage => "GARAGE",
        }
    }
}

impl fmt::Display for Typology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Picture attached to an advertisement, ordered by `position`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Picture {
    pub url: String,
    pub position: u16,
}

/// Real-estate advertisement as held by the backing store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ad {
    pub id: AdId,
    pub typology: Typology,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub pictures: Vec<Picture>,
    #[serde(default)]
    pub house_size: Option<u32>,
    #[serde(default)]
    pub garden_size: Option<u32>,
    #[serde(default)]
    pub has_garage: bool,
    #[serde(default)]
    pub is_complete: bool,
    #[serde(default)]
    pub score: Option<u32>,
}

impl Ad {
    pub fn new(id: u32, typology: Typology) -> Self {
        Self {
            id: AdId(id),
            typology,
            description: String::new(),
            pictures: Vec::new(),
            house_size: None,
            garden_size: None,
            has_garage: false,
            is_complete: false,
            score: None,
        }
    }

    pub fn picture_count(&self) -> usize {
        self.pictures.len()
    }

    /// Picture URLs in display order.
    pub fn picture_urls(&self) -> Vec<String> {
        let mut pictures: Vec<&Picture> = self.pictures.iter().collect();
        pictures.sort_by_key(|picture| picture.position);
        pictures
            .into_iter()
            .map(|picture| picture.url.clone())
            .collect()
    }
}
