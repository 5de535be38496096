use std::collections::BTreeSet;

use serde::Serialize;
use unicode_normalization::UnicodeNormalization;

pub const DEFAULT_PUBLIC_THRESHOLD: u32 = 40;
pub const DEFAULT_QUALITY_THRESHOLD: u32 = 70;

const KEYWORDS: [&str; 5] = ["luminoso", "nuevo", "céntrico", "reformado", "ático"];

/// Point table shared by every scoring rule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreConstants {
    pub keyword_points: u32,
    pub keywords: BTreeSet<String>,
    pub photos: PhotoSteps,
    pub garage_bonus: u32,
    pub completeness_bonus: u32,
    pub flat_description: Vec<LengthBand>,
    pub chalet_description: Vec<LengthBand>,
    pub thresholds: ClassificationThresholds,
}

impl ScoreConstants {
    pub fn standard() -> Self {
        Self {
            keyword_points: 5,
            keywords: KEYWORDS.iter().map(|keyword| keyword.to_string()).collect(),
            photos: PhotoSteps {
                first_threshold: 1,
                first_points: 10,
                high_threshold: 5,
                high_points: 20,
            },
            garage_bonus: 10,
            completeness_bonus: 40,
            flat_description: vec![
                LengthBand {
                    minimum_words: 20,
                    points: 10,
                },
                LengthBand {
                    minimum_words: 50,
                    points: 30,
                },
            ],
            chalet_description: vec![LengthBand {
                minimum_words: 51,
                points: 20,
            }],
            thresholds: ClassificationThresholds::default(),
        }
    }

    pub fn with_thresholds(mut self, thresholds: ClassificationThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Keyword set composed to NFC and folded to lowercase, matching the tokenizer.
    pub(crate) fn normalized_keywords(&self) -> BTreeSet<String> {
        self.keywords
            .iter()
            .map(|keyword| keyword.nfc().collect::<String>().to_lowercase())
            .collect()
    }
}

impl Default for ScoreConstants {
    fn default() -> Self {
        Self::standard()
    }
}

/// Photo-count breakpoints. The high step adds to the first one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PhotoSteps {
    pub first_threshold: usize,
    pub first_points: u32,
    pub high_threshold: usize,
    pub high_points: u32,
}

/// Description-length bucket measured in words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LengthBand {
    pub minimum_words: usize,
    pub points: u32,
}

/// Points of the highest band reached; bands do not accumulate.
pub(crate) fn band_points(bands: &[LengthBand], words: usize) -> u32 {
    bands
        .iter()
        .filter(|band| words >= band.minimum_words)
        .max_by_key(|band| band.minimum_words)
        .map(|band| band.points)
        .unwrap_or(0)
}

/// Score cutoffs for the public and quality views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClassificationThresholds {
    public: u32,
    quality: u32,
}

impl ClassificationThresholds {
    pub fn new(public: u32, quality: u32) -> Result<Self, ThresholdError> {
        if quality <= public {
            return Err(ThresholdError::QualityNotAbovePublic { public, quality });
        }
        Ok(Self { public, quality })
    }

    pub fn public(&self) -> u32 {
        self.public
    }

    pub fn quality(&self) -> u32 {
        self.quality
    }
}

impl Default for ClassificationThresholds {
    fn default() -> Self {
        Self {
            public: DEFAULT_PUBLIC_THRESHOLD,
            quality: DEFAULT_QUALITY_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThresholdError {
    #[error("quality threshold {quality} must be above public threshold {public}")]
    QualityNotAbovePublic { public: u32, quality: u32 },
}
