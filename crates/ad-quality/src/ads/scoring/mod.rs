mod constants;
mod rules;
mod typology;

pub use constants::{
    ClassificationThresholds, LengthBand, PhotoSteps, ScoreConstants, ThresholdError,
    DEFAULT_PUBLIC_THRESHOLD, DEFAULT_QUALITY_THRESHOLD,
};
pub use rules::{garage_score, keyword_score, photo_score};
pub use typology::{ChaletScorer, FlatScorer, GarageScorer, TypologyScorer};

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::{Ad, AdId, Typology};
use rules::{matched_keywords, word_count};

/// Stateless engine summing the shared rules and the typology hooks for one ad.
pub struct ScoringEngine {
    constants: ScoreConstants,
    scorers: BTreeMap<Typology, Box<dyn TypologyScorer>>,
}

impl ScoringEngine {
    /// Engine with a scorer registered for every known typology.
    pub fn standard(constants: ScoreConstants) -> Self {
        Self::empty(constants)
            .with_scorer(FlatScorer)
            .with_scorer(ChaletScorer)
            .with_scorer(GarageScorer)
    }

    /// Engine without any typology scorer; every ad fails until one is registered.
    pub fn empty(constants: ScoreConstants) -> Self {
        Self {
            constants,
            scorers: BTreeMap::new(),
        }
    }

    /// Registers `scorer` for its typology, replacing any previous entry.
    pub fn with_scorer<S>(mut self, scorer: S) -> Self
    where
        S: TypologyScorer + 'static,
    {
        self.scorers.insert(scorer.typology(), Box::new(scorer));
        self
    }

    pub fn constants(&self) -> &ScoreConstants {
        &self.constants
    }

    pub fn compute_score(&self, ad: &Ad) -> Result<u32, ScoringError> {
        self.evaluate(ad).map(|card| card.total)
    }

    pub fn evaluate(&self, ad: &Ad) -> Result<ScoreCard, ScoringError> {
        let scorer = self
            .scorers
            .get(&ad.typology)
            .ok_or(ScoringError::UnrecognizedTypology {
                ad_id: ad.id,
                typology: ad.typology,
            })?;
        let constants = &self.constants;

        let keywords = matched_keywords(ad, constants);
        let keyword_note = if keywords.is_empty() {
            "no keywords found".to_string()
        } else {
            format!(
                "keywords: {}",
                keywords.iter().cloned().collect::<Vec<_>>().join(", ")
            )
        };

        let components = vec![
            ScoreComponent {
                rule: ScoreRule::Photos,
                points: photo_score(ad, constants),
                notes: format!("{} picture(s)", ad.picture_count()),
            },
            ScoreComponent {
                rule: ScoreRule::Garage,
                points: garage_score(ad, constants),
                notes: if ad.has_garage {
                    "garage included".to_string()
                } else {
                    "no garage".to_string()
                },
            },
            ScoreComponent {
                rule: ScoreRule::Keywords,
                points: keyword_score(ad, constants),
                notes: keyword_note,
            },
            ScoreComponent {
                rule: ScoreRule::DescriptionLength,
                points: scorer.description_length_score(ad, constants),
                notes: format!(
                    "{} word(s) scored as {}",
                    word_count(&ad.description),
                    ad.typology
                ),
            },
            ScoreComponent {
                rule: ScoreRule::Completeness,
                points: scorer.completeness_score(ad, constants),
                notes: if scorer.is_complete(ad) {
                    format!("complete {}", ad.typology)
                } else {
                    format!("incomplete {}", ad.typology)
                },
            },
        ];

        let total = components.iter().map(|component| component.points).sum();

        Ok(ScoreCard {
            ad_id: ad.id,
            typology: ad.typology,
            total,
            components,
        })
    }
}

/// Named rule behind a score component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreRule {
    Photos,
    Garage,
    Keywords,
    DescriptionLength,
    Completeness,
}

/// Discrete contribution to a score, kept for audits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub rule: ScoreRule,
    pub points: u32,
    pub notes: String,
}

/// Total score with the per-rule trail that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreCard {
    pub ad_id: AdId,
    pub typology: Typology,
    pub total: u32,
    pub components: Vec<ScoreComponent>,
}

impl ScoreCard {
    pub fn points_for(&self, rule: ScoreRule) -> u32 {
        self.components
            .iter()
            .filter(|component| component.rule == rule)
            .map(|component| component.points)
            .sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoringError {
    #[error("no scorer registered for typology {typology} ({ad_id})")]
    UnrecognizedTypology { ad_id: AdId, typology: Typology },
}
