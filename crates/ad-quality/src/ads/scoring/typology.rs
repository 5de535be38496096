use super::super::domain::{Ad, Typology};
use super::constants::{band_points, ScoreConstants};
use super::rules::word_count;

/// Typology-specific hooks called by the engine for the two varying sub-scores.
///
/// Implementations must stay pure: the same ad and constants always yield the
/// same points, and no implementation returns a negative contribution.
pub trait TypologyScorer: Send + Sync {
    fn typology(&self) -> Typology;

    fn description_length_score(&self, ad: &Ad, constants: &ScoreConstants) -> u32;

    /// Whether the ad counts as complete for this typology.
    fn is_complete(&self, ad: &Ad) -> bool;

    fn completeness_score(&self, ad: &Ad, constants: &ScoreConstants) -> u32 {
        if self.is_complete(ad) {
            constants.completeness_bonus
        } else {
            0
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct FlatScorer;

impl TypologyScorer for FlatScorer {
    fn typology(&self) -> Typology {
        Typology::Flat
    }

    fn description_length_score(&self, ad: &Ad, constants: &ScoreConstants) -> u32 {
        band_points(&constants.flat_description, word_count(&ad.description))
    }

    fn is_complete(&self, ad: &Ad) -> bool {
        ad.is_complete
    }
}

/// Chalets also need a plot size before they count as complete.
#[derive(Debug, Default, Clone, Copy)]
pub struct ChaletScorer;

impl TypologyScorer for ChaletScorer {
    fn typology(&self) -> Typology {
        Typology::Chalet
    }

    fn description_length_score(&self, ad: &Ad, constants: &ScoreConstants) -> u32 {
        band_points(&constants.chalet_description, word_count(&ad.description))
    }

    fn is_complete(&self, ad: &Ad) -> bool {
        ad.is_complete && ad.garden_size.is_some()
    }
}

/// Garages earn nothing for prose but need at least one picture to be complete.
#[derive(Debug, Default, Clone, Copy)]
pub struct GarageScorer;

impl TypologyScorer for GarageScorer {
    fn typology(&self) -> Typology {
        Typology::Garage
    }

    fn description_length_score(&self, _ad: &Ad, _constants: &ScoreConstants) -> u32 {
        0
    }

    fn is_complete(&self, ad: &Ad) -> bool {
        ad.is_complete && !ad.pictures.is_empty()
    }
}
