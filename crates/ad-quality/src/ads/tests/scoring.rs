use super::common::*;
use crate::ads::domain::{Ad, AdId, Typology};
use crate::ads::scoring::{
    garage_score, keyword_score, photo_score, ChaletScorer, ClassificationThresholds, FlatScorer,
    GarageScorer, ScoreRule, ScoringEngine, ScoringError, ThresholdError, TypologyScorer,
};

#[test]
fn flat_example_sums_every_rule() {
    let constants = constants();
    let ad = flat_ad(1);

    let score = engine().compute_score(&ad).expect("flat is registered");

    let expected = constants.keyword_points * 2
        + constants.photos.first_points
        + constants.photos.high_points
        + constants.garage_bonus
        + constants.completeness_bonus
        + FlatScorer.description_length_score(&ad, &constants);
    assert_eq!(score, expected);
    assert_eq!(score, 100);
}

#[test]
fn incomplete_chalet_scores_below_the_same_flat() {
    let engine = engine();
    let flat = engine.evaluate(&flat_ad(1)).expect("flat scored");
    let chalet = engine.evaluate(&chalet_ad(1)).expect("chalet scored");

    assert!(chalet.points_for(ScoreRule::Completeness) < flat.points_for(ScoreRule::Completeness));
    assert_eq!(chalet.points_for(ScoreRule::DescriptionLength), 0);
    assert_eq!(chalet.total, 50);
}

#[test]
fn chalet_needs_garden_size_to_be_complete() {
    let constants = constants();
    let mut chalet = Ad {
        is_complete: true,
        ..chalet_ad(1)
    };

    assert_eq!(ChaletScorer.completeness_score(&chalet, &constants), 0);

    chalet.garden_size = Some(400);
    assert_eq!(
        ChaletScorer.completeness_score(&chalet, &constants),
        constants.completeness_bonus
    );
}

#[test]
fn garage_typology_ignores_description_and_needs_a_picture() {
    let constants = constants();
    let mut garage = Ad {
        description: words(80),
        is_complete: true,
        ..bare_ad(1, Typology::Garage)
    };

    assert_eq!(GarageScorer.description_length_score(&garage, &constants), 0);
    assert_eq!(GarageScorer.completeness_score(&garage, &constants), 0);

    garage.pictures = pictures(1);
    assert_eq!(
        GarageScorer.completeness_score(&garage, &constants),
        constants.completeness_bonus
    );
}

#[test]
fn compute_score_is_deterministic() {
    let engine = engine();
    let ad = chalet_ad(7);

    let first = engine.compute_score(&ad).expect("scored");
    for _ in 0..5 {
        assert_eq!(engine.compute_score(&ad).expect("scored"), first);
    }
    assert_eq!(engine.compute_score(&ad.clone()).expect("scored"), first);
}

#[test]
fn stored_score_does_not_feed_back_into_computation() {
    let engine = engine();
    let fresh = flat_ad(1);
    let stale = Ad {
        score: Some(3),
        ..flat_ad(1)
    };

    assert_eq!(
        engine.compute_score(&fresh).expect("scored"),
        engine.compute_score(&stale).expect("scored")
    );
}

#[test]
fn keyword_repetition_does_not_inflate_score() {
    let constants = constants();
    let once = Ad {
        description: "piso luminoso".to_string(),
        ..bare_ad(1, Typology::Flat)
    };
    let thrice = Ad {
        description: "Luminoso, muy LUMINOSO y luminoso".to_string(),
        ..bare_ad(2, Typology::Flat)
    };
    let two_distinct = Ad {
        description: "luminoso y nuevo".to_string(),
        ..bare_ad(3, Typology::Flat)
    };

    assert_eq!(keyword_score(&once, &constants), constants.keyword_points);
    assert_eq!(
        keyword_score(&thrice, &constants),
        keyword_score(&once, &constants)
    );
    assert!(keyword_score(&two_distinct, &constants) > keyword_score(&once, &constants));
}

#[test]
fn keywords_match_whole_words_only() {
    let constants = constants();
    let ad = Ad {
        description: "renovado y nuevecito".to_string(),
        ..bare_ad(1, Typology::Flat)
    };

    assert_eq!(keyword_score(&ad, &constants), 0);
}

#[test]
fn accented_keywords_match_regardless_of_case() {
    let constants = constants();
    let ad = Ad {
        description: "ÁTICO CÉNTRICO".to_string(),
        ..bare_ad(1, Typology::Flat)
    };

    assert_eq!(keyword_score(&ad, &constants), constants.keyword_points * 2);
}

#[test]
fn decomposed_accents_still_match_keywords() {
    let constants = constants();
    let ad = Ad {
        description: "piso ce\u{301}ntrico y a\u{301}tico".to_string(),
        ..bare_ad(1, Typology::Flat)
    };

    assert_eq!(keyword_score(&ad, &constants), constants.keyword_points * 2);
}

#[test]
fn photo_score_steps_at_thresholds() {
    let constants = constants();
    let score_for = |count: usize| {
        let ad = Ad {
            pictures: pictures(count),
            ..bare_ad(1, Typology::Flat)
        };
        photo_score(&ad, &constants)
    };

    assert_eq!(score_for(0), 0);
    assert_eq!(score_for(1), 10);
    assert_eq!(score_for(4), 10);
    assert_eq!(score_for(5), 30);
    assert_eq!(score_for(12), 30);
}

#[test]
fn photo_score_never_decreases_with_more_pictures() {
    let constants = constants();
    let mut previous = 0;
    for count in 0..15 {
        let ad = Ad {
            pictures: pictures(count),
            ..bare_ad(1, Typology::Flat)
        };
        let score = photo_score(&ad, &constants);
        assert!(score >= previous, "score dropped at {count} pictures");
        previous = score;
    }
}

#[test]
fn adding_a_garage_never_lowers_the_total() {
    let engine = engine();
    for typology in [Typology::Flat, Typology::Chalet, Typology::Garage] {
        let without = Ad {
            has_garage: false,
            typology,
            ..flat_ad(1)
        };
        let with = Ad {
            has_garage: true,
            ..without.clone()
        };

        assert_eq!(garage_score(&without, engine.constants()), 0);
        assert!(engine.compute_score(&with).expect("scored")
            >= engine.compute_score(&without).expect("scored"));
    }
}

#[test]
fn flat_description_bands_replace_each_other() {
    let constants = constants();
    let score_for = |count: usize| {
        let ad = Ad {
            description: words(count),
            ..bare_ad(1, Typology::Flat)
        };
        FlatScorer.description_length_score(&ad, &constants)
    };

    assert_eq!(score_for(0), 0);
    assert_eq!(score_for(19), 0);
    assert_eq!(score_for(20), 10);
    assert_eq!(score_for(49), 10);
    assert_eq!(score_for(50), 30);
    assert_eq!(score_for(200), 30);
}

#[test]
fn chalet_description_needs_more_than_fifty_words() {
    let constants = constants();
    let score_for = |count: usize| {
        let ad = Ad {
            description: words(count),
            ..bare_ad(1, Typology::Chalet)
        };
        ChaletScorer.description_length_score(&ad, &constants)
    };

    assert_eq!(score_for(50), 0);
    assert_eq!(score_for(51), 20);
}

#[test]
fn empty_ad_scores_zero() {
    let score = engine()
        .compute_score(&bare_ad(1, Typology::Flat))
        .expect("scored");
    assert_eq!(score, 0);
}

#[test]
fn unregistered_typology_fails_loudly() {
    let engine = ScoringEngine::empty(constants()).with_scorer(FlatScorer);

    let err = engine
        .compute_score(&chalet_ad(9))
        .expect_err("chalet has no scorer");

    assert_eq!(
        err,
        ScoringError::UnrecognizedTypology {
            ad_id: AdId(9),
            typology: Typology::Chalet,
        }
    );
    assert!(engine.compute_score(&flat_ad(1)).is_ok());
}

#[test]
fn score_card_lists_every_rule_and_sums_to_total() {
    let card = engine().evaluate(&flat_ad(1)).expect("scored");

    assert_eq!(card.components.len(), 5);
    assert_eq!(
        card.components.iter().map(|c| c.points).sum::<u32>(),
        card.total
    );
    let keywords = card
        .components
        .iter()
        .find(|component| component.rule == ScoreRule::Keywords)
        .expect("keyword component");
    assert!(keywords.notes.contains("luminoso"));
    assert!(keywords.notes.contains("reformado"));
}

#[test]
fn quality_threshold_is_stricter_than_public() {
    let thresholds = constants().thresholds;
    assert!(thresholds.quality() > thresholds.public());

    assert_eq!(
        ClassificationThresholds::new(50, 50),
        Err(ThresholdError::QualityNotAbovePublic {
            public: 50,
            quality: 50,
        })
    );
    assert!(ClassificationThresholds::new(50, 40).is_err());
    assert!(ClassificationThresholds::new(20, 21).is_ok());
}
