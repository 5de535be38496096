//! Typology-independent rules. Each function is pure and never negative.

use std::collections::BTreeSet;

use unicode_normalization::UnicodeNormalization;

use super::super::domain::Ad;
use super::constants::ScoreConstants;

pub fn photo_score(ad: &Ad, constants: &ScoreConstants) -> u32 {
    let steps = &constants.photos;
    let count = ad.picture_count();

    let mut points = 0;
    if count >= steps.first_threshold {
        points += steps.first_points;
    }
    if count >= steps.high_threshold {
        points += steps.high_points;
    }
    points
}

pub fn garage_score(ad: &Ad, constants: &ScoreConstants) -> u32 {
    if ad.has_garage {
        constants.garage_bonus
    } else {
        0
    }
}

/// Counts distinct keywords, so repeating one never adds points.
pub fn keyword_score(ad: &Ad, constants: &ScoreConstants) -> u32 {
    let distinct = matched_keywords(ad, constants).len() as u32;
    distinct * constants.keyword_points
}

pub(crate) fn matched_keywords(ad: &Ad, constants: &ScoreConstants) -> BTreeSet<String> {
    let keywords = constants.normalized_keywords();
    tokenize(&ad.description)
        .into_iter()
        .filter(|token| keywords.contains(token))
        .collect()
}

/// Number of words in the description, duplicates included.
pub(crate) fn word_count(description: &str) -> usize {
    tokenize(description).len()
}

/// Composes to NFC, splits on anything that is not alphanumeric and lowercases each word.
fn tokenize(text: &str) -> Vec<String> {
    let composed: String = text.nfc().collect();
    composed
        .split(|ch: char| !ch.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(|word| word.to_lowercase())
        .collect()
}
