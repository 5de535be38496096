//! Advertisement scoring and the public/quality classification built on it.

pub mod classifier;
pub mod domain;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod views;

#[cfg(test)]
mod tests;

pub use classifier::{
    AdClassifier, AdFailure, AdFailureView, ClassifierError, FailureReason, ScoreUpdateReport,
};
pub use domain::{Ad, AdId, Picture, Typology};
pub use repository::{AdRepository, RepositoryError};
pub use router::ad_router;
pub use scoring::{
    ClassificationThresholds, ScoreCard, ScoreComponent, ScoreConstants, ScoreRule,
    ScoringEngine, ScoringError, ThresholdError, TypologyScorer,
};
pub use views::{PublicAdView, QualityAdView};
