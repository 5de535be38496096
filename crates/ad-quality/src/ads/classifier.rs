use std::cmp::Reverse;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use super::domain::{Ad, AdId};
use super::repository::{AdRepository, RepositoryError};
use super::scoring::{ClassificationThresholds, ScoringEngine, ScoringError};

/// Service composing the repository and scoring engine into the two ad views.
pub struct AdClassifier<R> {
    repository: Arc<R>,
    engine: Arc<ScoringEngine>,
}

impl<R> AdClassifier<R>
where
    R: AdRepository + 'static,
{
    pub fn new(repository: Arc<R>, engine: ScoringEngine) -> Self {
        Self {
            repository,
            engine: Arc::new(engine),
        }
    }

    pub fn engine(&self) -> &ScoringEngine {
        &self.engine
    }

    pub fn thresholds(&self) -> ClassificationThresholds {
        self.engine.constants().thresholds
    }

    /// Rescore every stored ad and persist the new scores.
    ///
    /// A failing ad is reported and left as stored; the rest of the batch
    /// carries on and already saved ads are not rolled back.
    pub fn update_ad_scores(&self) -> Result<ScoreUpdateReport, ClassifierError> {
        let ads = self.repository.list_all()?;
        let mut report = ScoreUpdateReport::default();

        for mut ad in ads {
            let ad_id = ad.id;
            let score = match self.engine.compute_score(&ad) {
                Ok(score) => score,
                Err(error) => {
                    warn!(%ad_id, %error, "ad left unscored");
                    report.failures.push(AdFailure {
                        ad_id,
                        reason: FailureReason::Scoring(error),
                    });
                    continue;
                }
            };

            debug!(%ad_id, previous = ?ad.score, score, "ad scored");
            ad.score = Some(score);

            match self.repository.save(ad) {
                Ok(()) => report.updated.push(ad_id),
                Err(error) => {
                    warn!(%ad_id, %error, "failed to persist ad score");
                    report.failures.push(AdFailure {
                        ad_id,
                        reason: FailureReason::Repository(error),
                    });
                }
            }
        }

        info!(
            updated = report.updated.len(),
            failed = report.failures.len(),
            "ad scoring pass finished"
        );
        Ok(report)
    }

    /// Ads scoring at or above the public threshold.
    pub fn find_public_ads(&self) -> Result<Vec<Ad>, ClassifierError> {
        self.ads_scoring_at_least(self.thresholds().public())
    }

    /// Ads scoring at or above the quality threshold.
    pub fn find_quality_ads(&self) -> Result<Vec<Ad>, ClassifierError> {
        self.ads_scoring_at_least(self.thresholds().quality())
    }

    fn ads_scoring_at_least(&self, minimum: u32) -> Result<Vec<Ad>, ClassifierError> {
        let mut ads: Vec<Ad> = self
            .repository
            .list_all()?
            .into_iter()
            .filter(|ad| ad.score.is_some_and(|score| score >= minimum))
            .collect();
        ads.sort_by_key(|ad| (Reverse(ad.score), ad.id));
        Ok(ads)
    }
}

/// Outcome of one scoring pass.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScoreUpdateReport {
    pub updated: Vec<AdId>,
    pub failures: Vec<AdFailure>,
}

impl ScoreUpdateReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Ad that could not be rescored or saved during a pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdFailure {
    pub ad_id: AdId,
    pub reason: FailureReason,
}

impl fmt::Display for AdFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.ad_id, self.reason)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FailureReason {
    #[error(transparent)]
    Scoring(#[from] ScoringError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Serializable form of [`AdFailure`] for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct AdFailureView {
    pub ad_id: AdId,
    pub error: String,
}

impl From<&AdFailure> for AdFailureView {
    fn from(failure: &AdFailure) -> Self {
        Self {
            ad_id: failure.ad_id,
            error: failure.reason.to_string(),
        }
    }
}

/// Error raised by the classifier.
#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
