use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::ads::classifier::AdClassifier;
use crate::ads::domain::{Ad, AdId, Picture, Typology};
use crate::ads::repository::{AdRepository, RepositoryError};
use crate::ads::scoring::{ScoreConstants, ScoringEngine};

/// Twenty words, two of them configured keywords.
pub(super) const TWO_KEYWORD_DESCRIPTION: &str = "Luminoso piso reformado en el centro con vistas al parque cerca de transporte colegios y comercios del barrio muy tranquilo";

pub(super) fn constants() -> ScoreConstants {
    ScoreConstants::standard()
}

pub(super) fn engine() -> ScoringEngine {
    ScoringEngine::standard(constants())
}

pub(super) fn pictures(count: usize) -> Vec<Picture> {
    (0..count)
        .map(|index| Picture {
            url: format!("https://img.example.com/ads/{index}.jpg"),
            position: index as u16,
        })
        .collect()
}

pub(super) fn words(count: usize) -> String {
    vec!["casa"; count].join(" ")
}

pub(super) fn flat_ad(id: u32) -> Ad {
    Ad {
        description: TWO_KEYWORD_DESCRIPTION.to_string(),
        pictures: pictures(5),
        house_size: Some(85),
        has_garage: true,
        is_complete: true,
        ..Ad::new(id, Typology::Flat)
    }
}

pub(super) fn chalet_ad(id: u32) -> Ad {
    Ad {
        typology: Typology::Chalet,
        is_complete: false,
        ..flat_ad(id)
    }
}

pub(super) fn bare_ad(id: u32, typology: Typology) -> Ad {
    Ad::new(id, typology)
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<BTreeMap<AdId, Ad>>>,
}

impl MemoryRepository {
    pub(super) fn with_ads(ads: Vec<Ad>) -> Self {
        let records = ads.into_iter().map(|ad| (ad.id, ad)).collect();
        Self {
            records: Arc::new(Mutex::new(records)),
        }
    }

    pub(super) fn stored(&self, id: u32) -> Ad {
        self.records
            .lock()
            .expect("repository mutex poisoned")
            .get(&AdId(id))
            .cloned()
            .expect("ad stored")
    }

    pub(super) fn scores(&self) -> Vec<(AdId, Option<u32>)> {
        self.records
            .lock()
            .expect("repository mutex poisoned")
            .values()
            .map(|ad| (ad.id, ad.score))
            .collect()
    }
}

impl AdRepository for MemoryRepository {
    fn list_all(&self) -> Result<Vec<Ad>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.values().cloned().collect())
    }

    fn save(&self, ad: Ad) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if !guard.contains_key(&ad.id) {
            return Err(RepositoryError::NotFound);
        }
        guard.insert(ad.id, ad);
        Ok(())
    }
}

/// Rejects saves for one ad and delegates everything else.
pub(super) struct FlakyRepository {
    pub(super) inner: MemoryRepository,
    pub(super) failing: AdId,
}

impl AdRepository for FlakyRepository {
    fn list_all(&self) -> Result<Vec<Ad>, RepositoryError> {
        self.inner.list_all()
    }

    fn save(&self, ad: Ad) -> Result<(), RepositoryError> {
        if ad.id == self.failing {
            return Err(RepositoryError::Unavailable("write timeout".to_string()));
        }
        self.inner.save(ad)
    }
}

pub(super) struct UnavailableRepository;

impl AdRepository for UnavailableRepository {
    fn list_all(&self) -> Result<Vec<Ad>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn save(&self, _ad: Ad) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) fn build_classifier(
    ads: Vec<Ad>,
) -> (AdClassifier<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::with_ads(ads));
    let classifier = AdClassifier::new(repository.clone(), engine());
    (classifier, repository)
}

/// Pre-scored catalogue: quality (100), public (50), neither (10) and unscored.
pub(super) fn mixed_catalogue() -> Vec<Ad> {
    let mut sparse = bare_ad(3, Typology::Flat);
    sparse.pictures = pictures(1);
    sparse.score = Some(10);

    vec![
        Ad {
            score: Some(100),
            ..flat_ad(1)
        },
        Ad {
            score: Some(50),
            ..chalet_ad(2)
        },
        sparse,
        bare_ad(4, Typology::Chalet),
    ]
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
