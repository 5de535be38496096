use std::collections::BTreeMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use ad_quality::ads::{
    Ad, AdClassifier, AdId, AdRepository, ClassificationThresholds, Picture, RepositoryError,
    ScoreConstants, ScoringEngine, Typology,
};
use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local ad store; each save swaps the whole record under the lock.
#[derive(Default, Clone)]
pub(crate) struct InMemoryAdRepository {
    records: Arc<Mutex<BTreeMap<AdId, Ad>>>,
}

impl InMemoryAdRepository {
    pub(crate) fn seeded(ads: Vec<Ad>) -> Self {
        let records = ads.into_iter().map(|ad| (ad.id, ad)).collect();
        Self {
            records: Arc::new(Mutex::new(records)),
        }
    }
}

impl AdRepository for InMemoryAdRepository {
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

pub(crate) fn build_classifier(
    thresholds: ClassificationThresholds,
) -> AdClassifier<InMemoryAdRepository> {
    let repository = Arc::new(InMemoryAdRepository::seeded(seed_catalogue()));
    let engine = ScoringEngine::standard(ScoreConstants::standard().with_thresholds(thresholds));
    AdClassifier::new(repository, engine)
}

fn gallery(ad: u32, count: u16) -> Vec<Picture> {
    (1..=count)
        .map(|position| Picture {
            url: format!("https://cdn.example.com/ads/{ad}/{position}.jpg"),
            position,
        })
        .collect()
}

/// Demo listings covering every typology and both views.
pub(crate) fn seed_catalogue() -> Vec<Ad> {
    vec![
        Ad {
            description: "Este piso es una ganga, compra, compra, COMPRA!!!!!".to_string(),
            house_size: Some(300),
            ..Ad::new(1, Typology::Chalet)
        },
        Ad {
            description: "Nuevo ático céntrico recién reformado. No deje pasar la oportunidad y adquiera este ático de lujo".to_string(),
            pictures: gallery(2, 1),
            house_size: Some(300),
            is_complete: true,
            ..Ad::new(2, Typology::Flat)
        },
        Ad {
            pictures: gallery(3, 2),
            house_size: Some(210),
            garden_size: Some(25),
            ..Ad::new(3, Typology::Chalet)
        },
        Ad {
            description: "Ático céntrico muy luminoso y recién reformado, parece nuevo. Dispone de plaza de garaje en el mismo edificio, trastero y ascensor, en una calle tranquila a cinco minutos del metro y de todos los servicios del barrio".to_string(),
            pictures: gallery(4, 5),
            house_size: Some(130),
            has_garage: true,
            is_complete: true,
            ..Ad::new(4, Typology::Flat)
        },
        Ad {
            description: "Pisazo,".to_string(),
            pictures: gallery(5, 1),
            house_size: Some(60),
            ..Ad::new(5, Typology::Flat)
        },
        Ad {
            pictures: gallery(6, 1),
            is_complete: true,
            ..Ad::new(6, Typology::Garage)
        },
        Ad {
            description: "Garaje en el centro de Albacete".to_string(),
            is_complete: true,
            ..Ad::new(7, Typology::Garage)
        },
        Ad {
            description: "Maravilloso chalet situado en las afueras de un pequeño pueblo rural. El entorno es espectacular, las vistas magníficas. ¡Cómprelo ahora!".to_string(),
            pictures: gallery(8, 5),
            house_size: Some(220),
            garden_size: Some(80),
            has_garage: true,
            is_complete: true,
            ..Ad::new(8, Typology::Chalet)
        },
    ]
}
