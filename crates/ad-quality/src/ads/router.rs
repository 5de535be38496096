use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, put},
    Json, Router,
};
use serde_json::json;

use super::classifier::{AdClassifier, AdFailureView};
use super::repository::AdRepository;
use super::views::{PublicAdView, QualityAdView};
use crate::error::AppError;

/// Router builder exposing the scoring trigger and both ad views.
pub fn ad_router<R>(classifier: Arc<AdClassifier<R>>) -> Router
where
    R: AdRepository + 'static,
{
    Router::new()
        .route("/api/v1/ads/scores", put(update_scores_handler::<R>))
        .route("/api/v1/ads/public", get(public_ads_handler::<R>))
        .route("/api/v1/ads/quality", get(quality_ads_handler::<R>))
        .with_state(classifier)
}

pub(crate) async fn update_scores_handler<R>(
    State(classifier): State<Arc<AdClassifier<R>>>,
) -> Response
where
    R: AdRepository + 'static,
{
    match classifier.update_ad_scores() {
        Ok(report) if report.is_clean() => StatusCode::NO_CONTENT.into_response(),
        Ok(report) => {
            let failures: Vec<AdFailureView> =
                report.failures.iter().map(AdFailureView::from).collect();
            let payload = json!({
                "error": format!("{} ad(s) could not be rescored", failures.len()),
                "failures": failures,
            });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
        Err(error) => AppError::from(error).into_response(),
    }
}

pub(crate) async fn public_ads_handler<R>(
    State(classifier): State<Arc<AdClassifier<R>>>,
) -> Result<Json<Vec<PublicAdView>>, AppError>
where
    R: AdRepository + 'static,
{
    let ads = classifier.find_public_ads()?;
    Ok(Json(ads.iter().map(PublicAdView::from).collect()))
}

pub(crate) async fn quality_ads_handler<R>(
    State(classifier): State<Arc<AdClassifier<R>>>,
) -> Result<Json<Vec<QualityAdView>>, AppError>
where
    R: AdRepository + 'static,
{
    let ads = classifier.find_quality_ads()?;
    Ok(Json(ads.iter().map(QualityAdView::from).collect()))
}
