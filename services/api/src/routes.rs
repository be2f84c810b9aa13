use crate::infra::AppState;
use axum::extract::Query;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use loan_eligibility::dashboard::{
    DashboardSummary, SampleDataset, DEFAULT_HISTOGRAM_BINS, DEFAULT_SAMPLE_SIZE, DEFAULT_SEED,
};
use loan_eligibility::eligibility::{eligibility_router, EligibilityService, TextGenerator};
use loan_eligibility::error::AppError;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct DashboardQuery {
    #[serde(default)]
    pub(crate) seed: Option<u64>,
    #[serde(default)]
    pub(crate) size: Option<usize>,
    #[serde(default)]
    pub(crate) bins: Option<usize>,
}

pub(crate) fn with_service_routes<G>(service: Arc<EligibilityService<G>>) -> axum::Router
where
    G: TextGenerator + 'static,
{
    eligibility_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/loan/dashboard",
            axum::routing::get(dashboard_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn dashboard_endpoint(
    Query(query): Query<DashboardQuery>,
) -> Result<Json<DashboardSummary>, AppError> {
    let DashboardQuery { seed, size, bins } = query;

    let dataset = SampleDataset::generate(
        seed.unwrap_or(DEFAULT_SEED),
        size.unwrap_or(DEFAULT_SAMPLE_SIZE),
    )?;
    let summary = DashboardSummary::from_dataset(&dataset, bins.unwrap_or(DEFAULT_HISTOGRAM_BINS))?;

    Ok(Json(summary))
}
