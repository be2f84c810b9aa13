use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde_json::json;
use tracing::debug;

use super::insight::TextGenerator;
use super::intake::ApplicationForm;
use super::service::{EligibilityService, EligibilityServiceError};

/// Router builder exposing the eligibility check endpoint.
pub fn eligibility_router<G>(service: Arc<EligibilityService<G>>) -> Router
where
    G: TextGenerator + 'static,
{
    Router::new()
        .route("/api/v1/loan/eligibility", post(assess_handler::<G>))
        .with_state(service)
}

pub(crate) async fn assess_handler<G>(
    State(service): State<Arc<EligibilityService<G>>>,
    form: Result<axum::Json<ApplicationForm>, JsonRejection>,
) -> Response
where
    G: TextGenerator + 'static,
{
    let axum::Json(form) = match form {
        Ok(form) => form,
        Err(rejection) => {
            debug!(error = %rejection.body_text(), "eligibility form unreadable");
            return error_response(rejection.status(), rejection.body_text());
        }
    };

    match service.assess(form).await {
        Ok(assessment) => (StatusCode::OK, axum::Json(assessment.view())).into_response(),
        Err(EligibilityServiceError::Intake(error)) => {
            debug!(%error, "eligibility form rejected");
            error_response(StatusCode::UNPROCESSABLE_ENTITY, error.to_string())
        }
    }
}

fn error_response(status: StatusCode, message: String) -> Response {
    (status, axum::Json(json!({ "error": message }))).into_response()
}
