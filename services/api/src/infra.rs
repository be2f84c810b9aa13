use loan_eligibility::config::InsightConfig;
use loan_eligibility::eligibility::{
    EligibilityService, GeminiClient, InsightComposer, IntakePolicy,
};
use loan_eligibility::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Wire the scorer to the configured text generator, or to fallback-only
/// narration when no API key is present.
pub(crate) fn build_eligibility_service(
    config: &InsightConfig,
) -> Result<EligibilityService<GeminiClient>, AppError> {
    let client = GeminiClient::from_config(config)?;
    match &client {
        Some(client) => info!(model = client.model(), "narrative insights enabled"),
        None => info!("GEMINI_API_KEY not set; serving fallback insights only"),
    }

    let composer = InsightComposer::new(client, config.timeout);
    Ok(EligibilityService::new(IntakePolicy::default(), composer))
}
