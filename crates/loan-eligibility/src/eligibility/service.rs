use serde::Serialize;
use tracing::info;

use super::domain::LoanApplication;
use super::insight::{Insight, InsightComposer, TextGenerator};
use super::intake::{ApplicationForm, IntakeError, IntakePolicy};
use super::scoring::{EligibilityResult, EligibilityScorer};
use super::views::EligibilityView;

/// Service composing intake validation, the scorer, and the insight composer.
pub struct EligibilityService<G> {
    intake: IntakePolicy,
    scorer: EligibilityScorer,
    composer: InsightComposer<G>,
}

impl<G> EligibilityService<G>
where
    G: TextGenerator + 'static,
{
    pub fn new(intake: IntakePolicy, composer: InsightComposer<G>) -> Self {
        Self {
            intake,
            scorer: EligibilityScorer::new(),
            composer,
        }
    }

    pub fn intake_policy(&self) -> &IntakePolicy {
        &self.intake
    }

    pub fn composer(&self) -> &InsightComposer<G> {
        &self.composer
    }

    /// Validate a raw form, then score and narrate it.
    pub async fn assess(
        &self,
        form: ApplicationForm,
    ) -> Result<EligibilityAssessment, EligibilityServiceError> {
        let application = self.intake.validate(form)?;
        Ok(self.assess_application(application).await)
    }

    /// Score and narrate an application that has already been validated.
    pub async fn assess_application(&self, application: LoanApplication) -> EligibilityAssessment {
        let result = self.scorer.score(&application);
        let insight = self.composer.compose_insight(&application, &result).await;

        info!(
            score = result.score,
            probability = result.probability,
            approved = result.approved,
            insight_source = insight.source.label(),
            "eligibility assessed"
        );

        EligibilityAssessment {
            application,
            result,
            insight,
        }
    }
}

/// Scored application together with its narrative.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EligibilityAssessment {
    pub application: LoanApplication,
    pub result: EligibilityResult,
    pub insight: Insight,
}

impl EligibilityAssessment {
    pub fn view(&self) -> EligibilityView {
        EligibilityView::build(&self.application, &self.result, &self.insight)
    }
}

/// Error raised by the eligibility service.
#[derive(Debug, thiserror::Error)]
pub enum EligibilityServiceError {
    #[error(transparent)]
    Intake(#[from] IntakeError),
}
