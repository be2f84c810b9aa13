mod policy;
mod rules;

pub use policy::{ProbabilityBand, APPROVAL_THRESHOLD, PROBABILITY_CEILING, PROBABILITY_FLOOR};

use super::domain::{LoanApplication, ScoreFactor};
use serde::{Deserialize, Serialize};

/// Stateless scorer applying the fixed weight table to an application.
#[derive(Debug, Clone, Copy, Default)]
pub struct EligibilityScorer;

impl EligibilityScorer {
    pub fn new() -> Self {
        Self
    }

    pub fn score(&self, application: &LoanApplication) -> EligibilityResult {
        let signals = rules::ScoreSignals::from_application(application);
        let components = rules::score_components(application, &signals);
        let score = components
            .iter()
            .map(|component| u16::from(component.score))
            .sum::<u16>();

        EligibilityResult {
            score,
            approved: policy::is_approved(score),
            probability: policy::probability(score),
            debt_to_income_ratio: signals.debt_to_income,
            monthly_payment: signals.monthly_payment,
            components,
        }
    }
}

/// Points awarded for one factor, kept so decisions can be explained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: ScoreFactor,
    pub weight: u8,
    pub score: u8,
    pub notes: String,
}

/// Outcome of scoring a single application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityResult {
    pub score: u16,
    pub approved: bool,
    pub probability: u8,
    pub debt_to_income_ratio: f64,
    pub monthly_payment: f64,
    pub components: Vec<ScoreComponent>,
}

impl EligibilityResult {
    pub fn component(&self, factor: ScoreFactor) -> Option<&ScoreComponent> {
        self.components
            .iter()
            .find(|component| component.factor == factor)
    }

    pub fn probability_band(&self) -> ProbabilityBand {
        ProbabilityBand::for_probability(self.probability)
    }
}
