use serde::Serialize;

use super::domain::{LoanApplication, ScoreFactor};
use super::insight::{Insight, InsightSource};
use super::scoring::{EligibilityResult, ProbabilityBand, ScoreComponent};

const APPROVED_BAR_COLOR: &str = "#4ecdc4";
const REVIEW_BAR_COLOR: &str = "#ff6b6b";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GaugeStep {
    pub from: u8,
    pub to: u8,
    pub color: &'static str,
}

const GAUGE_STEPS: [GaugeStep; 3] = [
    GaugeStep {
        from: 0,
        to: 40,
        color: "lightgray",
    },
    GaugeStep {
        from: 40,
        to: 70,
        color: "lightyellow",
    },
    GaugeStep {
        from: 70,
        to: 100,
        color: "lightgreen",
    },
];

/// Everything a chart layer needs to draw the approval probability gauge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaugeView {
    pub title: &'static str,
    pub value: u8,
    pub axis_min: u8,
    pub axis_max: u8,
    pub bar_color: &'static str,
    pub steps: Vec<GaugeStep>,
}

impl GaugeView {
    pub fn for_result(result: &EligibilityResult) -> Self {
        Self {
            title: "Approval Probability",
            value: result.probability,
            axis_min: 0,
            axis_max: 100,
            bar_color: if result.approved {
                APPROVED_BAR_COLOR
            } else {
                REVIEW_BAR_COLOR
            },
            steps: GAUGE_STEPS.to_vec(),
        }
    }

    /// Colour band the needle lands in.
    pub fn active_step(&self) -> Option<&GaugeStep> {
        self.steps
            .iter()
            .find(|step| self.value >= step.from && self.value < step.to)
            .or_else(|| self.steps.last().filter(|step| self.value == step.to))
    }
}

/// Presentation-ready decision payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EligibilityView {
    pub approved: bool,
    pub verdict: &'static str,
    pub probability: u8,
    pub probability_band: ProbabilityBand,
    pub score: u16,
    pub score_label: String,
    pub insight: String,
    pub insight_source: InsightSource,
    pub monthly_payment: f64,
    pub debt_to_income_ratio: f64,
    pub employment_type: &'static str,
    pub existing_loans: &'static str,
    pub components: Vec<ScoreComponent>,
    pub key_factors: Vec<&'static str>,
    pub gauge: GaugeView,
}

impl EligibilityView {
    pub fn build(application: &LoanApplication, result: &EligibilityResult, insight: &Insight) -> Self {
        Self {
            approved: result.approved,
            verdict: verdict_label(result.approved),
            probability: result.probability,
            probability_band: result.probability_band(),
            score: result.score,
            score_label: format!("{}/100", result.score),
            insight: insight.text.clone(),
            insight_source: insight.source,
            monthly_payment: round_cents(result.monthly_payment),
            debt_to_income_ratio: round_ratio(result.debt_to_income_ratio),
            employment_type: application.employment_type.label(),
            existing_loans: application.existing_loans.label(),
            components: result.components.clone(),
            key_factors: ScoreFactor::ordered()
                .iter()
                .map(|factor| factor.label())
                .collect(),
            gauge: GaugeView::for_result(result),
        }
    }
}

pub const fn verdict_label(approved: bool) -> &'static str {
    if approved {
        "Eligible for Loan"
    } else {
        "Needs Review"
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn round_ratio(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eligibility::domain::{EmploymentType, ExistingLoans};
    use crate::eligibility::scoring::EligibilityScorer;

    fn declined() -> (LoanApplication, EligibilityResult) {
        let application = LoanApplication {
            monthly_income: 3_000.0,
            loan_amount: 200_000.0,
            loan_term_months: 36,
            credit_score: 600,
            employment_type: EmploymentType::SelfEmployed,
            existing_loans: ExistingLoans::ThreeOrMore,
        };
        let result = EligibilityScorer::new().score(&application);
        (application, result)
    }

    #[test]
    fn declined_view_uses_review_styling() {
        let (application, result) = declined();
        let insight = Insight {
            text: "Needs work.".to_string(),
            source: InsightSource::Generated,
        };

        let view = EligibilityView::build(&application, &result, &insight);

        assert!(!view.approved);
        assert_eq!(view.verdict, "Needs Review");
        assert_eq!(view.score_label, "41/100");
        assert_eq!(view.gauge.bar_color, REVIEW_BAR_COLOR);
        assert_eq!(view.gauge.active_step().map(|step| step.color), Some("lightyellow"));
        assert_eq!(view.monthly_payment, 5555.56);
        assert_eq!(view.key_factors.len(), 4);
    }

    #[test]
    fn gauge_top_of_axis_lands_in_last_step() {
        let (_, mut result) = declined();
        result.probability = 100;
        let gauge = GaugeView::for_result(&result);
        assert_eq!(gauge.active_step().map(|step| step.color), Some("lightgreen"));
    }
}
