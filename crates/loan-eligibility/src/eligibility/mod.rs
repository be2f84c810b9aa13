//! Loan eligibility scoring, narrative insight, and the HTTP surface around them.

pub mod domain;
pub mod insight;
pub mod intake;
pub mod router;
pub mod scoring;
pub mod service;
pub mod views;

#[cfg(test)]
mod tests;

pub use domain::{
    EmploymentType, ExistingLoans, LoanApplication, ScoreFactor, STANDARD_LOAN_TERMS,
};
pub use insight::{
    fallback_message, GeminiClient, Insight, InsightComposer, InsightError, InsightPrompt,
    InsightSource, TextGenerator,
};
pub use intake::{ApplicationForm, IntakeError, IntakePolicy};
pub use router::eligibility_router;
pub use scoring::{
    EligibilityResult, EligibilityScorer, ProbabilityBand, ScoreComponent, APPROVAL_THRESHOLD,
};
pub use service::{EligibilityAssessment, EligibilityService, EligibilityServiceError};
pub use views::{EligibilityView, GaugeStep, GaugeView};
