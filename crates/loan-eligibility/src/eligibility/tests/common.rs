use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::eligibility::domain::{EmploymentType, ExistingLoans, LoanApplication};
use crate::eligibility::insight::{InsightComposer, InsightError, TextGenerator};
use crate::eligibility::intake::{ApplicationForm, IntakePolicy};
use crate::eligibility::service::EligibilityService;

pub(super) fn application(
    monthly_income: f64,
    loan_amount: f64,
    loan_term_months: u32,
    credit_score: u16,
    employment_type: EmploymentType,
    existing_loans: ExistingLoans,
) -> LoanApplication {
    LoanApplication {
        monthly_income,
        loan_amount,
        loan_term_months,
        credit_score,
        employment_type,
        existing_loans,
    }
}

/// income=5000, loan=150000 over 120 months, credit 700, salaried, no loans.
pub(super) fn strong_application() -> LoanApplication {
    application(
        5_000.0,
        150_000.0,
        120,
        700,
        EmploymentType::Salaried,
        ExistingLoans::None,
    )
}

/// income=3000, loan=200000 over 36 months, credit 600, self-employed, 3+ loans.
pub(super) fn weak_application() -> LoanApplication {
    application(
        3_000.0,
        200_000.0,
        36,
        600,
        EmploymentType::SelfEmployed,
        ExistingLoans::ThreeOrMore,
    )
}

/// No income, loan=50000 over 60 months, credit 800, business owner, one loan.
pub(super) fn no_income_application() -> LoanApplication {
    application(
        0.0,
        50_000.0,
        60,
        800,
        EmploymentType::Business,
        ExistingLoans::One,
    )
}

pub(super) fn form(application: &LoanApplication) -> ApplicationForm {
    ApplicationForm {
        monthly_income: application.monthly_income,
        loan_amount: application.loan_amount,
        loan_term_months: application.loan_term_months,
        credit_score: application.credit_score,
        employment_type: application.employment_type,
        existing_loans: application.existing_loans,
    }
}

/// Generator returning a canned answer and recording prompts.
#[derive(Default, Clone)]
pub(super) struct ScriptedGenerator {
    pub(super) answer: String,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl ScriptedGenerator {
    pub(super) fn answering(answer: &str) -> Self {
        Self {
            answer: answer.to_string(),
            prompts: Arc::default(),
        }
    }

    pub(super) fn prompts(&self) -> Vec<String> {
        self.prompts.lock().expect("prompt mutex poisoned").clone()
    }
}

impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, InsightError> {
        self.prompts
            .lock()
            .expect("prompt mutex poisoned")
            .push(prompt.to_string());
        Ok(self.answer.clone())
    }
}

/// Generator standing in for an unreachable service.
#[derive(Default)]
pub(super) struct UnreachableGenerator {
    pub(super) calls: AtomicUsize,
}

impl TextGenerator for UnreachableGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String, InsightError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(InsightError::Unavailable("connection refused".to_string()))
    }
}

/// Generator that never answers within any reasonable timeout.
pub(super) struct StalledGenerator;

impl TextGenerator for StalledGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String, InsightError> {
        tokio::time::sleep(Duration::from_secs(60)).await;
        Ok("too late".to_string())
    }
}

pub(super) fn build_service<G>(generator: Option<G>) -> EligibilityService<G>
where
    G: TextGenerator + 'static,
{
    EligibilityService::new(
        IntakePolicy::default(),
        InsightComposer::new(generator, Duration::from_millis(50)),
    )
}
