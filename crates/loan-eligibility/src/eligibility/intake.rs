use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use super::domain::{EmploymentType, ExistingLoans, LoanApplication, STANDARD_LOAN_TERMS};

/// Raw form submission. Enumerated fields are already lenient; the numeric
/// fields are checked against an [`IntakePolicy`] before scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationForm {
    pub monthly_income: f64,
    pub loan_amount: f64,
    pub loan_term_months: u32,
    pub credit_score: u16,
    pub employment_type: EmploymentType,
    pub existing_loans: ExistingLoans,
}

/// Input ranges accepted by the intake form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntakePolicy {
    pub minimum_loan_amount: f64,
    pub allowed_terms: Vec<u32>,
    pub credit_score_range: RangeInclusive<u16>,
}

impl Default for IntakePolicy {
    fn default() -> Self {
        Self {
            minimum_loan_amount: 1_000.0,
            allowed_terms: STANDARD_LOAN_TERMS.to_vec(),
            credit_score_range: 300..=850,
        }
    }
}

impl IntakePolicy {
    pub fn validate(&self, form: ApplicationForm) -> Result<LoanApplication, IntakeError> {
        if !form.monthly_income.is_finite() || form.monthly_income < 0.0 {
            return Err(IntakeError::InvalidIncome {
                value: form.monthly_income,
            });
        }

        if !form.loan_amount.is_finite() || form.loan_amount < self.minimum_loan_amount {
            return Err(IntakeError::LoanBelowMinimum {
                minimum: self.minimum_loan_amount,
                value: form.loan_amount,
            });
        }

        if !self.allowed_terms.contains(&form.loan_term_months) {
            return Err(IntakeError::UnsupportedTerm {
                months: form.loan_term_months,
                allowed: self.allowed_terms.clone(),
            });
        }

        if !self.credit_score_range.contains(&form.credit_score) {
            return Err(IntakeError::CreditScoreOutOfRange {
                value: form.credit_score,
                min: *self.credit_score_range.start(),
                max: *self.credit_score_range.end(),
            });
        }

        Ok(LoanApplication {
            monthly_income: form.monthly_income,
            loan_amount: form.loan_amount,
            loan_term_months: form.loan_term_months,
            credit_score: form.credit_score,
            employment_type: form.employment_type,
            existing_loans: form.existing_loans,
        })
    }
}

/// Reasons a form submission is rejected before scoring.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IntakeError {
    #[error("monthly income must be a non-negative amount (got {value})")]
    InvalidIncome { value: f64 },
    #[error("loan amount must be at least {minimum} (got {value})")]
    LoanBelowMinimum { minimum: f64, value: f64 },
    #[error("loan term of {months} months is not offered (choose one of {allowed:?})")]
    UnsupportedTerm { months: u32, allowed: Vec<u32> },
    #[error("credit score {value} outside supported range {min}-{max}")]
    CreditScoreOutOfRange { value: u16, min: u16, max: u16 },
}
