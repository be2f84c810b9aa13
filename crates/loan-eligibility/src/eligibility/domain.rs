use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Loan terms, in months, offered by the intake form.
pub const STANDARD_LOAN_TERMS: [u32; 8] = [12, 24, 36, 60, 120, 180, 240, 360];

/// Applicant supplied attributes used for a single eligibility decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanApplication {
    pub monthly_income: f64,
    pub loan_amount: f64,
    pub loan_term_months: u32,
    pub credit_score: u16,
    pub employment_type: EmploymentType,
    pub existing_loans: ExistingLoans,
}

impl LoanApplication {
    /// Straight-line repayment, ignoring interest.
    pub fn monthly_payment(&self) -> f64 {
        self.loan_amount / f64::from(self.loan_term_months)
    }

    /// Monthly payment over monthly income. Missing or negative income counts
    /// as a fully committed income so the ratio is always defined.
    pub fn debt_to_income_ratio(&self) -> f64 {
        if self.monthly_income > 0.0 {
            self.monthly_payment() / self.monthly_income
        } else {
            1.0
        }
    }
}

/// Source of the applicant's income.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmploymentType {
    Salaried,
    #[serde(rename = "Self-Employed")]
    SelfEmployed,
    Business,
    #[serde(other)]
    Other,
}

impl EmploymentType {
    pub const fn label(self) -> &'static str {
        match self {
            EmploymentType::Salaried => "Salaried",
            EmploymentType::SelfEmployed => "Self-Employed",
            EmploymentType::Business => "Business",
            EmploymentType::Other => "Other",
        }
    }

    pub const fn offered() -> [Self; 3] {
        [Self::Salaried, Self::SelfEmployed, Self::Business]
    }
}

impl fmt::Display for EmploymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for EmploymentType {
    type Err = Infallible;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        Ok(match normalized.as_str() {
            "salaried" => Self::Salaried,
            "self-employed" | "selfemployed" => Self::SelfEmployed,
            "business" => Self::Business,
            _ => Self::Other,
        })
    }
}

/// Number of loans the applicant already services, bucketed the way the form
/// offers them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExistingLoans {
    None,
    #[serde(rename = "1")]
    One,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3+")]
    ThreeOrMore,
    #[serde(other)]
    Unrecognized,
}

impl ExistingLoans {
    /// Buckets a raw count, capping at `3+`.
    pub const fn from_count(count: u32) -> Self {
        match count {
            0 => Self::None,
            1 => Self::One,
            2 => Self::Two,
            _ => Self::ThreeOrMore,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ExistingLoans::None => "None",
            ExistingLoans::One => "1",
            ExistingLoans::Two => "2",
            ExistingLoans::ThreeOrMore => "3+",
            ExistingLoans::Unrecognized => "unrecognized",
        }
    }

    pub const fn offered() -> [Self; 4] {
        [Self::None, Self::One, Self::Two, Self::ThreeOrMore]
    }
}

impl fmt::Display for ExistingLoans {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ExistingLoans {
    type Err = Infallible;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case("none") {
            return Ok(Self::None);
        }
        if trimmed == "3+" {
            return Ok(Self::ThreeOrMore);
        }
        Ok(trimmed
            .parse::<u32>()
            .map(Self::from_count)
            .unwrap_or(Self::Unrecognized))
    }
}

/// Factors that contribute to the eligibility score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFactor {
    CreditScore,
    DebtToIncome,
    Employment,
    ExistingLoans,
}

impl ScoreFactor {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::CreditScore,
            Self::DebtToIncome,
            Self::Employment,
            Self::ExistingLoans,
        ]
    }

    /// Maximum points the factor can contribute.
    pub const fn weight(self) -> u8 {
        match self {
            ScoreFactor::CreditScore => 40,
            ScoreFactor::DebtToIncome => 30,
            ScoreFactor::Employment => 20,
            ScoreFactor::ExistingLoans => 10,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ScoreFactor::CreditScore => "Credit Score",
            ScoreFactor::DebtToIncome => "Debt-to-Income Ratio",
            ScoreFactor::Employment => "Employment Stability",
            ScoreFactor::ExistingLoans => "Existing Loans",
        }
    }
}
