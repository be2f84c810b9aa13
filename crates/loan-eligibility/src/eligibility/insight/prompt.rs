use super::super::domain::{EmploymentType, LoanApplication};

/// Summary of an application handed to the text generator.
#[derive(Debug, Clone, PartialEq)]
pub struct InsightPrompt {
    pub monthly_income: f64,
    pub loan_amount: f64,
    pub credit_score: u16,
    pub employment_type: EmploymentType,
    pub probability: u8,
}

impl InsightPrompt {
    pub fn new(application: &LoanApplication, probability: u8) -> Self {
        Self {
            monthly_income: application.monthly_income,
            loan_amount: application.loan_amount,
            credit_score: application.credit_score,
            employment_type: application.employment_type,
            probability,
        }
    }

    pub fn render(&self) -> String {
        format!(
            "Provide a brief, professional insight about a loan application:\n\
             - Income: ${}/month\n\
             - Loan Amount: ${}\n\
             - Credit Score: {}\n\
             - Employment: {}\n\
             - Approval Probability: {}%\n\
             \n\
             Keep it to 1-2 sentences maximum. Focus on the key factor.",
            group_thousands(self.monthly_income),
            group_thousands(self.loan_amount),
            self.credit_score,
            self.employment_type.label(),
            self.probability,
        )
    }
}

/// Renders an amount with comma separators, keeping cents only when present.
pub(crate) fn group_thousands(amount: f64) -> String {
    if !amount.is_finite() {
        return amount.to_string();
    }

    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    if fraction == 0 {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{fraction:02}")
    }
}
