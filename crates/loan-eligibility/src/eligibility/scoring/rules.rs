use super::super::domain::{EmploymentType, ExistingLoans, LoanApplication, ScoreFactor};
use super::ScoreComponent;

pub(crate) struct ScoreSignals {
    pub monthly_payment: f64,
    pub debt_to_income: f64,
}

impl ScoreSignals {
    pub(crate) fn from_application(application: &LoanApplication) -> Self {
        Self {
            monthly_payment: application.monthly_payment(),
            debt_to_income: application.debt_to_income_ratio(),
        }
    }
}

pub(crate) fn score_components(
    application: &LoanApplication,
    signals: &ScoreSignals,
) -> Vec<ScoreComponent> {
    vec![
        credit_component(application.credit_score),
        debt_to_income_component(application.monthly_income, signals.debt_to_income),
        employment_component(application.employment_type),
        existing_loans_component(application.existing_loans),
    ]
}

pub(crate) fn credit_points(credit_score: u16) -> u8 {
    match credit_score {
        750.. => 40,
        650..=749 => 30,
        550..=649 => 20,
        _ => 10,
    }
}

/// NaN and infinite ratios fail both comparisons and land in the lowest band.
pub(crate) fn debt_to_income_points(ratio: f64) -> u8 {
    if ratio < 0.3 {
        30
    } else if ratio < 0.5 {
        20
    } else {
        10
    }
}

pub(crate) fn employment_points(employment: EmploymentType) -> u8 {
    match employment {
        EmploymentType::Salaried => 20,
        EmploymentType::Business => 15,
        EmploymentType::SelfEmployed | EmploymentType::Other => 10,
    }
}

pub(crate) fn existing_loans_points(existing: ExistingLoans) -> u8 {
    match existing {
        ExistingLoans::None => 10,
        ExistingLoans::One => 7,
        ExistingLoans::Two => 4,
        ExistingLoans::ThreeOrMore | ExistingLoans::Unrecognized => 1,
    }
}

fn credit_component(credit_score: u16) -> ScoreComponent {
    let score = credit_points(credit_score);
    let notes = match score {
        40 => format!("credit score {credit_score} at or above 750"),
        30 => format!("credit score {credit_score} in the 650-749 band"),
        20 => format!("credit score {credit_score} in the 550-649 band"),
        _ => format!("credit score {credit_score} below 550"),
    };
    component(ScoreFactor::CreditScore, score, notes)
}

fn debt_to_income_component(monthly_income: f64, ratio: f64) -> ScoreComponent {
    let score = debt_to_income_points(ratio);
    let notes = if monthly_income <= 0.0 {
        "no declared income, treated as fully committed".to_string()
    } else if !ratio.is_finite() {
        "repayment could not be related to income".to_string()
    } else {
        match score {
            30 => format!("debt-to-income ratio {ratio:.2} below 0.30"),
            20 => format!("debt-to-income ratio {ratio:.2} below 0.50"),
            _ => format!("debt-to-income ratio {ratio:.2} at or above 0.50"),
        }
    };
    component(ScoreFactor::DebtToIncome, score, notes)
}

fn employment_component(employment: EmploymentType) -> ScoreComponent {
    let notes = match employment {
        EmploymentType::Other => "unrecognized employment type scored as least stable".to_string(),
        other => format!("{} income", other.label().to_ascii_lowercase()),
    };
    component(
        ScoreFactor::Employment,
        employment_points(employment),
        notes,
    )
}

fn existing_loans_component(existing: ExistingLoans) -> ScoreComponent {
    let notes = match existing {
        ExistingLoans::None => "no existing loans".to_string(),
        ExistingLoans::Unrecognized => {
            "unrecognized existing loan count scored as 3+".to_string()
        }
        other => format!("{} existing loan(s)", other.label()),
    };
    component(
        ScoreFactor::ExistingLoans,
        existing_loans_points(existing),
        notes,
    )
}

fn component(factor: ScoreFactor, score: u8, notes: String) -> ScoreComponent {
    ScoreComponent {
        factor,
        weight: factor.weight(),
        score,
        notes,
    }
}
