use proptest::prelude::*;

use super::common::*;
use crate::eligibility::domain::{
    EmploymentType, ExistingLoans, LoanApplication, ScoreFactor, STANDARD_LOAN_TERMS,
};
use crate::eligibility::scoring::{EligibilityScorer, APPROVAL_THRESHOLD};

fn sub_score(
    result: &crate::eligibility::scoring::EligibilityResult,
    factor: ScoreFactor,
) -> u8 {
    result
        .component(factor)
        .map(|component| component.score)
        .expect("component present")
}

#[test]
fn scorer_approves_strong_salaried_application() {
    let result = EligibilityScorer::new().score(&strong_application());

    assert_eq!(result.monthly_payment, 1_250.0);
    assert_eq!(result.debt_to_income_ratio, 0.25);
    assert_eq!(sub_score(&result, ScoreFactor::CreditScore), 30);
    assert_eq!(sub_score(&result, ScoreFactor::DebtToIncome), 30);
    assert_eq!(sub_score(&result, ScoreFactor::Employment), 20);
    assert_eq!(sub_score(&result, ScoreFactor::ExistingLoans), 10);
    assert_eq!(result.score, 90);
    assert!(result.approved);
    assert_eq!(result.probability, 90);
}

#[test]
fn scorer_declines_overextended_application() {
    let result = EligibilityScorer::new().score(&weak_application());

    assert!((result.monthly_payment - 5_555.555).abs() < 0.01);
    assert!((result.debt_to_income_ratio - 1.8518).abs() < 0.001);
    assert_eq!(result.score, 20 + 10 + 10 + 1);
    assert!(!result.approved);
    assert_eq!(result.probability, 41);
}

#[test]
fn scorer_treats_missing_income_as_full_burden() {
    let result = EligibilityScorer::new().score(&no_income_application());

    assert_eq!(result.debt_to_income_ratio, 1.0);
    assert_eq!(sub_score(&result, ScoreFactor::DebtToIncome), 10);
    assert_eq!(result.score, 40 + 10 + 15 + 7);
    assert!(result.approved);
    assert_eq!(result.probability, 72);
}

#[test]
fn negative_income_is_not_an_error() {
    let mut application = strong_application();
    application.monthly_income = -250.0;

    let result = EligibilityScorer::new().score(&application);

    assert_eq!(result.debt_to_income_ratio, 1.0);
    assert_eq!(sub_score(&result, ScoreFactor::DebtToIncome), 10);
}

#[test]
fn crossing_credit_boundary_adds_exactly_ten_points() {
    let scorer = EligibilityScorer::new();
    for (below, at) in [(549, 550), (649, 650), (749, 750)] {
        let mut lower = strong_application();
        lower.credit_score = below;
        let mut upper = strong_application();
        upper.credit_score = at;

        let lower = scorer.score(&lower);
        let upper = scorer.score(&upper);

        assert_eq!(
            sub_score(&upper, ScoreFactor::CreditScore),
            sub_score(&lower, ScoreFactor::CreditScore) + 10
        );
        assert_eq!(upper.score, lower.score + 10);
    }
}

#[test]
fn zero_term_lands_in_lowest_debt_band_without_panicking() {
    let mut application = strong_application();
    application.loan_term_months = 0;

    let result = EligibilityScorer::new().score(&application);

    assert!(result.monthly_payment.is_infinite());
    assert_eq!(sub_score(&result, ScoreFactor::DebtToIncome), 10);
}

fn employment_strategy() -> impl Strategy<Value = EmploymentType> {
    prop_oneof![
        Just(EmploymentType::Salaried),
        Just(EmploymentType::SelfEmployed),
        Just(EmploymentType::Business),
        Just(EmploymentType::Other),
    ]
}

fn existing_loans_strategy() -> impl Strategy<Value = ExistingLoans> {
    prop_oneof![
        Just(ExistingLoans::None),
        Just(ExistingLoans::One),
        Just(ExistingLoans::Two),
        Just(ExistingLoans::ThreeOrMore),
        Just(ExistingLoans::Unrecognized),
    ]
}

prop_compose! {
    fn application_strategy()(
        monthly_income in 0.0f64..1_000_000.0,
        loan_amount in 0.01f64..10_000_000.0,
        loan_term_months in prop::sample::select(STANDARD_LOAN_TERMS.to_vec()),
        credit_score in any::<u16>(),
        employment_type in employment_strategy(),
        existing_loans in existing_loans_strategy(),
    ) -> LoanApplication {
        application(
            monthly_income,
            loan_amount,
            loan_term_months,
            credit_score,
            employment_type,
            existing_loans,
        )
    }
}

proptest! {
    #[test]
    fn score_and_probability_stay_in_bounds(application in application_strategy()) {
        let result = EligibilityScorer::new().score(&application);

        prop_assert!((31..=100).contains(&result.score), "score {}", result.score);
        prop_assert!((5..=95).contains(&result.probability), "probability {}", result.probability);
        prop_assert_eq!(result.approved, result.score >= APPROVAL_THRESHOLD);
        prop_assert_eq!(result.components.len(), 4);
        prop_assert_eq!(
            result.components.iter().map(|c| u16::from(c.score)).sum::<u16>(),
            result.score
        );
    }

    #[test]
    fn reaching_good_credit_band_adds_ten_points(application in application_strategy()) {
        let scorer = EligibilityScorer::new();
        let mut lower = application.clone();
        lower.credit_score = 649;
        let mut upper = application;
        upper.credit_score = 650;

        let lower = scorer.score(&lower);
        let upper = scorer.score(&upper);

        prop_assert_eq!(upper.score, lower.score + 10);
        prop_assert!(upper.probability >= lower.probability);
    }
}
