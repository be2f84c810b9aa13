use crate::infra::build_eligibility_service;
use clap::Args;
use loan_eligibility::config::AppConfig;
use loan_eligibility::dashboard::{
    DashboardSummary, DistributionStats, SampleDataset, DEFAULT_HISTOGRAM_BINS,
    DEFAULT_SAMPLE_SIZE, DEFAULT_SEED,
};
use loan_eligibility::eligibility::{
    ApplicationForm, EligibilityView, EmploymentType, ExistingLoans, LoanApplication,
};
use loan_eligibility::error::AppError;
use loan_eligibility::telemetry::{self, LogSink};

#[derive(Args, Debug)]
pub(crate) struct CheckArgs {
    /// Gross monthly income
    #[arg(long)]
    pub(crate) income: f64,
    /// Requested loan amount
    #[arg(long)]
    pub(crate) loan_amount: f64,
    /// Loan term in months (12, 24, 36, 60, 120, 180, 240, 360)
    #[arg(long, default_value_t = 360)]
    pub(crate) term: u32,
    /// Credit score (300-850)
    #[arg(long)]
    pub(crate) credit_score: u16,
    /// Salaried, Self-Employed, or Business
    #[arg(long, default_value = "Salaried")]
    pub(crate) employment: EmploymentType,
    /// None, 1, 2, or 3+
    #[arg(long, default_value = "None")]
    pub(crate) existing_loans: ExistingLoans,
}

#[derive(Args, Debug)]
pub(crate) struct DashboardArgs {
    /// Seed for the synthetic sample
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub(crate) seed: u64,
    /// Number of synthetic applications
    #[arg(long, default_value_t = DEFAULT_SAMPLE_SIZE)]
    pub(crate) size: usize,
    /// Income histogram bin count
    #[arg(long, default_value_t = DEFAULT_HISTOGRAM_BINS)]
    pub(crate) bins: usize,
}

pub(crate) async fn run_check(args: CheckArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry, LogSink::Stderr)?;
    let service = build_eligibility_service(&config.insight)?;

    let CheckArgs {
        income,
        loan_amount,
        term,
        credit_score,
        employment,
        existing_loans,
    } = args;

    let assessment = service
        .assess(ApplicationForm {
            monthly_income: income,
            loan_amount,
            loan_term_months: term,
            credit_score,
            employment_type: employment,
            existing_loans,
        })
        .await?;

    println!("{}", render_eligibility(&assessment.view()));
    Ok(())
}

pub(crate) fn run_dashboard(args: DashboardArgs) -> Result<(), AppError> {
    let dataset = SampleDataset::generate(args.seed, args.size)?;
    let summary = DashboardSummary::from_dataset(&dataset, args.bins)?;
    println!("{}", render_dashboard(&summary));
    Ok(())
}

pub(crate) async fn run_demo() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry, LogSink::Stderr)?;
    let service = build_eligibility_service(&config.insight)?;

    println!("Loan eligibility demo");
    for (label, application) in reference_applications() {
        let assessment = service.assess_application(application).await;
        println!("\n== {label} ==");
        println!("{}", render_eligibility(&assessment.view()));
    }

    let dataset = SampleDataset::standard()?;
    let summary = DashboardSummary::from_dataset(&dataset, DEFAULT_HISTOGRAM_BINS)?;
    println!("\n{}", render_dashboard(&summary));
    Ok(())
}

fn reference_applications() -> Vec<(&'static str, LoanApplication)> {
    vec![
        (
            "Salaried borrower with modest repayments",
            LoanApplication {
                monthly_income: 5_000.0,
                loan_amount: 150_000.0,
                loan_term_months: 120,
                credit_score: 700,
                employment_type: EmploymentType::Salaried,
                existing_loans: ExistingLoans::None,
            },
        ),
        (
            "Self-employed borrower with heavy existing debt",
            LoanApplication {
                monthly_income: 3_000.0,
                loan_amount: 200_000.0,
                loan_term_months: 36,
                credit_score: 600,
                employment_type: EmploymentType::SelfEmployed,
                existing_loans: ExistingLoans::ThreeOrMore,
            },
        ),
        (
            "Business owner without declared income",
            LoanApplication {
                monthly_income: 0.0,
                loan_amount: 50_000.0,
                loan_term_months: 60,
                credit_score: 800,
                employment_type: EmploymentType::Business,
                existing_loans: ExistingLoans::One,
            },
        ),
    ]
}

pub(crate) fn render_eligibility(view: &EligibilityView) -> String {
    let mut lines = Vec::new();
    let marker = if view.approved { "[approved]" } else { "[review]" };
    lines.push(format!("{marker} {}", view.verdict));
    lines.push(format!("Approval probability: {}%", view.probability));
    lines.push(format!("Application score: {}", view.score_label));
    lines.push(format!(
        "Monthly payment: {:.2} (debt-to-income {:.2})",
        view.monthly_payment, view.debt_to_income_ratio
    ));
    lines.push(format!("Insight ({}): {}", view.insight_source.label(), view.insight));

    lines.push("Score breakdown".to_string());
    for component in &view.components {
        lines.push(format!(
            "- {}: {}/{} ({})",
            component.factor.label(),
            component.score,
            component.weight,
            component.notes
        ));
    }

    lines.push(format!(
        "Key factors considered: {}",
        view.key_factors.join(", ")
    ));
    lines.join("\n")
}

pub(crate) fn render_dashboard(summary: &DashboardSummary) -> String {
    let mut lines = vec![
        format!("Sample portfolio (seed {})", summary.seed),
        format!("Total samples: {}", summary.total_samples),
        format!("Approval rate: {:.0}%", summary.approval_rate * 100.0),
        format!("Average income: ${:.0}", summary.average_income),
        "Income distribution".to_string(),
    ];

    let widest = summary
        .income_histogram
        .iter()
        .map(|bin| bin.count)
        .max()
        .unwrap_or(0)
        .max(1);
    for bin in &summary.income_histogram {
        let bar = "#".repeat(bin.count * 40 / widest);
        lines.push(format!(
            "{:>9.0} - {:>9.0} | {:<40} {}",
            bin.lower, bin.upper, bar, bin.count
        ));
    }

    lines.push("Income vs approval".to_string());
    lines.push(render_stats("approved", summary.income_by_approval.approved.as_ref()));
    lines.push(render_stats(
        "not approved",
        summary.income_by_approval.not_approved.as_ref(),
    ));
    lines.join("\n")
}

fn render_stats(label: &str, stats: Option<&DistributionStats>) -> String {
    match stats {
        Some(stats) => format!(
            "- {label} (n={}): min {:.0}, q1 {:.0}, median {:.0}, q3 {:.0}, max {:.0}",
            stats.count, stats.min, stats.q1, stats.median, stats.q3, stats.max
        ),
        None => format!("- {label}: no samples"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loan_eligibility::eligibility::{EligibilityScorer, Insight, InsightSource};

    #[test]
    fn eligibility_rendering_lists_breakdown() {
        let (_, application) = reference_applications().remove(2);
        let result = EligibilityScorer::new().score(&application);
        let insight = Insight {
            text: "Good potential for approval.".to_string(),
            source: InsightSource::Fallback,
        };

        let view = EligibilityView::build(&application, &result, &insight);
        let rendered = render_eligibility(&view);

        assert!(rendered.starts_with("[approved] Eligible for Loan"));
        assert!(rendered.contains("Approval probability: 72%"));
        assert!(rendered.contains("- Debt-to-Income Ratio: 10/30"));
        assert!(rendered.contains("Insight (fallback): Good potential for approval."));
    }

    #[test]
    fn dashboard_rendering_includes_headline_metrics() {
        let summary = DashboardSummary::from_dataset(
            &SampleDataset::generate(3, 200).expect("dataset generates"),
            10,
        )
        .expect("summary builds");

        let rendered = render_dashboard(&summary);

        assert!(rendered.contains("Total samples: 200"));
        assert!(rendered.contains("Income vs approval"));
        assert_eq!(rendered.lines().filter(|line| line.contains(" | ")).count(), 10);
    }
}
