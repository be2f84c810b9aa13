use serde::Serialize;

use super::{DashboardError, SampleDataset};

pub const DEFAULT_HISTOGRAM_BINS: usize = 20;
pub const MAX_HISTOGRAM_BINS: usize = 200;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Five-number summary backing a box plot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionStats {
    pub count: usize,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

impl DistributionStats {
    fn from_values(mut values: Vec<f64>) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        values.sort_by(f64::total_cmp);

        Some(Self {
            count: values.len(),
            min: values[0],
            q1: quantile(&values, 0.25),
            median: quantile(&values, 0.5),
            q3: quantile(&values, 0.75),
            max: values[values.len() - 1],
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IncomeByApproval {
    pub approved: Option<DistributionStats>,
    pub not_approved: Option<DistributionStats>,
}

/// Headline metrics and chart series for the overview page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub seed: u64,
    pub total_samples: usize,
    pub approval_rate: f64,
    pub average_income: f64,
    pub income_histogram: Vec<HistogramBin>,
    pub income_by_approval: IncomeByApproval,
}

impl DashboardSummary {
    pub fn from_dataset(dataset: &SampleDataset, bins: usize) -> Result<Self, DashboardError> {
        if bins == 0 || bins > MAX_HISTOGRAM_BINS {
            return Err(DashboardError::InvalidBinCount {
                bins,
                max: MAX_HISTOGRAM_BINS,
            });
        }

        let total = dataset.len();
        let incomes: Vec<f64> = dataset.records.iter().map(|record| record.income).collect();
        let approved_count = dataset.records.iter().filter(|record| record.approved).count();

        let (approval_rate, average_income) = if total == 0 {
            (0.0, 0.0)
        } else {
            (
                approved_count as f64 / total as f64,
                incomes.iter().sum::<f64>() / total as f64,
            )
        };

        let (approved, not_approved): (Vec<_>, Vec<_>) =
            dataset.records.iter().partition(|record| record.approved);

        Ok(Self {
            seed: dataset.seed,
            total_samples: total,
            approval_rate,
            average_income,
            income_histogram: histogram(&incomes, bins),
            income_by_approval: IncomeByApproval {
                approved: DistributionStats::from_values(
                    approved.iter().map(|record| record.income).collect(),
                ),
                not_approved: DistributionStats::from_values(
                    not_approved.iter().map(|record| record.income).collect(),
                ),
            },
        })
    }
}

fn histogram(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    let Some((min, max)) = values.iter().fold(None, |acc: Option<(f64, f64)>, &value| {
        Some(match acc {
            Some((lo, hi)) => (lo.min(value), hi.max(value)),
            None => (value, value),
        })
    }) else {
        return Vec::new();
    };

    let width = if max > min {
        (max - min) / bins as f64
    } else {
        1.0
    };

    let mut result: Vec<HistogramBin> = (0..bins)
        .map(|index| HistogramBin {
            lower: min + width * index as f64,
            upper: min + width * (index + 1) as f64,
            count: 0,
        })
        .collect();

    for value in values {
        let index = (((value - min) / width) as usize).min(bins - 1);
        result[index].count += 1;
    }

    result
}

/// Linear interpolation between closest ranks on sorted input.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let position = q * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let fraction = position - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * fraction
}

#[cfg(test)]
mod tests {
    use super::super::SampleRecord;
    use super::*;

    fn dataset(rows: &[(f64, bool)]) -> SampleDataset {
        SampleDataset {
            seed: 1,
            records: rows
                .iter()
                .map(|&(income, approved)| SampleRecord {
                    income,
                    loan_amount: 150.0,
                    credit_score: 700.0,
                    approved,
                })
                .collect(),
        }
    }

    #[test]
    fn summarizes_headline_metrics() {
        let data = dataset(&[(1_000.0, true), (2_000.0, false), (3_000.0, true), (6_000.0, true)]);

        let summary = DashboardSummary::from_dataset(&data, 5).expect("summary builds");

        assert_eq!(summary.total_samples, 4);
        assert_eq!(summary.approval_rate, 0.75);
        assert_eq!(summary.average_income, 3_000.0);
        assert_eq!(summary.income_histogram.len(), 5);
        assert_eq!(
            summary
                .income_histogram
                .iter()
                .map(|bin| bin.count)
                .sum::<usize>(),
            4
        );
        assert_eq!(summary.income_histogram[4].count, 1);

        let approved = summary.income_by_approval.approved.expect("approved stats");
        assert_eq!(approved.count, 3);
        assert_eq!(approved.median, 3_000.0);
        assert_eq!(approved.q1, 2_000.0);
        let declined = summary
            .income_by_approval
            .not_approved
            .expect("declined stats");
        assert_eq!(declined.min, 2_000.0);
        assert_eq!(declined.max, 2_000.0);
    }

    #[test]
    fn constant_values_fill_first_bin() {
        let data = dataset(&[(4_000.0, true), (4_000.0, true)]);

        let summary = DashboardSummary::from_dataset(&data, 3).expect("summary builds");

        assert_eq!(summary.income_histogram[0].count, 2);
        assert!(summary.income_by_approval.not_approved.is_none());
    }

    #[test]
    fn rejects_zero_bins() {
        let data = dataset(&[(4_000.0, true)]);
        assert!(matches!(
            DashboardSummary::from_dataset(&data, 0),
            Err(DashboardError::InvalidBinCount { .. })
        ));
    }
}
