//! Synthetic portfolio used by the overview dashboard.
//!
//! The dataset is illustrative only and unrelated to the scoring rules; it is
//! regenerated from a seed on every request so output is reproducible.

mod summary;

pub use summary::{
    DashboardSummary, DistributionStats, HistogramBin, IncomeByApproval, DEFAULT_HISTOGRAM_BINS,
    MAX_HISTOGRAM_BINS,
};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal, NormalError};
use serde::Serialize;

pub const DEFAULT_SEED: u64 = 42;
pub const DEFAULT_SAMPLE_SIZE: usize = 1_000;
pub const MAX_SAMPLE_SIZE: usize = 100_000;

const INCOME_MEAN: f64 = 5_000.0;
const INCOME_STD_DEV: f64 = 2_000.0;
/// Loan amounts are drawn in thousands.
const LOAN_AMOUNT_MEAN: f64 = 150.0;
const LOAN_AMOUNT_STD_DEV: f64 = 50.0;
const CREDIT_SCORE_MEAN: f64 = 700.0;
const CREDIT_SCORE_STD_DEV: f64 = 100.0;
const APPROVAL_PROBABILITY: f64 = 0.7;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleRecord {
    pub income: f64,
    pub loan_amount: f64,
    pub credit_score: f64,
    pub approved: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleDataset {
    pub seed: u64,
    pub records: Vec<SampleRecord>,
}

impl SampleDataset {
    pub fn generate(seed: u64, size: usize) -> Result<Self, DashboardError> {
        if size == 0 || size > MAX_SAMPLE_SIZE {
            return Err(DashboardError::InvalidSampleSize {
                size,
                max: MAX_SAMPLE_SIZE,
            });
        }

        let income = Normal::new(INCOME_MEAN, INCOME_STD_DEV)?;
        let loan_amount = Normal::new(LOAN_AMOUNT_MEAN, LOAN_AMOUNT_STD_DEV)?;
        let credit_score = Normal::new(CREDIT_SCORE_MEAN, CREDIT_SCORE_STD_DEV)?;

        let mut rng = StdRng::seed_from_u64(seed);
        let records = (0..size)
            .map(|_| SampleRecord {
                income: income.sample(&mut rng),
                loan_amount: loan_amount.sample(&mut rng),
                credit_score: credit_score.sample(&mut rng),
                approved: rng.gen_bool(APPROVAL_PROBABILITY),
            })
            .collect();

        Ok(Self { seed, records })
    }

    pub fn standard() -> Result<Self, DashboardError> {
        Self::generate(DEFAULT_SEED, DEFAULT_SAMPLE_SIZE)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("sample size must be between 1 and {max} (got {size})")]
    InvalidSampleSize { size: usize, max: usize },
    #[error("histogram needs between 1 and {max} bins (got {bins})")]
    InvalidBinCount { bins: usize, max: usize },
    #[error("invalid sampling distribution: {0}")]
    Distribution(#[from] NormalError),
}
