use serde::{Deserialize, Serialize};

/// Minimum score that counts as an approval.
pub const APPROVAL_THRESHOLD: u16 = 60;
pub const PROBABILITY_FLOOR: u8 = 5;
pub const PROBABILITY_CEILING: u8 = 95;

pub(crate) fn is_approved(score: u16) -> bool {
    score >= APPROVAL_THRESHOLD
}

pub(crate) fn probability(score: u16) -> u8 {
    // Clamped first so the narrowing cast cannot truncate.
    score.clamp(u16::from(PROBABILITY_FLOOR), u16::from(PROBABILITY_CEILING)) as u8
}

/// Coarse reading of the approval probability used for narrative text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbabilityBand {
    /// Above 80%.
    Strong,
    /// Above 60% up to and including 80%.
    Promising,
    /// 60% or below.
    NeedsReview,
}

impl ProbabilityBand {
    pub const fn for_probability(probability: u8) -> Self {
        if probability > 80 {
            Self::Strong
        } else if probability > 60 {
            Self::Promising
        } else {
            Self::NeedsReview
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ProbabilityBand::Strong => "strong",
            ProbabilityBand::Promising => "promising",
            ProbabilityBand::NeedsReview => "needs review",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probability_is_clamped_to_floor_and_ceiling() {
        assert_eq!(probability(0), PROBABILITY_FLOOR);
        assert_eq!(probability(41), 41);
        assert_eq!(probability(100), PROBABILITY_CEILING);
        assert_eq!(probability(u16::MAX), PROBABILITY_CEILING);
    }

    #[test]
    fn approval_threshold_is_inclusive() {
        assert!(!is_approved(59));
        assert!(is_approved(60));
    }

    #[test]
    fn band_boundaries_belong_to_lower_band() {
        assert_eq!(ProbabilityBand::for_probability(81), ProbabilityBand::Strong);
        assert_eq!(ProbabilityBand::for_probability(80), ProbabilityBand::Promising);
        assert_eq!(ProbabilityBand::for_probability(61), ProbabilityBand::Promising);
        assert_eq!(ProbabilityBand::for_probability(60), ProbabilityBand::NeedsReview);
    }
}
