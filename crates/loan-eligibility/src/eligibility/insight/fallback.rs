use super::super::scoring::ProbabilityBand;

const STRONG_MESSAGE: &str =
    "Strong application with high approval likelihood based on good financial metrics.";
const PROMISING_MESSAGE: &str =
    "Good potential for approval. Consider optimizing debt-to-income ratio.";
const NEEDS_REVIEW_MESSAGE: &str =
    "Application needs review. Focus on improving credit score and reducing debt burden.";

/// Deterministic advisory text for a probability.
pub fn fallback_message(probability: u8) -> &'static str {
    match ProbabilityBand::for_probability(probability) {
        ProbabilityBand::Strong => STRONG_MESSAGE,
        ProbabilityBand::Promising => PROMISING_MESSAGE,
        ProbabilityBand::NeedsReview => NEEDS_REVIEW_MESSAGE,
    }
}
