//! Narrative insight for an eligibility result.
//!
//! A configured [`TextGenerator`] is asked for a one or two sentence summary.
//! Any failure on that path (no generator, timeout, transport error, empty
//! answer) degrades to a fixed message chosen by probability band, so callers
//! always receive text.

mod fallback;
mod gemini;
mod prompt;

pub use fallback::fallback_message;
pub use gemini::GeminiClient;
pub use prompt::InsightPrompt;

use std::future::Future;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::domain::LoanApplication;
use super::scoring::EligibilityResult;

/// Remote or local service able to turn a prompt into free text.
pub trait TextGenerator: Send + Sync {
    fn generate(
        &self,
        prompt: &str,
    ) -> impl Future<Output = Result<String, InsightError>> + Send;
}

/// Failure raised by a [`TextGenerator`]. Never escapes the composer.
#[derive(Debug, thiserror::Error)]
pub enum InsightError {
    #[error("text generation request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("text generation service returned status {status}")]
    Status { status: u16 },
    #[error("text generation response was empty")]
    EmptyResponse,
    #[error("text generation service unavailable: {0}")]
    Unavailable(String),
}

/// Where the insight text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightSource {
    Generated,
    Fallback,
}

impl InsightSource {
    pub const fn label(self) -> &'static str {
        match self {
            InsightSource::Generated => "generated",
            InsightSource::Fallback => "fallback",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    pub text: String,
    pub source: InsightSource,
}

impl Insight {
    fn fallback(probability: u8) -> Self {
        Self {
            text: fallback_message(probability).to_string(),
            source: InsightSource::Fallback,
        }
    }
}

pub const DEFAULT_INSIGHT_TIMEOUT: Duration = Duration::from_secs(5);

/// Blends the optional text generator with the deterministic fallback.
pub struct InsightComposer<G> {
    generator: Option<G>,
    timeout: Duration,
}

impl<G> InsightComposer<G>
where
    G: TextGenerator,
{
    pub fn new(generator: Option<G>, timeout: Duration) -> Self {
        Self { generator, timeout }
    }

    pub fn with_generator(generator: G) -> Self {
        Self::new(Some(generator), DEFAULT_INSIGHT_TIMEOUT)
    }

    /// Composer that only ever serves the fallback messages.
    pub fn fallback_only() -> Self {
        Self::new(None, DEFAULT_INSIGHT_TIMEOUT)
    }

    pub fn has_generator(&self) -> bool {
        self.generator.is_some()
    }

    pub fn generator(&self) -> Option<&G> {
        self.generator.as_ref()
    }

    pub async fn compose(&self, application: &LoanApplication, result: &EligibilityResult) -> String {
        self.compose_insight(application, result).await.text
    }

    pub async fn compose_insight(
        &self,
        application: &LoanApplication,
        result: &EligibilityResult,
    ) -> Insight {
        let Some(generator) = &self.generator else {
            return Insight::fallback(result.probability);
        };

        let prompt = InsightPrompt::new(application, result.probability).render();

        match tokio::time::timeout(self.timeout, generator.generate(&prompt)).await {
            Ok(Ok(text)) => {
                let text = text.trim();
                if text.is_empty() {
                    warn!(error = %InsightError::EmptyResponse, "using fallback insight");
                    Insight::fallback(result.probability)
                } else {
                    debug!(chars = text.len(), "generated insight received");
                    Insight {
                        text: text.to_string(),
                        source: InsightSource::Generated,
                    }
                }
            }
            Ok(Err(err)) => {
                warn!(error = %err, "using fallback insight");
                Insight::fallback(result.probability)
            }
            Err(_) => {
                warn!(
                    timeout_ms = self.timeout.as_millis() as u64,
                    "text generation timed out, using fallback insight"
                );
                Insight::fallback(result.probability)
            }
        }
    }
}
