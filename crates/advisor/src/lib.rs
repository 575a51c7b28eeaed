//! Advisory notes shown next to a calculation.
//!
//! An [`Advisor`] turns the two profiles and the computed
//! [`CalculationResult`] into three short texts. Advice is a nice-to-have:
//! callers go through [`BestEffortAdvisor`] or [`AdvisoryDesk`], which
//! replace any failure with a fixed [`AdvisoryNote`], so an error never
//! reaches the user.

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use engine::{BrideProfile, CalculationResult, GroomProfile};
use serde::{Deserialize, Serialize};

pub use best_effort::BestEffortAdvisor;
pub use desk::{AdvisoryDesk, PendingAdvice};
pub use error::AdvisorError;
pub use fallback::StaticAdvisor;
pub use gemini::{GeminiAdvisor, GeminiAdvisorBuilder};
pub use settings::AdvisorSettings;

mod best_effort;
mod desk;
mod error;
mod fallback;
mod gemini;
mod prompt;
mod settings;

/// The three texts displayed under a result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvisoryNote {
    pub explanation: String,
    pub cultural_note: String,
    pub negotiation_tip: String,
}

impl AdvisoryNote {
    /// Note used when no API key is configured.
    #[must_use]
    pub fn missing_credentials() -> Self {
        Self {
            explanation: "AI insights unavailable (API Key missing). The calculations above are based on standard financial ratios.".to_string(),
            cultural_note: "Traditionally, Mahr is a gift to the bride and should be agreed upon with mutual kindness.".to_string(),
            negotiation_tip: "Open communication is key. Discuss expectations early.".to_string(),
        }
    }

    /// Note used when the advisory service fails or times out.
    #[must_use]
    pub fn service_fallback() -> Self {
        Self {
            explanation: "Based on your financial inputs and local cost of living standards."
                .to_string(),
            cultural_note: "Mahr is a token of respect and security.".to_string(),
            negotiation_tip: "Focus on the barakah (blessing) in the marriage.".to_string(),
        }
    }

    pub(crate) fn is_complete(&self) -> bool {
        [&self.explanation, &self.cultural_note, &self.negotiation_tip]
            .iter()
            .all(|text| !text.trim().is_empty())
    }
}

/// Everything an advisor may look at.
#[derive(Clone, Debug, PartialEq)]
pub struct AdvisoryRequest {
    pub groom: GroomProfile,
    pub bride: BrideProfile,
    pub result: CalculationResult,
}

impl AdvisoryRequest {
    pub fn new(groom: &GroomProfile, bride: &BrideProfile, result: &CalculationResult) -> Self {
        Self {
            groom: groom.clone(),
            bride: bride.clone(),
            result: *result,
        }
    }
}

/// Source of advisory notes.
#[async_trait]
pub trait Advisor: Send + Sync {
    async fn advise(&self, request: &AdvisoryRequest) -> Result<AdvisoryNote, AdvisorError>;

    /// Name used in logs.
    fn name(&self) -> &str {
        "Advisor"
    }
}

/// Build the advisor described by `settings`.
///
/// Without an API key this is a [`StaticAdvisor`] returning
/// [`AdvisoryNote::missing_credentials`]; otherwise a [`GeminiAdvisor`]
/// behind a [`BestEffortAdvisor`] with the configured timeout.
pub fn advisor_from_settings(settings: &AdvisorSettings) -> Arc<dyn Advisor> {
    let Some(api_key) = settings.api_key() else {
        tracing::info!("No advisor API key configured, using static advice");
        return Arc::new(StaticAdvisor::missing_credentials());
    };

    let gemini = GeminiAdvisor::builder()
        .api_key(api_key)
        .model(&settings.model)
        .base_url(&settings.base_url)
        .build();

    match gemini {
        Ok(gemini) => Arc::new(BestEffortAdvisor::new(
            gemini,
            Duration::from_secs(settings.timeout_secs),
        )),
        Err(err) => {
            tracing::warn!("failed to initialize advisor: {err}");
            Arc::new(StaticAdvisor::service_fallback())
        }
    }
}
