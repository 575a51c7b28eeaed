use std::time::Duration;

use async_trait::async_trait;

use crate::{Advisor, AdvisorError, AdvisoryNote, AdvisoryRequest};

/// Wraps an advisor so that it always answers.
///
/// The primary advisor gets `timeout` to respond. On error or timeout the
/// failure is logged and [`AdvisoryNote::service_fallback`] (or the note
/// given to [`BestEffortAdvisor::with_fallback`]) is returned instead.
pub struct BestEffortAdvisor<A: Advisor> {
    primary: A,
    timeout: Duration,
    fallback: AdvisoryNote,
}

impl<A: Advisor> BestEffortAdvisor<A> {
    pub fn new(primary: A, timeout: Duration) -> Self {
        Self {
            primary,
            timeout,
            fallback: AdvisoryNote::service_fallback(),
        }
    }

    pub fn with_fallback(mut self, fallback: AdvisoryNote) -> Self {
        self.fallback = fallback;
        self
    }

    /// Ask the primary advisor, falling back on any failure.
    pub async fn advise_or_fallback(&self, request: &AdvisoryRequest) -> AdvisoryNote {
        let outcome = match tokio::time::timeout(self.timeout, self.primary.advise(request)).await
        {
            Ok(outcome) => outcome,
            Err(_) => Err(AdvisorError::Timeout(self.timeout)),
        };

        match outcome {
            Ok(note) => note,
            Err(err) => {
                tracing::warn!(
                    "Advisor '{}' failed, using fallback note: {err}",
                    self.primary.name()
                );
                self.fallback.clone()
            }
        }
    }
}

#[async_trait]
impl<A: Advisor> Advisor for BestEffortAdvisor<A> {
    async fn advise(&self, request: &AdvisoryRequest) -> Result<AdvisoryNote, AdvisorError> {
        Ok(self.advise_or_fallback(request).await)
    }

    fn name(&self) -> &str {
        self.primary.name()
    }
}

#[cfg(test)]
mod tests {
    use engine::{BrideProfile, GroomProfile, estimate};

    use super::*;
    use crate::StaticAdvisor;

    struct Failing;

    #[async_trait]
    impl Advisor for Failing {
        async fn advise(&self, _request: &AdvisoryRequest) -> Result<AdvisoryNote, AdvisorError> {
            Err(AdvisorError::EmptyResponse)
        }
    }

    struct Stalled;

    #[async_trait]
    impl Advisor for Stalled {
        async fn advise(&self, _request: &AdvisoryRequest) -> Result<AdvisoryNote, AdvisorError> {
            std::future::pending().await
        }
    }

    fn request() -> AdvisoryRequest {
        let groom = GroomProfile {
            monthly_income: 5000.0,
            ..Default::default()
        };
        let bride = BrideProfile::default();
        AdvisoryRequest::new(&groom, &bride, &estimate(&groom, &bride))
    }

    fn custom_note() -> AdvisoryNote {
        AdvisoryNote {
            explanation: "x".to_string(),
            cultural_note: "y".to_string(),
            negotiation_tip: "z".to_string(),
        }
    }

    #[tokio::test]
    async fn passes_through_successful_advice() {
        let advisor =
            BestEffortAdvisor::new(StaticAdvisor::new(custom_note()), Duration::from_secs(1));
        assert_eq!(advisor.advise_or_fallback(&request()).await, custom_note());
    }

    #[tokio::test]
    async fn failure_becomes_fallback() {
        let advisor = BestEffortAdvisor::new(Failing, Duration::from_secs(1));
        assert_eq!(
            advisor.advise(&request()).await.unwrap(),
            AdvisoryNote::service_fallback()
        );
    }

    #[tokio::test]
    async fn timeout_becomes_fallback() {
        let advisor = BestEffortAdvisor::new(Stalled, Duration::from_millis(20))
            .with_fallback(custom_note());
        assert_eq!(advisor.advise_or_fallback(&request()).await, custom_note());
    }
}
