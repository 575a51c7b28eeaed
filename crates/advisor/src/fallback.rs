use async_trait::async_trait;

use crate::{Advisor, AdvisorError, AdvisoryNote, AdvisoryRequest};

/// Advisor returning the same note for every request.
///
/// Used when no API key is configured, as the fallback of
/// [`BestEffortAdvisor`](crate::BestEffortAdvisor), and in tests.
#[derive(Clone, Debug)]
pub struct StaticAdvisor {
    note: AdvisoryNote,
}

impl StaticAdvisor {
    pub fn new(note: AdvisoryNote) -> Self {
        Self { note }
    }

    pub fn missing_credentials() -> Self {
        Self::new(AdvisoryNote::missing_credentials())
    }

    pub fn service_fallback() -> Self {
        Self::new(AdvisoryNote::service_fallback())
    }
}

#[async_trait]
impl Advisor for StaticAdvisor {
    async fn advise(&self, _request: &AdvisoryRequest) -> Result<AdvisoryNote, AdvisorError> {
        Ok(self.note.clone())
    }

    fn name(&self) -> &str {
        "StaticAdvisor"
    }
}
