//! Background dispatch of advisory requests.
//!
//! The numeric result is displayed as soon as it is computed; advice is
//! fetched on a separate task and shows up later. Each calculation triggers
//! one request. A later calculation supersedes earlier ones: their output is
//! discarded when it arrives, the requests themselves are not cancelled.

use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use tokio::task::JoinHandle;

use crate::{Advisor, AdvisoryNote, AdvisoryRequest};

#[derive(Clone)]
pub struct AdvisoryDesk {
    advisor: Arc<dyn Advisor>,
    latest: Arc<AtomicU64>,
}

/// Advice being fetched for one calculation.
pub struct PendingAdvice {
    generation: u64,
    latest: Arc<AtomicU64>,
    handle: JoinHandle<AdvisoryNote>,
}

impl AdvisoryDesk {
    pub fn new(advisor: Arc<dyn Advisor>) -> Self {
        Self {
            advisor,
            latest: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Start fetching advice for `request` and return immediately.
    ///
    /// Must be called from within a tokio runtime.
    pub fn request(&self, request: AdvisoryRequest) -> PendingAdvice {
        let generation = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        let advisor = Arc::clone(&self.advisor);

        let handle = tokio::spawn(async move {
            match advisor.advise(&request).await {
                Ok(note) => note,
                Err(err) => {
                    tracing::warn!(
                        "Advisor '{}' failed for calculation #{generation}: {err}",
                        advisor.name()
                    );
                    AdvisoryNote::service_fallback()
                }
            }
        });

        PendingAdvice {
            generation,
            latest: Arc::clone(&self.latest),
            handle,
        }
    }
}

impl PendingAdvice {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// `true` once a newer request was made on the same desk.
    pub fn is_superseded(&self) -> bool {
        self.latest.load(Ordering::SeqCst) != self.generation
    }

    /// Wait for the note.
    ///
    /// Returns `None` if a newer calculation superseded this one by the time
    /// the note arrived.
    pub async fn wait(self) -> Option<AdvisoryNote> {
        let note = match self.handle.await {
            Ok(note) => note,
            Err(err) => {
                tracing::warn!("advisory task #{} failed: {err}", self.generation);
                AdvisoryNote::service_fallback()
            }
        };

        if self.latest.load(Ordering::SeqCst) != self.generation {
            tracing::debug!("discarding superseded advice #{}", self.generation);
            return None;
        }
        Some(note)
    }
}
