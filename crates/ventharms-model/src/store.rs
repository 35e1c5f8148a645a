//! Fact store capability
//!
//! The engine consumes facts through this narrow trait; the wire protocol,
//! persistence, and resource model behind it are external concerns. A
//! failed fetch propagates to the caller unchanged: the engine never
//! retries and never produces a partial result.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::fact::Fact;

/// Fact store error.
#[derive(Debug, Clone, Error)]
pub enum FactStoreError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Unknown encounter: {0}")]
    UnknownEncounter(String),

    #[error("Internal store error: {0}")]
    Internal(String),
}

/// Source of clinical facts for an encounter.
///
/// Window bounds follow the half-open convention: a fact qualifies when
/// `start <= effective_time < end`. Facts without an effective time are
/// returned by `list_facts` (callers may still need them) but never by
/// `find_freshest_fact`.
#[async_trait]
pub trait FactStore: Send + Sync {
    /// All facts for a code, optionally bounded in time. No order is
    /// guaranteed.
    async fn list_facts(
        &self,
        encounter_id: &str,
        code: &str,
        window_start: Option<DateTime<Utc>>,
        window_end: Option<DateTime<Utc>>,
    ) -> Result<Vec<Fact>, FactStoreError>;

    /// The fact with the maximum effective time for a code, if any
    /// qualifies.
    async fn find_freshest_fact(
        &self,
        encounter_id: &str,
        code: &str,
        window_start: Option<DateTime<Utc>>,
        window_end: Option<DateTime<Utc>>,
    ) -> Result<Option<Fact>, FactStoreError> {
        let facts = self
            .list_facts(encounter_id, code, window_start, window_end)
            .await?;
        Ok(facts
            .into_iter()
            .filter(|f| f.effective_time.is_some())
            .max_by_key(|f| f.effective_time))
    }

    /// All medication administration facts for an encounter.
    async fn list_administrations(&self, encounter_id: &str)
    -> Result<Vec<Fact>, FactStoreError>;

    /// All non-medication order facts for an encounter.
    async fn list_orders(&self, encounter_id: &str) -> Result<Vec<Fact>, FactStoreError>;
}

/// In-memory store used by tests and by embedders that already hold a
/// fact snapshot.
#[derive(Debug, Default, Clone)]
pub struct InMemoryFactStore {
    pub observations: Vec<(String, Fact)>,
    pub administrations: Vec<(String, Fact)>,
    pub orders: Vec<(String, Fact)>,
}

impl InMemoryFactStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_observation(&mut self, encounter_id: &str, fact: Fact) -> &mut Self {
        self.observations.push((encounter_id.to_string(), fact));
        self
    }

    pub fn add_administration(&mut self, encounter_id: &str, fact: Fact) -> &mut Self {
        self.administrations.push((encounter_id.to_string(), fact));
        self
    }

    pub fn add_order(&mut self, encounter_id: &str, fact: Fact) -> &mut Self {
        self.orders.push((encounter_id.to_string(), fact));
        self
    }

    fn in_window(
        fact: &Fact,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> bool {
        match (start, end) {
            (None, None) => true,
            _ => match fact.effective_time {
                None => false,
                Some(t) => {
                    start.map(|s| t >= s).unwrap_or(true) && end.map(|e| t < e).unwrap_or(true)
                }
            },
        }
    }
}

#[async_trait]
impl FactStore for InMemoryFactStore {
    async fn list_facts(
        &self,
        encounter_id: &str,
        code: &str,
        window_start: Option<DateTime<Utc>>,
        window_end: Option<DateTime<Utc>>,
    ) -> Result<Vec<Fact>, FactStoreError> {
        Ok(self
            .observations
            .iter()
            .chain(self.administrations.iter())
            .chain(self.orders.iter())
            .filter(|(enc, fact)| {
                enc == encounter_id
                    && fact.matches(code)
                    && Self::in_window(fact, window_start, window_end)
            })
            .map(|(_, fact)| fact.clone())
            .collect())
    }

    async fn list_administrations(
        &self,
        encounter_id: &str,
    ) -> Result<Vec<Fact>, FactStoreError> {
        Ok(self
            .administrations
            .iter()
            .filter(|(enc, _)| enc == encounter_id)
            .map(|(_, fact)| fact.clone())
            .collect())
    }

    async fn list_orders(&self, encounter_id: &str) -> Result<Vec<Fact>, FactStoreError> {
        Ok(self
            .orders
            .iter()
            .filter(|(enc, _)| enc == encounter_id)
            .map(|(_, fact)| fact.clone())
            .collect())
    }
}
