//! Immutable fact snapshot for one evaluation pass
//!
//! All indicators for an encounter evaluate against a single snapshot
//! fetched once, rather than re-querying the store per indicator. The
//! snapshot is plain data; the engine borrows from it and never mutates it.

use serde::{Deserialize, Serialize};

use crate::fact::{EncounterContext, Fact};

/// Everything the engine needs to evaluate one encounter at one instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactSnapshot {
    pub encounter: EncounterContext,
    /// Vital-sign and assessment observations.
    pub observations: Vec<Fact>,
    /// Medication administration records.
    pub administrations: Vec<Fact>,
    /// Non-medication clinical orders.
    pub orders: Vec<Fact>,
}

impl FactSnapshot {
    /// An empty snapshot for an encounter.
    pub fn empty(encounter: EncounterContext) -> Self {
        Self {
            encounter,
            observations: Vec::new(),
            administrations: Vec::new(),
            orders: Vec::new(),
        }
    }

    pub fn with_observations(mut self, facts: Vec<Fact>) -> Self {
        self.observations = facts;
        self
    }

    pub fn with_administrations(mut self, facts: Vec<Fact>) -> Self {
        self.administrations = facts;
        self
    }

    pub fn with_orders(mut self, facts: Vec<Fact>) -> Self {
        self.orders = facts;
        self
    }
}
