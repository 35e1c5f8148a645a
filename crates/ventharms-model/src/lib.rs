//! Clinical fact model and data access traits for the VentHarms engine
//!
//! This crate defines the plain timestamped fact records the engine
//! evaluates, the vocabularies of coded values those facts carry, and the
//! two capabilities the engine consumes from its environment: a fact store
//! and a clock. Everything here is deliberately free of evaluation logic.

pub mod clock;
pub mod codes;
pub mod fact;
pub mod snapshot;
pub mod store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use fact::{AdministrationStatus, EncounterContext, Fact, FactValue};
pub use snapshot::FactSnapshot;
pub use store::{FactStore, FactStoreError, InMemoryFactStore};
