//! Point-in-time harms indicators for mechanically ventilated ICU patients
//!
//! This crate ties the pure evaluation engine to an injected fact store
//! and clock: one snapshot is fetched per encounter and every indicator
//! is evaluated against it.
//!
//! # Example
//!
//! ```ignore
//! use ventharms::{HarmsService, SystemClock};
//!
//! let service = HarmsService::new(store, SystemClock, Default::default());
//! let report = service.evaluate(&encounter).await?;
//! println!("{}", serde_json::to_string_pretty(&report)?);
//! ```

// Re-export the public APIs from the internal crates
pub use ventharms_engine as engine;
pub use ventharms_model as model;

// Convenience re-exports
pub use ventharms_engine::{DocumentedStatus, EngineConfig, SatCandidate, VentMode};
pub use ventharms_model::{
    Clock, EncounterContext, Fact, FactSnapshot, FactStore, FixedClock, SystemClock,
};

mod service;

pub use service::{HarmsError, HarmsReport, HarmsService};
