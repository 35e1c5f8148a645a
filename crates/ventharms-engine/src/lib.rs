//! Temporal clinical criteria engine for ventilator-harm indicators
//!
//! The engine resolves "freshest" values inside dynamic look-back windows,
//! reconstructs continuous-infusion state from administration events, and
//! evaluates priority-ordered classification cascades over an immutable
//! fact snapshot. Every evaluator is a pure function of `(snapshot, now,
//! config)` — identical inputs always yield identical outputs, so any
//! number of indicators may be evaluated concurrently on separate
//! snapshots without locks.

pub mod config;
pub mod error;
pub mod freshness;
pub mod indicators;
pub mod infusion;
pub mod results;
pub mod values;
pub mod ventmode;
pub mod window;

pub use config::EngineConfig;
pub use error::{EvalError, EvalResult};
pub use results::{DocumentedStatus, SatCandidate, VentMode};
pub use window::TimeWindow;
