//! Indicator result types
//!
//! Every evaluator returns exactly one value from a small closed set; the
//! defaults for missing documentation are part of each indicator's
//! contract.

use serde::{Deserialize, Serialize};

/// The shared four-way outcome of documentation-driven indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentedStatus {
    Yes,
    No,
    NotDocumented,
    Contraindicated,
}

/// Sedation-interruption candidacy: either the patient is a candidate or
/// exactly one documented hold reason applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SatCandidate {
    /// Candidate for a daily sedation interruption.
    Yes,
    /// No sedative infusion active in the look-back window.
    OffSedation,
    /// Receiving a neuromuscular blocker (bolus, infusion, or a deep
    /// train-of-four).
    ReceivingNmba,
    StatusEpilepticus,
    RespiratoryInstability,
    TherapeuticHypothermia,
    /// RASS +2 or greater, by score or charted risk.
    Rass2OrGreater,
    WithdrawalSeizureRisk,
    HemodynamicInstability,
    ElevatedIntracranialPressure,
    OtherContraindication,
}

/// Inferred ventilation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VentMode {
    AssistControlVolumeControl,
    AssistControlPressureControl,
    Simv,
    PressureSupport,
    Aprv,
    HighFrequencyOscillation,
    PressureControl,
    PressureRegulatedVolumeControl,
    VolumeSupport,
    Other,
}
