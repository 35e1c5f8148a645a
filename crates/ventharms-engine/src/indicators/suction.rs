//! Subglottic and inline suction indicators

use chrono::{DateTime, Utc};
use ventharms_model::codes::concept;
use ventharms_model::FactSnapshot;

use crate::config::EngineConfig;
use crate::freshness::find_freshest;
use crate::indicators::ventilation::INVASIVE_AIRWAYS;
use crate::results::DocumentedStatus;
use crate::values;
use crate::window::TimeWindow;

const SUBGLOTTIC_AIRWAYS: [&str; 2] = ["ETT with Subglottic Suction", "Subglottic ETT"];
const INLINE_PRESENT: [&str; 3] = ["Present", "In Use", "Yes"];
const INLINE_ABSENT: [&str; 2] = ["Absent", "No"];

/// Whether the charted airway drains subglottic secretions.
pub fn subglottic_suction_in_use(
    snapshot: &FactSnapshot,
    now: DateTime<Utc>,
    config: &EngineConfig,
) -> DocumentedStatus {
    let window = TimeWindow::lookback_hours(now, config.suction_lookback_hours);
    let Some(fact) = find_freshest(&snapshot.observations, concept::AIRWAY_TYPE, Some(&window))
    else {
        return DocumentedStatus::NotDocumented;
    };
    match values::text(fact) {
        Some(value) if SUBGLOTTIC_AIRWAYS.contains(&value) => DocumentedStatus::Yes,
        Some(value) if INVASIVE_AIRWAYS.contains(&value) => DocumentedStatus::No,
        Some(value) => {
            log::warn!("Unrecognized airway type: {value:?}");
            DocumentedStatus::NotDocumented
        }
        None => DocumentedStatus::NotDocumented,
    }
}

/// Whether an inline suction catheter is documented on the circuit.
pub fn inline_suction_present(
    snapshot: &FactSnapshot,
    now: DateTime<Utc>,
    config: &EngineConfig,
) -> DocumentedStatus {
    let window = TimeWindow::lookback_hours(now, config.suction_lookback_hours);
    let Some(fact) =
        find_freshest(&snapshot.observations, concept::INLINE_SUCTION, Some(&window))
    else {
        return DocumentedStatus::NotDocumented;
    };
    match values::text(fact) {
        Some(value) if INLINE_PRESENT.contains(&value) => DocumentedStatus::Yes,
        Some(value) if INLINE_ABSENT.contains(&value) => DocumentedStatus::No,
        Some(value) => {
            log::warn!("Unrecognized inline suction value: {value:?}");
            DocumentedStatus::NotDocumented
        }
        None => DocumentedStatus::NotDocumented,
    }
}
