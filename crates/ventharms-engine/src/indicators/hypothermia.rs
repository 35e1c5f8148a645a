//! Therapeutic hypothermia evidence
//!
//! Consulted by the sedation-interruption and breathing-trial cascades,
//! and exposed as an indicator in its own right. Three evidence sources,
//! any one suffices: an active cooling-pad state, a cooling-blanket
//! order, or recent body temperatures at or below the hypothermia
//! threshold.

use chrono::{DateTime, Utc};
use ventharms_model::codes::{concept, order};
use ventharms_model::FactSnapshot;

use crate::config::EngineConfig;
use crate::error::EvalResult;
use crate::freshness::{find_freshest, list_matching};
use crate::indicators::has_active_order;
use crate::values;
use crate::window::TimeWindow;

const COOLING_ACTIVE: [&str; 3] = ["On", "Cooling", "Active"];
const COOLING_INACTIVE: [&str; 3] = ["Off", "Standby", "Removed"];

/// Whether the patient is being actively cooled. A temperature reading
/// that cannot be read as a number is a `MalformedFact` error.
pub fn therapeutic_hypothermia_active(
    snapshot: &FactSnapshot,
    now: DateTime<Utc>,
    config: &EngineConfig,
) -> EvalResult<bool> {
    let window = TimeWindow::lookback_hours(now, config.hypothermia_lookback_hours);

    if let Some(pad) = find_freshest(&snapshot.observations, concept::COOLING_PAD_STATE, Some(&window)) {
        match values::text(pad) {
            Some(state) if COOLING_ACTIVE.contains(&state) => return Ok(true),
            Some(state) if COOLING_INACTIVE.contains(&state) => {}
            Some(state) => log::warn!("Unrecognized cooling pad state: {state:?}"),
            None => {}
        }
    }

    if has_active_order(snapshot, &[order::COOLING_BLANKET], now, config) {
        return Ok(true);
    }

    // Temperature history: any reading at or below the threshold inside
    // the window counts as cooling evidence.
    for fact in list_matching(&snapshot.observations, concept::BODY_TEMPERATURE, Some(&window)) {
        if values::quantity(fact)? <= config.hypothermia_temp_celsius {
            return Ok(true);
        }
    }
    Ok(false)
}
