//! Delirium assessment documentation

use chrono::{DateTime, Utc};
use ventharms_model::codes::concept;
use ventharms_model::FactSnapshot;

use crate::config::EngineConfig;
use crate::freshness::find_freshest;
use crate::results::DocumentedStatus;
use crate::values;
use crate::window::TimeWindow;

const ASSESSED: [&str; 2] = ["Positive", "Negative"];
const NOT_ASSESSABLE: [&str; 2] = ["Unable to Assess", "UTA"];

/// Whether a delirium assessment was documented within the look-back
/// window.
pub fn delirium_assessed(
    snapshot: &FactSnapshot,
    now: DateTime<Utc>,
    config: &EngineConfig,
) -> DocumentedStatus {
    let window = TimeWindow::lookback_hours(now, config.delirium_lookback_hours);
    let Some(fact) = find_freshest(&snapshot.observations, concept::CAM_ICU, Some(&window))
    else {
        return DocumentedStatus::NotDocumented;
    };
    match values::text(fact) {
        Some(value) if ASSESSED.contains(&value) => DocumentedStatus::Yes,
        Some(value) if NOT_ASSESSABLE.contains(&value) => DocumentedStatus::No,
        Some(value) => {
            log::warn!("Unrecognized delirium assessment value: {value:?}");
            DocumentedStatus::NotDocumented
        }
        None => DocumentedStatus::NotDocumented,
    }
}
