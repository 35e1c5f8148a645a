//! Head-of-bed elevation
//!
//! The freshest head-of-bed observation decides, by embedded angle or
//! labelled value; an elevation-contraindicating order is the fallback
//! when nothing was charted.

use chrono::{DateTime, Utc};
use ventharms_model::codes::{concept, order};
use ventharms_model::FactSnapshot;

use crate::config::EngineConfig;
use crate::freshness::find_freshest;
use crate::indicators::has_active_order;
use crate::results::DocumentedStatus;
use crate::values;
use crate::window::TimeWindow;

const HOB_FLAT_VALUES: [&str; 2] = ["HOB Flat", "Flat"];
const ELEVATION_THRESHOLD_DEGREES: i32 = 30;

/// Whether the head of bed is elevated to 30 degrees or more.
pub fn head_of_bed_elevated(
    snapshot: &FactSnapshot,
    now: DateTime<Utc>,
    config: &EngineConfig,
) -> DocumentedStatus {
    let window = TimeWindow::lookback_hours(now, config.hob_lookback_hours);

    if let Some(fact) = find_freshest(&snapshot.observations, concept::HEAD_OF_BED, Some(&window))
    {
        if let Some(text) = values::text(fact) {
            if HOB_FLAT_VALUES.contains(&text) {
                return DocumentedStatus::No;
            }
        }
        match values::embedded_angle(fact) {
            Some(angle) if angle >= ELEVATION_THRESHOLD_DEGREES => {
                return DocumentedStatus::Yes;
            }
            Some(_) => return DocumentedStatus::No,
            None => {
                if let Some(text) = values::text(fact) {
                    log::warn!("Unrecognized head-of-bed value: {text:?}");
                }
            }
        }
    }

    if has_active_order(snapshot, &order::HOB_CONTRAINDICATIONS, now, config) {
        return DocumentedStatus::Contraindicated;
    }
    DocumentedStatus::NotDocumented
}
