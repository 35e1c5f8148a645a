//! Indicator evaluators
//!
//! One pure function per clinical indicator. Most share a single shape:
//! an ordered list of predicates evaluated top to bottom, where the first
//! match decides the result and a named default covers the rest. The
//! ordering is load-bearing — it encodes clinical priority — and must not
//! be rearranged.

mod delirium;
mod hob;
mod hypothermia;
mod oral_care;
mod prophylaxis;
mod sbt;
mod sedation;
mod suction;
mod tidal_volume;
mod ventilation;

pub use delirium::delirium_assessed;
pub use hob::head_of_bed_elevated;
pub use hypothermia::therapeutic_hypothermia_active;
pub use oral_care::oral_care_performed;
pub use prophylaxis::stress_ulcer_prophylaxis;
pub use sbt::{sbt_contraindicated, sbt_given};
pub use sedation::{nmba_actively_infusing, sat_candidate};
pub use suction::{inline_suction_present, subglottic_suction_in_use};
pub use tidal_volume::tidal_volume;
pub use ventilation::{is_ventilated, ventilation_hours};

use chrono::{DateTime, Duration, Utc};
use ventharms_model::FactSnapshot;

use crate::config::EngineConfig;
use crate::window::TimeWindow;

/// Whether a currently-active non-medication order matches one of
/// `codes`. An order counts as active when its effective time falls in
/// the recent look-back window or, for scheduled orders, in the forward
/// window.
pub(crate) fn has_active_order(
    snapshot: &FactSnapshot,
    codes: &[&str],
    now: DateTime<Utc>,
    config: &EngineConfig,
) -> bool {
    let recent = TimeWindow::lookback_hours(now, config.order_lookback_hours);
    let scheduled = TimeWindow::lookahead(now, Duration::hours(config.order_lookahead_hours));
    snapshot.orders.iter().any(|order| {
        codes.contains(&order.code.as_str())
            && order
                .effective_time
                .map(|t| recent.contains(t) || scheduled.contains(t))
                .unwrap_or(false)
    })
}
