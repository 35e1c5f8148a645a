//! Stress-ulcer prophylaxis
//!
//! Evidence order: a prophylactic agent actually given in the look-back
//! window, then an active protocol order, then an explicit hold order.
//! The default is `No` — absence of prophylaxis evidence is a finding,
//! not missing documentation.

use chrono::{DateTime, Utc};
use ventharms_model::codes::{drug, order};
use ventharms_model::{AdministrationStatus, FactSnapshot};

use crate::config::EngineConfig;
use crate::indicators::has_active_order;
use crate::results::DocumentedStatus;
use crate::window::TimeWindow;

/// Whether stress-ulcer prophylaxis is being provided.
pub fn stress_ulcer_prophylaxis(
    snapshot: &FactSnapshot,
    now: DateTime<Utc>,
    config: &EngineConfig,
) -> DocumentedStatus {
    let window = TimeWindow::lookback_hours(now, config.sup_lookback_hours);

    let agent_given = snapshot.administrations.iter().any(|fact| {
        drug::SUP_AGENTS.contains(&fact.code.as_str())
            && fact.usable_administration()
            && !fact.reason_not_given
            && matches!(
                fact.status,
                Some(AdministrationStatus::Completed | AdministrationStatus::InProgress)
            )
            && fact
                .effective_time
                .map(|t| window.contains(t))
                .unwrap_or(false)
    });
    if agent_given {
        return DocumentedStatus::Yes;
    }

    if has_active_order(snapshot, &[order::SUP_PROTOCOL], now, config) {
        return DocumentedStatus::Yes;
    }
    if has_active_order(snapshot, &[order::HOLD_SUP], now, config) {
        return DocumentedStatus::Contraindicated;
    }
    DocumentedStatus::No
}
