//! Continuous-infusion state reconstruction
//!
//! Two independent questions are answered from administration events:
//! whether every tracked infusion has been stopped (the interruption
//! walk), and whether any order in a drug class is actively infusing
//! right now (a freshness check, no walk required).

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use ventharms_model::{AdministrationStatus, Fact};

use crate::window::TimeWindow;

/// Result of the interruption walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopOutcome {
    /// Whether every tracked drug was stopped at the end of the walk.
    pub all_stopped: bool,
    /// The instant at which all tracked drugs first became stopped, when
    /// they did.
    pub stopped_at: Option<DateTime<Utc>>,
}

impl StopOutcome {
    fn not_stopped() -> Self {
        Self {
            all_stopped: false,
            stopped_at: None,
        }
    }
}

/// Reconstruct per-drug stopped state from administration events for the
/// tracked `drug_codes`, restricted to `window`.
///
/// Each tracked drug starts as stopped ("no infusion seen yet"). Events
/// are consumed in ascending time order, same-instant events in input
/// order; an event marks its drug stopped unless its status is
/// in-progress. Every event participates — a stop can be undone by a
/// later restart — so the final value equals a re-scan of per-drug
/// status at the maximum timestamp. `stopped_at` is the instant the
/// final all-stopped state began.
///
/// An empty administration list yields `all_stopped == false`: no
/// infusion means there was nothing to interrupt.
pub fn all_stopped(administrations: &[Fact], drug_codes: &[&str], window: &TimeWindow) -> StopOutcome {
    let mut events: Vec<&Fact> = administrations
        .iter()
        .filter(|f| {
            drug_codes.contains(&f.code.as_str())
                && f.usable_administration()
                && f.effective_time.map(|t| window.contains(t)).unwrap_or(false)
        })
        .collect();
    if events.is_empty() {
        return StopOutcome::not_stopped();
    }
    events.sort_by_key(|f| f.effective_time);

    // One flag per tracked drug, initialized true. Insertion order is kept
    // so the walk is deterministic across identical inputs.
    let mut stopped: IndexMap<&str, bool> = drug_codes.iter().map(|c| (*c, true)).collect();
    let mut outcome = StopOutcome::not_stopped();

    for event in events {
        let (Some(time), Some(status)) = (event.effective_time, event.status) else {
            continue;
        };
        if let Some(flag) = stopped.get_mut(event.code.as_str()) {
            *flag = status != AdministrationStatus::InProgress;
        }

        let all = stopped.values().all(|s| *s);
        if all {
            if outcome.stopped_at.is_none() {
                outcome.stopped_at = Some(time);
            }
        } else {
            outcome.stopped_at = None;
        }
        outcome.all_stopped = all;
    }
    outcome
}

/// Whether any distinct order within a drug class is currently infusing:
/// the freshest administration per order is in-progress and falls inside
/// the look-back window. Orders are distinguished by correlation id,
/// falling back to the drug code when none was recorded.
pub fn is_actively_infusing(
    administrations: &[Fact],
    drug_codes: &[&str],
    now: DateTime<Utc>,
    lookback_hours: i64,
) -> bool {
    let window = TimeWindow::lookback_hours(now, lookback_hours);
    let mut freshest_per_order: IndexMap<&str, &Fact> = IndexMap::new();

    for fact in administrations {
        if !drug_codes.contains(&fact.code.as_str()) || !fact.usable_administration() {
            continue;
        }
        let order_key = fact
            .correlation_id
            .as_deref()
            .unwrap_or(fact.code.as_str());
        let replace = match freshest_per_order.get(order_key) {
            None => true,
            // >= keeps the later record on equal timestamps, matching the
            // freshness tie-break contract.
            Some(current) => fact.effective_time >= current.effective_time,
        };
        if replace {
            freshest_per_order.insert(order_key, fact);
        }
    }

    freshest_per_order.values().any(|fact| {
        fact.status == Some(AdministrationStatus::InProgress)
            && fact
                .effective_time
                .map(|t| window.contains(t))
                .unwrap_or(false)
    })
}
