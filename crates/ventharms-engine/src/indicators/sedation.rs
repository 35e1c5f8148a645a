//! Sedation-interruption candidacy
//!
//! The widest cascade in the engine. Steps are evaluated strictly top to
//! bottom; the first matching predicate names the hold reason, and a
//! patient with sedation running and no documented contraindication is a
//! candidate.

use chrono::{DateTime, Utc};
use ventharms_model::codes::{WakeUpAction, concept, drug};
use ventharms_model::{AdministrationStatus, Fact, FactSnapshot};

use crate::config::EngineConfig;
use crate::error::EvalResult;
use crate::freshness::find_freshest;
use crate::indicators::therapeutic_hypothermia_active;
use crate::infusion::{all_stopped, is_actively_infusing};
use crate::results::SatCandidate;
use crate::values;
use crate::window::TimeWindow;

/// Train-of-four counts that indicate active neuromuscular blockade.
const TOF_BLOCKED_RANGE: std::ops::RangeInclusive<i32> = 0..=3;
/// RASS scores that preclude an interruption.
const RASS_HOLD_RANGE: std::ops::RangeInclusive<i32> = 2..=4;

/// Whether any neuromuscular blocker is active or recent: a bolus dose
/// given inside the NMBA window, or a blocker infusion currently running.
pub fn nmba_actively_infusing(
    snapshot: &FactSnapshot,
    now: DateTime<Utc>,
    config: &EngineConfig,
) -> bool {
    let window = TimeWindow::lookback_hours(now, config.nmba_lookback_hours);
    let bolus_given = snapshot.administrations.iter().any(|fact| {
        drug::NMBA_BOLUSES.contains(&fact.code.as_str())
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
    bolus_given
        || is_actively_infusing(
            &snapshot.administrations,
            &drug::NMBA_INFUSIONS,
            now,
            config.nmba_lookback_hours,
        )
}

fn train_of_four_blocked(fact: &Fact) -> bool {
    match values::score(fact) {
        Some(count) if TOF_BLOCKED_RANGE.contains(&count) => true,
        Some(_) => false,
        None => {
            if let Some(text) = values::text(fact) {
                log::warn!("Unrecognized train-of-four value: {text:?}");
            }
            false
        }
    }
}

fn fresh_wake_up_action(
    snapshot: &FactSnapshot,
    window: &TimeWindow,
) -> Option<WakeUpAction> {
    let fact = find_freshest(&snapshot.observations, concept::WAKE_UP_ACTION, Some(window))?;
    let text = values::text(fact)?;
    let parsed = WakeUpAction::parse(text);
    if parsed.is_none() {
        log::warn!("Unrecognized wake-up action value: {text:?}");
    }
    parsed
}

fn rass_two_or_greater(snapshot: &FactSnapshot, window: &TimeWindow) -> bool {
    let Some(fact) = find_freshest(&snapshot.observations, concept::RASS_SCORE, Some(window))
    else {
        return false;
    };
    match values::score(fact) {
        Some(score) => RASS_HOLD_RANGE.contains(&score),
        None => {
            if let Some(text) = values::text(fact) {
                log::warn!("Unrecognized RASS value: {text:?}");
            }
            false
        }
    }
}

/// Evaluate sedation-interruption candidacy.
///
/// Cascade order is clinical priority and must be preserved:
/// off-sedation, neuromuscular blockade (drug, then train-of-four, then
/// charted reason), status epilepticus, respiratory instability,
/// therapeutic hypothermia, agitation, withdrawal-seizure risk,
/// hemodynamic instability, elevated ICP, other; default is candidacy.
pub fn sat_candidate(
    snapshot: &FactSnapshot,
    now: DateTime<Utc>,
    config: &EngineConfig,
) -> EvalResult<SatCandidate> {
    let sedative_window = TimeWindow::lookback_hours(now, config.sedative_lookback_hours);
    let assessment_window = TimeWindow::lookback_hours(now, config.assessment_lookback_hours);

    // 1. Nothing infusing: either no sedative was charted in the window at
    //    all, or every tracked infusion has been stopped.
    let any_sedative = snapshot.administrations.iter().any(|fact| {
        drug::SEDATIVE_INFUSIONS.contains(&fact.code.as_str())
            && fact.usable_administration()
            && fact
                .effective_time
                .map(|t| sedative_window.contains(t))
                .unwrap_or(false)
    });
    if !any_sedative {
        return Ok(SatCandidate::OffSedation);
    }
    if all_stopped(
        &snapshot.administrations,
        &drug::SEDATIVE_INFUSIONS,
        &sedative_window,
    )
    .all_stopped
    {
        return Ok(SatCandidate::OffSedation);
    }

    // 2. Any blocker active or recent.
    if nmba_actively_infusing(snapshot, now, config) {
        return Ok(SatCandidate::ReceivingNmba);
    }

    // 3. Deep train-of-four.
    if let Some(tof) = find_freshest(
        &snapshot.observations,
        concept::TRAIN_OF_FOUR,
        Some(&assessment_window),
    ) {
        if train_of_four_blocked(tof) {
            return Ok(SatCandidate::ReceivingNmba);
        }
    }

    // 4. Charted wake-up action; the same value is consulted again further
    //    down for the lower-priority reasons.
    let wake_up = fresh_wake_up_action(snapshot, &assessment_window);
    match wake_up {
        Some(WakeUpAction::Nmba) => return Ok(SatCandidate::ReceivingNmba),
        Some(WakeUpAction::StatusEpilepticus) => return Ok(SatCandidate::StatusEpilepticus),
        Some(WakeUpAction::RespiratoryInstability) => {
            return Ok(SatCandidate::RespiratoryInstability);
        }
        _ => {}
    }

    // 5. Active cooling.
    if therapeutic_hypothermia_active(snapshot, now, config)? {
        return Ok(SatCandidate::TherapeuticHypothermia);
    }

    // 6. Agitation by score or charted risk.
    if rass_two_or_greater(snapshot, &assessment_window)
        || wake_up == Some(WakeUpAction::RassRisk)
    {
        return Ok(SatCandidate::Rass2OrGreater);
    }

    // 7. Remaining charted hold reasons.
    Ok(match wake_up {
        Some(WakeUpAction::WithdrawalSeizureRisk) => SatCandidate::WithdrawalSeizureRisk,
        Some(WakeUpAction::HemodynamicInstability) => SatCandidate::HemodynamicInstability,
        Some(WakeUpAction::IcpRisk) => SatCandidate::ElevatedIntracranialPressure,
        Some(WakeUpAction::Other) => SatCandidate::OtherContraindication,
        // 8. Sedation running, no documented contraindication.
        _ => SatCandidate::Yes,
    })
}
