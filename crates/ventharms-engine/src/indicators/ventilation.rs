//! Invasive ventilation status and duration

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use ventharms_model::codes::concept;
use ventharms_model::{Fact, FactSnapshot};

use crate::config::EngineConfig;
use crate::freshness::{freshest_of, list_matching};
use crate::values;
use crate::window::TimeWindow;

/// Charted airway values that imply an invasive airway.
pub(crate) const INVASIVE_AIRWAYS: [&str; 5] = [
    "ETT",
    "Oral ETT",
    "Nasal ETT",
    "ETT with Subglottic Suction",
    "Tracheostomy",
];

fn invasive_airway(fact: &Fact) -> bool {
    values::text(fact)
        .map(|v| INVASIVE_AIRWAYS.contains(&v))
        .unwrap_or(false)
}

/// Whether the patient is currently invasively ventilated: any vent-mode
/// or breath-type observation inside the ventilator look-back window, or
/// a fresh invasive airway.
pub fn is_ventilated(snapshot: &FactSnapshot, now: DateTime<Utc>, config: &EngineConfig) -> bool {
    let window = TimeWindow::lookback_hours(now, config.vent_observation_lookback_hours);
    if freshest_of(
        &snapshot.observations,
        &[concept::VENT_MODE, concept::BREATH_TYPE],
        Some(&window),
    )
    .is_some()
    {
        return true;
    }
    list_matching(&snapshot.observations, concept::AIRWAY_TYPE, Some(&window))
        .last()
        .map(|fact| invasive_airway(fact))
        .unwrap_or(false)
}

/// Hours of the current continuous ventilation episode.
///
/// Takes the ventilated result as an explicit input rather than
/// recomputing it. Not ventilated is zero hours; ventilated with no timed
/// evidence at all is the -1 sentinel ("required but missing"). Evidence
/// is walked backwards from the freshest observation; a charting gap
/// wider than the configured maximum ends the episode.
pub fn ventilation_hours(
    snapshot: &FactSnapshot,
    now: DateTime<Utc>,
    config: &EngineConfig,
    ventilated: bool,
) -> Decimal {
    if !ventilated {
        return Decimal::ZERO;
    }

    // Evidence since ICU admission, or the whole record when the admission
    // instant is unknown.
    let window = snapshot
        .encounter
        .icu_admission
        .map(|admitted| TimeWindow::between(admitted, now));

    let mut evidence: Vec<DateTime<Utc>> = Vec::new();
    for code in [concept::VENT_MODE, concept::BREATH_TYPE] {
        for fact in list_matching(&snapshot.observations, code, window.as_ref()) {
            evidence.extend(fact.effective_time);
        }
    }
    for fact in list_matching(&snapshot.observations, concept::AIRWAY_TYPE, window.as_ref()) {
        if invasive_airway(fact) {
            evidence.extend(fact.effective_time);
        }
    }
    evidence.sort();
    let Some(&latest) = evidence.last() else {
        return Decimal::NEGATIVE_ONE;
    };

    let max_gap = Duration::hours(config.vent_episode_max_gap_hours);
    let mut episode_start = latest;
    for time in evidence.iter().rev().skip(1) {
        if episode_start - *time > max_gap {
            break;
        }
        episode_start = *time;
    }

    let minutes = (now - episode_start).num_minutes();
    Decimal::new(minutes, 0) / Decimal::new(60, 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use ventharms_model::EncounterContext;

    fn ts(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, day, hour, 0, 0).unwrap()
    }

    fn snap() -> FactSnapshot {
        FactSnapshot::empty(EncounterContext::new("enc-1").admitted_at(ts(1, 0)))
    }

    fn vent_obs(time: DateTime<Utc>) -> Fact {
        Fact::new(concept::VENT_MODE).at(time).with_text("AC")
    }

    #[test]
    fn fresh_vent_observation_means_ventilated() {
        let snap = snap().with_observations(vec![vent_obs(ts(2, 10))]);
        assert!(is_ventilated(&snap, ts(2, 12), &EngineConfig::default()));
    }

    #[test]
    fn stale_observation_means_not_ventilated() {
        let snap = snap().with_observations(vec![vent_obs(ts(1, 10))]);
        assert!(!is_ventilated(&snap, ts(3, 12), &EngineConfig::default()));
    }

    #[test]
    fn invasive_airway_alone_means_ventilated() {
        let snap = snap().with_observations(vec![
            Fact::new(concept::AIRWAY_TYPE)
                .at(ts(2, 10))
                .with_text("Oral ETT"),
        ]);
        assert!(is_ventilated(&snap, ts(2, 12), &EngineConfig::default()));
    }

    #[test]
    fn not_ventilated_is_zero_hours() {
        let hours = ventilation_hours(&snap(), ts(2, 12), &EngineConfig::default(), false);
        assert_eq!(hours, Decimal::ZERO);
    }

    #[test]
    fn duration_spans_contiguous_evidence() {
        let snap = snap().with_observations(vec![
            vent_obs(ts(2, 0)),
            vent_obs(ts(2, 6)),
            vent_obs(ts(2, 11)),
        ]);
        let hours = ventilation_hours(&snap, ts(2, 12), &EngineConfig::default(), true);
        assert_eq!(hours, Decimal::new(12, 0));
    }

    #[test]
    fn wide_gap_starts_a_new_episode() {
        let snap = snap().with_observations(vec![
            vent_obs(ts(1, 2)),
            // Extubated for a day, then reintubated.
            vent_obs(ts(2, 8)),
            vent_obs(ts(2, 11)),
        ]);
        let hours = ventilation_hours(&snap, ts(2, 12), &EngineConfig::default(), true);
        assert_eq!(hours, Decimal::new(4, 0));
    }

    #[test]
    fn ventilated_without_evidence_is_sentinel() {
        let hours = ventilation_hours(&snap(), ts(2, 12), &EngineConfig::default(), true);
        assert_eq!(hours, Decimal::NEGATIVE_ONE);
    }

    #[test]
    fn evidence_before_admission_is_excluded() {
        let snap = FactSnapshot::empty(EncounterContext::new("enc-1").admitted_at(ts(2, 6)))
            .with_observations(vec![vent_obs(ts(2, 2)), vent_obs(ts(2, 8))]);
        let hours = ventilation_hours(&snap, ts(2, 12), &EngineConfig::default(), true);
        assert_eq!(hours, Decimal::new(4, 0));
    }
}
