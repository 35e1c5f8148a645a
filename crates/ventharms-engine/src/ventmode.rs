//! Ventilation mode inference
//!
//! Three signal families are tracked (vent mode, breath type,
//! non-invasive device mode), each reduced to its freshest observation
//! within the ventilator look-back window. Invasive signals outrank the
//! non-invasive family whenever either of them is fresher.

use chrono::{DateTime, Utc};
use ventharms_model::codes::{BreathTypeValue, NoninvasiveModeValue, VentModeValue, concept};
use ventharms_model::{Fact, FactSnapshot};

use crate::config::EngineConfig;
use crate::freshness::find_freshest;
use crate::results::VentMode;
use crate::values;
use crate::window::TimeWindow;

/// Combined lookup keyed by `(breath type, vent mode)`.
fn combined(breath: BreathTypeValue, vent: VentModeValue) -> Option<VentMode> {
    use BreathTypeValue as B;
    use VentModeValue as V;
    match (breath, vent) {
        (B::VolumeControl, V::AssistControl) => Some(VentMode::AssistControlVolumeControl),
        (B::PressureControl, V::AssistControl) => Some(VentMode::AssistControlPressureControl),
        (B::VolumeControl | B::PressureControl, V::Simv) => Some(VentMode::Simv),
        (B::Spontaneous, V::PressureSupport | V::Cpap | V::TubeCompensation) => {
            Some(VentMode::PressureSupport)
        }
        (B::VolumeControl, V::Prvc) => Some(VentMode::PressureRegulatedVolumeControl),
        (B::Spontaneous, V::VolumeSupport) => Some(VentMode::VolumeSupport),
        _ => None,
    }
}

/// Breath-type-only lookup, consulted when the breath type is fresher
/// than any matching vent mode.
fn breath_only(breath: BreathTypeValue) -> Option<VentMode> {
    match breath {
        BreathTypeValue::AprvBiLevel => Some(VentMode::Aprv),
        BreathTypeValue::Hfov => Some(VentMode::HighFrequencyOscillation),
        _ => None,
    }
}

/// Non-invasive-only lookup.
fn noninvasive_only(mode: NoninvasiveModeValue) -> Option<VentMode> {
    use NoninvasiveModeValue as N;
    match mode {
        N::Nppv | N::Cpap => Some(VentMode::PressureSupport),
        N::Pcv => Some(VentMode::PressureControl),
        N::Avaps => Some(VentMode::PressureRegulatedVolumeControl),
        N::SpontaneousTimed | N::BiPhasic | N::Other => Some(VentMode::Other),
    }
}

fn parsed_text<'a>(fact: Option<&'a Fact>, code: &str) -> Option<&'a str> {
    let fact = fact?;
    match values::text(fact) {
        Some(text) => Some(text),
        None => {
            log::warn!("{code} observation carries no text value");
            None
        }
    }
}

fn time(fact: Option<&Fact>) -> Option<DateTime<Utc>> {
    fact.and_then(|f| f.effective_time)
}

/// Infer the current ventilation mode from the freshest observations of
/// the three signal families. `None` means indeterminate.
pub fn infer_mode(
    snapshot: &FactSnapshot,
    now: DateTime<Utc>,
    config: &EngineConfig,
) -> Option<VentMode> {
    let window = TimeWindow::lookback_hours(now, config.vent_observation_lookback_hours);
    let facts = &snapshot.observations;

    let vent_fact = find_freshest(facts, concept::VENT_MODE, Some(&window));
    let breath_fact = find_freshest(facts, concept::BREATH_TYPE, Some(&window));
    let niv_fact = find_freshest(facts, concept::NONINVASIVE_MODE, Some(&window));

    let vent_time = time(vent_fact);
    let breath_time = time(breath_fact);
    let niv_time = time(niv_fact);
    let invasive_time = vent_time.max(breath_time);

    if invasive_time.is_none() && niv_time.is_none() {
        return None;
    }

    // Invasive signals win whenever either of them is at least as fresh as
    // the non-invasive device mode.
    if invasive_time >= niv_time {
        let vent = parsed_text(vent_fact, concept::VENT_MODE).and_then(|t| {
            let parsed = VentModeValue::parse(t);
            if parsed.is_none() {
                log::warn!("Unrecognized vent mode value: {t:?}");
            }
            parsed
        });
        let breath = parsed_text(breath_fact, concept::BREATH_TYPE).and_then(|t| {
            let parsed = BreathTypeValue::parse(t);
            if parsed.is_none() {
                log::warn!("Unrecognized breath type value: {t:?}");
            }
            parsed
        });

        if let (Some(b), Some(v)) = (breath, vent) {
            if let Some(mode) = combined(b, v) {
                return Some(mode);
            }
        }
        // No combined match: a breath type fresher than the vent mode may
        // still identify the mode on its own.
        if let Some(b) = breath {
            if breath_time >= vent_time {
                if let Some(mode) = breath_only(b) {
                    return Some(mode);
                }
            }
        }
        return None;
    }

    let niv = parsed_text(niv_fact, concept::NONINVASIVE_MODE).and_then(|t| {
        let parsed = NoninvasiveModeValue::parse(t);
        if parsed.is_none() {
            log::warn!("Unrecognized non-invasive device mode value: {t:?}");
        }
        parsed
    });
    niv.and_then(noninvasive_only)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use ventharms_model::EncounterContext;

    fn ts(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, hour, minute, 0).unwrap()
    }

    fn snapshot(observations: Vec<Fact>) -> FactSnapshot {
        FactSnapshot::empty(EncounterContext::new("enc-1")).with_observations(observations)
    }

    fn obs(code: &str, time: DateTime<Utc>, value: &str) -> Fact {
        Fact::new(code).at(time).with_text(value)
    }

    #[test]
    fn volume_control_assist_control_is_acvc() {
        let snap = snapshot(vec![
            obs(concept::VENT_MODE, ts(10, 0), "AC"),
            obs(concept::BREATH_TYPE, ts(10, 0), "Volume Control"),
        ]);
        assert_eq!(
            infer_mode(&snap, ts(12, 0), &EngineConfig::default()),
            Some(VentMode::AssistControlVolumeControl)
        );
    }

    #[test]
    fn either_breath_type_under_simv_is_simv() {
        for breath in ["Volume Control", "Pressure Control"] {
            let snap = snapshot(vec![
                obs(concept::VENT_MODE, ts(10, 0), "SIMV"),
                obs(concept::BREATH_TYPE, ts(10, 0), breath),
            ]);
            assert_eq!(
                infer_mode(&snap, ts(12, 0), &EngineConfig::default()),
                Some(VentMode::Simv)
            );
        }
    }

    #[test]
    fn spontaneous_support_modes_are_pressure_support() {
        for vent in ["PS", "CPAP", "TC Support"] {
            let snap = snapshot(vec![
                obs(concept::VENT_MODE, ts(10, 0), vent),
                obs(concept::BREATH_TYPE, ts(10, 0), "Spontaneous"),
            ]);
            assert_eq!(
                infer_mode(&snap, ts(12, 0), &EngineConfig::default()),
                Some(VentMode::PressureSupport)
            );
        }
    }

    #[test]
    fn fresh_breath_type_alone_resolves_aprv() {
        let snap = snapshot(vec![
            obs(concept::VENT_MODE, ts(8, 0), "AC"),
            obs(concept::BREATH_TYPE, ts(11, 0), "APRV"),
        ]);
        assert_eq!(
            infer_mode(&snap, ts(12, 0), &EngineConfig::default()),
            Some(VentMode::Aprv)
        );
    }

    #[test]
    fn freshest_noninvasive_mode_wins() {
        let snap = snapshot(vec![
            obs(concept::VENT_MODE, ts(8, 0), "AC"),
            obs(concept::BREATH_TYPE, ts(8, 0), "Volume Control"),
            obs(concept::NONINVASIVE_MODE, ts(11, 0), "AVAPS"),
        ]);
        assert_eq!(
            infer_mode(&snap, ts(12, 0), &EngineConfig::default()),
            Some(VentMode::PressureRegulatedVolumeControl)
        );
    }

    #[test]
    fn unknown_values_yield_indeterminate() {
        let snap = snapshot(vec![
            obs(concept::VENT_MODE, ts(10, 0), "experimental mode"),
            obs(concept::BREATH_TYPE, ts(10, 0), "unusual"),
        ]);
        assert_eq!(infer_mode(&snap, ts(12, 0), &EngineConfig::default()), None);
    }

    #[test]
    fn stale_observations_are_ignored() {
        let snap = snapshot(vec![obs(concept::VENT_MODE, ts(10, 0), "AC")]);
        // 13h window ending two days later excludes the observation.
        assert_eq!(
            infer_mode(&snap, ts(12, 0) + chrono::Duration::days(2), &EngineConfig::default()),
            None
        );
    }

    #[test]
    fn no_observations_is_indeterminate() {
        let snap = snapshot(vec![]);
        assert_eq!(infer_mode(&snap, ts(12, 0), &EngineConfig::default()), None);
    }
}
