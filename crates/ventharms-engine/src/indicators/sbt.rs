//! Spontaneous breathing trial indicators
//!
//! Two related questions: was a trial given, and is a trial currently
//! contraindicated by the safety screen.

use chrono::{DateTime, Utc};
use ventharms_model::codes::{concept, order};
use ventharms_model::FactSnapshot;

use crate::config::EngineConfig;
use crate::error::EvalResult;
use crate::freshness::find_freshest;
use crate::indicators::{
    has_active_order, nmba_actively_infusing, therapeutic_hypothermia_active,
};
use crate::results::DocumentedStatus;
use crate::values;
use crate::window::TimeWindow;

const SBT_GIVEN: [&str; 3] = ["Yes", "SBT Given", "Completed"];
const SBT_NOT_GIVEN: [&str; 2] = ["No", "Not Given"];
const SBT_HELD: [&str; 2] = ["Contraindicated", "Held"];

/// Whether a spontaneous breathing trial was given in the look-back
/// window. Falls back to contraindicating orders when no trial was
/// charted; defaults to `NotDocumented`.
pub fn sbt_given(
    snapshot: &FactSnapshot,
    now: DateTime<Utc>,
    config: &EngineConfig,
) -> DocumentedStatus {
    let window = TimeWindow::lookback_hours(now, config.sbt_lookback_hours);

    if let Some(fact) = find_freshest(&snapshot.observations, concept::SBT, Some(&window)) {
        if let Some(value) = values::text(fact) {
            if SBT_GIVEN.contains(&value) {
                return DocumentedStatus::Yes;
            }
            if SBT_NOT_GIVEN.contains(&value) {
                return DocumentedStatus::No;
            }
            if SBT_HELD.contains(&value) {
                return DocumentedStatus::Contraindicated;
            }
            log::warn!("Unrecognized breathing trial value: {value:?}");
        }
    }

    if has_active_order(snapshot, &order::SBT_CONTRAINDICATIONS, now, config) {
        return DocumentedStatus::Contraindicated;
    }
    DocumentedStatus::NotDocumented
}

/// Safety screen for a spontaneous breathing trial, in priority order:
/// active neuromuscular blockade, oxygen requirement, PEEP requirement,
/// active cooling. A fully documented, passing screen is `No`; an
/// undocumented screen is `NotDocumented`. An FiO2 or PEEP reading that
/// cannot be read as a number is a `MalformedFact` error, never a
/// passing screen.
pub fn sbt_contraindicated(
    snapshot: &FactSnapshot,
    now: DateTime<Utc>,
    config: &EngineConfig,
) -> EvalResult<DocumentedStatus> {
    let window = TimeWindow::lookback_hours(now, config.vent_observation_lookback_hours);

    if nmba_actively_infusing(snapshot, now, config) {
        return Ok(DocumentedStatus::Yes);
    }

    let fio2 = find_freshest(&snapshot.observations, concept::FIO2, Some(&window));
    if let Some(fact) = fio2 {
        if values::quantity(fact)? > config.sbt_fio2_max {
            return Ok(DocumentedStatus::Yes);
        }
    }

    let peep = find_freshest(&snapshot.observations, concept::PEEP, Some(&window));
    if let Some(fact) = peep {
        if values::quantity(fact)? > config.sbt_peep_max {
            return Ok(DocumentedStatus::Yes);
        }
    }

    if therapeutic_hypothermia_active(snapshot, now, config)? {
        return Ok(DocumentedStatus::Yes);
    }

    if fio2.is_some() || peep.is_some() {
        Ok(DocumentedStatus::No)
    } else {
        Ok(DocumentedStatus::NotDocumented)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal::Decimal;
    use ventharms_model::codes::drug;
    use ventharms_model::{AdministrationStatus, EncounterContext, Fact};

    fn ts(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, hour, minute, 0).unwrap()
    }

    fn snap() -> FactSnapshot {
        FactSnapshot::empty(EncounterContext::new("enc-1"))
    }

    fn config() -> EngineConfig {
        EngineConfig::default()
    }

    #[test]
    fn charted_trial_maps_through_value_set() {
        let cases = [
            ("SBT Given", DocumentedStatus::Yes),
            ("Not Given", DocumentedStatus::No),
            ("Held", DocumentedStatus::Contraindicated),
        ];
        for (value, expected) in cases {
            let snap = snap().with_observations(vec![
                Fact::new(concept::SBT).at(ts(9, 0)).with_text(value),
            ]);
            assert_eq!(sbt_given(&snap, ts(12, 0), &config()), expected, "{value}");
        }
    }

    #[test]
    fn weaning_hold_order_contraindicates() {
        let snap = snap().with_orders(vec![Fact::new(order::NO_WEANING).at(ts(8, 0))]);
        assert_eq!(
            sbt_given(&snap, ts(12, 0), &config()),
            DocumentedStatus::Contraindicated
        );
    }

    #[test]
    fn nothing_charted_is_not_documented() {
        assert_eq!(
            sbt_given(&snap(), ts(12, 0), &config()),
            DocumentedStatus::NotDocumented
        );
    }

    #[test]
    fn unrecognized_value_falls_through_to_default() {
        let snap = snap().with_observations(vec![
            Fact::new(concept::SBT).at(ts(9, 0)).with_text("attempted"),
        ]);
        assert_eq!(
            sbt_given(&snap, ts(12, 0), &config()),
            DocumentedStatus::NotDocumented
        );
    }

    #[test]
    fn nmba_contraindicates_trial() {
        let snap = snap().with_administrations(vec![
            Fact::new(drug::CISATRACURIUM_INFUSION)
                .at(ts(11, 0))
                .with_status(AdministrationStatus::InProgress),
        ]);
        assert_eq!(
            sbt_contraindicated(&snap, ts(12, 0), &config()).unwrap(),
            DocumentedStatus::Yes
        );
    }

    #[test]
    fn high_oxygen_or_peep_contraindicates() {
        let high_oxygen = snap().with_observations(vec![
            Fact::new(concept::FIO2)
                .at(ts(11, 0))
                .with_quantity(Decimal::new(6, 1), None),
        ]);
        assert_eq!(
            sbt_contraindicated(&high_oxygen, ts(12, 0), &config()).unwrap(),
            DocumentedStatus::Yes
        );

        let high_peep = snap().with_observations(vec![
            Fact::new(concept::PEEP)
                .at(ts(11, 0))
                .with_quantity(Decimal::new(10, 0), Some("cmH2O")),
        ]);
        assert_eq!(
            sbt_contraindicated(&high_peep, ts(12, 0), &config()).unwrap(),
            DocumentedStatus::Yes
        );
    }

    #[test]
    fn passing_screen_is_no() {
        let snap = snap().with_observations(vec![
            Fact::new(concept::FIO2)
                .at(ts(11, 0))
                .with_quantity(Decimal::new(4, 1), None),
            Fact::new(concept::PEEP)
                .at(ts(11, 0))
                .with_quantity(Decimal::new(5, 0), Some("cmH2O")),
        ]);
        assert_eq!(
            sbt_contraindicated(&snap, ts(12, 0), &config()).unwrap(),
            DocumentedStatus::No
        );
    }

    #[test]
    fn unreadable_oxygen_is_an_error_not_a_pass() {
        // A text FiO2 must surface as malformed, not count as a
        // documented, passing screen.
        let snap = snap().with_observations(vec![
            Fact::new(concept::FIO2).at(ts(11, 0)).with_text("room air"),
        ]);
        assert!(sbt_contraindicated(&snap, ts(12, 0), &config()).is_err());
    }

    #[test]
    fn undocumented_screen_is_not_documented() {
        assert_eq!(
            sbt_contraindicated(&snap(), ts(12, 0), &config()).unwrap(),
            DocumentedStatus::NotDocumented
        );
    }
}
