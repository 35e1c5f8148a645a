//! End-to-end indicator scenarios
//!
//! Each test builds a fact snapshot the way the surrounding application
//! would and checks the indicator contract, including the documented
//! defaults for missing facts.

use chrono::{DateTime, Duration, TimeZone, Utc};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use ventharms_engine::indicators::{
    head_of_bed_elevated, sat_candidate, tidal_volume, ventilation_hours,
};
use ventharms_engine::ventmode::infer_mode;
use ventharms_engine::{DocumentedStatus, EngineConfig, SatCandidate, VentMode};
use ventharms_model::codes::{concept, drug};
use ventharms_model::{AdministrationStatus, EncounterContext, Fact, FactSnapshot};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
}

fn snapshot() -> FactSnapshot {
    FactSnapshot::empty(EncounterContext::new("enc-1").admitted_at(now() - Duration::days(2)))
}

fn config() -> EngineConfig {
    EngineConfig::default()
}

// Scenario A: no administrations at all.
#[test]
fn no_administrations_means_off_sedation() {
    assert_eq!(
        sat_candidate(&snapshot(), now(), &config()).unwrap(),
        SatCandidate::OffSedation
    );
}

// Scenario B: a single running propofol infusion and no hold signals.
#[test]
fn running_propofol_without_hold_signals_is_a_candidate() {
    let snap = snapshot().with_administrations(vec![
        Fact::new(drug::PROPOFOL_INFUSION)
            .at(now() - Duration::hours(2))
            .with_status(AdministrationStatus::InProgress),
    ]);
    assert_eq!(
        sat_candidate(&snap, now(), &config()).unwrap(),
        SatCandidate::Yes
    );
}

// Scenario C: head of bed charted at 45 degrees ten minutes ago.
#[test]
fn recent_hob_45_is_elevated() {
    let snap = snapshot().with_observations(vec![
        Fact::new(concept::HEAD_OF_BED)
            .at(now() - Duration::minutes(10))
            .with_text("HOB 45"),
    ]);
    assert_eq!(
        head_of_bed_elevated(&snap, now(), &config()),
        DocumentedStatus::Yes
    );
}

// Scenario D: a deep train-of-four outranks every favorable signal.
#[test]
fn deep_train_of_four_means_receiving_nmba() {
    let snap = snapshot()
        .with_administrations(vec![
            Fact::new(drug::PROPOFOL_INFUSION)
                .at(now() - Duration::hours(2))
                .with_status(AdministrationStatus::InProgress),
        ])
        .with_observations(vec![
            Fact::new(concept::TRAIN_OF_FOUR)
                .at(now() - Duration::hours(1))
                .with_text("2"),
            Fact::new(concept::RASS_SCORE)
                .at(now() - Duration::minutes(30))
                .with_text("-1"),
            Fact::new(concept::WAKE_UP_ACTION)
                .at(now() - Duration::minutes(30))
                .with_text("Performed"),
        ]);
    assert_eq!(
        sat_candidate(&snap, now(), &config()).unwrap(),
        SatCandidate::ReceivingNmba
    );
}

// Scenario E: volume-control assist-control with no tidal volume charted
// in the 13-hour window.
#[test]
fn acvc_without_tidal_volume_is_the_sentinel() {
    let snap = snapshot().with_observations(vec![
        Fact::new(concept::VENT_MODE)
            .at(now() - Duration::hours(1))
            .with_text("AC"),
        Fact::new(concept::BREATH_TYPE)
            .at(now() - Duration::hours(1))
            .with_text("Volume Control"),
    ]);
    let mode = infer_mode(&snap, now(), &config());
    assert_eq!(mode, Some(VentMode::AssistControlVolumeControl));
    assert_eq!(
        tidal_volume(&snap, now(), &config(), mode).unwrap(),
        Decimal::NEGATIVE_ONE
    );
}

// Composition: duration consumes the ventilated result explicitly.
#[test]
fn ventilation_duration_composes_with_the_ventilated_result() {
    let snap = snapshot().with_observations(vec![
        Fact::new(concept::VENT_MODE)
            .at(now() - Duration::hours(9))
            .with_text("AC"),
        Fact::new(concept::VENT_MODE)
            .at(now() - Duration::hours(1))
            .with_text("AC"),
    ]);
    let ventilated = ventharms_engine::indicators::is_ventilated(&snap, now(), &config());
    assert!(ventilated);
    assert_eq!(
        ventilation_hours(&snap, now(), &config(), ventilated),
        Decimal::new(9, 0)
    );
}

// Cascade totality: the empty snapshot hits every documented default.
#[test]
fn empty_snapshot_hits_every_default() {
    let snap = snapshot();
    let cfg = config();
    assert_eq!(
        sat_candidate(&snap, now(), &cfg).unwrap(),
        SatCandidate::OffSedation
    );
    assert_eq!(
        ventharms_engine::indicators::sbt_given(&snap, now(), &cfg),
        DocumentedStatus::NotDocumented
    );
    assert_eq!(
        ventharms_engine::indicators::sbt_contraindicated(&snap, now(), &cfg).unwrap(),
        DocumentedStatus::NotDocumented
    );
    assert!(!ventharms_engine::indicators::is_ventilated(&snap, now(), &cfg));
    assert_eq!(infer_mode(&snap, now(), &cfg), None);
    assert_eq!(tidal_volume(&snap, now(), &cfg, None).unwrap(), Decimal::ZERO);
    assert_eq!(
        head_of_bed_elevated(&snap, now(), &cfg),
        DocumentedStatus::NotDocumented
    );
    assert_eq!(
        ventharms_engine::indicators::oral_care_performed(&snap, now(), &cfg),
        DocumentedStatus::NotDocumented
    );
    assert_eq!(
        ventharms_engine::indicators::subglottic_suction_in_use(&snap, now(), &cfg),
        DocumentedStatus::NotDocumented
    );
    assert_eq!(
        ventharms_engine::indicators::inline_suction_present(&snap, now(), &cfg),
        DocumentedStatus::NotDocumented
    );
    assert_eq!(
        ventharms_engine::indicators::stress_ulcer_prophylaxis(&snap, now(), &cfg),
        DocumentedStatus::No
    );
    assert_eq!(
        ventharms_engine::indicators::delirium_assessed(&snap, now(), &cfg),
        DocumentedStatus::NotDocumented
    );
    assert!(!ventharms_engine::indicators::nmba_actively_infusing(
        &snap,
        now(),
        &cfg
    ));
    assert!(
        !ventharms_engine::indicators::therapeutic_hypothermia_active(&snap, now(), &cfg).unwrap()
    );
}
