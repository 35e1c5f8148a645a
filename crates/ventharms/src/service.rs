//! Snapshot fetch and one-pass evaluation
//!
//! The service owns the only blocking operation in the system, the fact
//! fetch. A store failure fails the whole evaluation; there is no retry
//! and no partial report.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use ventharms_engine::ventmode::infer_mode;
use ventharms_engine::{indicators, DocumentedStatus, EngineConfig, EvalError, SatCandidate, VentMode};
use ventharms_model::codes::concept;
use ventharms_model::{Clock, EncounterContext, Fact, FactSnapshot, FactStore, FactStoreError};

/// Errors surfaced by a full evaluation call.
#[derive(Debug, Error)]
pub enum HarmsError {
    #[error(transparent)]
    Store(#[from] FactStoreError),

    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// One result per indicator, evaluated over a single snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HarmsReport {
    pub encounter_id: String,
    pub evaluated_at: DateTime<Utc>,
    pub sat_candidate: SatCandidate,
    pub sbt_given: DocumentedStatus,
    pub sbt_contraindicated: DocumentedStatus,
    pub ventilated: bool,
    pub ventilation_hours: Decimal,
    pub vent_mode: Option<VentMode>,
    pub tidal_volume_ml: Decimal,
    pub head_of_bed_elevated: DocumentedStatus,
    pub oral_care: DocumentedStatus,
    pub subglottic_suction: DocumentedStatus,
    pub inline_suction: DocumentedStatus,
    pub stress_ulcer_prophylaxis: DocumentedStatus,
    pub nmba_infusing: bool,
    pub therapeutic_hypothermia: bool,
    pub delirium_assessed: DocumentedStatus,
}

/// Evaluates every indicator for an encounter against one immutable
/// snapshot.
pub struct HarmsService<S, C> {
    store: S,
    clock: C,
    config: EngineConfig,
}

impl<S: FactStore, C: Clock> HarmsService<S, C> {
    pub fn new(store: S, clock: C, config: EngineConfig) -> Self {
        Self {
            store,
            clock,
            config,
        }
    }

    /// Fetch everything the engine needs for one encounter in a single
    /// pass over the store.
    pub async fn snapshot(
        &self,
        encounter: &EncounterContext,
    ) -> Result<FactSnapshot, HarmsError> {
        let mut observations: Vec<Fact> = Vec::new();
        for code in concept::ALL {
            observations.extend(
                self.store
                    .list_facts(&encounter.id, code, None, None)
                    .await?,
            );
        }
        let administrations = self.store.list_administrations(&encounter.id).await?;
        let orders = self.store.list_orders(&encounter.id).await?;

        Ok(FactSnapshot {
            encounter: encounter.clone(),
            observations,
            administrations,
            orders,
        })
    }

    /// Fetch a snapshot and evaluate every indicator against it.
    pub async fn evaluate(&self, encounter: &EncounterContext) -> Result<HarmsReport, HarmsError> {
        let snapshot = self.snapshot(encounter).await?;
        let now = self.clock.now();
        self.evaluate_snapshot(&snapshot, now)
    }

    /// Evaluate against a snapshot the caller already holds. Pure apart
    /// from warning logs; safe to run concurrently over distinct
    /// snapshots.
    pub fn evaluate_snapshot(
        &self,
        snapshot: &FactSnapshot,
        now: DateTime<Utc>,
    ) -> Result<HarmsReport, HarmsError> {
        let config = &self.config;

        let ventilated = indicators::is_ventilated(snapshot, now, config);
        let vent_mode = infer_mode(snapshot, now, config);
        log::debug!(
            "encounter {}: ventilated={ventilated} mode={vent_mode:?}",
            snapshot.encounter.id
        );

        Ok(HarmsReport {
            encounter_id: snapshot.encounter.id.clone(),
            evaluated_at: now,
            sat_candidate: indicators::sat_candidate(snapshot, now, config)?,
            sbt_given: indicators::sbt_given(snapshot, now, config),
            sbt_contraindicated: indicators::sbt_contraindicated(snapshot, now, config)?,
            ventilated,
            ventilation_hours: indicators::ventilation_hours(snapshot, now, config, ventilated),
            vent_mode,
            tidal_volume_ml: indicators::tidal_volume(snapshot, now, config, vent_mode)?,
            head_of_bed_elevated: indicators::head_of_bed_elevated(snapshot, now, config),
            oral_care: indicators::oral_care_performed(snapshot, now, config),
            subglottic_suction: indicators::subglottic_suction_in_use(snapshot, now, config),
            inline_suction: indicators::inline_suction_present(snapshot, now, config),
            stress_ulcer_prophylaxis: indicators::stress_ulcer_prophylaxis(snapshot, now, config),
            nmba_infusing: indicators::nmba_actively_infusing(snapshot, now, config),
            therapeutic_hypothermia: indicators::therapeutic_hypothermia_active(
                snapshot, now, config,
            )?,
            delirium_assessed: indicators::delirium_assessed(snapshot, now, config),
        })
    }
}
