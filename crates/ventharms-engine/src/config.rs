//! Evaluation parameters
//!
//! Look-back horizons and clinical thresholds used by the indicator
//! evaluators. Defaults reproduce the reference constants; embedders may
//! deserialize an override from JSON.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Tunable evaluation parameters, one instance per engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Sedative administrations older than this play no part in
    /// interruption candidacy.
    pub sedative_lookback_hours: i64,
    /// Horizon for "active/recent" neuromuscular blockade.
    pub nmba_lookback_hours: i64,
    /// Horizon for ventilator observations (mode, breath type,
    /// non-invasive device mode) and for the ventilated check.
    pub vent_observation_lookback_hours: i64,
    /// Horizon for the tidal-volume observation.
    pub tidal_volume_lookback_hours: i64,
    /// Horizon for assessment observations: RASS, train-of-four, wake-up
    /// action.
    pub assessment_lookback_hours: i64,
    /// Horizon for the head-of-bed observation.
    pub hob_lookback_hours: i64,
    /// Horizon for the oral-care observation.
    pub oral_care_lookback_hours: i64,
    /// Horizon for airway and suction observations.
    pub suction_lookback_hours: i64,
    /// Horizon for stress-ulcer prophylaxis administrations.
    pub sup_lookback_hours: i64,
    /// Horizon for the spontaneous-breathing-trial observation.
    pub sbt_lookback_hours: i64,
    /// Horizon for the delirium assessment.
    pub delirium_lookback_hours: i64,
    /// Horizon for cooling-pad state and temperature history.
    pub hypothermia_lookback_hours: i64,
    /// Horizon backwards for order activity.
    pub order_lookback_hours: i64,
    /// Horizon forwards for scheduled orders.
    pub order_lookahead_hours: i64,
    /// Maximum charting gap inside one continuous ventilation episode.
    pub vent_episode_max_gap_hours: i64,
    /// Body temperature at or below this is treated as therapeutic
    /// hypothermia evidence (degrees Celsius).
    pub hypothermia_temp_celsius: Decimal,
    /// PEEP above this contraindicates a breathing trial (cmH2O).
    pub sbt_peep_max: Decimal,
    /// FiO2 above this contraindicates a breathing trial (fraction).
    pub sbt_fio2_max: Decimal,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            sedative_lookback_hours: 5,
            nmba_lookback_hours: 4,
            vent_observation_lookback_hours: 13,
            tidal_volume_lookback_hours: 13,
            assessment_lookback_hours: 13,
            hob_lookback_hours: 8,
            oral_care_lookback_hours: 6,
            suction_lookback_hours: 13,
            sup_lookback_hours: 24,
            sbt_lookback_hours: 24,
            delirium_lookback_hours: 12,
            hypothermia_lookback_hours: 24,
            order_lookback_hours: 24,
            order_lookahead_hours: 24,
            vent_episode_max_gap_hours: 13,
            hypothermia_temp_celsius: Decimal::new(35, 0),
            sbt_peep_max: Decimal::new(8, 0),
            sbt_fio2_max: Decimal::new(5, 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_merge_over_defaults() {
        let config: EngineConfig =
            serde_json::from_str(r#"{"sedative_lookback_hours": 8}"#).unwrap();
        assert_eq!(config.sedative_lookback_hours, 8);
        assert_eq!(config.nmba_lookback_hours, 4);
        assert_eq!(config.sbt_fio2_max, Decimal::new(5, 1));
    }
}
