//! Tidal volume resolution
//!
//! Whether a tidal volume is required, and what it is, depends on the
//! inferred ventilation mode. The -1 sentinel marks "required but not
//! charted"; modes that do not set a volume yield 0.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use ventharms_model::codes::{BreathTypeValue, concept};
use ventharms_model::FactSnapshot;

use crate::config::EngineConfig;
use crate::error::EvalResult;
use crate::freshness::find_freshest;
use crate::results::VentMode;
use crate::values;
use crate::window::TimeWindow;

fn required_volume(
    snapshot: &FactSnapshot,
    window: &TimeWindow,
) -> EvalResult<Decimal> {
    match find_freshest(&snapshot.observations, concept::TIDAL_VOLUME, Some(window)) {
        None => Ok(Decimal::NEGATIVE_ONE),
        Some(fact) => Ok(values::quantity(fact)?.abs()),
    }
}

/// Resolve the charted tidal volume for the inferred mode.
pub fn tidal_volume(
    snapshot: &FactSnapshot,
    now: DateTime<Utc>,
    config: &EngineConfig,
    mode: Option<VentMode>,
) -> EvalResult<Decimal> {
    let window = TimeWindow::lookback_hours(now, config.tidal_volume_lookback_hours);
    match mode {
        Some(
            VentMode::AssistControlVolumeControl
            | VentMode::VolumeSupport
            | VentMode::PressureRegulatedVolumeControl,
        ) => required_volume(snapshot, &window),
        Some(VentMode::Simv) => {
            // Volume is only meaningful under SIMV when the patient is
            // taking volume-controlled breaths.
            let vent_window =
                TimeWindow::lookback_hours(now, config.vent_observation_lookback_hours);
            let volume_breaths = find_freshest(
                &snapshot.observations,
                concept::BREATH_TYPE,
                Some(&vent_window),
            )
            .and_then(values::text)
            .and_then(BreathTypeValue::parse)
                == Some(BreathTypeValue::VolumeControl);
            if volume_breaths {
                required_volume(snapshot, &window)
            } else {
                Ok(Decimal::ZERO)
            }
        }
        Some(
            VentMode::PressureSupport | VentMode::Aprv | VentMode::AssistControlPressureControl,
        )
        | None => Ok(Decimal::ZERO),
        Some(other) => {
            log::warn!("Tidal volume is not set by mode {other:?}");
            Ok(Decimal::ZERO)
        }
    }
}
