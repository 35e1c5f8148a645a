//! Oral care documentation

use chrono::{DateTime, Utc};
use ventharms_model::codes::concept;
use ventharms_model::FactSnapshot;

use crate::config::EngineConfig;
use crate::freshness::find_freshest;
use crate::results::DocumentedStatus;
use crate::values;
use crate::window::TimeWindow;

const PERFORMED: [&str; 4] = ["Yes", "Performed", "Done", "Completed"];
const NOT_PERFORMED: [&str; 2] = ["No", "Not Performed"];
const REFUSED: [&str; 2] = ["Refused", "Contraindicated"];

/// Whether oral care was performed within the look-back window.
pub fn oral_care_performed(
    snapshot: &FactSnapshot,
    now: DateTime<Utc>,
    config: &EngineConfig,
) -> DocumentedStatus {
    let window = TimeWindow::lookback_hours(now, config.oral_care_lookback_hours);
    let Some(fact) = find_freshest(&snapshot.observations, concept::ORAL_CARE, Some(&window))
    else {
        return DocumentedStatus::NotDocumented;
    };
    match values::text(fact) {
        Some(value) if PERFORMED.contains(&value) => DocumentedStatus::Yes,
        Some(value) if NOT_PERFORMED.contains(&value) => DocumentedStatus::No,
        Some(value) if REFUSED.contains(&value) => DocumentedStatus::Contraindicated,
        Some(value) => {
            log::warn!("Unrecognized oral care value: {value:?}");
            DocumentedStatus::NotDocumented
        }
        None => DocumentedStatus::NotDocumented,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;
    use ventharms_model::{EncounterContext, Fact};

    fn ts(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, hour, minute, 0).unwrap()
    }

    fn charted(value: &str, time: DateTime<Utc>) -> FactSnapshot {
        FactSnapshot::empty(EncounterContext::new("enc-1")).with_observations(vec![
            Fact::new(concept::ORAL_CARE).at(time).with_text(value),
        ])
    }

    #[rstest]
    #[case("Performed", DocumentedStatus::Yes)]
    #[case("Not Performed", DocumentedStatus::No)]
    #[case("Refused", DocumentedStatus::Contraindicated)]
    #[case("q2h per protocol", DocumentedStatus::NotDocumented)]
    fn value_set_mapping(#[case] value: &str, #[case] expected: DocumentedStatus) {
        let snap = charted(value, ts(11, 0));
        assert_eq!(
            oral_care_performed(&snap, ts(12, 0), &EngineConfig::default()),
            expected
        );
    }

    #[test]
    fn stale_documentation_does_not_count() {
        // Six-hour window; charted seven hours ago.
        let snap = charted("Performed", ts(5, 0));
        assert_eq!(
            oral_care_performed(&snap, ts(12, 0), &EngineConfig::default()),
            DocumentedStatus::NotDocumented
        );
    }
}
