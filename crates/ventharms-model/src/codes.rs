//! Clinical code constants and coded-value vocabularies
//!
//! Codes are grouped by fact family: observation concepts, medication
//! classes, and non-medication order codes. Coded observation values that
//! drive classification get a dedicated enum with a `parse` function
//! returning `None` for unrecognized input; the engine decides what an
//! unrecognized value means (warn and fall through, never an error).

/// Observation and assessment concept codes.
pub mod concept {
    pub const RASS_SCORE: &str = "RASS Score";
    pub const TRAIN_OF_FOUR: &str = "Train of Four";
    pub const WAKE_UP_ACTION: &str = "Daily Wake Up Action";
    pub const HEAD_OF_BED: &str = "Head of Bed";
    pub const ORAL_CARE: &str = "Oral Care";
    pub const AIRWAY_TYPE: &str = "Airway Type";
    pub const INLINE_SUCTION: &str = "Inline Suction Catheter";
    pub const VENT_MODE: &str = "Vent Mode";
    pub const BREATH_TYPE: &str = "Breath Type";
    pub const NONINVASIVE_MODE: &str = "Non-Invasive Device Mode";
    pub const TIDAL_VOLUME: &str = "Tidal Volume";
    pub const PEEP: &str = "PEEP";
    pub const FIO2: &str = "FiO2";
    pub const SBT: &str = "Spontaneous Breathing Trial";
    pub const CAM_ICU: &str = "CAM-ICU";
    pub const COOLING_PAD_STATE: &str = "Cooling Pad State";
    pub const BODY_TEMPERATURE: &str = "Body Temperature";

    /// Every observation concept the engine consults, used for one-pass
    /// snapshot fetches.
    pub const ALL: [&str; 17] = [
        RASS_SCORE,
        TRAIN_OF_FOUR,
        WAKE_UP_ACTION,
        HEAD_OF_BED,
        ORAL_CARE,
        AIRWAY_TYPE,
        INLINE_SUCTION,
        VENT_MODE,
        BREATH_TYPE,
        NONINVASIVE_MODE,
        TIDAL_VOLUME,
        PEEP,
        FIO2,
        SBT,
        CAM_ICU,
        COOLING_PAD_STATE,
        BODY_TEMPERATURE,
    ];
}

/// Medication administration codes, grouped by drug class.
pub mod drug {
    pub const PROPOFOL_INFUSION: &str = "Continuous Infusion Propofol IV";
    pub const MIDAZOLAM_INFUSION: &str = "Continuous Infusion Midazolam IV";
    pub const DEXMEDETOMIDINE_INFUSION: &str = "Continuous Infusion Dexmedetomidine IV";
    pub const LORAZEPAM_INFUSION: &str = "Continuous Infusion Lorazepam IV";

    /// The four sedative infusion classes tracked for interruption state.
    pub const SEDATIVE_INFUSIONS: [&str; 4] = [
        PROPOFOL_INFUSION,
        MIDAZOLAM_INFUSION,
        DEXMEDETOMIDINE_INFUSION,
        LORAZEPAM_INFUSION,
    ];

    pub const CISATRACURIUM_INFUSION: &str = "Continuous Infusion Cisatracurium IV";
    pub const VECURONIUM_INFUSION: &str = "Continuous Infusion Vecuronium IV";

    /// Continuously infused neuromuscular blockers.
    pub const NMBA_INFUSIONS: [&str; 2] = [CISATRACURIUM_INFUSION, VECURONIUM_INFUSION];

    pub const CISATRACURIUM_BOLUS: &str = "Cisatracurium IV Bolus";
    pub const VECURONIUM_BOLUS: &str = "Vecuronium IV Bolus";
    pub const ROCURONIUM_BOLUS: &str = "Rocuronium IV Bolus";

    /// Bolus-dosed neuromuscular blockers.
    pub const NMBA_BOLUSES: [&str; 3] = [CISATRACURIUM_BOLUS, VECURONIUM_BOLUS, ROCURONIUM_BOLUS];

    pub const PANTOPRAZOLE: &str = "Pantoprazole";
    pub const OMEPRAZOLE: &str = "Omeprazole";
    pub const FAMOTIDINE: &str = "Famotidine";
    pub const SUCRALFATE: &str = "Sucralfate";

    /// Stress-ulcer prophylaxis agents.
    pub const SUP_AGENTS: [&str; 4] = [PANTOPRAZOLE, OMEPRAZOLE, FAMOTIDINE, SUCRALFATE];
}

/// Non-medication order codes consulted as contraindication fallbacks.
pub mod order {
    pub const HOB_FLAT: &str = "HOB Flat";
    pub const PRONE: &str = "Prone";
    pub const BED_REST_HOB_LIMIT: &str = "Bed Rest with HOB 30 Degrees or Less";

    /// Orders that contraindicate head-of-bed elevation.
    pub const HOB_CONTRAINDICATIONS: [&str; 3] = [HOB_FLAT, PRONE, BED_REST_HOB_LIMIT];

    pub const COOLING_BLANKET: &str = "Cooling Blanket";
    pub const NO_WEANING: &str = "No Ventilator Weaning";
    pub const COMFORT_MEASURES: &str = "Comfort Measures Only";

    /// Orders that contraindicate a spontaneous breathing trial.
    pub const SBT_CONTRAINDICATIONS: [&str; 2] = [NO_WEANING, COMFORT_MEASURES];

    pub const HOLD_SUP: &str = "Hold Stress Ulcer Prophylaxis";
    pub const SUP_PROTOCOL: &str = "Stress Ulcer Prophylaxis Protocol";
}

/// Documented reasons a daily wake-up (sedation interruption) was held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WakeUpAction {
    /// Held because a paralytic is running.
    Nmba,
    /// Held for status epilepticus.
    StatusEpilepticus,
    /// Held for respiratory instability.
    RespiratoryInstability,
    /// Held for agitation risk (RASS +2 or greater).
    RassRisk,
    /// Held for alcohol/benzodiazepine withdrawal seizure risk.
    WithdrawalSeizureRisk,
    /// Held for hemodynamic instability.
    HemodynamicInstability,
    /// Held for elevated intracranial pressure.
    IcpRisk,
    /// Held for a reason outside the fixed list.
    Other,
    /// The interruption was actually performed.
    Performed,
}

impl WakeUpAction {
    /// Map a charted wake-up action value. Returns `None` for values
    /// outside the documented vocabulary.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "Receiving NMBA" | "Paralytic In Use" => Some(Self::Nmba),
            "Status Epilepticus" => Some(Self::StatusEpilepticus),
            "Respiratory Instability" => Some(Self::RespiratoryInstability),
            "RASS +2 or Greater" | "Agitation Risk" => Some(Self::RassRisk),
            "Withdrawal Seizure Risk" => Some(Self::WithdrawalSeizureRisk),
            "Hemodynamic Instability" => Some(Self::HemodynamicInstability),
            "Elevated ICP" | "Increased Intracranial Pressure" => Some(Self::IcpRisk),
            "Other" | "Other Contraindication" => Some(Self::Other),
            "Performed" | "Wake Up Performed" => Some(Self::Performed),
            _ => None,
        }
    }
}

/// Charted invasive ventilator mode values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VentModeValue {
    AssistControl,
    Simv,
    PressureSupport,
    Cpap,
    TubeCompensation,
    Prvc,
    VolumeSupport,
}

impl VentModeValue {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "AC" | "A/C" | "Assist Control" => Some(Self::AssistControl),
            "SIMV" => Some(Self::Simv),
            "PS" | "Pressure Support" => Some(Self::PressureSupport),
            "CPAP" => Some(Self::Cpap),
            "TC Support" | "Tube Compensation" => Some(Self::TubeCompensation),
            "PRVC" => Some(Self::Prvc),
            "VS" | "Volume Support" => Some(Self::VolumeSupport),
            _ => None,
        }
    }
}

/// Charted breath type values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreathTypeValue {
    VolumeControl,
    PressureControl,
    Spontaneous,
    AprvBiLevel,
    Hfov,
}

impl BreathTypeValue {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "Volume Control" | "VC" => Some(Self::VolumeControl),
            "Pressure Control" | "PC" => Some(Self::PressureControl),
            "Spontaneous" => Some(Self::Spontaneous),
            "APRV" | "Bi-Level" | "BiLevel" => Some(Self::AprvBiLevel),
            "HFOV" => Some(Self::Hfov),
            _ => None,
        }
    }
}

/// Charted non-invasive device mode values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoninvasiveModeValue {
    Nppv,
    Cpap,
    Pcv,
    Avaps,
    SpontaneousTimed,
    BiPhasic,
    Other,
}

impl NoninvasiveModeValue {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "NPPV" => Some(Self::Nppv),
            "CPAP" => Some(Self::Cpap),
            "PCV" => Some(Self::Pcv),
            "AVAPS" => Some(Self::Avaps),
            "S/T" => Some(Self::SpontaneousTimed),
            "Bi-Phasic" | "BiPhasic" => Some(Self::BiPhasic),
            "Other" => Some(Self::Other),
            _ => None,
        }
    }
}
