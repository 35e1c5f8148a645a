//! Timestamped clinical fact records
//!
//! A `Fact` is the single record shape the engine evaluates, regardless of
//! whether it originated as a vital-sign observation, a medication
//! administration, or a clinical order. Facts are immutable once retrieved;
//! all derived state is recomputed per evaluation call.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The value carried by a fact, when one is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum FactValue {
    /// Numeric quantity with an optional unit (mL, cmH2O, degrees Celsius).
    Quantity {
        value: Decimal,
        unit: Option<String>,
    },
    /// Coded or free-text value ("HOB 45", "Volume Control").
    Text(String),
    /// Boolean assertion.
    Boolean(bool),
}

impl FactValue {
    /// Numeric quantity, if this value is one.
    pub fn as_quantity(&self) -> Option<Decimal> {
        match self {
            Self::Quantity { value, .. } => Some(*value),
            _ => None,
        }
    }

    /// Text content, if this value is textual.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Boolean content, if this value is a boolean.
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

/// Status of a medication administration record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AdministrationStatus {
    InProgress,
    OnHold,
    Completed,
    EnteredInError,
    Stopped,
}

impl AdministrationStatus {
    /// Whether this record should be excluded from all clinical reasoning.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::EnteredInError)
    }
}

/// An immutable timestamped clinical datum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fact {
    /// Identifier of what was measured or asserted.
    pub code: String,
    /// The recorded value, absent for pure event facts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<FactValue>,
    /// Instant the fact is asserted to be true. Facts without a time are
    /// excluded from freshness comparisons.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_time: Option<DateTime<Utc>>,
    /// Links related facts, e.g. administrations of the same order or a
    /// device placement to its later removal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<String>,
    /// Administration status; `None` for observations and orders.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<AdministrationStatus>,
    /// Set when an administration was charted as not given.
    #[serde(default)]
    pub reason_not_given: bool,
}

impl Fact {
    /// Create a bare fact with only a code.
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            value: None,
            effective_time: None,
            correlation_id: None,
            status: None,
            reason_not_given: false,
        }
    }

    /// Builder: set the effective time.
    pub fn at(mut self, time: DateTime<Utc>) -> Self {
        self.effective_time = Some(time);
        self
    }

    /// Builder: set a text value.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.value = Some(FactValue::Text(text.into()));
        self
    }

    /// Builder: set a quantity value.
    pub fn with_quantity(mut self, value: Decimal, unit: Option<&str>) -> Self {
        self.value = Some(FactValue::Quantity {
            value,
            unit: unit.map(str::to_string),
        });
        self
    }

    /// Builder: set a boolean value.
    pub fn with_boolean(mut self, value: bool) -> Self {
        self.value = Some(FactValue::Boolean(value));
        self
    }

    /// Builder: set the administration status.
    pub fn with_status(mut self, status: AdministrationStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Builder: set the correlation identifier.
    pub fn with_correlation(mut self, id: impl Into<String>) -> Self {
        self.correlation_id = Some(id.into());
        self
    }

    /// Builder: mark the administration as not given.
    pub fn not_given(mut self) -> Self {
        self.reason_not_given = true;
        self
    }

    /// Whether this fact matches a clinical code.
    pub fn matches(&self, code: &str) -> bool {
        self.code == code
    }

    /// Whether this administration record can participate in infusion
    /// reasoning: not entered-in-error and carrying an effective time.
    pub fn usable_administration(&self) -> bool {
        self.effective_time.is_some()
            && self.status.map(|s| !s.is_error()).unwrap_or(false)
    }
}

/// Encounter scope for an evaluation: an opaque identifier plus the ICU
/// admission instant used to bound "since admission" windows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncounterContext {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icu_admission: Option<DateTime<Utc>>,
}

impl EncounterContext {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            icu_admission: None,
        }
    }

    pub fn admitted_at(mut self, time: DateTime<Utc>) -> Self {
        self.icu_admission = Some(time);
        self
    }
}
