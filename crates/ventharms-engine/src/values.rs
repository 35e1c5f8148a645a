//! Typed access to fact values
//!
//! Where an indicator requires a numeric value, an ill-typed fact is a
//! `MalformedFact` error rather than a silent cast failure. Coded text
//! values are handled elsewhere as vocabularies (unknown input falls
//! through, it is never an error).

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use ventharms_model::{Fact, FactValue};

use crate::error::{EvalError, EvalResult};

/// The numeric value of a fact. Accepts a quantity directly or text that
/// is entirely numeric ("450", "-2").
pub fn quantity(fact: &Fact) -> EvalResult<Decimal> {
    match &fact.value {
        Some(FactValue::Quantity { value, .. }) => Ok(*value),
        Some(FactValue::Text(text)) => text.trim().parse::<Decimal>().map_err(|_| {
            EvalError::malformed_fact(&fact.code, format!("expected a quantity, got {text:?}"))
        }),
        Some(FactValue::Boolean(_)) => Err(EvalError::malformed_fact(
            &fact.code,
            "expected a quantity, got a boolean",
        )),
        None => Err(EvalError::malformed_fact(&fact.code, "value is absent")),
    }
}

/// The text of a fact value, or `None` when the fact carries none.
/// Quantities are not coerced to text.
pub fn text(fact: &Fact) -> Option<&str> {
    fact.value.as_ref().and_then(FactValue::as_text)
}

/// Small signed integer scores charted as text or quantity (RASS,
/// train-of-four). Non-integer content is `None`, not an error, because
/// these fields also admit coded text the caller treats as vocabulary.
pub fn score(fact: &Fact) -> Option<i32> {
    match &fact.value {
        Some(FactValue::Quantity { value, .. }) => {
            if value.fract().is_zero() {
                value.trunc().to_string().parse().ok()
            } else {
                None
            }
        }
        Some(FactValue::Text(text)) => text.trim().trim_start_matches('+').parse().ok(),
        _ => None,
    }
}

static FIRST_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)").expect("static regex"));

/// The first integer embedded in a labelled text value ("HOB 45" → 45).
/// Quantity values are used directly.
pub fn embedded_angle(fact: &Fact) -> Option<i32> {
    match &fact.value {
        Some(FactValue::Quantity { value, .. }) => value.trunc().to_string().parse().ok(),
        Some(FactValue::Text(text)) => FIRST_NUMBER
            .captures(text)
            .and_then(|c| c.get(1))
            .and_then(|m| m.as_str().parse().ok()),
        _ => None,
    }
}
