//! Typed field coercion shared by every pipeline stage.
//!
//! BOM cells arrive as loosely-typed text. Validator, optimizer and the
//! engines all read numbers through [`coerce_number`] so a value that is
//! "invalid" for one stage is invalid for all of them.

use serde::{Deserialize, Serialize};

/// Outcome of coercing a single cell into a typed value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Coerced<T> {
    /// The cell held a well-formed value.
    Value(T),
    /// The cell was null or blank.
    Missing,
    /// The cell held text that is not a valid value.
    Invalid,
}

impl<T> Coerced<T> {
    /// The parsed value, if any.
    pub fn value(self) -> Option<T> {
        match self {
            Self::Value(v) => Some(v),
            Self::Missing | Self::Invalid => None,
        }
    }

    /// True when coercion failed for any reason.
    pub const fn is_failure(&self) -> bool {
        !matches!(self, Self::Value(_))
    }
}

impl Coerced<f64> {
    /// Value, or `0.0` when coercion failed.
    #[must_use]
    pub fn or_zero(self) -> f64 {
        self.value().unwrap_or(0.0)
    }
}

/// Coerce a raw cell into a finite `f64`.
///
/// Surrounding whitespace is ignored. `NaN` and infinities are rejected.
#[must_use]
pub fn coerce_number(raw: Option<&str>) -> Coerced<f64> {
    let Some(text) = raw.map(str::trim) else {
        return Coerced::Missing;
    };
    if text.is_empty() {
        return Coerced::Missing;
    }
    match text.parse::<f64>() {
        Ok(v) if v.is_finite() => Coerced::Value(v),
        _ => Coerced::Invalid,
    }
}

/// Coerce a JSON scalar (as found in supplier price maps) into a finite `f64`.
///
/// Numbers are taken as-is, strings go through [`coerce_number`], anything
/// else is invalid.
#[must_use]
pub fn coerce_json_number(value: &serde_json::Value) -> Coerced<f64> {
    match value {
        serde_json::Value::Null => Coerced::Missing,
        serde_json::Value::Number(n) => match n.as_f64() {
            Some(v) if v.is_finite() => Coerced::Value(v),
            _ => Coerced::Invalid,
        },
        serde_json::Value::String(s) => coerce_number(Some(s)),
        _ => Coerced::Invalid,
    }
}

/// Round half away from zero to `places` decimal places.
#[must_use]
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Render a number the way it was most likely written: integers without a
/// fractional part, everything else in shortest round-trip form.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
