//! # Event payloads supplied by the host.
//!
//! All records here are transient: the host hands them over for a single
//! handler call and the notifier never stores them. Every field a host might
//! omit is optional or defaulted, so rendering always has something to print.
//!
//! - [`Service`] identifies the monitored target.
//! - [`ErrorValue`] holds whatever the host reported as the failure cause.
//! - [`OutagePayload`], [`FailedCheckPayload`], [`TimingPayload`] are the
//!   per-kind payload shapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// Monitored target descriptor. Owned by the host; read-only here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Service {
    /// Display name. May be missing or empty on malformed input.
    pub name: Option<String>,
}

impl Service {
    /// Creates a service with the given display name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    /// Returns the name if present and non-blank.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.trim().is_empty())
    }

    /// Reads a service out of untyped host JSON. Never fails.
    pub fn from_value(value: &Value) -> Self {
        Self {
            name: value.get("name").and_then(Value::as_str).map(str::to_owned),
        }
    }
}

/// Scalar error values.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Text(String),
    Number(Number),
    Bool(bool),
}

/// Failure cause as reported by the host.
///
/// Hosts report anything from a plain string to a nested object; this type
/// makes every shape renderable through [`ErrorValue::render`].
///
/// ## Example
/// ```rust
/// use outage_console::ErrorValue;
/// use serde_json::json;
///
/// assert_eq!(ErrorValue::from(json!({"code": 503})).render(), r#"{"code":503}"#);
/// assert_eq!(ErrorValue::from("timeout").render(), r#""timeout""#);
/// assert_eq!(ErrorValue::Unknown.render(), "<unknown error>");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum ErrorValue {
    /// Object or array.
    Structured(Value),
    /// String, number or boolean.
    Primitive(Primitive),
    /// Missing or `null`.
    #[default]
    Unknown,
}

/// Placeholder for errors with no usable representation.
pub const UNKNOWN_ERROR: &str = "<unknown error>";

impl ErrorValue {
    /// Wraps a Rust error as a structured value carrying its message and,
    /// when present, the message of its source.
    pub fn from_error(err: &(dyn std::error::Error + 'static)) -> Self {
        let mut map = Map::new();
        map.insert("message".into(), Value::String(err.to_string()));
        if let Some(source) = err.source() {
            map.insert("source".into(), Value::String(source.to_string()));
        }
        ErrorValue::Structured(Value::Object(map))
    }

    /// Renders the value as display text, JSON-style.
    ///
    /// Total over every variant: strings are quoted and escaped, structured
    /// values are compact JSON, unknown values become [`UNKNOWN_ERROR`].
    /// Integral floats print without a fraction (`1.0` renders as `1`).
    pub fn render(&self) -> String {
        match self {
            ErrorValue::Structured(v) => serde_json::to_string(&integral_numbers(v))
                .unwrap_or_else(|_| UNKNOWN_ERROR.to_owned()),
            ErrorValue::Primitive(Primitive::Text(s)) => {
                serde_json::to_string(s).unwrap_or_else(|_| s.clone())
            }
            ErrorValue::Primitive(Primitive::Number(n)) => integral_number(n).to_string(),
            ErrorValue::Primitive(Primitive::Bool(b)) => b.to_string(),
            ErrorValue::Unknown => UNKNOWN_ERROR.to_owned(),
        }
    }
}

impl From<Value> for ErrorValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => ErrorValue::Unknown,
            Value::Bool(b) => ErrorValue::Primitive(Primitive::Bool(b)),
            Value::Number(n) => ErrorValue::Primitive(Primitive::Number(n)),
            Value::String(s) => ErrorValue::Primitive(Primitive::Text(s)),
            v @ (Value::Array(_) | Value::Object(_)) => ErrorValue::Structured(v),
        }
    }
}

impl From<ErrorValue> for Value {
    fn from(value: ErrorValue) -> Self {
        match value {
            ErrorValue::Structured(v) => v,
            ErrorValue::Primitive(Primitive::Text(s)) => Value::String(s),
            ErrorValue::Primitive(Primitive::Number(n)) => Value::Number(n),
            ErrorValue::Primitive(Primitive::Bool(b)) => Value::Bool(b),
            ErrorValue::Unknown => Value::Null,
        }
    }
}

impl From<&str> for ErrorValue {
    fn from(s: &str) -> Self {
        ErrorValue::Primitive(Primitive::Text(s.to_owned()))
    }
}

impl From<String> for ErrorValue {
    fn from(s: String) -> Self {
        ErrorValue::Primitive(Primitive::Text(s))
    }
}

/// Outage record: used by `new-outage`, `current-outage` and, as the last
/// outage, by `service-back`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutagePayload {
    pub error: ErrorValue,
    /// Outage start, epoch milliseconds.
    pub timestamp: Option<i64>,
}

impl OutagePayload {
    /// Creates an outage record that started at `at`.
    pub fn new(error: impl Into<ErrorValue>, at: DateTime<Utc>) -> Self {
        Self {
            error: error.into(),
            timestamp: Some(at.timestamp_millis()),
        }
    }

    /// Reads an outage record out of untyped host JSON. Never fails.
    pub fn from_value(value: &Value) -> Self {
        Self {
            error: error_field(value),
            timestamp: value.get("timestamp").and_then(as_millis),
        }
    }
}

/// Failed-check record for `service-error`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FailedCheckPayload {
    pub error: ErrorValue,
    /// Consecutive failures so far, as counted by the host.
    pub current_failure_count: Option<u32>,
}

impl FailedCheckPayload {
    pub fn new(error: impl Into<ErrorValue>, current_failure_count: u32) -> Self {
        Self {
            error: error.into(),
            current_failure_count: Some(current_failure_count),
        }
    }

    /// Reads a failed-check record out of untyped host JSON. Never fails.
    pub fn from_value(value: &Value) -> Self {
        Self {
            error: error_field(value),
            current_failure_count: value
                .get("currentFailureCount")
                .and_then(Value::as_u64)
                .and_then(|n| u32::try_from(n).ok()),
        }
    }
}

/// Check timing for `latency-warning` and `service-ok`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TimingPayload {
    /// Response time in milliseconds.
    pub elapsed_time: Option<f64>,
}

impl TimingPayload {
    pub fn new(elapsed_ms: f64) -> Self {
        Self {
            elapsed_time: Some(elapsed_ms),
        }
    }

    /// Reads a timing record out of untyped host JSON. Never fails.
    pub fn from_value(value: &Value) -> Self {
        Self {
            elapsed_time: value
                .get("elapsedTime")
                .and_then(Value::as_f64)
                .filter(|ms| ms.is_finite()),
        }
    }
}

/// Returns `v` as an integer when it has no fractional part and fits
/// losslessly.
pub(crate) fn integral(v: f64) -> Option<i64> {
    (v.is_finite() && v.fract() == 0.0 && v.abs() < 1e15).then(|| v as i64)
}

fn integral_number(n: &Number) -> Number {
    match n.as_f64() {
        Some(f) if n.is_f64() => integral(f).map_or_else(|| n.clone(), Number::from),
        _ => n.clone(),
    }
}

fn integral_numbers(v: &Value) -> Value {
    match v {
        Value::Number(n) => Value::Number(integral_number(n)),
        Value::Array(items) => Value::Array(items.iter().map(integral_numbers).collect()),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), integral_numbers(v)))
                .collect(),
        ),
        other => other.clone(),
    }
}

fn error_field(value: &Value) -> ErrorValue {
    value.get("error").cloned().map(ErrorValue::from).unwrap_or_default()
}

fn as_millis(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.is_finite())
            .map(|f| f as i64)
    })
}
