use super::day_log::DayLog;
use crate::errors::{AppError, AppResult};
use serde::Deserialize;
use serde_json::Value;

/// Response of the trip-planning API: `{route, stops, eld_logs}`.
///
/// `route` and `stops` belong to the map view and are carried opaquely.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TripPlan {
    #[serde(default)]
    pub route: Value,
    #[serde(default)]
    pub stops: Vec<Value>,
    #[serde(default)]
    pub eld_logs: Vec<Value>,
}

impl TripPlan {
    /// Accept a full trip response, a bare list of day logs, or a single
    /// day log object.
    pub fn from_document(doc: Value) -> AppResult<Self> {
        if doc.get("eld_logs").is_some() {
            return Ok(serde_json::from_value(doc)?);
        }

        match doc {
            Value::Array(logs) => Ok(Self {
                eld_logs: logs,
                ..Self::default()
            }),
            single @ Value::Object(_) => Ok(Self {
                eld_logs: vec![single],
                ..Self::default()
            }),
            other => Err(AppError::InvalidInput(format!(
                "expected a trip object or a list of day logs, found {}",
                json_kind(&other)
            ))),
        }
    }

    pub fn day_logs(&self) -> Vec<DayLog> {
        self.eld_logs
            .iter()
            .enumerate()
            .map(|(i, v)| DayLog::from_value(v, i + 1))
            .collect()
    }

    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
