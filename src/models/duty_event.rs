use super::duty_category::DutyCategory;
use serde::Serialize;
use serde_json::Value;

/// One recorded interval of driver activity, as read from the upstream log.
///
/// Bounds are kept raw: `None` means the field was missing or not numeric,
/// and values outside 0..=24 are only clamped when the interval is split.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DutyEvent {
    pub status: String,
    pub start: Option<f64>,
    pub end: Option<f64>,
}

impl DutyEvent {
    pub fn new(status: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            status: status.into(),
            start: Some(start),
            end: Some(end),
        }
    }

    /// Build an event from any JSON value. Never fails: non-objects yield an
    /// event with an empty status and no bounds.
    pub fn from_value(value: &Value) -> Self {
        Self {
            status: status_text(value.get("status")),
            start: parse_hour(value.get("start")),
            end: parse_hour(value.get("end")),
        }
    }

    pub fn category(&self) -> DutyCategory {
        DutyCategory::normalize(&self.status)
    }
}

fn status_text(raw: Option<&Value>) -> String {
    match raw {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(true)) => "true".to_string(),
        _ => String::new(),
    }
}

/// Hour-of-day from a JSON number or numeric string (`"7.5"`).
/// Null, booleans, blank strings and containers are not hours.
pub fn parse_hour(raw: Option<&Value>) -> Option<f64> {
    match raw? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let t = s.trim();
            if t.is_empty() {
                None
            } else {
                t.parse::<f64>().ok()
            }
        }
        _ => None,
    }
}
