use chrono::NaiveDate;
use serde_json::{Map, Value};

/// The container shapes a day's duty events arrive in.
#[derive(Debug, Clone, PartialEq)]
pub enum EventSource {
    /// null or missing
    Absent,
    /// a plain list of event objects
    Sequence(Vec<Value>),
    /// an object whose `events` field is a list
    Wrapped(Vec<Value>),
    /// any other object; values are events or lists of events
    Keyed(Map<String, Value>),
    /// scalars (numbers, strings, booleans)
    Unsupported,
}

impl EventSource {
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Null => EventSource::Absent,
            Value::Array(items) => EventSource::Sequence(items.clone()),
            Value::Object(map) => match map.get("events") {
                Some(Value::Array(items)) => EventSource::Wrapped(items.clone()),
                _ => EventSource::Keyed(map.clone()),
            },
            Value::Bool(_) | Value::Number(_) | Value::String(_) => EventSource::Unsupported,
        }
    }

    pub fn shape(&self) -> &'static str {
        match self {
            EventSource::Absent => "absent",
            EventSource::Sequence(_) => "sequence",
            EventSource::Wrapped(_) => "wrapped",
            EventSource::Keyed(_) => "keyed",
            EventSource::Unsupported => "unsupported",
        }
    }
}

impl From<&Value> for EventSource {
    fn from(value: &Value) -> Self {
        EventSource::from_value(value)
    }
}

/// One day of the trip's ELD logs.
#[derive(Debug, Clone, PartialEq)]
pub struct DayLog {
    pub day: String,
    pub date: Option<NaiveDate>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub total_miles: Option<f64>,
    /// Value of the log's own `events` field, preferred when non-empty.
    pub events: EventSource,
    /// The whole log value, used as the fallback source.
    pub source: EventSource,
}

impl DayLog {
    /// `position` is the 1-based index in `eld_logs`, used when the log
    /// carries no `day` of its own.
    pub fn from_value(value: &Value, position: usize) -> Self {
        let day = match value.get("day") {
            Some(Value::String(s)) if !s.trim().is_empty() => s.trim().to_string(),
            Some(Value::Number(n)) => n.to_string(),
            _ => position.to_string(),
        };

        let date = value
            .get("date")
            .and_then(Value::as_str)
            .and_then(|s| NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok());

        Self {
            day,
            date,
            from: text_field(value, "from"),
            to: text_field(value, "to"),
            total_miles: value.get("total_miles").and_then(Value::as_f64),
            events: value
                .get("events")
                .map(EventSource::from_value)
                .unwrap_or(EventSource::Absent),
            source: EventSource::from_value(value),
        }
    }
}

fn text_field(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
