//! Pulling duty events out of whatever container the upstream log uses.

use crate::models::day_log::EventSource;
use crate::models::duty_event::DutyEvent;
use serde_json::Value;
use tracing::debug;

/// Flatten a source into events, in input order.
///
/// Lists (direct or under `events`) are taken as-is. Keyed objects are
/// flattened one level and only objects carrying both `start` and `end`
/// survive. Anything else yields nothing.
pub fn extract_events(source: &EventSource) -> Vec<DutyEvent> {
    match source {
        EventSource::Absent => Vec::new(),
        EventSource::Sequence(items) | EventSource::Wrapped(items) => {
            items.iter().map(DutyEvent::from_value).collect()
        }
        EventSource::Keyed(map) => map
            .values()
            .flat_map(|v| match v {
                Value::Array(items) => items.iter().collect::<Vec<_>>(),
                other => vec![other],
            })
            .filter(|v| is_interval(v))
            .map(DutyEvent::from_value)
            .collect(),
        EventSource::Unsupported => {
            debug!("ignoring scalar event container");
            Vec::new()
        }
    }
}

/// Events from `primary`, or from `fallback` when `primary` has none.
pub fn extract_preferred(primary: &EventSource, fallback: &EventSource) -> Vec<DutyEvent> {
    let events = extract_events(primary);
    if events.is_empty() {
        extract_events(fallback)
    } else {
        events
    }
}

fn is_interval(v: &Value) -> bool {
    v.as_object()
        .is_some_and(|o| o.contains_key("start") && o.contains_key("end"))
}
