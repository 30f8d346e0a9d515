//! Assembly of a full day's log sheet: four duty rows, their geometry,
//! per-row totals and the hour ruler shared by every renderer.

use super::extract::extract_preferred;
use super::geometry::{SegmentGeometry, hour_to_percent, layout};
use super::group::group;
use super::split::Segment;
use crate::models::day_log::DayLog;
use crate::models::duty_category::DutyCategory;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SheetRow {
    pub index: usize,
    pub category: DutyCategory,
    pub label: &'static str,
    pub segments: Vec<Segment>,
    pub geometry: Vec<SegmentGeometry>,
    pub total_hours: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct LogSheet {
    pub day: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_miles: Option<f64>,
    pub rows: Vec<SheetRow>,
    pub total_hours: f64,
}

impl LogSheet {
    pub fn row(&self, category: DutyCategory) -> &SheetRow {
        &self.rows[category.index()]
    }

    pub fn segment_count(&self) -> usize {
        self.rows.iter().map(|r| r.segments.len()).sum()
    }
}

pub fn build_sheet(log: &DayLog) -> LogSheet {
    let events = extract_preferred(&log.events, &log.source);
    let groups = group(&events);

    let rows: Vec<SheetRow> = groups
        .iter()
        .map(|(category, segments)| SheetRow {
            index: category.row_number(),
            category,
            label: category.label(),
            segments: segments.to_vec(),
            geometry: segments.iter().map(layout).collect(),
            total_hours: groups.total_hours(category),
        })
        .collect();

    let total_hours = rows.iter().map(|r| r.total_hours).sum();

    LogSheet {
        day: log.day.clone(),
        date: log.date,
        from: log.from.clone(),
        to: log.to.clone(),
        total_miles: log.total_miles,
        rows,
        total_hours,
    }
}

pub fn build_sheets(logs: &[DayLog]) -> Vec<LogSheet> {
    logs.iter().map(build_sheet).collect()
}

// -----------------------------
// Hour ruler
// -----------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourTick {
    pub hour: u32,
    pub percent: f64,
    pub label: String,
}

/// Caption above an hour line: "Mid", 1..11, "Noon", 1..11, "Mid".
pub fn hour_label(hour: u32) -> String {
    match hour % 24 {
        0 => "Mid".to_string(),
        12 => "Noon".to_string(),
        h => (((h + 11) % 12) + 1).to_string(),
    }
}

/// The 25 hour lines of the axis, midnight to midnight.
pub fn hour_ruler() -> Vec<HourTick> {
    (0..=24)
        .map(|hour| HourTick {
            hour,
            percent: hour_to_percent(hour as f64),
            label: hour_label(hour),
        })
        .collect()
}

/// Quarter-hour positions (in percent) that are not on an hour line.
pub fn quarter_ticks() -> Vec<f64> {
    (0..96)
        .filter(|q| q % 4 != 0)
        .map(|q| hour_to_percent(q as f64 / 4.0))
        .collect()
}
