// src/export/model.rs

use crate::core::layout::LogSheet;
use serde::Serialize;

/// Flat per-segment record for CSV.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct SegmentExport {
    pub day: String,
    pub row: usize,
    pub category: String,
    pub start: f64,
    pub end: f64,
    pub duration: f64,
    #[serde(rename = "leftPercent")]
    pub left_percent: f64,
    #[serde(rename = "widthPercent")]
    pub width_percent: f64,
}

/// Top-level JSON document.
#[derive(Serialize, Debug)]
pub struct SheetsDocument<'a> {
    pub generated_at: String,
    pub stops: usize,
    pub days: &'a [LogSheet],
}

/// One record per laid-out segment, sheet by sheet, rows in canonical order.
pub fn sheets_to_rows(sheets: &[LogSheet]) -> Vec<SegmentExport> {
    sheets
        .iter()
        .flat_map(|sheet| {
            sheet.rows.iter().flat_map(move |row| {
                row.segments
                    .iter()
                    .zip(&row.geometry)
                    .map(move |(seg, geo)| SegmentExport {
                        day: sheet.day.clone(),
                        row: row.index,
                        category: row.category.as_str().to_string(),
                        start: seg.start,
                        end: seg.end,
                        duration: seg.duration(),
                        left_percent: geo.left_percent,
                        width_percent: geo.width_percent,
                    })
            })
        })
        .collect()
}
