use dutylog::config::{Config, PageSize};
use dutylog::core::layout::{build_sheet, build_sheets};
use dutylog::export::ExportFormat;
use dutylog::export::model::sheets_to_rows;
use dutylog::export::svg::{SvgOptions, render_svg};
use dutylog::export::text::{TextOptions, column, render_sheet, ruler_line, track_cells};
use dutylog::models::day_log::DayLog;
use dutylog::models::duty_category::DutyCategory;
use dutylog::models::trip::TripPlan;
use dutylog::utils::formatting::{clock, compact, hours2readable, pad_right};
use serde_json::json;
use std::path::Path;

fn wrap_day() -> DayLog {
    DayLog::from_value(
        &json!({
            "day": 2,
            "events": [
                { "status": "driving", "start": 22, "end": 2 },
                { "status": "off duty", "start": 2, "end": 22 }
            ]
        }),
        1,
    )
}

fn plain(width: usize) -> TextOptions {
    TextOptions {
        width,
        color: false,
        show_totals: true,
    }
}

// ---------------------------
// Formatting helpers
// ---------------------------

#[test]
fn test_hours2readable() {
    assert_eq!(hours2readable(7.5, false), "07h 30m");
    assert_eq!(hours2readable(24.0, false), "24h 00m");
    assert_eq!(hours2readable(0.25, true), "00:15");
    assert_eq!(hours2readable(-1.0, true), "00:00");
    assert_eq!(clock(13.75), "13:45");
}

#[test]
fn test_compact_and_padding() {
    assert_eq!(compact(6.5), "6.5");
    assert_eq!(compact(2.0), "2");
    assert_eq!(compact(33.333333), "33.3333");
    assert_eq!(pad_right("ab", 4), "ab  ");
    assert_eq!(pad_right("abcdef", 4), "abcdef");
}

// ---------------------------
// Text rendering
// ---------------------------

#[test]
fn test_column_mapping() {
    assert_eq!(column(0.0, 48), 0);
    assert_eq!(column(50.0, 48), 24);
    assert_eq!(column(100.0, 48), 48);
    assert_eq!(column(150.0, 48), 48);
    assert_eq!(column(-5.0, 48), 0);
}

#[test]
fn test_ruler_line_places_mid_and_noon() {
    let ruler = ruler_line(48);
    assert!(ruler.starts_with("Mid"));
    assert_eq!(ruler.find("Noon"), Some(24));
}

#[test]
fn test_track_cells_bars_and_marks() {
    let sheet = build_sheet(&wrap_day());
    let driving = sheet.row(DutyCategory::Driving);
    let cells = track_cells(driving, 48);

    assert_eq!(cells.len(), 49);
    // 22..24 → columns 44..48, 0..2 → columns 0..4
    assert_eq!(cells[0], ('|', true));
    assert_eq!(cells[2], ('━', true));
    assert_eq!(cells[4], ('|', true));
    assert_eq!(cells[44], ('|', true));
    assert_eq!(cells[46], ('━', true));
    assert_eq!(cells[48], ('|', true));
    // 12:00 is outside both segments
    assert_eq!(cells[24], ('·', false));
}

#[test]
fn test_render_sheet_plain_text() {
    let sheet = build_sheet(&wrap_day());
    let out = render_sheet(&sheet, &plain(48));

    assert!(out.starts_with("Day 2"));
    assert!(out.contains("1. Off Duty"));
    assert!(out.contains("4. On Duty (not driving)"));
    assert!(out.contains("20h 00m"));
    assert!(out.contains("04h 00m"));
    assert!(out.contains("Mid - Mid"));
    assert!(out.trim_end().ends_with("24h 00m"));
    assert!(!out.contains('\x1b'));
}

#[test]
fn test_render_sheet_without_totals() {
    let sheet = build_sheet(&wrap_day());
    let out = render_sheet(
        &sheet,
        &TextOptions {
            width: 48,
            color: false,
            show_totals: false,
        },
    );
    assert!(!out.contains("Total"));
    assert!(!out.contains("Mid - Mid"));
}

#[test]
fn test_render_sheet_colored_contains_escapes() {
    let sheet = build_sheet(&wrap_day());
    let out = render_sheet(
        &sheet,
        &TextOptions {
            width: 48,
            color: true,
            show_totals: true,
        },
    );
    assert!(out.contains('\x1b'));
}

// ---------------------------
// SVG
// ---------------------------

#[test]
fn test_render_svg_segments_and_marks() {
    let sheets = build_sheets(&[wrap_day()]);
    let svg = render_svg(
        &sheets,
        &SvgOptions {
            track_width: 768.0,
            show_totals: true,
        },
    );

    assert!(svg.starts_with("<svg"));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert_eq!(svg.matches(r#"class="segment driving""#).count(), 2);
    assert_eq!(svg.matches(r#"class="segment off-duty""#).count(), 1);
    // 22h on a 768px track starting at x=188
    assert!(svg.contains(r#"x1="892""#));
    assert!(svg.contains("Noon"));
    assert!(svg.contains("Total Hours"));
    assert!(svg.contains("24:00"));
}

#[test]
fn test_render_svg_escapes_text() {
    let log = DayLog::from_value(&json!({ "day": "A&B", "from": "<Here>", "events": [] }), 1);
    let svg = render_svg(
        &[build_sheet(&log)],
        &SvgOptions {
            track_width: 480.0,
            show_totals: false,
        },
    );
    assert!(svg.contains("Day A&amp;B"));
    assert!(svg.contains("&lt;Here&gt;"));
    assert!(!svg.contains("Total Hours"));
}

// ---------------------------
// CSV rows
// ---------------------------

#[test]
fn test_sheets_to_rows() {
    let rows = sheets_to_rows(&build_sheets(&[wrap_day()]));
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].category, "off-duty");
    assert_eq!(rows[0].row, 1);
    assert_eq!((rows[1].start, rows[1].end), (22.0, 24.0));
    assert_eq!((rows[2].start, rows[2].end), (0.0, 2.0));
    assert_eq!(rows[2].duration, 2.0);
    assert!(rows.iter().all(|r| r.day == "2"));
}

// ---------------------------
// Trip documents
// ---------------------------

#[test]
fn test_trip_from_full_response() {
    let plan = TripPlan::from_document(json!({
        "route": { "coordinates": [] },
        "stops": [{}, {}],
        "eld_logs": [{ "day": 1, "events": [] }, { "events": [] }]
    }))
    .unwrap();
    assert_eq!(plan.stop_count(), 2);
    let logs = plan.day_logs();
    assert_eq!(logs.len(), 2);
    assert_eq!(logs[1].day, "2");
}

#[test]
fn test_trip_from_bare_list_and_single_log() {
    let plan = TripPlan::from_document(json!([{ "day": 5 }])).unwrap();
    assert_eq!(plan.day_logs()[0].day, "5");

    let plan = TripPlan::from_document(json!({ "a": { "start": 1, "end": 2 } })).unwrap();
    assert_eq!(plan.eld_logs.len(), 1);
    assert_eq!(build_sheet(&plan.day_logs()[0]).segment_count(), 1);
}

#[test]
fn test_trip_rejects_scalars() {
    assert!(TripPlan::from_document(json!(12)).is_err());
    assert!(TripPlan::from_document(json!("trip")).is_err());
}

// ---------------------------
// Config
// ---------------------------

#[test]
fn test_config_defaults_when_missing() {
    let cfg = Config::load(Path::new("/definitely/not/here/dutylog.conf")).unwrap();
    assert_eq!(cfg, Config::default());
    assert_eq!(cfg.timeline_width, 48);
    assert_eq!(cfg.default_format, ExportFormat::Json);
    assert_eq!(cfg.page_size, PageSize::Letter);
}

#[test]
fn test_config_partial_yaml_uses_defaults() {
    let cfg: Config = serde_yaml::from_str("timeline_width: 96\npage_size: a4\n").unwrap();
    assert_eq!(cfg.timeline_width, 96);
    assert_eq!(cfg.page_size, PageSize::A4);
    assert!(cfg.color);
    assert!(cfg.validate().is_ok());
}

#[test]
fn test_config_validation() {
    let cfg = Config {
        timeline_width: 10,
        ..Config::default()
    };
    assert!(cfg.validate().is_err());

    let cfg = Config {
        svg_track_width: 20.0,
        ..Config::default()
    };
    assert!(cfg.validate().is_err());
}
