//! SVG rendering: one stacked log grid per day.

use crate::core::layout::LogSheet;
use crate::core::layout::sheet::{hour_ruler, quarter_ticks};
use crate::errors::AppResult;
use crate::export::notify_export_success;
use crate::ui::messages::info;
use crate::utils::colors::hex;
use crate::utils::formatting::{clock, compact, hours2readable};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

const PAD: f64 = 8.0;
const LABEL_W: f64 = 180.0;
const TOTAL_W: f64 = 84.0;
const TITLE_H: f64 = 28.0;
const RULER_H: f64 = 20.0;
const ROW_H: f64 = 40.0;
const FOOTER_H: f64 = 20.0;
const SHEET_GAP: f64 = 24.0;

#[derive(Debug, Clone, Copy)]
pub struct SvgOptions {
    pub track_width: f64,
    pub show_totals: bool,
}

impl SvgOptions {
    fn totals_width(&self) -> f64 {
        if self.show_totals { TOTAL_W } else { 0.0 }
    }

    pub fn canvas_width(&self) -> f64 {
        PAD * 2.0 + LABEL_W + self.track_width + self.totals_width()
    }
}

pub fn sheet_height(rows: usize) -> f64 {
    TITLE_H + RULER_H + rows as f64 * ROW_H + FOOTER_H
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn sheet_title(sheet: &LogSheet) -> String {
    let mut t = format!("Day {}", sheet.day);
    if let Some(d) = sheet.date {
        let _ = write!(t, " | {}", d.format("%m/%d/%Y"));
    }
    if let Some(from) = &sheet.from {
        let _ = write!(t, " | From: {from}");
    }
    if let Some(to) = &sheet.to {
        let _ = write!(t, " | To: {to}");
    }
    escape(&t)
}

fn render_sheet(out: &mut String, sheet: &LogSheet, top: f64, opts: &SvgOptions) {
    let track_x = PAD + LABEL_W;
    let tw = opts.track_width;
    let x_at = |percent: f64| track_x + percent / 100.0 * tw;
    let grid_top = top + TITLE_H + RULER_H;
    let grid_h = sheet.rows.len() as f64 * ROW_H;
    let totals_x = track_x + tw;

    let _ = writeln!(out, r#"<g class="log-sheet" data-day="{}">"#, escape(&sheet.day));
    let _ = writeln!(
        out,
        r#"<text x="{PAD}" y="{}" font-size="16" font-weight="600">{}</text>"#,
        top + 18.0,
        sheet_title(sheet)
    );

    // ruler
    for tick in hour_ruler() {
        let _ = writeln!(
            out,
            r##"<text x="{}" y="{}" font-size="10" text-anchor="middle" fill="#4b5563">{}</text>"##,
            compact(x_at(tick.percent)),
            grid_top - 6.0,
            tick.label
        );
    }
    if opts.show_totals {
        let _ = writeln!(
            out,
            r##"<text x="{}" y="{}" font-size="10" text-anchor="middle" fill="#4b5563">Total Hours</text>"##,
            totals_x + TOTAL_W / 2.0,
            grid_top - 6.0
        );
    }

    // grid
    for q in quarter_ticks() {
        let x = compact(x_at(q));
        let _ = writeln!(
            out,
            r##"<line x1="{x}" y1="{grid_top}" x2="{x}" y2="{}" stroke="#e5e7eb" stroke-width="1"/>"##,
            grid_top + grid_h
        );
    }
    for tick in hour_ruler() {
        let x = compact(x_at(tick.percent));
        let _ = writeln!(
            out,
            r##"<line x1="{x}" y1="{grid_top}" x2="{x}" y2="{}" stroke="#d1d5db" stroke-width="1"/>"##,
            grid_top + grid_h
        );
    }

    for (i, row) in sheet.rows.iter().enumerate() {
        let row_top = grid_top + i as f64 * ROW_H;
        let mid = row_top + ROW_H / 2.0;
        let colour = hex(row.category);

        let _ = writeln!(
            out,
            r##"<rect x="{PAD}" y="{row_top}" width="{}" height="{ROW_H}" fill="none" stroke="#d1d5db"/>"##,
            LABEL_W + tw + opts.totals_width()
        );
        let _ = writeln!(
            out,
            r#"<text x="{}" y="{}" font-size="12">{}. {}</text>"#,
            PAD + 6.0,
            mid + 4.0,
            row.index,
            escape(row.label)
        );

        for (seg, geo) in row.segments.iter().zip(&row.geometry) {
            let (x1, x2) = (compact(x_at(geo.marks.left)), compact(x_at(geo.marks.right)));
            let _ = writeln!(
                out,
                r#"<g class="segment {}"><title>{} {}-{}</title><line x1="{x1}" y1="{mid}" x2="{x2}" y2="{mid}" stroke="{colour}" stroke-width="2"/><line x1="{x1}" y1="{row_top}" x2="{x1}" y2="{}" stroke="{colour}" stroke-width="1"/><line x1="{x2}" y1="{row_top}" x2="{x2}" y2="{}" stroke="{colour}" stroke-width="1"/></g>"#,
                row.category.as_str(),
                escape(row.label),
                clock(seg.start),
                clock(seg.end),
                row_top + ROW_H,
                row_top + ROW_H
            );
        }

        if opts.show_totals {
            let _ = writeln!(
                out,
                r#"<text x="{}" y="{}" font-size="12" text-anchor="middle">{}</text>"#,
                totals_x + TOTAL_W / 2.0,
                mid + 4.0,
                hours2readable(row.total_hours, true)
            );
        }
    }

    let footer_y = grid_top + grid_h + 14.0;
    let _ = writeln!(
        out,
        r##"<text x="{}" y="{footer_y}" font-size="10" fill="#4b5563">Mid - Mid</text>"##,
        PAD + 6.0
    );
    if opts.show_totals {
        let _ = writeln!(
            out,
            r#"<text x="{}" y="{footer_y}" font-size="12" font-weight="600" text-anchor="middle">{}</text>"#,
            totals_x + TOTAL_W / 2.0,
            hours2readable(sheet.total_hours, true)
        );
    }

    out.push_str("</g>\n");
}

/// Render all sheets into one SVG document, stacked top to bottom.
pub fn render_svg(sheets: &[LogSheet], opts: &SvgOptions) -> String {
    let width = opts.canvas_width();
    let height = sheets
        .iter()
        .map(|s| sheet_height(s.rows.len()) + SHEET_GAP)
        .sum::<f64>()
        .max(SHEET_GAP)
        + PAD;

    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="Helvetica, Arial, sans-serif">"#,
        w = compact(width),
        h = compact(height)
    );
    out.push_str("<rect width=\"100%\" height=\"100%\" fill=\"white\"/>\n");

    let mut top = PAD;
    for sheet in sheets {
        render_sheet(&mut out, sheet, top, opts);
        top += sheet_height(sheet.rows.len()) + SHEET_GAP;
    }

    out.push_str("</svg>\n");
    out
}

pub(crate) fn export_svg(sheets: &[LogSheet], path: &Path, opts: &SvgOptions) -> AppResult<()> {
    info(format!("Exporting to SVG: {}", path.display()));

    fs::write(path, render_svg(sheets, opts))?;

    notify_export_success("SVG", path);
    Ok(())
}
