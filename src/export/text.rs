//! Plain-text rendering of log sheets for the terminal (`show`) and
//! `--format text` exports.

use crate::core::layout::sheet::{hour_ruler, quarter_ticks};
use crate::core::layout::{LogSheet, SheetRow};
use crate::utils::colors::paint;
use crate::utils::formatting::{hours2readable, pad_right};
use unicode_width::UnicodeWidthStr;

const BAR: char = '━';
const MARK: char = '|';
const HOUR_DOT: char = '·';
const GAP: &str = "   ";

#[derive(Debug, Clone, Copy)]
pub struct TextOptions {
    pub width: usize,
    pub color: bool,
    pub show_totals: bool,
}

/// Column of a 0..=100 percent position on a `width`-column track.
pub fn column(percent: f64, width: usize) -> usize {
    let c = (percent / 100.0 * width as f64).round();
    if c.is_nan() || c < 0.0 {
        0
    } else {
        (c as usize).min(width)
    }
}

fn row_caption(row: &SheetRow) -> String {
    format!("{}. {}", row.index, row.label)
}

fn label_width(sheet: &LogSheet) -> usize {
    sheet
        .rows
        .iter()
        .map(|r| UnicodeWidthStr::width(row_caption(r).as_str()))
        .max()
        .unwrap_or(0)
        + 2
}

/// Hour captions placed over a track; captions that would collide with the
/// previous one are skipped.
pub fn ruler_line(width: usize) -> String {
    let mut buf = vec![' '; width + GAP.len() + 1];
    let mut next_free = 0;

    for tick in hour_ruler() {
        let pos = column(tick.percent, width);
        if pos < next_free {
            continue;
        }
        for (i, ch) in tick.label.chars().enumerate() {
            if let Some(cell) = buf.get_mut(pos + i) {
                *cell = ch;
            }
        }
        next_free = pos + tick.label.chars().count() + 1;
    }

    buf.into_iter().collect()
}

/// Characters of one row's track, each flagged when it belongs to a segment.
pub fn track_cells(row: &SheetRow, width: usize) -> Vec<(char, bool)> {
    let mut cells = vec![(' ', false); width + 1];

    // quarter ticks only when there is room for them
    if width >= 96 {
        for q in quarter_ticks() {
            cells[column(q, width)] = ('.', false);
        }
    }
    for tick in hour_ruler() {
        cells[column(tick.percent, width)] = (HOUR_DOT, false);
    }

    for geo in &row.geometry {
        let (c0, c1) = (column(geo.left_percent, width), column(geo.right_percent(), width));
        for cell in &mut cells[c0..c1] {
            *cell = (BAR, true);
        }
    }
    for geo in &row.geometry {
        cells[column(geo.marks.left, width)] = (MARK, true);
        cells[column(geo.marks.right, width)] = (MARK, true);
    }

    cells
}

fn render_track(row: &SheetRow, opts: &TextOptions) -> String {
    let cells = track_cells(row, opts.width);
    let mut out = String::new();
    let mut run = String::new();
    let mut run_painted = false;

    for (ch, painted) in cells {
        if painted != run_painted && !run.is_empty() {
            out.push_str(&paint(row.category, &run, opts.color && run_painted));
            run.clear();
        }
        run_painted = painted;
        run.push(ch);
    }
    out.push_str(&paint(row.category, &run, opts.color && run_painted));
    out
}

fn title(sheet: &LogSheet) -> String {
    let mut parts = vec![format!("Day {}", sheet.day)];

    if let Some(date) = sheet.date {
        parts.push(date.format("%m/%d/%Y").to_string());
    }
    match (&sheet.from, &sheet.to) {
        (Some(from), Some(to)) => parts.push(format!("{from} → {to}")),
        (Some(from), None) => parts.push(format!("from {from}")),
        (None, Some(to)) => parts.push(format!("to {to}")),
        (None, None) => {}
    }
    if let Some(miles) = sheet.total_miles {
        parts.push(format!("{miles:.0} mi"));
    }

    parts.join("  ·  ")
}

/// Full multi-line chart of one day.
pub fn render_sheet(sheet: &LogSheet, opts: &TextOptions) -> String {
    let lw = label_width(sheet);
    let mut lines = Vec::new();

    lines.push(title(sheet));

    let mut ruler = format!("{}{}", pad_right("", lw), ruler_line(opts.width));
    if opts.show_totals {
        ruler.push_str("Total");
    }
    lines.push(ruler.trim_end().to_string());

    for row in &sheet.rows {
        let mut line = format!(
            "{}{}",
            pad_right(&row_caption(row), lw),
            render_track(row, opts)
        );
        if opts.show_totals {
            line.push_str(GAP);
            line.push_str(&hours2readable(row.total_hours, false));
        }
        lines.push(line.trim_end().to_string());
    }

    if opts.show_totals {
        let footer_label = pad_right("Mid - Mid", lw + opts.width + 1 + GAP.len());
        lines.push(format!(
            "{footer_label}{}",
            hours2readable(sheet.total_hours, false)
        ));
    }

    lines.join("\n")
}

pub fn render_sheets(sheets: &[LogSheet], opts: &TextOptions) -> String {
    let mut out = sheets
        .iter()
        .map(|s| render_sheet(s, opts))
        .collect::<Vec<_>>()
        .join("\n\n");
    out.push('\n');
    out
}
