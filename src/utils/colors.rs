//! Colors per duty row, shared by the terminal, SVG and PDF renderers.

use crate::models::duty_category::DutyCategory;
use ansi_term::Colour;

pub fn terminal_colour(category: DutyCategory) -> Colour {
    match category {
        DutyCategory::OffDuty => Colour::Fixed(245),
        DutyCategory::SleeperBerth => Colour::Blue,
        DutyCategory::Driving => Colour::Green,
        DutyCategory::OnDutyNotDriving => Colour::Yellow,
    }
}

/// Paint `text` in the row colour, or leave it plain.
pub fn paint(category: DutyCategory, text: &str, enabled: bool) -> String {
    if enabled {
        terminal_colour(category).paint(text).to_string()
    } else {
        text.to_string()
    }
}

/// Stroke colour for vector output, as 0..1 RGB.
pub fn rgb(category: DutyCategory) -> (f32, f32, f32) {
    match category {
        DutyCategory::OffDuty => (0.0, 0.0, 0.0),
        DutyCategory::SleeperBerth => (0.12, 0.25, 0.69),
        DutyCategory::Driving => (0.02, 0.47, 0.34),
        DutyCategory::OnDutyNotDriving => (0.71, 0.33, 0.04),
    }
}

pub fn hex(category: DutyCategory) -> String {
    let (r, g, b) = rgb(category);
    let c = |v: f32| (v * 255.0).round() as u8;
    format!("#{:02x}{:02x}{:02x}", c(r), c(g), c(b))
}
