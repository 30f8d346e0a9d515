use super::split::{HOURS_PER_DAY, Segment};
use serde::Serialize;

/// Horizontal placement of a segment on the 24-hour axis, in percent (0..=100).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentGeometry {
    pub left_percent: f64,
    pub width_percent: f64,
    pub marks: BoundaryMarks,
}

/// Vertical marks drawn at both edges of a segment. Marks shared with a
/// neighbouring segment are still emitted for each of them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundaryMarks {
    pub left: f64,
    pub right: f64,
}

impl SegmentGeometry {
    pub fn right_percent(&self) -> f64 {
        self.left_percent + self.width_percent
    }
}

pub fn hour_to_percent(h: f64) -> f64 {
    h / HOURS_PER_DAY * 100.0
}

/// Linear mapping of a segment onto the axis.
pub fn layout(segment: &Segment) -> SegmentGeometry {
    let left_percent = hour_to_percent(segment.start);
    let width_percent = hour_to_percent(segment.end - segment.start);

    SegmentGeometry {
        left_percent,
        width_percent,
        marks: BoundaryMarks {
            left: left_percent,
            right: left_percent + width_percent,
        },
    }
}
