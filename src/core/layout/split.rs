use serde::Serialize;

pub const HOURS_PER_DAY: f64 = 24.0;

/// A non-wrapping interval inside one day, both bounds in 0..=24.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Segment {
    pub start: f64,
    pub end: f64,
}

impl Segment {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// Clamp to the day. NaN stays NaN.
pub fn clamp_hour(h: f64) -> f64 {
    h.clamp(0.0, HOURS_PER_DAY)
}

/// Split an interval at midnight.
///
/// `end < start` means the interval wraps into the next day and yields
/// `[start, 24]` followed by `[0, end]`. NaN bounds yield no segments.
pub fn split_midnight(start: f64, end: f64) -> Vec<Segment> {
    let s = clamp_hour(start);
    let e = clamp_hour(end);

    if s.is_nan() || e.is_nan() {
        return Vec::new();
    }

    if e >= s {
        vec![Segment::new(s, e)]
    } else {
        vec![Segment::new(s, HOURS_PER_DAY), Segment::new(0.0, e)]
    }
}
