//! Duty-status timeline layout: extraction, midnight splitting, grouping
//! and the linear 24-hour geometry used by every renderer.

pub mod extract;
pub mod geometry;
pub mod group;
pub mod sheet;
pub mod split;

pub use extract::{extract_events, extract_preferred};
pub use geometry::{BoundaryMarks, SegmentGeometry, layout};
pub use group::{DutyGroups, group};
pub use sheet::{HourTick, LogSheet, SheetRow, build_sheet, build_sheets, hour_ruler};
pub use split::{Segment, split_midnight};
