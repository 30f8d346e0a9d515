use super::split::{Segment, split_midnight};
use crate::models::duty_category::DutyCategory;
use crate::models::duty_event::DutyEvent;
use tracing::debug;

/// Segments bucketed per duty category. Every category always has a bucket.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DutyGroups {
    buckets: [Vec<Segment>; 4],
}

impl DutyGroups {
    pub fn get(&self, category: DutyCategory) -> &[Segment] {
        &self.buckets[category.index()]
    }

    pub fn push(&mut self, category: DutyCategory, segment: Segment) {
        self.buckets[category.index()].push(segment);
    }

    /// Buckets in canonical row order.
    pub fn iter(&self) -> impl Iterator<Item = (DutyCategory, &[Segment])> {
        DutyCategory::ALL
            .into_iter()
            .map(move |c| (c, self.buckets[c.index()].as_slice()))
    }

    pub fn total_hours(&self, category: DutyCategory) -> f64 {
        self.get(category).iter().map(Segment::duration).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }
}

/// Classify, split and bucket events. Input order is kept and overlapping
/// segments are left as they are.
pub fn group(events: &[DutyEvent]) -> DutyGroups {
    let mut groups = DutyGroups::default();

    for ev in events {
        let category = ev.category();

        let segments = match (ev.start, ev.end) {
            (Some(start), Some(end)) => split_midnight(start, end),
            _ => Vec::new(),
        };

        if segments.is_empty() {
            debug!(status = %ev.status, "dropping interval with malformed bounds");
            continue;
        }

        for seg in segments {
            groups.push(category, seg);
        }
    }

    groups
}
