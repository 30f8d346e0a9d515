use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Runs of whitespace, underscores and hyphens are dropped before matching.
static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s_-]+").expect("separator pattern is valid"));

/// The four rows of a driver's daily log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DutyCategory {
    OffDuty,
    SleeperBerth,
    Driving,
    OnDutyNotDriving,
}

impl DutyCategory {
    /// Canonical row order of the paper log.
    pub const ALL: [DutyCategory; 4] = [
        DutyCategory::OffDuty,
        DutyCategory::SleeperBerth,
        DutyCategory::Driving,
        DutyCategory::OnDutyNotDriving,
    ];

    /// Classify a raw status label.
    ///
    /// The rules are ordered: `sleeper` wins over everything, `driving` only
    /// counts when the label does not also say `not`, and any `onduty`
    /// (with or without `notdriving`) lands in the on-duty row. Anything else
    /// is off duty.
    pub fn normalize(raw: &str) -> Self {
        let lowered = raw.to_lowercase();
        let s = SEPARATORS.replace_all(&lowered, "");

        if s.contains("sleeper") {
            DutyCategory::SleeperBerth
        } else if s.contains("driving") && !s.contains("not") {
            DutyCategory::Driving
        } else if s.contains("onduty") {
            // "on duty" and "on duty not driving" share a row.
            DutyCategory::OnDutyNotDriving
        } else {
            DutyCategory::OffDuty
        }
    }

    /// Machine id used in every export.
    pub fn as_str(&self) -> &'static str {
        match self {
            DutyCategory::OffDuty => "off-duty",
            DutyCategory::SleeperBerth => "sleeper-berth",
            DutyCategory::Driving => "driving",
            DutyCategory::OnDutyNotDriving => "on-duty-not-driving",
        }
    }

    /// Row caption as printed on the log sheet.
    pub fn label(&self) -> &'static str {
        match self {
            DutyCategory::OffDuty => "Off Duty",
            DutyCategory::SleeperBerth => "Sleeper Berth",
            DutyCategory::Driving => "Driving",
            DutyCategory::OnDutyNotDriving => "On Duty (not driving)",
        }
    }

    /// Zero-based position in [`DutyCategory::ALL`].
    pub fn index(&self) -> usize {
        match self {
            DutyCategory::OffDuty => 0,
            DutyCategory::SleeperBerth => 1,
            DutyCategory::Driving => 2,
            DutyCategory::OnDutyNotDriving => 3,
        }
    }

    /// Row number printed next to the label (1..=4).
    pub fn row_number(&self) -> usize {
        self.index() + 1
    }
}

impl fmt::Display for DutyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
