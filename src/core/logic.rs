use crate::core::layout::{LogSheet, build_sheets};
use crate::errors::{AppError, AppResult};
use crate::models::trip::TripPlan;
use crate::utils::path::expand_tilde;
use serde_json::Value;
use std::fs;
use std::io::{self, Read};
use tracing::{info, warn};

/// A loaded trip document together with its laid-out sheets.
pub struct LoadedTrip {
    pub plan: TripPlan,
    pub sheets: Vec<LogSheet>,
}

pub struct Core;

impl Core {
    /// Read a JSON document from a file, or from stdin when `input` is `-`.
    pub fn read_document(input: &str) -> AppResult<Value> {
        let text = if input == "-" {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        } else {
            let path = expand_tilde(input);
            fs::read_to_string(&path).map_err(|e| {
                AppError::from(io::Error::new(
                    e.kind(),
                    format!("cannot read '{}': {e}", path.display()),
                ))
            })?
        };

        Ok(serde_json::from_str(&text)?)
    }

    pub fn load(input: &str, day: Option<&str>) -> AppResult<LoadedTrip> {
        let plan = TripPlan::from_document(Self::read_document(input)?)?;

        if plan.eld_logs.is_empty() {
            return Err(AppError::NoLogs);
        }

        let sheets = build_sheets(&plan.day_logs());
        info!(
            input,
            days = sheets.len(),
            stops = plan.stop_count(),
            "trip document loaded"
        );

        let sheets = Self::select_day(sheets, day)?;
        Ok(LoadedTrip { plan, sheets })
    }

    /// Keep only the sheet whose day id equals `day` (all sheets when `None`).
    pub fn select_day(sheets: Vec<LogSheet>, day: Option<&str>) -> AppResult<Vec<LogSheet>> {
        let Some(wanted) = day else {
            return Ok(sheets);
        };

        let picked: Vec<LogSheet> = sheets.into_iter().filter(|s| s.day == wanted).collect();

        if picked.is_empty() {
            warn!(day = wanted, "day filter matched nothing");
            return Err(AppError::DayNotFound(wanted.to_string()));
        }

        Ok(picked)
    }
}
