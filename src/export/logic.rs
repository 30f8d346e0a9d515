// src/export/logic.rs

use crate::config::Config;
use crate::core::logic::LoadedTrip;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{SheetsDocument, sheets_to_rows};
use crate::export::notify_export_success;
use crate::export::pdf_export::export_pdf;
use crate::export::svg::{SvgOptions, export_svg};
use crate::export::text::{TextOptions, render_sheets};
use crate::ui::messages::info;
use crate::utils::path::expand_tilde;
use chrono::Local;
use std::fs;

/// High-level export of laid-out sheets.
pub struct ExportLogic;

impl ExportLogic {
    /// Write `trip`'s sheets to `file` in `format`.
    ///
    /// `~/` is expanded; an existing file is only replaced with `force` or
    /// after interactive confirmation.
    pub fn export(
        trip: &LoadedTrip,
        format: ExportFormat,
        file: &str,
        force: bool,
        cfg: &Config,
    ) -> AppResult<()> {
        let path = expand_tilde(file);

        ensure_writable(&path, force)?;

        match format {
            ExportFormat::Text => {
                info(format!("Exporting to text: {}", path.display()));
                let opts = TextOptions {
                    width: cfg.timeline_width,
                    color: false,
                    show_totals: cfg.show_totals,
                };
                fs::write(&path, render_sheets(&trip.sheets, &opts))?;
                notify_export_success("Text", &path);
            }
            ExportFormat::Json => {
                let doc = SheetsDocument {
                    generated_at: Local::now().to_rfc3339(),
                    stops: trip.plan.stop_count(),
                    days: &trip.sheets,
                };
                export_json(&doc, &path)?
            }
            ExportFormat::Csv => export_csv(&sheets_to_rows(&trip.sheets), &path)?,
            ExportFormat::Svg => {
                let opts = SvgOptions {
                    track_width: cfg.svg_track_width,
                    show_totals: cfg.show_totals,
                };
                export_svg(&trip.sheets, &path, &opts)?
            }
            ExportFormat::Pdf => export_pdf(&trip.sheets, &path, cfg.page_size, cfg.show_totals)?,
        }

        Ok(())
    }
}
