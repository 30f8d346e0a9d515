// src/export/pdf_export.rs

use crate::config::PageSize;
use crate::core::layout::LogSheet;
use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::export::pdf::PdfManager;
use crate::ui::messages::info;
use std::path::Path;

/// Export PDF, one page per day.
pub(crate) fn export_pdf(
    sheets: &[LogSheet],
    path: &Path,
    page: PageSize,
    show_totals: bool,
) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let mut pdf = PdfManager::new(page);
    for sheet in sheets {
        pdf.write_sheet(sheet, show_totals);
    }
    let pages = pdf.page_count();

    pdf.save(path)
        .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;

    notify_export_success(&format!("PDF ({pages} page(s))"), path);
    Ok(())
}
