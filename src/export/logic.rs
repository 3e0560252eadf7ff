//! High-level export logic: a generated report, or the raw time entries
//! in the historic document-store schema.

use crate::core::report::Report;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{
    EntryExport, ReportRowExport, entry_headers, entry_to_cells, report_headers,
    report_row_to_cells,
};
use crate::export::pdf::export_pdf;
use crate::export::xlsx::export_xlsx;
use crate::models::entry::TimeEntry;
use crate::utils::path::expand_tilde;
use std::path::PathBuf;

pub struct ExportLogic;

impl ExportLogic {
    /// Export the rows of a generated report.
    pub fn export_report(
        report: &Report,
        format: ExportFormat,
        file: &str,
        title: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = resolve_path(file, force)?;

        let rows: Vec<ReportRowExport> = report.rows.iter().map(Into::into).collect();
        let cells: Vec<Vec<String>> = rows.iter().map(report_row_to_cells).collect();
        let headers = report_headers();

        match format {
            ExportFormat::Csv => export_csv(&headers, &cells, &path),
            ExportFormat::Json => export_json(&rows, &path),
            ExportFormat::Xlsx => export_xlsx(&headers, &cells, &path),
            ExportFormat::Pdf => export_pdf(title, &headers, &cells, &path),
        }
    }

    /// Export raw time entries (wire-schema field names).
    pub fn export_entries(
        entries: &[TimeEntry],
        format: ExportFormat,
        file: &str,
        title: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = resolve_path(file, force)?;

        let rows: Vec<EntryExport> = entries.iter().map(Into::into).collect();
        let cells: Vec<Vec<String>> = rows.iter().map(entry_to_cells).collect();
        let headers = entry_headers();

        match format {
            ExportFormat::Csv => export_csv(&headers, &cells, &path),
            ExportFormat::Json => export_json(&rows, &path),
            ExportFormat::Xlsx => export_xlsx(&headers, &cells, &path),
            ExportFormat::Pdf => export_pdf(title, &headers, &cells, &path),
        }
    }
}

fn resolve_path(file: &str, force: bool) -> AppResult<PathBuf> {
    let path = expand_tilde(file);

    if !path.is_absolute() {
        return Err(AppError::Export(format!(
            "output file path must be absolute: {file}"
        )));
    }

    ensure_writable(&path, force)?;

    Ok(path)
}
