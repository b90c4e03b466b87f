//! Report assembly and spreadsheet persistence
//!
//! Turns the surviving working set into derived tabular rows (formatted
//! timestamps, lengths, money flags) and writes them to a timestamped
//! workbook under the output directory.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use rust_xlsxwriter::{Workbook, XlsxError};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::extract::Article;
use crate::filter::relative_time_to_absolute;
use crate::money::contains_money;

/// Fixed column order of the report.
pub const REPORT_HEADER: [&str; 10] = [
    "Title",
    "Title Length",
    "Title Contains Money",
    "Link",
    "Source",
    "Time",
    "Description",
    "Description Length",
    "Description Contains Money",
    "Image",
];

/// Sheet the rows land on.
pub const REPORT_SHEET: &str = "Results";

/// Timestamp format used in the Time column.
pub const REPORT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One assembled row: the article's stored fields plus the derived columns.
#[derive(Debug, Clone, Serialize)]
pub struct ReportRow {
    pub title: String,
    pub title_length: usize,
    pub title_contains_money: bool,
    pub link: String,
    pub source: String,
    pub time: String,
    pub description: String,
    pub description_length: usize,
    pub description_contains_money: bool,
    pub image: String,
}

/// The report could not be persisted.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to prepare output directory: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to write workbook: {0}")]
    Xlsx(#[from] XlsxError),
}

/// Compute the derived columns for every surviving article. Lengths are
/// character counts, not byte counts.
#[must_use]
pub fn build_rows(articles: &[Article], now: DateTime<Local>) -> Vec<ReportRow> {
    articles
        .iter()
        .map(|article| {
            let absolute = relative_time_to_absolute(&article.relative_time, now);
            debug!(title = %article.title, "adding article to report");
            ReportRow {
                title: article.title.clone(),
                title_length: article.title.chars().count(),
                title_contains_money: contains_money(&article.title),
                link: article.link.clone(),
                source: article.source.clone(),
                time: absolute.format(REPORT_TIME_FORMAT).to_string(),
                description: article.description.clone(),
                description_length: article.description.chars().count(),
                description_contains_money: contains_money(&article.description),
                image: article.image_reference.clone(),
            }
        })
        .collect()
}

/// Write the header and rows to a `{timestamp}.xlsx` workbook under
/// `output_dir` (created if absent) and return the saved path.
pub fn write_workbook(
    rows: &[ReportRow],
    output_dir: &Path,
    now: DateTime<Local>,
) -> Result<PathBuf, ReportError> {
    std::fs::create_dir_all(output_dir)?;

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(REPORT_SHEET)?;

    for (col, name) in REPORT_HEADER.iter().enumerate() {
        sheet.write_string(0, col as u16, *name)?;
    }

    for (index, row) in rows.iter().enumerate() {
        let r = (index + 1) as u32;
        sheet.write_string(r, 0, &row.title)?;
        sheet.write_number(r, 1, row.title_length as f64)?;
        sheet.write_boolean(r, 2, row.title_contains_money)?;
        sheet.write_string(r, 3, &row.link)?;
        sheet.write_string(r, 4, &row.source)?;
        sheet.write_string(r, 5, &row.time)?;
        sheet.write_string(r, 6, &row.description)?;
        sheet.write_number(r, 7, row.description_length as f64)?;
        sheet.write_boolean(r, 8, row.description_contains_money)?;
        sheet.write_string(r, 9, &row.image)?;
    }

    let file_name = format!("{}.xlsx", now.format("%Y-%m-%d_%H-%M-%S"));
    let path = output_dir.join(file_name);
    workbook.save(&path)?;

    info!(rows = rows.len(), "results saved to {}", path.display());
    Ok(path)
}
