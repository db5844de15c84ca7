//! Bulk-data export.
//!
//! Produces a binary spreadsheet named `PREFIX_YYYYMMDD.xlsx` and hands the
//! bytes back for a client-initiated download; nothing is written to disk
//! here.

use chrono::NaiveDate;
use rust_xlsxwriter::{Format, Workbook};

use crate::error::Result;
use crate::models::{Comment, WatchSession};

/// A sheet-shaped view of a record family
pub trait ExportSheet {
    const SHEET_NAME: &'static str;

    fn headers() -> &'static [&'static str];
    fn row(&self) -> Vec<String>;
}

/// The produced download: fixed-prefix dated filename plus the workbook bytes
pub struct ExportArtifact {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// `PREFIX_YYYYMMDD.xlsx`
pub fn export_filename(prefix: &str, date: NaiveDate) -> String {
    format!("{}_{}.xlsx", prefix, date.format("%Y%m%d"))
}

/// Render one record family into a workbook
pub fn export<R: ExportSheet>(prefix: &str, date: NaiveDate, rows: &[R]) -> Result<ExportArtifact> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    let sheet = workbook.add_worksheet();
    sheet.set_name(R::SHEET_NAME)?;

    for (col, header) in R::headers().iter().enumerate() {
        sheet.write_with_format(0, col as u16, *header, &header_format)?;
    }
    for (row_idx, record) in rows.iter().enumerate() {
        for (col, cell) in record.row().iter().enumerate() {
            sheet.write((row_idx + 1) as u32, col as u16, cell.as_str())?;
        }
    }

    Ok(ExportArtifact {
        filename: export_filename(prefix, date),
        bytes: workbook.save_to_buffer()?,
    })
}

impl ExportSheet for WatchSession {
    const SHEET_NAME: &'static str = "Watch Sessions";

    fn headers() -> &'static [&'static str] {
        &[
            "Session", "Video", "User", "Started", "Ended", "Watched %", "Events", "Device",
            "Browser", "OS", "IP",
        ]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.video_id.clone(),
            self.user_id.clone().unwrap_or_else(|| "anonymous".into()),
            self.started_at.to_rfc3339(),
            self.ended_at.map(|t| t.to_rfc3339()).unwrap_or_default(),
            format!("{:.1}", self.percentage_watched),
            self.events.len().to_string(),
            self.client.device.clone(),
            self.client.browser.clone(),
            self.client.os.clone(),
            self.client.ip.clone(),
        ]
    }
}

impl ExportSheet for Comment {
    const SHEET_NAME: &'static str = "Comments";

    fn headers() -> &'static [&'static str] {
        &["Comment", "Video", "User", "Status", "Created", "Text"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.video_id.clone().unwrap_or_default(),
            self.user_id.clone(),
            self.status.as_str().to_string(),
            self.created_at.to_rfc3339(),
            self.text.clone(),
        ]
    }
}
