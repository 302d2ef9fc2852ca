//! Spreadsheet input loading
//!
//! Parses uploaded CSV/XLSX/XLS files, validates the presence of the
//! `Review` column, and yields the bounded batch of review texts.

use crate::error::{AnalysisError, Result};
use crate::types::ReviewBatch;
use calamine::{open_workbook_auto_from_rs, Reader};
use std::io::Cursor;

/// Upper bound on reviews forwarded to the completion service.
pub const MAX_REVIEWS: usize = 50;

/// Exact name of the required text column.
pub const REVIEW_COLUMN: &str = "Review";

/// Load the review batch from an uploaded file.
///
/// Dispatches on the (case-insensitive) file extension. Rows beyond
/// [`MAX_REVIEWS`] are silently ignored.
pub fn load_reviews(filename: &str, data: &[u8]) -> Result<ReviewBatch> {
    let extension = filename
        .rsplit('.')
        .next()
        .unwrap_or_default()
        .to_lowercase();

    match extension.as_str() {
        "csv" => read_csv(data),
        "xlsx" | "xls" => read_workbook(data),
        _ => Err(AnalysisError::InvalidFormat),
    }
}

fn read_csv(data: &[u8]) -> Result<ReviewBatch> {
    let mut reader = csv::Reader::from_reader(data);

    let headers = reader
        .headers()
        .map_err(|e| AnalysisError::FileRead(e.to_string()))?;
    let column = headers
        .iter()
        .position(|h| h == REVIEW_COLUMN)
        .ok_or(AnalysisError::MissingColumn)?;

    let mut reviews = Vec::new();
    for record in reader.records() {
        if reviews.len() == MAX_REVIEWS {
            break;
        }
        let record = record.map_err(|e| AnalysisError::FileRead(e.to_string()))?;
        reviews.push(record.get(column).unwrap_or_default().to_string());
    }

    Ok(reviews)
}

fn read_workbook(data: &[u8]) -> Result<ReviewBatch> {
    let cursor = Cursor::new(data.to_vec());
    let mut workbook = open_workbook_auto_from_rs(cursor)
        .map_err(|e| AnalysisError::FileRead(e.to_string()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| AnalysisError::FileRead("workbook contains no sheets".to_string()))?
        .map_err(|e| AnalysisError::FileRead(e.to_string()))?;

    let mut rows = range.rows();
    let column = rows
        .next()
        .and_then(|header| header.iter().position(|c| c.to_string() == REVIEW_COLUMN))
        .ok_or(AnalysisError::MissingColumn)?;

    Ok(rows
        .take(MAX_REVIEWS)
        .map(|row| row.get(column).map(|c| c.to_string()).unwrap_or_default())
        .collect())
}
