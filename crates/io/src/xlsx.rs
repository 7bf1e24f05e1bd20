// XLSX export: text-only cells, bold header row, auto-sized columns

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Instant;

use rust_xlsxwriter::{Format, Workbook};

use crate::document::Document;

/// Width units added to the longest cell of each column.
pub const COL_WIDTH_PADDING: usize = 2;
/// Upper bound on any column width.
pub const COL_WIDTH_CAP: usize = 50;

/// Counters reported by a successful export.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExportResult {
    pub rows_written: usize,
    pub cells_written: usize,
    pub export_duration_ms: u128,
}

/// Write the document to `path` as a single-sheet workbook.
///
/// Every cell is written as a string with surrounding whitespace removed.
/// Row 0 gets bold formatting; every other cell carries the text number
/// format ("@") so spreadsheet applications keep values like "007" or
/// long digit strings as text instead of coercing them to numbers.
pub fn export(doc: &Document, path: &Path) -> Result<ExportResult, String> {
    let start_time = Instant::now();
    let mut result = ExportResult::default();

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    let header_format = Format::new().set_bold();
    let text_format = Format::new().set_num_format("@");

    // Max observed trimmed length per column, updated once per cell
    let mut col_widths: BTreeMap<u16, usize> = BTreeMap::new();

    for (row_idx, row) in doc.rows().iter().enumerate() {
        let row32 = u32::try_from(row_idx).map_err(|_| format!("row {row_idx} out of range"))?;
        for (col_idx, field) in row.iter().enumerate() {
            let col16 =
                u16::try_from(col_idx).map_err(|_| format!("column {col_idx} out of range"))?;
            let value = field.trim();
            let format = if row_idx == 0 { &header_format } else { &text_format };

            worksheet
                .write_string_with_format(row32, col16, value, format)
                .map_err(|e| format!("failed to write cell ({row_idx}, {col_idx}): {e}"))?;

            let width = display_len(value);
            let max = col_widths.entry(col16).or_insert(0);
            if width > *max {
                *max = width;
            }
            result.cells_written += 1;
        }
        result.rows_written += 1;
    }

    for (col, width) in plan_column_widths(&col_widths) {
        worksheet
            .set_column_width(col, width)
            .map_err(|e| format!("failed to set column {col} width: {e}"))?;
    }

    workbook
        .save(path)
        .map_err(|e| format!("failed to save {}: {e}", path.display()))?;

    result.export_duration_ms = start_time.elapsed().as_millis();
    Ok(result)
}

/// Cell length in characters, not bytes.
fn display_len(value: &str) -> usize {
    value.chars().count()
}

/// Final display width per column: longest trimmed cell plus padding, capped.
fn plan_column_widths(col_widths: &BTreeMap<u16, usize>) -> Vec<(u16, f64)> {
    col_widths
        .iter()
        .map(|(&col, &max_len)| {
            let width = (max_len + COL_WIDTH_PADDING).min(COL_WIDTH_CAP);
            (col, width as f64)
        })
        .collect()
}
