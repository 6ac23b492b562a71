use std::path::Path;

use calamine::{DataType, Reader, Xlsx, open_workbook};

use crate::error::{ReportError, Result};
use crate::model::{Cell, Sheet};

/// Reads the first worksheet of the workbook at `path` into a [`Sheet`].
/// The first row is treated as the header row; all remaining rows become
/// data rows. The workbook handle is dropped as soon as loading completes.
pub fn read_table(path: &Path) -> Result<Sheet> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| ReportError::InvalidWorkbook("workbook contains no worksheets".into()))?;
    let range = workbook
        .worksheet_range(&sheet_name)
        .ok_or_else(|| ReportError::InvalidWorkbook(format!("missing sheet '{sheet_name}'")))?
        .map_err(ReportError::from)?;

    let mut rows = range.rows();
    let columns: Vec<String> = match rows.next() {
        Some(header_row) => header_row
            .iter()
            .map(|cell| convert_cell(cell).as_text())
            .collect(),
        None => Vec::new(),
    };

    let mut sheet = Sheet::new(sheet_name, columns);
    for row in rows {
        sheet.rows.push(row.iter().map(convert_cell).collect());
    }
    Ok(sheet)
}

fn convert_cell(cell: &DataType) -> Cell {
    match cell {
        DataType::String(value) => Cell::Text(value.clone()),
        DataType::Float(value) => Cell::Number(*value),
        DataType::Int(value) => Cell::Number(*value as f64),
        DataType::Bool(value) => Cell::Bool(*value),
        DataType::Empty => Cell::Empty,
        other => Cell::Text(other.to_string()),
    }
}
