use std::path::Path;

use rust_xlsxwriter::{Table, Workbook};

use crate::error::Result;
use crate::model::{Cell, Sheet};

/// Writes every sheet to a single workbook at the given path. The workbook
/// is assembled in memory and saved once, so either all sheets land on disk
/// or none do.
pub fn write_workbook(path: &Path, sheets: &[Sheet]) -> Result<()> {
    let mut workbook = Workbook::new();

    for sheet in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&sheet.name)?;

        for (col_idx, header) in sheet.columns.iter().enumerate() {
            worksheet.write_string(0, col_idx as u16, header)?;
        }

        for (row_idx, row) in sheet.rows.iter().enumerate() {
            for (col_idx, cell) in row.iter().enumerate() {
                let (row_num, col_num) = ((row_idx + 1) as u32, col_idx as u16);
                match cell {
                    Cell::Text(value) => {
                        worksheet.write_string(row_num, col_num, value)?;
                    }
                    Cell::Number(value) => {
                        worksheet.write_number(row_num, col_num, *value)?;
                    }
                    Cell::Bool(value) => {
                        worksheet.write_boolean(row_num, col_num, *value)?;
                    }
                    Cell::Empty => {}
                }
            }
        }

        // A worksheet table needs at least one data row; headers-only
        // sheets are written without one.
        if !sheet.rows.is_empty() {
            let mut excel_table = Table::new();
            excel_table.set_autofilter(true);
            let col_end = (sheet.columns.len() as u16).saturating_sub(1);
            worksheet.add_table(0, 0, sheet.rows.len() as u32, col_end, &excel_table)?;
        }
    }

    workbook.save(path)?;
    Ok(())
}
