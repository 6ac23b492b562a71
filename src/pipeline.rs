use std::path::Path;

use tracing::{debug, info, instrument};

use crate::analyze;
use crate::columns;
use crate::error::{ReportError, Result};
use crate::io::{excel_read, excel_write};
use crate::model::Cell;
use crate::report;

/// Runs the whole batch: loads the customer export, analyses duplicate
/// addresses, builds the annotated and summary sheets, and writes them to
/// the output workbook.
#[instrument(
    level = "info",
    skip_all,
    fields(input = %input.display(), output = %output.display())
)]
pub fn generate_report(input: &Path, output: &Path, top_n: usize) -> Result<()> {
    let sheet = excel_read::read_table(input)?;
    info!(
        row_count = sheet.rows.len(),
        column_count = sheet.columns.len(),
        "loaded input worksheet"
    );

    let address_column = sheet
        .columns
        .iter()
        .position(|header| header == columns::ADDRESS_COLUMN)
        .ok_or_else(|| ReportError::MissingColumn(columns::ADDRESS_COLUMN.to_string()))?;
    let roles = columns::resolve_roles(&sheet.columns);
    debug!(?roles, "resolved column roles");

    let addresses: Vec<String> = sheet
        .rows
        .iter()
        .map(|row| {
            row.get(address_column)
                .map(Cell::as_text)
                .unwrap_or_default()
        })
        .collect();
    let analysis = analyze::analyze_addresses(&addresses, top_n);
    info!(
        distinct = analysis.counts.len(),
        ranked = analysis.top.len(),
        "analysed addresses"
    );

    let annotated = report::build_annotated(&sheet, &analysis);
    let mut summary = report::build_summary(&sheet, &analysis, &roles);
    if roles.org_unit.is_some() {
        summary = report::filter_by_org_unit(summary);
    }
    debug!(summary_rows = summary.rows.len(), "report assembled");

    excel_write::write_workbook(output, &[annotated, summary])
}
