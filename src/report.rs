use tracing::warn;

use crate::analyze::AddressAnalysis;
use crate::columns::ResolvedRoles;
use crate::model::{Cell, Sheet};
use crate::normalize::normalize_text;

/// Sheet holding the annotated copy of the input dataset.
pub const ALL_ADDRESSES_SHEET: &str = "Todos_Enderecos";
/// Sheet holding the duplicate summary.
pub const SUMMARY_SHEET: &str = "Resumo";
/// Derived column flagging each row as duplicate or unique.
pub const DUPLICATE_FLAG_COLUMN: &str = "Endereco_Repetido";
/// Derived column holding each row's group size.
pub const REPEAT_COUNT_COLUMN: &str = "Qtd_Repeticoes";
/// Summary org-unit header used when no org-unit column was resolved.
pub const DEFAULT_ORG_UNIT_COLUMN: &str = "Estrutura";

const SUMMARY_FIXED_COLUMNS: [&str; 5] = [
    "Endereco",
    "Quantidade",
    "Cliente",
    "CodigoRevendedor",
    "Bloqueado",
];

const ORG_UNIT_FILTER_TERM: &str = "central";
// The qualifier variants are redundant with each other but kept as the
// business rule was stated: a row matches on any of them.
const ORG_UNIT_FILTER_QUALIFIERS: [&str; 3] = ["inic", "inicio", "inicios"];

/// Copies the input sheet and appends the duplicate flag and repeat count
/// columns. Original cell values are preserved unchanged.
pub fn build_annotated(input: &Sheet, analysis: &AddressAnalysis) -> Sheet {
    let mut columns = input.columns.clone();
    columns.push(DUPLICATE_FLAG_COLUMN.to_string());
    columns.push(REPEAT_COUNT_COLUMN.to_string());

    let mut annotated = Sheet::new(ALL_ADDRESSES_SHEET, columns);
    for (row_idx, row) in input.rows.iter().enumerate() {
        let mut cells = row.clone();
        cells.push(Cell::Text(analysis.label(row_idx).to_string()));
        cells.push(Cell::Number(analysis.repeat_count(row_idx) as f64));
        annotated.rows.push(cells);
    }
    annotated
}

/// Builds the summary sheet: one row per record belonging to a ranked
/// address group, in ranking order, original row order within each group.
/// Unresolved roles and blank cells contribute empty strings.
pub fn build_summary(input: &Sheet, analysis: &AddressAnalysis, roles: &ResolvedRoles) -> Sheet {
    let org_unit_column = roles
        .org_unit
        .and_then(|index| input.columns.get(index).cloned())
        .unwrap_or_else(|| DEFAULT_ORG_UNIT_COLUMN.to_string());

    let mut columns: Vec<String> = SUMMARY_FIXED_COLUMNS
        .iter()
        .map(|name| name.to_string())
        .collect();
    columns.push(org_unit_column);

    let mut summary = Sheet::new(SUMMARY_SHEET, columns);
    for ranked in &analysis.top {
        for (row_idx, key) in analysis.keys.iter().enumerate() {
            if key != &ranked.address {
                continue;
            }
            let role_text = |role: Option<usize>| {
                role.map(|column| input.cell_text(row_idx, column))
                    .unwrap_or_default()
            };
            summary.rows.push(vec![
                Cell::Text(ranked.address.clone()),
                Cell::Number(ranked.count as f64),
                Cell::Text(role_text(roles.name)),
                Cell::Text(role_text(roles.code)),
                Cell::Text(role_text(roles.blocked)),
                Cell::Text(role_text(roles.org_unit)),
            ]);
        }
    }
    summary
}

/// Keeps only summary rows whose normalized org-unit value matches the
/// target category. If the filter would discard every row of a non-empty
/// summary, the unfiltered summary is restored and a warning logged.
pub fn filter_by_org_unit(summary: Sheet) -> Sheet {
    let org_index = summary.columns.len().saturating_sub(1);
    let kept: Vec<Vec<Cell>> = summary
        .rows
        .iter()
        .filter(|row| {
            let value = row.get(org_index).map(Cell::as_text).unwrap_or_default();
            let normalized = normalize_text(&value);
            normalized.contains(ORG_UNIT_FILTER_TERM)
                && ORG_UNIT_FILTER_QUALIFIERS
                    .iter()
                    .any(|qualifier| normalized.contains(qualifier))
        })
        .cloned()
        .collect();

    if kept.is_empty() && !summary.rows.is_empty() {
        warn!(
            row_count = summary.rows.len(),
            "org-unit filter matched no rows, keeping the unfiltered summary"
        );
        return summary;
    }

    Sheet {
        rows: kept,
        ..summary
    }
}
