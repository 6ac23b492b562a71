use serde::{Deserialize, Serialize};

/// Represents a single spreadsheet cell value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Cell {
    /// Plain text cell.
    Text(String),
    /// Numeric cell.
    Number(f64),
    /// Boolean cell.
    Bool(bool),
    /// Blank cell.
    Empty,
}

impl Cell {
    /// Converts the cell into its display text. Blank cells yield the empty
    /// string, never an error.
    pub fn as_text(&self) -> String {
        match self {
            Cell::Text(value) => value.clone(),
            Cell::Number(value) => value.to_string(),
            Cell::Bool(value) => value.to_string(),
            Cell::Empty => String::new(),
        }
    }
}

/// A table materialised as one worksheet: ordered column headers plus rows
/// of cells. Used both for the loaded input dataset and for the generated
/// output sheets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sheet {
    /// Worksheet name.
    pub name: String,
    /// Column headers, in sheet order.
    pub columns: Vec<String>,
    /// Data rows, excluding the header row.
    pub rows: Vec<Vec<Cell>>,
}

impl Sheet {
    /// Creates an empty sheet with the provided name and headers.
    pub fn new(name: impl Into<String>, columns: Vec<String>) -> Self {
        Self {
            name: name.into(),
            columns,
            rows: Vec::new(),
        }
    }

    /// Display text of the cell at (row, column). Out-of-range positions
    /// yield the empty string.
    pub fn cell_text(&self, row: usize, column: usize) -> String {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .map(Cell::as_text)
            .unwrap_or_default()
    }
}
