use std::fmt;

static BLANK_CELL: Cell = Cell::Blank;

/// Largest quantity a single inventory row may claim
pub const MAX_ROW_QUANTITY: u64 = 1_000_000;

/// A spreadsheet cell, classified once when the table is loaded
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Blank,
    Numeric(f64),
    Text(String),
}

impl Cell {
    /// Classifies a raw cell value.
    ///
    /// Whitespace-only values are blank. Values that parse as a finite
    /// number after trimming are numeric. Text keeps its original spelling.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Cell::Blank;
        }
        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => Cell::Numeric(value),
            _ => Cell::Text(raw.to_string()),
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Cell::Blank)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Numeric(value) => Some(*value),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Blank => Ok(()),
            Cell::Numeric(value) => write!(f, "{}", value),
            Cell::Text(text) => f.write_str(text),
        }
    }
}

impl From<&str> for Cell {
    fn from(raw: &str) -> Self {
        Cell::parse(raw)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Numeric(value)
    }
}

/// The customer inventory as handed over by the import layer.
///
/// Headers are optional and unreliable; rows may be ragged, and missing
/// trailing cells read as blank.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InventoryTable {
    headers: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl InventoryTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        Self { headers, rows }
    }

    /// Builds a table from raw strings, classifying every cell
    pub fn from_strings<H, R>(headers: &[H], rows: &[Vec<R>]) -> Self
    where
        H: AsRef<str>,
        R: AsRef<str>,
    {
        Self {
            headers: headers.iter().map(|h| h.as_ref().to_string()).collect(),
            rows: rows
                .iter()
                .map(|row| row.iter().map(|cell| Cell::parse(cell.as_ref())).collect())
                .collect(),
        }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn header(&self, column: usize) -> Option<&str> {
        self.headers.get(column).map(String::as_str)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.rows
            .iter()
            .map(Vec::len)
            .max()
            .unwrap_or(0)
            .max(self.headers.len())
    }

    pub fn cell(&self, row: usize, column: usize) -> &Cell {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .unwrap_or(&BLANK_CELL)
    }

    pub fn column(&self, column: usize) -> impl Iterator<Item = &Cell> {
        self.rows
            .iter()
            .map(move |cells| cells.get(column).unwrap_or(&BLANK_CELL))
    }

    /// Projects the table onto inventory rows.
    ///
    /// With a count column every row carries an explicit quantity; a
    /// quantity cell that is not a whole number in `0..=MAX_ROW_QUANTITY`
    /// counts as 1.
    pub fn inventory_rows(&self, model_column: usize, count_column: Option<usize>) -> Vec<InventoryRow> {
        (0..self.rows.len())
            .map(|row| {
                let model = self.cell(row, model_column).clone();
                let quantity = count_column.map(|column| parse_quantity(self.cell(row, column), row));
                InventoryRow::new(model, quantity)
            })
            .collect()
    }
}

fn parse_quantity(cell: &Cell, row: usize) -> u64 {
    match cell.as_number() {
        Some(value) if value >= 0.0 && value.fract() == 0.0 && value <= MAX_ROW_QUANTITY as f64 => {
            value as u64
        }
        Some(value) if value.fract() == 0.0 && value > MAX_ROW_QUANTITY as f64 => {
            log::warn!(
                "Row {}: quantity {} exceeds {}, counting the row once",
                row + 1,
                cell,
                MAX_ROW_QUANTITY
            );
            1
        }
        _ => {
            log::warn!(
                "Row {}: quantity cell '{}' is not a whole number, counting the row once",
                row + 1,
                cell
            );
            1
        }
    }
}

/// One inventory line: the model cell and, when a count column exists, its quantity
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryRow {
    model: Cell,
    quantity: Option<u64>,
}

impl InventoryRow {
    pub fn new(model: Cell, quantity: Option<u64>) -> Self {
        Self { model, quantity }
    }

    pub fn model(&self) -> &Cell {
        &self.model
    }

    pub fn explicit_quantity(&self) -> Option<u64> {
        self.quantity
    }

    /// Number of cameras this row stands for
    pub fn quantity(&self) -> u64 {
        self.quantity.unwrap_or(1)
    }
}
