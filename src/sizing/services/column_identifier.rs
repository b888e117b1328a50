use super::column_sanitizer::ValueScrubber;
use super::similarity::{CandidateSet, Scorer};
use crate::shared::{Result, SizingError};
use crate::sizing::domain::{Catalog, InventoryTable};
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

static RE_COUNT_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bcount\b|#|\bquantity\b").expect("Invalid regex"));

/// ColumnIdentifier - Guesses the layout of an inventory without trusting headers
///
/// The model column is the one whose text looks most like catalog model
/// names. Each distinct text value in a column is scored once with the
/// token-sort scorer against the whole catalog, and the scores are summed.
/// Columns holding only numbers or blanks score 0.
pub struct ColumnIdentifier {
    candidates: CandidateSet,
    scrubber: ValueScrubber,
}

impl ColumnIdentifier {
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            candidates: CandidateSet::from_catalog(catalog),
            scrubber: ValueScrubber::from_catalog(catalog),
        }
    }

    /// Identifies the model column among all columns of the table
    ///
    /// # Errors
    /// `NoModelColumnFound` when no column scores above 0
    pub fn identify_model_column(&self, table: &InventoryTable) -> Result<usize> {
        let columns: Vec<usize> = (0..table.column_count()).collect();
        self.identify_model_column_among(table, &columns)
    }

    /// Identifies the model column among the given candidate columns
    ///
    /// The highest total wins; on equal totals the leftmost column wins.
    ///
    /// # Errors
    /// `NoModelColumnFound` when no candidate scores above 0
    pub fn identify_model_column_among(
        &self,
        table: &InventoryTable,
        columns: &[usize],
    ) -> Result<usize> {
        let mut best: Option<(usize, u64)> = None;
        for &column in columns {
            let score = self.column_score(table, column);
            log::debug!(
                "Column {} ({}) scored {}",
                column,
                table.header(column).unwrap_or("<no header>"),
                score
            );
            if score > best.map_or(0, |(_, top)| top) {
                best = Some((column, score));
            }
        }

        match best {
            Some((column, score)) => {
                log::info!("Identified model column {} with score {}", column, score);
                Ok(column)
            }
            None => Err(SizingError::NoModelColumnFound.into()),
        }
    }

    /// Sum of the best token-sort scores of the column's distinct text values,
    /// each scrubbed before scoring
    pub fn column_score(&self, table: &InventoryTable, column: usize) -> u64 {
        let mut seen = HashSet::new();
        table
            .column(column)
            .filter_map(|cell| cell.as_text())
            .filter(|text| seen.insert(*text))
            .filter_map(|text| {
                self.candidates
                    .best_match(&self.scrubber.scrub(text), Scorer::TokenSort)
            })
            .map(|best| u64::from(best.score))
            .sum()
    }

    /// First column whose header mentions a count, `#` or a quantity
    pub fn identify_count_column(table: &InventoryTable) -> Option<usize> {
        table
            .headers()
            .iter()
            .position(|header| RE_COUNT_HEADER.is_match(header))
    }
}
