use crate::sizing::domain::{Catalog, InventoryTable};
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

static RE_IPV4: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^((25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)$",
    )
    .expect("Invalid regex")
});

static RE_MAC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9A-Fa-f]{2}[:-]){5}[0-9A-Fa-f]{2}$|^([0-9A-Fa-f]{4}[:-]){2}[0-9A-Fa-f]{4}$")
        .expect("Invalid regex")
});

static RE_LEADING_SPECIAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^[/"?\\\-^&#!%*()~\[\]{}:';,]"#).expect("Invalid regex"));

static RE_INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-+]?\d+$").expect("Invalid regex"));

static RE_SERIAL_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)serial|\bs/?n\b").expect("Invalid regex"));

/// ColumnSanitizer - Finds columns that carry device identifiers
///
/// Network addresses and serial numbers are never camera models, and they
/// are the kind of data a customer inventory should not leak into reports.
/// A column is sensitive when any of its cells is an IPv4 or MAC address,
/// or when its header names a serial number.
pub struct ColumnSanitizer;

impl ColumnSanitizer {
    /// Returns the indices of sensitive columns, ascending
    pub fn sensitive_columns(table: &InventoryTable) -> Vec<usize> {
        (0..table.column_count())
            .filter(|&column| Self::is_sensitive(table, column))
            .collect()
    }

    /// Returns the indices of all columns that are not sensitive, ascending
    pub fn safe_columns(table: &InventoryTable) -> Vec<usize> {
        (0..table.column_count())
            .filter(|&column| !Self::is_sensitive(table, column))
            .collect()
    }

    fn is_sensitive(table: &InventoryTable, column: usize) -> bool {
        if table.header(column).is_some_and(Self::is_serial_header) {
            log::debug!("Column {} excluded: serial number header", column);
            return true;
        }
        let address = table
            .column(column)
            .filter_map(|cell| cell.as_text())
            .find(|text| Self::is_ip_address(text) || Self::is_mac_address(text));
        if let Some(address) = address {
            log::debug!("Column {} excluded: contains address '{}'", column, address);
            return true;
        }
        false
    }

    pub fn is_ip_address(value: &str) -> bool {
        RE_IPV4.is_match(value.trim())
    }

    pub fn is_mac_address(value: &str) -> bool {
        RE_MAC.is_match(value.trim())
    }

    pub fn is_serial_header(header: &str) -> bool {
        RE_SERIAL_HEADER.is_match(header)
    }
}

/// ValueScrubber - Strips noise tokens from a cell value before scoring
///
/// Whitespace-separated tokens are dropped when they are IPv4 or MAC
/// addresses, start with a punctuation character (`#3`, `(lobby)`), or are
/// bare integers in a value of more than one token. Tokens that appear in a
/// catalog model or manufacturer name are always kept.
#[derive(Debug, Clone, Default)]
pub struct ValueScrubber {
    vocabulary: HashSet<String>,
}

impl ValueScrubber {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let vocabulary = catalog
            .cameras()
            .iter()
            .flat_map(|camera| {
                camera
                    .model_name()
                    .split_whitespace()
                    .chain(camera.manufacturer().split_whitespace())
            })
            .map(str::to_lowercase)
            .collect();
        Self { vocabulary }
    }

    pub fn scrub(&self, value: &str) -> String {
        let tokens: Vec<&str> = value.split_whitespace().collect();
        let multiple_words = tokens.len() > 1;
        let kept: Vec<&str> = tokens
            .into_iter()
            .filter(|token| {
                self.vocabulary.contains(&token.to_lowercase())
                    || !(ColumnSanitizer::is_ip_address(token)
                        || ColumnSanitizer::is_mac_address(token)
                        || RE_LEADING_SPECIAL.is_match(token)
                        || (multiple_words && RE_INTEGER.is_match(token)))
            })
            .collect();
        let scrubbed = kept.join(" ");
        if scrubbed != value.trim() {
            log::debug!("Scrubbed '{}' to '{}'", value, scrubbed);
        }
        scrubbed
    }
}
