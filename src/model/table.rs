//! Normalized table type.

use serde::{Deserialize, Serialize};

/// A normalized 2-D grid of strings, tagged with its position in the
/// document. Absent cells have already been replaced by empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Page number (1-indexed) the table was found on
    pub page_number: u32,

    /// Index of the table within its page (0-indexed)
    pub index: usize,

    /// Rows of cells; row/column shape matches the raw grid exactly
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Create a new table.
    pub fn new(page_number: u32, index: usize, rows: Vec<Vec<String>>) -> Self {
        Self {
            page_number,
            index,
            rows,
        }
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of columns (based on first row).
    pub fn column_count(&self) -> usize {
        self.rows.first().map(|r| r.len()).unwrap_or(0)
    }

    /// Check if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render rows as lines with cells joined by the given separator.
    pub fn rows_joined(&self, separator: &str) -> Vec<String> {
        self.rows.iter().map(|row| row.join(separator)).collect()
    }
}
