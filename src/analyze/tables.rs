//! Table normalization: raw nullable grids into clean string grids.

use crate::model::{RawTable, Table};

/// Normalize one raw table grid.
///
/// Absent cells become empty strings, present cells are trimmed, and
/// the row/column shape is preserved exactly. Idempotent: normalizing
/// an already-normalized grid yields an identical table.
pub fn normalize_table(raw: &RawTable, page_number: u32, index: usize) -> Table {
    let rows = raw
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| cell.as_deref().map_or(String::new(), |c| c.trim().to_string()))
                .collect()
        })
        .collect();
    Table::new(page_number, index, rows)
}

/// Normalize all raw tables on one page, tagging each with its index.
pub fn normalize_page_tables(raw_tables: &[RawTable], page_number: u32) -> Vec<Table> {
    raw_tables
        .iter()
        .enumerate()
        .map(|(index, raw)| normalize_table(raw, page_number, index))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(rows: &[&[Option<&str>]]) -> RawTable {
        rows.iter()
            .map(|row| row.iter().map(|c| c.map(String::from)).collect())
            .collect()
    }

    #[test]
    fn test_null_cells_become_empty() {
        let table = normalize_table(&raw(&[&[Some("a"), None], &[None, Some("b")]]), 1, 0);
        assert_eq!(
            table.rows,
            vec![
                vec!["a".to_string(), String::new()],
                vec![String::new(), "b".to_string()],
            ]
        );
    }

    #[test]
    fn test_cells_trimmed_shape_kept() {
        let table = normalize_table(&raw(&[&[Some("  x  "), Some("y\t")]]), 2, 3);
        assert_eq!(table.rows, vec![vec!["x".to_string(), "y".to_string()]]);
        assert_eq!(table.page_number, 2);
        assert_eq!(table.index, 3);
        assert_eq!(table.column_count(), 2);
    }

    #[test]
    fn test_idempotent() {
        let once = normalize_table(&raw(&[&[Some(" a "), None]]), 1, 0);
        let again: RawTable = once
            .rows
            .iter()
            .map(|row| row.iter().map(|c| Some(c.clone())).collect())
            .collect();
        assert_eq!(normalize_table(&again, 1, 0), once);
    }

    #[test]
    fn test_page_indices() {
        let tables = normalize_page_tables(&[raw(&[&[Some("a")]]), raw(&[&[Some("b")]])], 4);
        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0].index, 0);
        assert_eq!(tables[1].index, 1);
        assert!(tables.iter().all(|t| t.page_number == 4));
    }
}
