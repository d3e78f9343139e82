//! In-memory snapshot of a tabular dataset.

use serde::{Deserialize, Serialize};

/// The tabular payload an agent is built over.
///
/// Loading and parsing the underlying file is a collaborator's job; by the
/// time a snapshot reaches the factory it is already in memory. The session
/// cache passes it through without inspecting it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetSnapshot {
    /// Column names, in file order.
    pub columns: Vec<String>,

    /// Row values, each aligned with `columns`.
    pub rows: Vec<Vec<String>>,
}

impl DatasetSnapshot {
    /// Create an empty snapshot with the given columns.
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Append a row.
    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Check if the snapshot holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let mut snapshot =
            DatasetSnapshot::new(vec!["city".to_string(), "population".to_string()]);
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.column_count(), 2);

        snapshot.push_row(vec!["Lisbon".to_string(), "545923".to_string()]);
        snapshot.push_row(vec!["Porto".to_string(), "231800".to_string()]);
        assert_eq!(snapshot.row_count(), 2);
        assert!(!snapshot.is_empty());
    }
}
