//! Cell storage implementation
//!
//! Sparse storage for worksheet cells. Only non-empty cells are stored, in a
//! row-based BTreeMap structure.

use std::collections::BTreeMap;

use super::{CellType, CellValue, StringPool};

/// Complete data for a single cell
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CellData {
    /// The cell's value
    pub value: CellValue,
    /// Type tag reported by the reader, if it reported one
    pub declared_type: Option<CellType>,
    /// Formula text reported by the reader alongside the value
    ///
    /// Readers that expand shared formulas report the expanded text here
    /// while the value holds only the result.
    pub formula: Option<String>,
}

impl CellData {
    /// Create a new cell with a value
    pub fn new(value: CellValue) -> Self {
        Self {
            value,
            declared_type: None,
            formula: None,
        }
    }

    /// Set the reader's type tag
    pub fn with_declared_type(mut self, cell_type: CellType) -> Self {
        self.declared_type = Some(cell_type);
        self
    }

    /// Set the reader-supplied formula text
    pub fn with_formula<S: Into<String>>(mut self, formula: S) -> Self {
        self.formula = Some(formula.into());
        self
    }

    /// The declared type tag, or the one inferred from the value
    pub fn value_type(&self) -> CellType {
        self.declared_type
            .unwrap_or_else(|| self.value.value_type())
    }

    /// Check if this cell carries nothing worth storing
    pub fn is_empty(&self) -> bool {
        self.value.is_empty() && self.formula.is_none() && self.declared_type.is_none()
    }
}

/// Sparse row-based storage for worksheet cells
///
/// Structure: `BTreeMap<row_index, BTreeMap<col_index, CellData>>`, so
/// iteration is always row-major.
#[derive(Debug, Default)]
pub struct CellStorage {
    /// Row index → column map
    rows: BTreeMap<u32, BTreeMap<u16, CellData>>,

    /// Shared string pool for deduplication
    pub(crate) string_pool: StringPool,
}

impl CellStorage {
    /// Create a new empty cell storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a cell
    pub fn get(&self, row: u32, col: u16) -> Option<&CellData> {
        self.rows.get(&row).and_then(|r| r.get(&col))
    }

    /// Get a mutable cell
    pub fn get_mut(&mut self, row: u32, col: u16) -> Option<&mut CellData> {
        self.rows.get_mut(&row).and_then(|r| r.get_mut(&col))
    }

    /// Set a cell
    ///
    /// If the cell data is empty, the cell is removed.
    pub fn set(&mut self, row: u32, col: u16, data: CellData) {
        if data.is_empty() {
            self.remove(row, col);
        } else {
            self.rows.entry(row).or_default().insert(col, data);
        }
    }

    /// Set just the cell value (preserving the reader metadata)
    pub fn set_value(&mut self, row: u32, col: u16, value: CellValue) {
        if let Some(cell) = self.get_mut(row, col) {
            cell.value = value;
            if cell.is_empty() {
                self.remove(row, col);
            }
        } else if !value.is_empty() {
            self.set(row, col, CellData::new(value));
        }
    }

    /// Remove a cell
    pub fn remove(&mut self, row: u32, col: u16) -> Option<CellData> {
        let row_map = self.rows.get_mut(&row)?;
        let result = row_map.remove(&col);
        if row_map.is_empty() {
            self.rows.remove(&row);
        }
        result
    }

    /// Get the number of stored cells
    pub fn cell_count(&self) -> usize {
        self.rows.values().map(|r| r.len()).sum()
    }

    /// Check if storage is empty
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get the bounds of used cells
    ///
    /// Returns (min_row, min_col, max_row, max_col) or None if empty
    pub fn used_bounds(&self) -> Option<(u32, u16, u32, u16)> {
        let min_row = *self.rows.keys().next()?;
        let max_row = *self.rows.keys().next_back()?;

        let mut min_col = u16::MAX;
        let mut max_col = 0u16;
        for row_data in self.rows.values() {
            if let Some(&col) = row_data.keys().next() {
                min_col = min_col.min(col);
            }
            if let Some(&col) = row_data.keys().next_back() {
                max_col = max_col.max(col);
            }
        }

        Some((min_row, min_col, max_row, max_col))
    }

    /// Iterate over all cells in row order
    pub fn iter(&self) -> impl Iterator<Item = (u32, u16, &CellData)> {
        self.rows
            .iter()
            .flat_map(|(&row, cols)| cols.iter().map(move |(&col, data)| (row, col, data)))
    }

    /// Get the string pool
    pub fn string_pool(&self) -> &StringPool {
        &self.string_pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_set_and_get() {
        let mut storage = CellStorage::new();
        storage.set_value(0, 0, CellValue::Number(1.0));
        storage.set_value(5, 2, CellValue::string("x"));

        assert_eq!(storage.get(0, 0).unwrap().value, CellValue::Number(1.0));
        assert!(storage.get(1, 1).is_none());
        assert_eq!(storage.cell_count(), 2);
    }

    #[test]
    fn test_empty_value_removes_cell() {
        let mut storage = CellStorage::new();
        storage.set_value(3, 3, CellValue::Boolean(true));
        storage.set_value(3, 3, CellValue::Empty);

        assert!(storage.is_empty());
        assert_eq!(storage.used_bounds(), None);
    }

    #[test]
    fn test_reader_metadata_keeps_empty_value() {
        let mut storage = CellStorage::new();
        storage.set(
            0,
            0,
            CellData::new(CellValue::Empty).with_declared_type(CellType::Merge),
        );

        assert_eq!(storage.cell_count(), 1);
        assert_eq!(storage.get(0, 0).unwrap().value_type(), CellType::Merge);
    }

    #[test]
    fn test_iteration_is_row_major() {
        let mut storage = CellStorage::new();
        storage.set_value(2, 0, CellValue::Number(3.0));
        storage.set_value(0, 1, CellValue::Number(2.0));
        storage.set_value(0, 0, CellValue::Number(1.0));

        let order: Vec<(u32, u16)> = storage.iter().map(|(r, c, _)| (r, c)).collect();
        assert_eq!(order, vec![(0, 0), (0, 1), (2, 0)]);
        assert_eq!(storage.used_bounds(), Some((0, 0, 2, 1)));
    }
}
