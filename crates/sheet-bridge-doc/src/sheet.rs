//! Worksheet records of the document model

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::cell::{BooleanNumber, CellData};

/// Sparse cell grid: row key → column key → cell
///
/// Keys are kept as the decimal strings that appear in the JSON snapshot, so
/// a snapshot with a malformed key still loads; consumers parse keys with
/// [`CellMatrix::parse_index`] and skip what does not parse.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CellMatrix(BTreeMap<String, BTreeMap<String, CellData>>);

impl CellMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a cell at a 0-based position
    pub fn insert(&mut self, row: u32, col: u32, cell: CellData) {
        self.0
            .entry(row.to_string())
            .or_default()
            .insert(col.to_string(), cell);
    }

    /// Store a cell under raw keys, bypassing index formatting
    pub fn insert_raw<R: Into<String>, C: Into<String>>(&mut self, row: R, col: C, cell: CellData) {
        self.0.entry(row.into()).or_default().insert(col.into(), cell);
    }

    /// Look up a cell by 0-based position
    pub fn get(&self, row: u32, col: u32) -> Option<&CellData> {
        self.0.get(&row.to_string())?.get(&col.to_string())
    }

    /// Iterate rows as (row key, column map)
    pub fn rows(&self) -> impl Iterator<Item = (&str, &BTreeMap<String, CellData>)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of stored cells
    pub fn cell_count(&self) -> usize {
        self.0.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.cell_count() == 0
    }

    /// Parse a row/column key into an index
    ///
    /// Accepts what a JavaScript `Number(key)` conversion would turn into a
    /// non-negative integer (surrounding whitespace, `"3.0"`); anything else
    /// is `None`.
    pub fn parse_index(key: &str) -> Option<u32> {
        let key = key.trim();
        if key.is_empty() {
            return None;
        }
        if let Ok(index) = key.parse::<u32>() {
            return Some(index);
        }
        let n: f64 = key.parse().ok()?;
        if n.is_finite() && n >= 0.0 && n.fract() == 0.0 && n <= u32::MAX as f64 {
            Some(n as u32)
        } else {
            None
        }
    }
}

/// Row header (left gutter) settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowHeader {
    pub width: f64,
    #[serde(default)]
    pub hidden: BooleanNumber,
}

/// Column header (top gutter) settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnHeader {
    pub height: f64,
    #[serde(default)]
    pub hidden: BooleanNumber,
}

/// One sheet of the document model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorksheetData {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub cell_data: CellMatrix,
    #[serde(default)]
    pub row_count: u32,
    #[serde(default)]
    pub column_count: u32,
    #[serde(default)]
    pub hidden: BooleanNumber,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_header: Option<RowHeader>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_header: Option<ColumnHeader>,
    #[serde(default)]
    pub right_to_left: BooleanNumber,
}

impl WorksheetData {
    /// Create an empty, visible sheet with no sizing
    pub fn new<I: Into<String>, N: Into<String>>(id: I, name: N) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            cell_data: CellMatrix::new(),
            row_count: 0,
            column_count: 0,
            hidden: BooleanNumber::False,
            row_header: None,
            column_header: None,
            right_to_left: BooleanNumber::False,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::CellScalar;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_matrix_keyed_access() {
        let mut matrix = CellMatrix::new();
        matrix.insert(2, 5, CellData::number(1.0));
        matrix.insert(2, 0, CellData::string("a"));

        assert_eq!(matrix.get(2, 5), Some(&CellData::number(1.0)));
        assert_eq!(matrix.get(5, 2), None);
        assert_eq!(matrix.cell_count(), 2);
        assert_eq!(matrix.rows().count(), 1);
    }

    #[test]
    fn test_matrix_keeps_malformed_keys() {
        let json = r#"{ "0": { "1": { "v": 1 } }, "x": { "0": { "v": 2 } } }"#;
        let matrix: CellMatrix = serde_json::from_str(json).unwrap();

        let keys: Vec<&str> = matrix.rows().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["0", "x"]);
        assert_eq!(matrix.get(0, 1).unwrap().value, Some(CellScalar::Number(1.0)));
    }

    #[test]
    fn test_parse_index() {
        assert_eq!(CellMatrix::parse_index("12"), Some(12));
        assert_eq!(CellMatrix::parse_index(" 3 "), Some(3));
        assert_eq!(CellMatrix::parse_index("4.0"), Some(4));
        assert_eq!(CellMatrix::parse_index("abc"), None);
        assert_eq!(CellMatrix::parse_index(""), None);
        assert_eq!(CellMatrix::parse_index("-1"), None);
        assert_eq!(CellMatrix::parse_index("1.5"), None);
    }

    #[test]
    fn test_sheet_serializes_camel_case() {
        let mut sheet = WorksheetData::new("s1", "Data");
        sheet.row_count = 1000;
        sheet.column_count = 20;
        sheet.row_header = Some(RowHeader {
            width: 46.0,
            hidden: BooleanNumber::False,
        });

        let json = serde_json::to_value(&sheet).unwrap();
        assert_eq!(json["rowCount"], 1000);
        assert_eq!(json["columnCount"], 20);
        assert_eq!(json["rowHeader"]["width"], 46.0);
        assert_eq!(json["rightToLeft"], 0);
        assert!(json.get("columnHeader").is_none());
    }
}
