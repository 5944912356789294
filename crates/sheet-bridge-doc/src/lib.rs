//! # sheet-bridge-doc
//!
//! The sparse, sheet-indexed document model used by the in-browser
//! spreadsheet editor, with serde mappings that match the editor's JSON
//! snapshots field for field.
//!
//! - [`WorkbookData`] - Workbook snapshot: sheet order plus sheets by id
//! - [`WorksheetData`] - One sheet: sparse [`CellMatrix`] and grid sizing
//! - [`CellData`] - One cell: `v` / `t` / `f` / `p`
//! - [`DocumentData`] - Rich text payload: `dataStream` + `textRuns`
//!
//! ## Example
//!
//! ```rust
//! use sheet_bridge_doc::{CellData, CellValueType, WorkbookData};
//!
//! let json = r#"{
//!     "id": "wb", "name": "workbook", "locale": "enUS",
//!     "sheetOrder": ["s1"],
//!     "sheets": { "s1": { "id": "s1", "name": "Data",
//!         "cellData": { "0": { "0": { "v": 42, "t": 2 } } } } }
//! }"#;
//!
//! let workbook = WorkbookData::from_json(json).unwrap();
//! let cell = workbook.sheets["s1"].cell_data.get(0, 0).unwrap();
//! assert_eq!(cell, &CellData::number(42.0));
//! assert_eq!(cell.value_type, Some(CellValueType::Number));
//! ```

pub mod cell;
pub mod document;
pub mod error;
mod lenient;
pub mod sheet;
pub mod workbook;

pub use cell::{BooleanNumber, CellData, CellScalar, CellValueType};
pub use document::{
    ColorStyle, DocumentBody, DocumentData, DocumentStyle, Paragraph, TextDecoration, TextRun,
    TextStyle, PARAGRAPH_END,
};
pub use error::{DocumentError, DocumentResult};
pub use sheet::{CellMatrix, ColumnHeader, RowHeader, WorksheetData};
pub use workbook::{LocaleType, WorkbookData};
