//! # sheet-bridge
//!
//! Converts between a row/column workbook (the shape spreadsheet file
//! readers produce) and the sheet-indexed document model a browser
//! spreadsheet editor loads and saves as its JSON snapshot.
//!
//! ## Features
//!
//! - Workbook → snapshot: cell values, formulas with cached results, dates,
//!   hyperlinks, error values and styled rich text
//! - Snapshot → workbook: type hints, formulas and rich text back into cell
//!   values at the same positions
//! - Malformed snapshots load as far as possible; problems are logged
//!   through the `log` facade instead of failing the conversion
//!
//! ## Example
//!
//! ```rust
//! use sheet_bridge::prelude::*;
//!
//! let mut workbook = Workbook::new();
//! let sheet = workbook.worksheet_mut(0).unwrap();
//! sheet.set_cell_value("A1", "Hello").unwrap();
//! sheet.set_cell_value("B1", 42.0).unwrap();
//!
//! let snapshot = workbook.to_document_model();
//! assert_eq!(snapshot.sheet_order.len(), 1);
//!
//! let restored = Workbook::from_document_model(&snapshot);
//! let sheet = restored.worksheet(0).unwrap();
//! assert_eq!(sheet.get_value("B1").unwrap(), CellValue::Number(42.0));
//! ```

pub mod classify;
pub mod forward;
pub mod ids;
pub mod options;
pub mod prelude;
pub mod resolve;
pub mod reverse;
pub mod rich_text;

pub use classify::{to_document_cell, SourceCell};
pub use forward::{to_document_model, to_document_model_with};
pub use ids::{IdGenerator, IdKind, SequentialIds, TimestampIds};
pub use options::{ConvertOptions, DEFAULT_COLUMN_COUNT, DEFAULT_ROW_COUNT};
pub use resolve::resolve_cell;
pub use reverse::from_document_model;
pub use rich_text::{
    decode_rich_text, decode_runs, encode_rich_text, font_to_text_style, text_style_to_font,
    DecodedRun,
};

// Re-export the row/column model
pub use sheet_bridge_core::{
    CellAddress, CellData, CellError, CellType, CellValue, Color, Error, Hyperlink, Result,
    RichText, RichTextRun, RunFont, Underline, Workbook, Worksheet, MAX_COLS, MAX_ROWS,
    MAX_SHEET_NAME_LEN,
};

// Re-export the document model
pub use sheet_bridge_doc as doc;
pub use sheet_bridge_doc::{DocumentError, DocumentResult, LocaleType, WorkbookData, WorksheetData};

/// Extension trait for Workbook to add document model conversion
pub trait WorkbookExt {
    /// Convert into a document model snapshot with default options
    fn to_document_model(&self) -> WorkbookData;

    /// Build a workbook from a document model snapshot
    fn from_document_model(data: &WorkbookData) -> Workbook;

    /// Build a workbook from the editor's JSON snapshot text
    fn from_document_json(json: &str) -> DocumentResult<Workbook>;
}

impl WorkbookExt for Workbook {
    fn to_document_model(&self) -> WorkbookData {
        forward::to_document_model(self)
    }

    fn from_document_model(data: &WorkbookData) -> Workbook {
        reverse::from_document_model(data)
    }

    fn from_document_json(json: &str) -> DocumentResult<Workbook> {
        let data = WorkbookData::from_json(json)?;
        Ok(reverse::from_document_model(&data))
    }
}
