//! # sheet-bridge-core
//!
//! Row/column workbook model for the sheet-bridge converters.
//!
//! This is the shape a spreadsheet file reader hands over and a file writer
//! consumes:
//! - [`CellValue`] - Raw cell values (numbers, strings, dates, formulas, rich text, hyperlinks, errors)
//! - [`CellType`] - The reader's type tag for a cell
//! - [`CellData`] - A stored cell: value plus reader-supplied tag and formula
//! - [`RichText`] and [`RunFont`] - Styled text runs
//! - [`Workbook`], [`Worksheet`] - The document structures
//!
//! ## Example
//!
//! ```rust
//! use sheet_bridge_core::{CellValue, Workbook};
//!
//! let mut workbook = Workbook::new();
//! let sheet = workbook.worksheet_mut(0).unwrap();
//!
//! // Using string addresses
//! sheet.set_cell_value("A1", "Hello").unwrap();
//! sheet.set_cell_value("B1", 42.0).unwrap();
//!
//! // Or using row/column indices (0-based)
//! sheet.set_cell_value_at(1, 0, CellValue::string("World")).unwrap();
//! sheet.set_cell_value_at(1, 1, CellValue::Number(3.14)).unwrap();
//! ```

pub mod cell;
pub mod error;
pub mod rich_text;
pub mod style;
pub mod workbook;
pub mod worksheet;

// Re-exports for convenience
pub use cell::{
    CellAddress, CellData, CellError, CellStorage, CellType, CellValue, Hyperlink, SharedString,
    StringPool,
};
pub use error::{Error, Result};
pub use rich_text::{RichText, RichTextRun};
pub use style::{Color, RunFont, Underline};
pub use workbook::{Workbook, INVALID_SHEET_NAME_CHARS};
pub use worksheet::Worksheet;

/// Maximum number of rows in a worksheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a worksheet (Excel limit)
pub const MAX_COLS: u16 = 16_384;

/// Maximum length of a sheet name
pub const MAX_SHEET_NAME_LEN: usize = 31;
