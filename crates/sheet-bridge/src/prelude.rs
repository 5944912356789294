//! Prelude module - common imports for sheet-bridge users
//!
//! ```rust
//! use sheet_bridge::prelude::*;
//! ```

pub use crate::{
    // Conversion
    from_document_model,
    to_document_model,
    to_document_model_with,
    ConvertOptions,
    IdGenerator,
    SequentialIds,
    TimestampIds,
    // Extension traits
    WorkbookExt,

    // Row/column model
    CellError,
    CellValue,
    Color,
    Error,
    Hyperlink,
    Result,
    RichText,
    RunFont,
    Underline,
    Workbook,
    Worksheet,

    // Document model
    DocumentError,
    LocaleType,
    WorkbookData,
    WorksheetData,
};
