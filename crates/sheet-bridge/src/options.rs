//! Conversion options

use sheet_bridge_doc::LocaleType;

/// Minimum row count of a converted sheet; the editor always renders this many
pub const DEFAULT_ROW_COUNT: u32 = 1000;

/// Minimum column count of a converted sheet
pub const DEFAULT_COLUMN_COUNT: u32 = 20;

/// Options for converting a workbook into the document model
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Locale recorded on the snapshot (default: zhCN)
    pub locale: LocaleType,
    /// Workbook display name (default: "workbook")
    pub workbook_name: String,
    /// Editor version the snapshot targets (default: "3.0.0-alpha")
    pub app_version: String,
    /// Row count floor per sheet (default: 1000)
    pub min_row_count: u32,
    /// Column count floor per sheet (default: 20)
    pub min_column_count: u32,
    /// Name of the placeholder sheet created for a sheet-less workbook
    pub default_sheet_name: String,
    /// Width of the row header gutter in pixels
    pub row_header_width: f64,
    /// Height of the column header gutter in pixels
    pub column_header_height: f64,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            locale: LocaleType::ZhCn,
            workbook_name: "workbook".to_string(),
            app_version: "3.0.0-alpha".to_string(),
            min_row_count: DEFAULT_ROW_COUNT,
            min_column_count: DEFAULT_COLUMN_COUNT,
            default_sheet_name: "Sheet1".to_string(),
            row_header_width: 46.0,
            column_header_height: 20.0,
        }
    }
}

impl ConvertOptions {
    /// Create default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the snapshot locale
    pub fn with_locale(mut self, locale: LocaleType) -> Self {
        self.locale = locale;
        self
    }

    /// Set the workbook display name
    pub fn with_workbook_name<S: Into<String>>(mut self, name: S) -> Self {
        self.workbook_name = name.into();
        self
    }

    /// Set the row and column floors
    pub fn with_min_size(mut self, rows: u32, columns: u32) -> Self {
        self.min_row_count = rows;
        self.min_column_count = columns;
        self
    }

    /// Set the placeholder sheet name
    pub fn with_default_sheet_name<S: Into<String>>(mut self, name: S) -> Self {
        self.default_sheet_name = name.into();
        self
    }
}
