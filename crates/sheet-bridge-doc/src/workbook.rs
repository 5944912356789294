//! Workbook snapshot of the document model

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::document::TextStyle;
use crate::error::DocumentResult;
use crate::sheet::WorksheetData;

/// UI locale of a workbook snapshot
///
/// Locales the editor added later are kept verbatim in [`LocaleType::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LocaleType {
    #[serde(rename = "enUS")]
    EnUs,
    #[default]
    #[serde(rename = "zhCN")]
    ZhCn,
    #[serde(rename = "zhTW")]
    ZhTw,
    #[serde(rename = "ruRU")]
    RuRu,
    #[serde(rename = "viVN")]
    ViVn,
    #[serde(rename = "faIR")]
    FaIr,
    #[serde(rename = "frFR")]
    FrFr,
    #[serde(rename = "koKR")]
    KoKr,
    #[serde(rename = "esES")]
    EsEs,
    #[serde(untagged)]
    Other(String),
}

/// A workbook snapshot: sheets by id plus their tab order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkbookData {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_version: Option<String>,
    #[serde(default)]
    pub locale: LocaleType,
    /// Shared style table referenced by cells; never populated by conversion
    #[serde(default)]
    pub styles: BTreeMap<String, TextStyle>,
    /// Sheet ids in tab order
    #[serde(default)]
    pub sheet_order: Vec<String>,
    #[serde(default)]
    pub sheets: BTreeMap<String, WorksheetData>,
}

impl WorkbookData {
    /// Create a snapshot with no sheets
    pub fn new<I: Into<String>, N: Into<String>>(id: I, name: N) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            app_version: None,
            locale: LocaleType::default(),
            styles: BTreeMap::new(),
            sheet_order: Vec::new(),
            sheets: BTreeMap::new(),
        }
    }

    /// Append a sheet at the end of the tab order
    pub fn push_sheet(&mut self, sheet: WorksheetData) {
        self.sheet_order.push(sheet.id.clone());
        self.sheets.insert(sheet.id.clone(), sheet);
    }

    /// Sheets in tab order, skipping ids with no sheet entry
    pub fn ordered_sheets(&self) -> impl Iterator<Item = &WorksheetData> {
        self.sheet_order.iter().filter_map(|id| self.sheets.get(id))
    }

    /// Parse a JSON snapshot
    pub fn from_json(json: &str) -> DocumentResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to compact JSON
    pub fn to_json(&self) -> DocumentResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to indented JSON
    pub fn to_json_pretty(&self) -> DocumentResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
