//! Document model → workbook conversion

use sheet_bridge_core::{
    CellValue, Workbook, Worksheet, INVALID_SHEET_NAME_CHARS, MAX_SHEET_NAME_LEN,
};
use sheet_bridge_doc::{CellMatrix, WorkbookData, WorksheetData};

use crate::resolve::resolve_cell;

/// Convert a document model snapshot into a workbook
///
/// Sheets follow `sheetOrder`, or the order of the `sheets` map when no
/// order is recorded. Structural problems (unknown sheet ids, malformed or
/// out-of-range grid keys, unusable sheet names) are skipped or repaired
/// and logged; conversion itself never fails.
pub fn from_document_model(data: &WorkbookData) -> Workbook {
    let mut workbook = Workbook::empty();

    let order: Vec<&String> = if data.sheet_order.is_empty() {
        data.sheets.keys().collect()
    } else {
        data.sheet_order.iter().collect()
    };

    for id in order {
        let Some(sheet) = data.sheets.get(id) else {
            log::warn!("sheet order lists unknown sheet id {:?}; skipped", id);
            continue;
        };

        let wanted = if sheet.name.is_empty() { id } else { &sheet.name };
        let name = unique_sheet_name(&workbook, wanted);
        if name != *wanted {
            log::warn!("sheet name {:?} is not usable; renamed to {:?}", wanted, name);
        }

        let worksheet = convert_sheet(sheet, name);
        if let Err(e) = workbook.add_existing_worksheet(worksheet) {
            log::warn!("sheet {:?} could not be added: {}", id, e);
        }
    }

    log::debug!("restored {} sheet(s)", workbook.sheet_count());
    workbook
}

fn convert_sheet(sheet: &WorksheetData, name: String) -> Worksheet {
    let mut worksheet = Worksheet::new(name);
    worksheet.set_visible(!sheet.hidden.is_true());

    for (row_key, columns) in sheet.cell_data.rows() {
        let Some(row) = CellMatrix::parse_index(row_key) else {
            log::warn!("sheet {:?}: skipping non-numeric row key {:?}", sheet.id, row_key);
            continue;
        };

        for (col_key, cell) in columns {
            let Some(col) = CellMatrix::parse_index(col_key) else {
                log::warn!("sheet {:?}: skipping non-numeric column key {:?}", sheet.id, col_key);
                continue;
            };
            let Ok(col) = u16::try_from(col) else {
                log::warn!("sheet {:?}: column {} out of range; skipped", sheet.id, col);
                continue;
            };
            let Some(value) = resolve_cell(cell) else {
                continue;
            };

            let stored = match value {
                CellValue::String(s) => worksheet.set_string_at(row, col, s.as_str()),
                other => worksheet.set_cell_value_at(row, col, other),
            };
            if let Err(e) = stored {
                log::warn!("sheet {:?}: cell ({}, {}) skipped: {}", sheet.id, row, col, e);
            }
        }
    }

    log::trace!("sheet {:?}: restored {} cells", worksheet.name(), worksheet.cell_count());
    worksheet
}

/// A valid sheet name not yet used in `workbook`, derived from `wanted`
///
/// Invalid characters become `_`, the name is cut to the length limit and a
/// ` (n)` suffix is added when the result is taken.
fn unique_sheet_name(workbook: &Workbook, wanted: &str) -> String {
    if workbook.validate_sheet_name(wanted).is_ok() {
        return wanted.to_string();
    }

    let mut base: String = wanted
        .chars()
        .map(|c| if INVALID_SHEET_NAME_CHARS.contains(&c) { '_' } else { c })
        .take(MAX_SHEET_NAME_LEN)
        .collect();
    if base.is_empty() {
        base.push_str("Sheet");
    }
    if workbook.validate_sheet_name(&base).is_ok() {
        return base;
    }

    let mut n = 2usize;
    loop {
        let suffix = format!(" ({})", n);
        let stem: String = base
            .chars()
            .take(MAX_SHEET_NAME_LEN - suffix.chars().count())
            .collect();
        let candidate = format!("{}{}", stem, suffix);
        if workbook.validate_sheet_name(&candidate).is_ok() {
            return candidate;
        }
        n += 1;
    }
}
