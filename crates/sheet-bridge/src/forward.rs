//! Workbook → document model conversion

use sheet_bridge_core::{Workbook, Worksheet};
use sheet_bridge_doc::{BooleanNumber, ColumnHeader, RowHeader, WorkbookData, WorksheetData};

use crate::classify::to_document_cell;
use crate::ids::{IdGenerator, IdKind, TimestampIds};
use crate::options::ConvertOptions;

/// Convert a workbook into a document model snapshot with default options
///
/// Ids are stamped with the current time.
pub fn to_document_model(workbook: &Workbook) -> WorkbookData {
    to_document_model_with(workbook, &ConvertOptions::default(), &mut TimestampIds::new())
}

/// Convert a workbook into a document model snapshot
///
/// Sheets keep their source order. A workbook without sheets still yields
/// one empty placeholder sheet, since the editor cannot open a snapshot
/// with none.
pub fn to_document_model_with(
    workbook: &Workbook,
    options: &ConvertOptions,
    ids: &mut dyn IdGenerator,
) -> WorkbookData {
    let mut data = WorkbookData::new(ids.next_id(IdKind::Workbook), options.workbook_name.clone());
    data.app_version = Some(options.app_version.clone());
    data.locale = options.locale.clone();

    for (index, worksheet) in workbook.worksheets().enumerate() {
        let id = ids.next_id(IdKind::Sheet(index));
        let name = if worksheet.name().is_empty() {
            format!("Sheet{}", index + 1)
        } else {
            worksheet.name().to_string()
        };
        data.push_sheet(convert_worksheet(worksheet, id, name, options, ids));
    }

    if data.sheet_order.is_empty() {
        let id = ids.next_id(IdKind::Sheet(0));
        let mut sheet = blank_sheet(id, options.default_sheet_name.clone(), options);
        sheet.row_count = options.min_row_count;
        sheet.column_count = options.min_column_count;
        data.push_sheet(sheet);
    }

    log::debug!(
        "converted workbook into {} sheet(s)",
        data.sheet_order.len()
    );
    data
}

fn convert_worksheet(
    worksheet: &Worksheet,
    id: String,
    name: String,
    options: &ConvertOptions,
    ids: &mut dyn IdGenerator,
) -> WorksheetData {
    let mut sheet = blank_sheet(id, name, options);
    sheet.hidden = BooleanNumber::from(!worksheet.is_visible());
    let mut max_row = 0u32;
    let mut max_col = 0u32;

    for (row, col, cell) in worksheet.iter_cells() {
        if let Some(converted) = to_document_cell(cell, ids) {
            let col = u32::from(col);
            sheet.cell_data.insert(row, col, converted);
            max_row = max_row.max(row + 1);
            max_col = max_col.max(col + 1);
        }
    }

    sheet.row_count = max_row.max(options.min_row_count);
    sheet.column_count = max_col.max(options.min_column_count);

    log::trace!(
        "sheet {:?}: {} of {} cells emitted, {}x{}",
        sheet.name,
        sheet.cell_data.cell_count(),
        worksheet.cell_count(),
        sheet.row_count,
        sheet.column_count
    );
    sheet
}

fn blank_sheet(id: String, name: String, options: &ConvertOptions) -> WorksheetData {
    let mut sheet = WorksheetData::new(id, name);
    sheet.hidden = BooleanNumber::False;
    sheet.right_to_left = BooleanNumber::False;
    sheet.row_header = Some(RowHeader {
        width: options.row_header_width,
        hidden: BooleanNumber::False,
    });
    sheet.column_header = Some(ColumnHeader {
        height: options.column_header_height,
        hidden: BooleanNumber::False,
    });
    sheet
}
