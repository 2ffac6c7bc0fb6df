use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook};
use tracing::{debug, info};

use crate::error::Result;
use crate::sheet::{CellStyle, CellValue, RenderMetadata, SheetModel, layout};
use crate::timesheet::TimesheetRecord;

const FONT_NAME: &str = "Calibri";

/// Lay out and serialize a timesheet to XLSX bytes.
pub fn render(record: &TimesheetRecord, meta: &RenderMetadata) -> Result<Vec<u8>> {
    let sheet = layout(record, meta);
    serialize(&sheet)
}

/// Write every cell of the model into a single-sheet workbook.
pub fn serialize(sheet: &SheetModel) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, width) in sheet.column_widths() {
        worksheet.set_column_width(col, width)?;
    }

    for ((row, col), cell) in sheet.cells() {
        match (&cell.value, cell.style) {
            (CellValue::Text(text), Some(style)) => {
                worksheet.write_string_with_format(row, col, text, &to_format(style))?;
            }
            (CellValue::Text(text), None) => {
                worksheet.write_string(row, col, text)?;
            }
            (CellValue::Number(n), Some(style)) => {
                worksheet.write_number_with_format(row, col, *n, &to_format(style))?;
            }
            (CellValue::Number(n), None) => {
                worksheet.write_number(row, col, *n)?;
            }
        }
    }
    debug!(last_row = ?sheet.last_row(), "wrote sheet cells");

    let bytes = workbook.save_to_buffer()?;
    info!(bytes = bytes.len(), "rendered timesheet workbook");
    Ok(bytes)
}

fn to_format(style: CellStyle) -> Format {
    let mut format = Format::new().set_font_name(FONT_NAME);

    if style.bold {
        format = format.set_bold();
    }
    if let Some(rgb) = style.font_color {
        format = format.set_font_color(Color::RGB(rgb));
    }
    if let Some(rgb) = style.fill {
        format = format.set_background_color(Color::RGB(rgb));
    }
    if style.thin_border {
        format = format.set_border(FormatBorder::Thin);
    }
    if style.centered {
        format = format
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter);
    }

    format
}
