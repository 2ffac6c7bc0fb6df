//! In-memory styled sheet for a timesheet.
//!
//! Layout is decided here in full, before any bytes are written. The renderer
//! only walks the finished model once.
//!
//! ```text
//!      A          B       C       ...    J
//!  1                                     PO Number: PO12345
//!  2                                     Project ID: PRJ56789
//!  3                                     Month: September 2025
//!  5   Emp Name   1 Mon   2 Tue   ...
//!  6   Jane Doe   1       L       ...
//!  9              ------                 (signature blocks, B and H)
//! ```

use std::collections::BTreeMap;

use crate::timesheet::{DayType, TimesheetRecord};

pub const ACCENT_BLUE: u32 = 0x1F4E78;
pub const WHITE: u32 = 0xFFFFFF;
pub const WEEKEND_FILL: u32 = 0xD9D9D9;
pub const HOLIDAY_FILL: u32 = 0xFFC7CE;
pub const HOLIDAY_FONT: u32 = 0x9C0006;
pub const LEAVE_FILL: u32 = 0xFFD966;
pub const LEAVE_FONT: u32 = 0x7F6000;

// Zero-based positions.
pub const META_COL: u16 = 9;
pub const HEADER_ROW: u32 = 4;
pub const DATA_ROW: u32 = 5;
pub const SIGNATURE_GAP: u32 = 3;
pub const LEFT_SIGNATURE_COL: u16 = 1;
pub const RIGHT_SIGNATURE_COL: u16 = 7;

const NAME_COLUMN_WIDTH: f64 = 20.0;
const SEPARATOR: &str = "----------------------------------";

/// Display-only fields that do not affect classification.
///
/// The month name and year on the sheet always come from the record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderMetadata {
    pub po_number: String,
    pub project_id: String,
    pub tata_manager_name: String,
    pub client_manager_name: String,
}

impl RenderMetadata {
    pub fn new(
        po_number: impl Into<String>,
        project_id: impl Into<String>,
        tata_manager_name: impl Into<String>,
        client_manager_name: impl Into<String>,
    ) -> Self {
        Self {
            po_number: po_number.into(),
            project_id: project_id.into(),
            tata_manager_name: tata_manager_name.into(),
            client_manager_name: client_manager_name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
}

impl CellValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            CellValue::Number(_) => None,
        }
    }
}

/// Visual attributes of a cell. Colors are 0xRRGGBB.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellStyle {
    pub bold: bool,
    pub font_color: Option<u32>,
    pub fill: Option<u32>,
    pub thin_border: bool,
    pub centered: bool,
}

impl CellStyle {
    pub(crate) fn grid() -> Self {
        Self {
            thin_border: true,
            centered: true,
            ..Self::default()
        }
    }

    pub(crate) fn header() -> Self {
        Self {
            bold: true,
            font_color: Some(WHITE),
            fill: Some(ACCENT_BLUE),
            ..Self::grid()
        }
    }

    pub(crate) fn for_day(kind: DayType) -> Self {
        match kind {
            DayType::Worked => Self::grid(),
            DayType::Weekend => Self {
                fill: Some(WEEKEND_FILL),
                ..Self::grid()
            },
            DayType::Holiday => Self {
                bold: true,
                font_color: Some(HOLIDAY_FONT),
                fill: Some(HOLIDAY_FILL),
                ..Self::grid()
            },
            DayType::Leave => Self {
                bold: true,
                font_color: Some(LEAVE_FONT),
                fill: Some(LEAVE_FILL),
                ..Self::grid()
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub value: CellValue,
    pub style: Option<CellStyle>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SheetModel {
    cells: BTreeMap<(u32, u16), Cell>,
    column_widths: BTreeMap<u16, f64>,
}

impl SheetModel {
    pub fn cell(&self, row: u32, col: u16) -> Option<&Cell> {
        self.cells.get(&(row, col))
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = ((u32, u16), &Cell)> {
        self.cells.iter().map(|(&pos, cell)| (pos, cell))
    }

    pub fn row(&self, row: u32) -> impl Iterator<Item = (u16, &Cell)> {
        self.cells
            .range((row, 0)..=(row, u16::MAX))
            .map(|(&(_, col), cell)| (col, cell))
    }

    pub fn column_widths(&self) -> impl Iterator<Item = (u16, f64)> {
        self.column_widths.iter().map(|(&col, &width)| (col, width))
    }

    /// Last row holding a value, zero-based.
    pub fn last_row(&self) -> Option<u32> {
        self.cells.keys().next_back().map(|&(row, _)| row)
    }

    fn put(&mut self, row: u32, col: u16, value: CellValue, style: Option<CellStyle>) {
        self.cells.insert((row, col), Cell { value, style });
    }

    fn put_text(&mut self, row: u32, col: u16, text: impl Into<String>, style: Option<CellStyle>) {
        self.put(row, col, CellValue::Text(text.into()), style);
    }
}

/// Lay out the full timesheet: metadata, header, data row and signatures.
pub fn layout(record: &TimesheetRecord, meta: &RenderMetadata) -> SheetModel {
    let mut sheet = SheetModel::default();

    let meta_style = CellStyle {
        bold: true,
        font_color: Some(ACCENT_BLUE),
        ..CellStyle::default()
    };
    let meta_lines = [
        format!("PO Number: {}", meta.po_number),
        format!("Project ID: {}", meta.project_id),
        format!("Month: {} {}", record.month_name(), record.year()),
    ];
    for (row, line) in meta_lines.into_iter().enumerate() {
        sheet.put_text(row as u32, META_COL, line, Some(meta_style));
    }

    sheet.put_text(HEADER_ROW, 0, "Emp Name", Some(CellStyle::header()));
    sheet.put_text(DATA_ROW, 0, record.employee_name(), Some(CellStyle::grid()));

    for (i, entry) in record.days().iter().enumerate() {
        let col = i as u16 + 1;
        sheet.put_text(HEADER_ROW, col, entry.label(), Some(CellStyle::header()));

        let value = match entry.kind.marker() {
            Some(marker) => CellValue::Text(marker.to_string()),
            None => CellValue::Number(1.0),
        };
        sheet.put(DATA_ROW, col, value, Some(CellStyle::for_day(entry.kind)));
    }

    let sign_row = sheet.last_row().unwrap_or(DATA_ROW) + SIGNATURE_GAP;
    signature_block(
        &mut sheet,
        sign_row,
        LEFT_SIGNATURE_COL,
        "Tata Technologies Manager",
        &meta.tata_manager_name,
    );
    signature_block(
        &mut sheet,
        sign_row,
        RIGHT_SIGNATURE_COL,
        "Client Manager",
        &meta.client_manager_name,
    );

    sheet.column_widths.insert(0, NAME_COLUMN_WIDTH);

    sheet
}

fn signature_block(sheet: &mut SheetModel, row: u32, col: u16, role: &str, manager: &str) {
    let lines = [
        SEPARATOR.to_string(),
        role.to_string(),
        format!("Name: {manager}"),
        "Signature: ___________".to_string(),
        "Date: _______________".to_string(),
    ];
    for (offset, line) in lines.into_iter().enumerate() {
        sheet.put_text(row + offset as u32, col, line, None);
    }
}
