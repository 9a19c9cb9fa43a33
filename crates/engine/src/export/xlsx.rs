//! Spreadsheet export.

use rust_xlsxwriter::{Format, Workbook, XlsxError};

use super::{HEADER, export_error};
use crate::{Expense, ResultEngine};

/// Name of the single worksheet.
pub const SHEET_NAME: &str = "Expenses";

/// Single sheet workbook with the header in the first row.
pub fn to_xlsx(rows: &[Expense]) -> ResultEngine<Vec<u8>> {
    build_workbook(rows).map_err(export_error)
}

fn build_workbook(rows: &[Expense]) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    for (col, title) in (0u16..).zip(HEADER) {
        sheet.write_string_with_format(0, col, title, &header_format)?;
    }
    for (row_num, row) in (1u32..).zip(rows) {
        sheet.write_string(row_num, 0, &row.category)?;
        sheet.write_string(row_num, 1, &row.product)?;
        // Spreadsheet numbers are doubles; costs above 2^53 lose precision.
        sheet.write_number(row_num, 2, row.cost as f64)?;
    }

    workbook.save_to_buffer()
}
