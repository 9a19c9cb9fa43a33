//! JSON lines export: one object per line, no enclosing array.

use super::{ExportRow, export_error};
use crate::{Expense, ResultEngine};

pub fn to_json_lines(rows: &[Expense]) -> ResultEngine<Vec<u8>> {
    let mut out = Vec::new();
    for row in rows {
        serde_json::to_writer(&mut out, &ExportRow::from(row)).map_err(export_error)?;
        out.push(b'\n');
    }
    Ok(out)
}
