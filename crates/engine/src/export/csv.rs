//! Comma separated export.

use csv::WriterBuilder;

use super::{ExportRow, HEADER, export_error};
use crate::{Expense, ResultEngine};

/// Header line plus one record per expense, UTF-8.
pub fn to_csv(rows: &[Expense]) -> ResultEngine<Vec<u8>> {
    // The header is written by hand so an empty snapshot still gets one.
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(HEADER).map_err(export_error)?;
    for row in rows {
        writer
            .serialize(ExportRow::from(row))
            .map_err(export_error)?;
    }
    writer.into_inner().map_err(export_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::sample_rows;

    #[test]
    fn empty_snapshot_is_header_only() {
        let bytes = to_csv(&[]).unwrap();
        assert_eq!(bytes, b"category,product,cost\n");
    }

    #[test]
    fn quotes_fields_with_separators() {
        let bytes = to_csv(&sample_rows()).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "category,product,cost");
        assert_eq!(lines[1], "Food,Coffee,300");
        assert_eq!(lines[2], "Food,\"Tea, green\",450");
        assert_eq!(lines[3], "Rent,\"Apartment \"\"Sakura\"\"\",50000");
    }

    #[test]
    fn round_trips_through_a_reader() {
        let rows = sample_rows();
        let bytes = to_csv(&rows).unwrap();

        let mut reader = csv::Reader::from_reader(bytes.as_slice());
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.iter().collect::<Vec<_>>(), HEADER);

        let parsed: Vec<ExportRow> = reader.deserialize().map(Result::unwrap).collect();
        let expected: Vec<ExportRow> = rows.iter().map(ExportRow::from).collect();
        assert_eq!(parsed, expected);
    }

    #[test]
    fn keeps_non_ascii_text() {
        let rows = vec![Expense {
            id: 1,
            category: "食費".to_string(),
            product: "コーヒー".to_string(),
            cost: 300,
        }];
        let text = String::from_utf8(to_csv(&rows).unwrap()).unwrap();
        assert!(text.ends_with("食費,コーヒー,300\n"));
    }
}
