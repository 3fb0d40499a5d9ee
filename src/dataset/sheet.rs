use crate::error::Result;
use crate::types::record::{Cell, CompanyRecord, Table};
use std::io::Read;

const UTF8_BOM: char = '\u{feff}';

/// Reads a spreadsheet export with a header row.
pub fn read_csv<R: Read>(reader: R) -> Result<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let columns = reader
        .headers()?
        .iter()
        .enumerate()
        .map(|(index, header)| {
            if index == 0 {
                header.trim_start_matches(UTF8_BOM).to_string()
            } else {
                header.to_string()
            }
        })
        .collect::<Vec<_>>();

    let mut rows = Vec::new();
    for result in reader.records() {
        let row = result?;
        let mut record = CompanyRecord::new();
        for (index, column) in columns.iter().enumerate() {
            let cell = match row.get(index) {
                Some(value) if !value.is_empty() => Cell::Text(value.to_string()),
                _ => Cell::Empty,
            };
            record.insert(column.clone(), cell);
        }
        rows.push(record);
    }

    Ok(Table { columns, rows })
}
