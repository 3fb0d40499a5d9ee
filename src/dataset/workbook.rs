use crate::error::{IntyError, Result};
use crate::types::record::{Cell, CompanyRecord, Table};
use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;

/// Reads one sheet of an Excel workbook; the first row is the header.
pub fn read_workbook(path: &Path, sheet: &str) -> Result<Table> {
    let mut workbook = open_workbook_auto(path)?;
    if !workbook.sheet_names().iter().any(|name| name == sheet) {
        return Err(IntyError::InvalidDataset(format!(
            "sheet \"{sheet}\" not found in {}",
            path.display()
        )));
    }
    let range = workbook.worksheet_range(sheet)?;

    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        return Ok(Table::default());
    };
    let columns = header
        .iter()
        .enumerate()
        .map(|(index, data)| match data {
            Data::Empty => format!("Unnamed: {index}"),
            other => other.to_string(),
        })
        .collect::<Vec<_>>();

    let rows = rows
        .map(|row| {
            let mut record = CompanyRecord::new();
            for (index, column) in columns.iter().enumerate() {
                let cell = row.get(index).map(cell_from_data).unwrap_or(Cell::Empty);
                record.insert(column.clone(), cell);
            }
            record
        })
        .collect();

    Ok(Table { columns, rows })
}

fn cell_from_data(data: &Data) -> Cell {
    match data {
        Data::Int(value) => Cell::Number(*value as f64),
        Data::Float(value) => Cell::Number(*value),
        Data::String(text) if text.is_empty() => Cell::Empty,
        Data::String(text) => Cell::Text(text.clone()),
        Data::Bool(flag) => Cell::Bool(*flag),
        Data::DateTime(value) => Cell::Number(value.as_f64()),
        Data::DateTimeIso(text) | Data::DurationIso(text) => Cell::Text(text.clone()),
        // Error cells (#N/A, #DIV/0!) read as missing.
        _ => Cell::Empty,
    }
}
