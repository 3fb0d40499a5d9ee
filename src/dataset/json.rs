use crate::error::{IntyError, Result};
use crate::types::record::{Cell, CompanyRecord, Table};
use serde_json::{Map, Value};

/// Accepts a top-level array of objects or `{"companies": [...]}`.
pub fn read_json(content: &str) -> Result<Table> {
    let document: Value = serde_json::from_str(content)?;
    let entries = match document {
        Value::Array(entries) => entries,
        Value::Object(mut object) => match object.remove("companies") {
            Some(Value::Array(entries)) => entries,
            _ => {
                return Err(IntyError::InvalidDataset(
                    "expected a \"companies\" array".to_string(),
                ))
            }
        },
        _ => {
            return Err(IntyError::InvalidDataset(
                "expected an array or object at the top level".to_string(),
            ))
        }
    };

    let mut table = Table::default();
    for (index, entry) in entries.into_iter().enumerate() {
        let Value::Object(object) = entry else {
            return Err(IntyError::InvalidDataset(format!(
                "entry {} is not an object",
                index + 1
            )));
        };
        table.rows.push(record_from_object(object, &mut table.columns));
    }
    Ok(table)
}

fn record_from_object(object: Map<String, Value>, columns: &mut Vec<String>) -> CompanyRecord {
    let mut record = CompanyRecord::new();
    for (key, value) in object {
        if !columns.contains(&key) {
            columns.push(key.clone());
        }
        record.insert(key, cell_from_value(value));
    }
    record
}

fn cell_from_value(value: Value) -> Cell {
    match value {
        Value::Null => Cell::Empty,
        Value::Bool(flag) => Cell::Bool(flag),
        Value::Number(number) => number.as_f64().map(Cell::Number).unwrap_or(Cell::Empty),
        Value::String(text) if text.is_empty() => Cell::Empty,
        Value::String(text) => Cell::Text(text),
        nested @ (Value::Array(_) | Value::Object(_)) => Cell::Text(nested.to_string()),
    }
}
