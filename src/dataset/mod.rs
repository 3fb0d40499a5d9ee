pub mod json;
pub mod sheet;
pub mod workbook;

use crate::error::{IntyError, Result};
use crate::types::record::Table;
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Csv,
    Json,
    Xlsx,
}

impl InputFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|extension| extension.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("csv") => Ok(InputFormat::Csv),
            Some("json") => Ok(InputFormat::Json),
            Some("xlsx" | "xlsm" | "xls") => Ok(InputFormat::Xlsx),
            Some(other) => Err(IntyError::UnsupportedFormat(format!(
                "{} (.{other}); pass --input-format",
                path.display()
            ))),
            None => Err(IntyError::UnsupportedFormat(format!(
                "{} has no extension; pass --input-format",
                path.display()
            ))),
        }
    }
}

/// `sheet` is only consulted for workbooks.
pub fn load_table(path: &Path, format: Option<InputFormat>, sheet: &str) -> Result<Table> {
    if !path.exists() {
        return Err(IntyError::InputNotFound(path.display().to_string()));
    }
    let format = match format {
        Some(format) => format,
        None => InputFormat::from_path(path)?,
    };

    let table = match format {
        InputFormat::Csv => sheet::read_csv(fs::File::open(path)?)?,
        InputFormat::Json => json::read_json(&fs::read_to_string(path)?)?,
        InputFormat::Xlsx => workbook::read_workbook(path, sheet)?,
    };
    info!(
        path = %path.display(),
        ?format,
        rows = table.len(),
        columns = table.columns.len(),
        "loaded dataset"
    );
    Ok(table)
}
