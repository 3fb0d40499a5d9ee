use crate::error::{IntyError, Result};
use crate::types::record::{Cell, Table};
use crate::types::scoring::Score;
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::info;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Writes the input columns plus `score_column`, replacing an existing column of that name.
pub fn write_scored_csv<W: Write>(
    mut writer: W,
    table: &Table,
    scores: &[Score],
    score_column: &str,
) -> Result<()> {
    if table.rows.len() != scores.len() {
        return Err(IntyError::InvalidDataset(format!(
            "{} rows but {} scores",
            table.rows.len(),
            scores.len()
        )));
    }

    writer.write_all(UTF8_BOM)?;
    let mut csv_writer = csv::Writer::from_writer(writer);

    let mut header = table.columns.clone();
    let replaces_existing = header.iter().any(|column| column == score_column);
    if !replaces_existing {
        header.push(score_column.to_string());
    }
    csv_writer.write_record(&header)?;

    for (record, score) in table.rows.iter().zip(scores) {
        let row = header
            .iter()
            .map(|column| {
                if column == score_column {
                    score.to_string()
                } else {
                    record.get(column).map(Cell::to_string).unwrap_or_default()
                }
            })
            .collect::<Vec<_>>();
        csv_writer.write_record(&row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn write_scored_file(
    path: &Path,
    table: &Table,
    scores: &[Score],
    score_column: &str,
) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let file = fs::File::create(path)?;
    write_scored_csv(file, table, scores, score_column)?;
    info!(path = %path.display(), rows = scores.len(), "wrote scored dataset");
    Ok(())
}
