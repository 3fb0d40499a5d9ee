use crate::types::record::Cell;

/// Numeric types a cell can be coerced into.
pub trait FromCell: Sized + Default {
    fn from_cell(cell: &Cell) -> Option<Self>;
}

impl FromCell for f64 {
    fn from_cell(cell: &Cell) -> Option<Self> {
        let value = match cell {
            Cell::Number(value) => *value,
            Cell::Text(text) => text.trim().parse::<f64>().ok()?,
            Cell::Empty | Cell::Bool(_) => return None,
        };
        value.is_finite().then_some(value)
    }
}

impl FromCell for i64 {
    fn from_cell(cell: &Cell) -> Option<Self> {
        match cell {
            Cell::Number(value) if value.is_finite() => Some(value.trunc() as i64),
            Cell::Text(text) => {
                let text = text.trim();
                text.parse::<i64>().ok().or_else(|| whole_number(text))
            }
            _ => None,
        }
    }
}

/// Spreadsheet exports write integer columns with blanks as "200.0"; "12.5" is not a count.
fn whole_number(text: &str) -> Option<i64> {
    text.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && value.fract() == 0.0)
        .map(|value| value as i64)
}

/// Coerce-or-zero: a missing or unparsable cell yields `T::default()`.
pub fn try_parse_number<T: FromCell>(cell: Option<&Cell>) -> T {
    cell.and_then(T::from_cell).unwrap_or_default()
}

/// Counts that may arrive as decimal text ("20.0") go through `f64` first.
pub fn try_parse_count(cell: Option<&Cell>) -> i64 {
    cell.and_then(f64::from_cell)
        .map(|value| value.trunc() as i64)
        .unwrap_or_default()
}

/// True when the cell holds a value that coercion had to discard.
pub fn is_malformed<T: FromCell>(cell: Option<&Cell>) -> bool {
    match cell {
        Some(cell) if !cell.is_blank() => T::from_cell(cell).is_none(),
        _ => false,
    }
}

/// Present and non-blank after trimming.
pub fn has_text(cell: Option<&Cell>) -> bool {
    cell.map(|cell| !cell.is_blank()).unwrap_or(false)
}
