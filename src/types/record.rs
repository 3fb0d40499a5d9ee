use std::collections::HashMap;
use std::fmt;

/// A single cell as read from a spreadsheet export or JSON dataset.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl Cell {
    /// Missing, blank, or NaN cells count as absent.
    pub fn is_blank(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(text) => text.trim().is_empty(),
            Cell::Number(value) => value.is_nan(),
            Cell::Bool(_) => false,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Text(text) => f.write_str(text),
            Cell::Number(value) => write!(f, "{value}"),
            Cell::Bool(value) => write!(f, "{value}"),
        }
    }
}

/// One company row, addressable by column name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompanyRecord {
    fields: HashMap<String, Cell>,
}

impl CompanyRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, cell: Cell) {
        self.fields.insert(name.into(), cell);
    }

    #[cfg(test)]
    pub fn with(mut self, name: impl Into<String>, cell: Cell) -> Self {
        self.insert(name, cell);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Cell> {
        self.fields.get(name)
    }
}

/// Rows in input order together with the column order of the source file.
#[derive(Debug, Clone, Default)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<CompanyRecord>,
}

impl Table {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
