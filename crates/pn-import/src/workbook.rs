//! In-memory workbook model.
//!
//! Import runs over this model so it can be exercised without files. Only the
//! spreadsheet readers below touch `calamine`.

use std::collections::BTreeMap;
use std::io::Cursor;
use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto_from_rs};

use crate::error::ImportResult;

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Number(f64),
    Text(String),
}

impl Cell {
    /// Numeric value, accepting text that parses as a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(v) => v.is_finite().then_some(*v),
            Cell::Text(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        }
    }

    /// Trimmed text, with numbers rendered as written.
    pub fn as_text(&self) -> Option<String> {
        let text = match self {
            Cell::Number(v) => v.to_string(),
            Cell::Text(s) => s.trim().to_string(),
        };
        (!text.is_empty()).then_some(text)
    }
}

/// One worksheet as a sparse grid keyed by `(row, column)`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sheet {
    pub name: String,
    cells: BTreeMap<(usize, usize), Cell>,
}

impl Sheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cells: BTreeMap::new(),
        }
    }

    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells.insert((row, col), cell);
    }

    pub fn set_number(&mut self, row: usize, col: usize, value: f64) {
        self.set(row, col, Cell::Number(value));
    }

    pub fn set_text(&mut self, row: usize, col: usize, value: impl Into<String>) {
        self.set(row, col, Cell::Text(value.into()));
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.cells.get(&(row, col))
    }

    pub fn number(&self, row: usize, col: usize) -> Option<f64> {
        self.cell(row, col).and_then(Cell::as_number)
    }

    pub fn text(&self, row: usize, col: usize) -> Option<String> {
        self.cell(row, col).and_then(Cell::as_text)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Workbook {
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn new(sheets: Vec<Sheet>) -> Self {
        Self { sheets }
    }

    /// Parse a spreadsheet held in memory. The format (`.xlsx`, `.xlsm`,
    /// `.xlsb`, `.xls` or `.ods`) is detected from the content.
    pub fn from_bytes(bytes: &[u8]) -> ImportResult<Self> {
        let mut book = open_workbook_auto_from_rs(Cursor::new(bytes))?;
        let mut sheets = Vec::new();
        for name in book.sheet_names() {
            let range = book.worksheet_range(&name)?;
            let mut sheet = Sheet::new(name);
            let (row0, col0) = range.start().unwrap_or((0, 0));
            for (row, col, data) in range.cells() {
                if let Some(cell) = convert(data) {
                    sheet.set(row0 as usize + row, col0 as usize + col, cell);
                }
            }
            sheets.push(sheet);
        }
        Ok(Self { sheets })
    }

    pub fn open(path: &Path) -> ImportResult<Self> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes)
    }
}

fn convert(data: &Data) -> Option<Cell> {
    match data {
        Data::Int(v) => Some(Cell::Number(*v as f64)),
        Data::Float(v) => Some(Cell::Number(*v)),
        Data::String(s) if !s.trim().is_empty() => Some(Cell::Text(s.clone())),
        Data::Bool(b) => Some(Cell::Text(b.to_string())),
        _ => None,
    }
}
