#![deny(unsafe_code)]

/// Raw delimited table as read from the source, before any cleaning.
///
/// Headers are kept exactly as they appear in the file. Every row has the
/// same number of cells as `headers`; an empty cell means "missing".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Records skipped by the loader because their field count did not match the header.
    pub skipped_rows: usize,
}

impl RawTable {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
            skipped_rows: 0,
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    /// Cell value at (`row`, `column`), `None` when the cell is empty or absent.
    pub fn value(&self, row: usize, column: &str) -> Option<&str> {
        let idx = self.column_index(column)?;
        let cell = self.rows.get(row)?.get(idx)?;
        if cell.trim().is_empty() {
            None
        } else {
            Some(cell.as_str())
        }
    }
}
