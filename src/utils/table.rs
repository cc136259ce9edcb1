//! Table rendering utilities for CLI outputs.

use super::formatting::pad_right;

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Columns are separated by ` | `; the last column is not padded.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let header: Vec<String> = self.columns.iter().map(|c| c.header.clone()).collect();
        self.render_line(&mut out, &header);

        let total: usize = self.columns.iter().map(|c| c.width + 3).sum();
        out.push_str(&"-".repeat(total.saturating_sub(3)));
        out.push('\n');

        for row in &self.rows {
            self.render_line(&mut out, row);
        }
        out
    }

    fn render_line(&self, out: &mut String, cells: &[String]) {
        let last = self.columns.len().saturating_sub(1);
        for (i, col) in self.columns.iter().enumerate() {
            let cell = cells.get(i).map(String::as_str).unwrap_or("");
            if i == last {
                out.push_str(cell);
            } else {
                out.push_str(&pad_right(cell, col.width));
                out.push_str(" | ");
            }
        }
        out.push('\n');
    }
}
