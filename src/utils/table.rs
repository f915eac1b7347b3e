//! Table rendering utilities for CLI outputs.

pub struct Column {
    pub header: String,
    pub width: usize,
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

    /// Column set sized to fit headers and the given rows.
    pub fn auto(headers: &[&str], rows: &[Vec<String>]) -> Self {
        let columns = headers
            .iter()
            .enumerate()
            .map(|(i, h)| {
                let content_max = rows.iter().map(|r| r[i].len()).max().unwrap_or(0);
                Column {
                    header: h.to_string(),
                    width: h.len().max(content_max),
                }
            })
            .collect();

        let mut t = Self::new(columns);
        t.rows = rows.to_vec();
        t
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        for col in &self.columns {
            out.push_str(&format!("{:<width$} ", col.header, width = col.width));
        }
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (i, col) in self.columns.iter().enumerate() {
                out.push_str(&format!("{:<width$} ", row[i], width = col.width));
            }
            out.push('\n');
        }

        out
    }
}
