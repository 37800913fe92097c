//! Table rendering for CLI outputs. Widths are display widths, so labels with
//! wide characters still line up.

use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

fn pad_cell(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    let pad = width.saturating_sub(w);
    format!("{}{}", s, " ".repeat(pad))
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

    /// Widen a column to fit its longest cell.
    pub fn autofit(&mut self) {
        for (i, col) in self.columns.iter_mut().enumerate() {
            let max_cell = self
                .rows
                .iter()
                .filter_map(|r| r.get(i))
                .map(|c| UnicodeWidthStr::width(c.as_str()))
                .max()
                .unwrap_or(0);
            col.width = col.width.max(max_cell).max(UnicodeWidthStr::width(col.header.as_str()));
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        for col in &self.columns {
            out.push_str(&pad_cell(&col.header, col.width));
            out.push(' ');
        }
        out.push('\n');

        for row in &self.rows {
            for (i, col) in self.columns.iter().enumerate() {
                out.push_str(&pad_cell(&row[i], col.width));
                out.push(' ');
            }
            out.push('\n');
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn autofit_widens_to_longest_cell() {
        let mut t = Table::new(vec![Column {
            header: "Description".into(),
            width: 4,
        }]);
        t.add_row(vec!["a rather long label".into()]);
        t.autofit();
        assert_eq!(t.columns[0].width, 19);
    }
}
