//! Output sink: the surface commands write through.
//!
//! Commands emit plain text, blank lines, warnings, and tables; the sink
//! decides how they land on the terminal. Keeping this behind a trait lets
//! integration tests record the exact emission order.

use crate::labels::Warnings;
use comfy_table::presets::NOTHING;
use comfy_table::{Cell, Row, Table};
use owo_colors::OwoColorize;

const TABLE_COLUMN_PADDING: u16 = 3;

/// Where command output goes. All methods write to stdout; warnings are
/// advisory but part of the ordered output contract.
pub trait OutputSink {
    fn text(&mut self, line: &str);

    fn blank(&mut self);

    fn warnings(&mut self, warnings: &Warnings);

    fn table(&mut self, header: &[&str], rows: &[Vec<String>]);
}

/// Production sink: stdout, space-padded borderless tables, yellow warnings.
pub struct StdoutSink {
    color: bool,
}

impl StdoutSink {
    pub fn new(color: bool) -> Self {
        Self { color }
    }
}

impl Default for StdoutSink {
    fn default() -> Self {
        Self::new(true)
    }
}

impl OutputSink for StdoutSink {
    fn text(&mut self, line: &str) {
        println!("{}", line);
    }

    fn blank(&mut self) {
        println!();
    }

    fn warnings(&mut self, warnings: &Warnings) {
        for warning in warnings.iter() {
            if self.color {
                println!("{}", warning.yellow());
            } else {
                println!("{}", warning);
            }
        }
    }

    fn table(&mut self, header: &[&str], rows: &[Vec<String>]) {
        println!("{}", render_table(header, rows));
    }
}

/// Borderless two-or-more column table, columns separated by spaces.
pub fn render_table(header: &[&str], rows: &[Vec<String>]) -> String {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    table.set_header(Row::from(header.iter().map(|cell| Cell::new(cell))));
    for row in rows {
        table.add_row(Row::from(row.iter().map(|cell| Cell::new(cell))));
    }
    for column in table.column_iter_mut() {
        column.set_padding((0, TABLE_COLUMN_PADDING));
    }
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_table_header_first() {
        let rows = vec![
            vec!["a".to_string(), "1".to_string()],
            vec!["b".to_string(), "2".to_string()],
        ];
        let rendered = render_table(&["key", "value"], &rows);
        let lines: Vec<&str> = rendered.lines().collect();
        assert!(lines[0].starts_with("key"));
        assert!(lines[0].contains("value"));
        assert!(lines[1].starts_with("a"));
        assert!(lines[2].starts_with("b"));
    }

    #[test]
    fn test_render_table_pads_columns() {
        let rows = vec![vec!["longer-key".to_string(), "v".to_string()]];
        let rendered = render_table(&["key", "value"], &rows);
        let lines: Vec<&str> = rendered.lines().collect();
        // The value column starts at the same offset in every line.
        let header_offset = lines[0].find("value").unwrap();
        let row_offset = lines[1].find('v').unwrap();
        assert_eq!(header_offset, row_offset);
    }

    #[test]
    fn test_render_table_has_no_borders() {
        let rows = vec![vec!["a".to_string(), "1".to_string()]];
        let rendered = render_table(&["key", "value"], &rows);
        assert!(!rendered.contains('|'));
        assert!(!rendered.contains('+'));
        assert!(!rendered.contains('─'));
    }
}
