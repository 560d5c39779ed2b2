use serde::Serialize;
use std::fmt::Write as _;

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

// ---------------------------------------------------------------------------
// Tables
// ---------------------------------------------------------------------------

/// Plain-text column layout for the list commands. Columns are left-aligned
/// unless marked numeric, which right-aligns them (scores, counts). Cells
/// beyond the header count are dropped.
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    numeric: Vec<usize>,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
            numeric: Vec::new(),
        }
    }

    /// Right-align the given column index.
    pub fn numeric(mut self, col: usize) -> Self {
        self.numeric.push(col);
        self
    }

    pub fn row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    fn render(&self) -> String {
        let widths: Vec<usize> = self
            .headers
            .iter()
            .enumerate()
            .map(|(i, h)| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .fold(h.len(), |w, cell| w.max(cell.len()))
            })
            .collect();

        let mut out = String::new();
        self.write_line(&mut out, &widths, &self.headers);
        let sep: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
        self.write_line(&mut out, &widths, &sep);
        for row in &self.rows {
            self.write_line(&mut out, &widths, row);
        }
        out
    }

    fn write_line(&self, out: &mut String, widths: &[usize], cells: &[String]) {
        let empty = String::new();
        let line: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(i, &w)| {
                let cell = cells.get(i).unwrap_or(&empty);
                if self.numeric.contains(&i) {
                    format!("{cell:>w$}")
                } else {
                    format!("{cell:<w$}")
                }
            })
            .collect();
        let _ = writeln!(out, "{}", line.join("  ").trim_end());
    }

    pub fn print(&self) {
        print!("{}", self.render());
    }
}

/// One-shot helper for commands that already have all rows in hand.
pub fn print_table(headers: &[&str], rows: Vec<Vec<String>>) {
    let mut table = Table::new(headers);
    for row in rows {
        table.row(row);
    }
    table.print();
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_sized_to_widest_cell() {
        let mut table = Table::new(&["SLUG", "TITLE"]);
        table.row(vec!["cfo".into(), "Chief Financial Officer".into()]);
        table.row(vec!["it-admin".into(), "IT Admin".into()]);
        let out = table.render();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "SLUG      TITLE");
        assert_eq!(lines[1], "--------  -----------------------");
        assert_eq!(lines[2], "cfo       Chief Financial Officer");
        assert_eq!(lines[3], "it-admin  IT Admin");
    }

    #[test]
    fn numeric_column_right_aligns() {
        let mut table = Table::new(&["SCORE", "TITLE"]).numeric(0);
        table.row(vec!["0.85".into(), "pricing deck".into()]);
        table.row(vec!["1.00".into(), "pricing".into()]);
        let out = table.render();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[2], " 0.85  pricing deck");
        assert_eq!(lines[3], " 1.00  pricing");
    }

    #[test]
    fn short_rows_pad_missing_cells() {
        let mut table = Table::new(&["A", "B", "C"]);
        table.row(vec!["x".into()]);
        let out = table.render();
        assert_eq!(out.lines().last().unwrap(), "x");
    }
}
