//! `||`-delimited table blocks.
//!
//! A table row is a line with whitespace before its first `||` and a
//! closing `||` at the end (trailing whitespace allowed):
//!
//! ```text
//!     || alias || and || BEGIN ||
//! ```
//!
//! Rows are split on `||`. The first element (text before the opening
//! delimiter) and the last (text after the closing one) are not cells.
//! A table has as many cells per row as its widest row; shorter rows are
//! padded with empty cells.

use std::{fmt::Write as _, sync::LazyLock};

use regex::Regex;

use crate::blocks::BlockKind;

static ROW_RE: LazyLock<Regex> =
    crate::lazy_regex!(r"\s\|\|(.*)\|\|\s*$", "valid table row regex");

const DELIMITER: &str = "||";

/// Split a row on the table delimiter, keeping the outer elements.
#[must_use]
pub fn split_columns(line: &str) -> Vec<String> {
    line.split(DELIMITER).map(str::to_string).collect()
}

/// Rows collected for one table.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TableRun {
    rows: Vec<Vec<String>>,
    max_cols: usize,
}

impl TableRun {
    /// Add a split row, widening the table if needed.
    pub fn push_row(&mut self, columns: Vec<String>) {
        self.max_cols = self.max_cols.max(columns.len());
        self.rows.push(columns);
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Widest row seen so far, counting the outer elements.
    #[must_use]
    pub fn max_cols(&self) -> usize {
        self.max_cols
    }

    /// Render the table with one tag per line.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut html = String::from("<table>\n");
        for row in &self.rows {
            html.push_str("<tr>\n");
            for idx in 1..self.max_cols.saturating_sub(1) {
                let cell = row.get(idx).map_or("", String::as_str);
                let _ = writeln!(html, "<td>{cell}</td>");
            }
            html.push_str("</tr>\n");
        }
        html.push_str("</table>");
        html
    }
}

/// The table block kind.
#[derive(Debug, Default, Clone, Copy)]
pub struct Table;

impl BlockKind for Table {
    type Run = TableRun;

    fn name(&self) -> &'static str {
        "table"
    }

    fn matches(&self, line: &str) -> bool {
        ROW_RE.is_match(line)
    }

    fn push(&self, run: &mut TableRun, line: &str) {
        run.push_row(split_columns(line));
    }

    fn render(&self, run: TableRun) -> String {
        run.to_html()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::blocks::{TrailingBlock, extract_text};

    #[rstest]
    #[case("    || alias || and || BEGIN ||", true)]
    #[case(" || begin || break || case ||    ", true)]
    #[case(" ||a||", true)]
    #[case("|| no leading space ||", false)]
    #[case(" || unterminated", false)]
    #[case(" a | b ", false)]
    fn row_line_test(#[case] line: &str, #[case] expected: bool) {
        assert_eq!(Table.matches(line), expected);
    }

    #[test]
    fn split_keeps_outer_elements() {
        assert_eq!(
            split_columns("  || a || b ||"),
            vec!["  ".to_string(), " a ".into(), " b ".into(), String::new()]
        );
    }

    #[test]
    fn renders_uniform_rows() {
        let mut run = TableRun::default();
        run.push_row(split_columns(" ||a||b||"));
        run.push_row(split_columns(" ||c||d||"));
        assert_eq!(run.max_cols(), 4);
        assert_eq!(
            run.to_html(),
            "<table>\n<tr>\n<td>a</td>\n<td>b</td>\n</tr>\n<tr>\n<td>c</td>\n<td>d</td>\n</tr>\n</table>"
        );
    }

    #[test]
    fn pads_short_rows_with_empty_cells() {
        let mut run = TableRun::default();
        run.push_row(split_columns(" ||a||b||c||"));
        run.push_row(split_columns(" ||d||"));
        let html = run.to_html();
        assert_eq!(
            html,
            "<table>\n<tr>\n<td>a</td>\n<td>b</td>\n<td>c</td>\n</tr>\n\
             <tr>\n<td>d</td>\n<td></td>\n<td></td>\n</tr>\n</table>"
        );
    }

    #[test]
    fn wide_row_keeps_trailing_text_as_cell() {
        // Only the widest row's final element is excluded; in a shorter row
        // the text after its closing delimiter lands in a cell.
        let mut run = TableRun::default();
        run.push_row(split_columns(" ||a||b||c||"));
        run.push_row(split_columns(" ||d|| "));
        assert!(run.to_html().contains("<td>d</td>\n<td> </td>\n<td></td>"));
    }

    #[test]
    fn table_pass_wraps_rows() {
        let out = extract_text(&Table, "before\n ||x||y||\nafter", TrailingBlock::Drop);
        assert_eq!(
            out,
            "before\n<table>\n<tr>\n<td>x</td>\n<td>y</td>\n</tr>\n</table>\nafter"
        );
    }

    #[test]
    fn trailing_table_is_dropped() {
        let out = extract_text(&Table, "before\n ||x||y||", TrailingBlock::Drop);
        assert_eq!(out, "before");
    }
}
