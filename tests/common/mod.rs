//! Utility helpers shared across integration tests.

/// Join string slices into a newline-separated document.
#[allow(unused_macros)]
macro_rules! doc {
    ($($line:expr),* $(,)?) => {
        [$($line),*].join("\n")
    };
}

/// Count non-overlapping occurrences of `needle` in `haystack`.
#[allow(dead_code)]
pub fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

/// Assert that every `<tr>` in `html` holds exactly `cells` cells.
#[allow(dead_code)]
pub fn assert_uniform_rows(html: &str, cells: usize) {
    let rows: Vec<&str> = html
        .split("<tr>")
        .skip(1)
        .map(|chunk| chunk.split("</tr>").next().unwrap_or_default())
        .collect();
    assert!(!rows.is_empty(), "no table rows in output");
    for row in rows {
        assert_eq!(count(row, "<td>"), cells, "row {row:?} has wrong cell count");
    }
}
