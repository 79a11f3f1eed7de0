//! File helpers for rendering wiki documents.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::process::Formatter;

/// Read a wiki file and return its HTML rendering.
///
/// # Errors
/// Returns an error if the file cannot be read.
pub fn render_file(path: &Path, formatter: &Formatter) -> std::io::Result<String> {
    let text = fs::read_to_string(path)?;
    Ok(formatter.format(&text))
}

/// Render a wiki file into a sibling `.html` file.
///
/// Returns the path that was written.
///
/// # Errors
/// Returns an error if reading the source or writing the output fails.
pub fn write_html(path: &Path, formatter: &Formatter) -> std::io::Result<PathBuf> {
    let html = render_file(path, formatter)?;
    let target = path.with_extension("html");
    fs::write(&target, html)?;
    Ok(target)
}
