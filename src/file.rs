// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::options::{ExportFormat, ExportOptions};
use crate::csv::rows_to_string;
use crate::report::Report;

/// Render a comparison in the chosen format (no I/O).
pub fn export_string(export: &ExportOptions, report: &Report<'_>, only_differences: bool) -> String {
    match export.format.delim() {
        Some(sep) => {
            let headers = report.headers();
            let rows = report.table_rows(only_differences);
            let headers = export.include_headers.then_some(headers.as_slice());
            rows_to_string(&rows, headers, sep)
        }
        None => report.render_text(),
    }
}

/// Write one export file to `export.out_path()`, creating parent directories.
/// Returns the final path written to.
pub fn export_comparison(
    export: &ExportOptions,
    report: &Report<'_>,
    only_differences: bool,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let path = export.out_path();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    fs::write(&path, export_string(export, report, only_differences))?;
    logf!("Export: wrote {} ({:?})", path.display(), export.format);
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

/// True when the text format ignores the header toggle.
pub fn headers_apply(format: ExportFormat) -> bool {
    format.delim().is_some()
}
