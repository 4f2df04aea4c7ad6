//! Discovery of candidate CSV files in a directory

use crate::error::{KeydiffError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// List `.csv` files directly inside `dir`, sorted by file name,
/// skipping any whose name is in `exclude`.
pub fn discover_csv_files(dir: &Path, exclude: &[String]) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(KeydiffError::invalid_input(format!(
            "Not a directory: {}",
            dir.display()
        )));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let is_csv = entry
            .path()
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("csv"))
            .unwrap_or(false);
        let name = entry.file_name().to_string_lossy();
        if is_csv && !exclude.iter().any(|e| e.as_str() == name) {
            files.push(entry.into_path());
        }
    }

    log::debug!("Discovered {} CSV files in {}", files.len(), dir.display());
    Ok(files)
}
