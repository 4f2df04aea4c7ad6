//! Output formatting utilities

use crate::engine::DiffOutcome;
use crate::error::Result;
use std::path::{Path, PathBuf};

/// Pretty printer for keydiff output
pub struct PrettyPrinter;

impl PrettyPrinter {
    /// Print the outcome of a diff run
    pub fn print_diff_outcome(outcome: &DiffOutcome) {
        let summary = &outcome.summary;
        let [file1, file2] = &summary.files_compared;
        println!("🔍 Diff Results: {} → {}", file1, file2);
        println!("├─ Key columns: {}", summary.key_columns_used.join(", "));
        println!("├─ Common columns: {}", summary.common_columns);

        if !summary.has_differences() {
            println!("└─ ✅ No differences found.");
            return;
        }

        println!("├─ ❌ Differences: {}", summary.total_differences);
        println!("│  ├─ Unique rows: {}", summary.unique_rows);
        println!("│  └─ Modified rows: {}", summary.modified_rows);
        match &outcome.output_path {
            Some(path) => println!("└─ Differences have been written to '{}'", path.display()),
            None => println!("└─ No report written"),
        }
    }

    /// Print common columns available as keys
    pub fn print_common_columns(columns: &[&str]) {
        if columns.is_empty() {
            println!("No common columns found.");
            return;
        }

        println!("🔑 Available columns for key selection:");
        for (i, column) in columns.iter().enumerate() {
            let prefix = if i == columns.len() - 1 { "└─" } else { "├─" };
            println!("{} {}", prefix, column);
        }
    }

    /// Print discovered files
    pub fn print_file_list(dir: &Path, files: &[PathBuf]) {
        if files.is_empty() {
            println!("No CSV files found in {}.", dir.display());
            return;
        }

        println!("📄 CSV files in {}:", dir.display());
        for (i, file) in files.iter().enumerate() {
            let prefix = if i == files.len() - 1 { "└─" } else { "├─" };
            let name = file
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            println!("{} {}: {}", prefix, i, name);
        }
    }
}

/// JSON formatter for machine-readable output
pub struct JsonFormatter;

impl JsonFormatter {
    /// Format any serializable data as JSON
    pub fn format<T: serde::Serialize + ?Sized>(data: &T) -> Result<String> {
        Ok(serde_json::to_string_pretty(data)?)
    }
}
