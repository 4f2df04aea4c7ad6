//! Delimited text reader producing in-memory datasets

use crate::dataset::{Dataset, Row};
use crate::error::{KeydiffError, Result};
use std::path::Path;

/// Reads delimited text files into datasets of opaque string cells
pub struct DataReader {
    delimiter: u8,
}

impl DataReader {
    pub fn new(delimiter: u8) -> Self {
        Self { delimiter }
    }

    /// Load a file; the dataset is named after the file's base name
    pub fn load_file(&self, file_path: &Path) -> Result<Dataset> {
        if !file_path.exists() {
            return Err(KeydiffError::input(file_path, "file not found"));
        }
        if !file_path.is_file() {
            return Err(KeydiffError::input(file_path, "path is not a regular file"));
        }

        let name = dataset_name(file_path);
        let reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .flexible(false)
            .from_path(file_path)
            .map_err(|e| KeydiffError::input(file_path, e.to_string()))?;

        let dataset = self
            .read_dataset(name, reader)
            .map_err(|e| match e {
                KeydiffError::Csv(err) => KeydiffError::input(file_path, err.to_string()),
                KeydiffError::Input { message, .. } => KeydiffError::input(file_path, message),
                other => other,
            })?;

        log::debug!(
            "Loaded '{}': {} rows, {} columns",
            file_path.display(),
            dataset.row_count(),
            dataset.column_count()
        );
        Ok(dataset)
    }

    /// Read a dataset from any byte source
    pub fn load_reader<R: std::io::Read>(&self, name: &str, source: R) -> Result<Dataset> {
        let reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .flexible(false)
            .from_reader(source);
        self.read_dataset(name.to_string(), reader)
    }

    /// Header names only, without materializing rows
    pub fn read_header(&self, file_path: &Path) -> Result<Vec<String>> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .from_path(file_path)
            .map_err(|e| KeydiffError::input(file_path, e.to_string()))?;
        let headers = reader
            .headers()
            .map_err(|e| KeydiffError::input(file_path, e.to_string()))?;
        Ok(clean_headers(headers))
    }

    fn read_dataset<R: std::io::Read>(
        &self,
        name: String,
        mut reader: csv::Reader<R>,
    ) -> Result<Dataset> {
        let columns = clean_headers(reader.headers()?);
        if columns.is_empty() || (columns.len() == 1 && columns[0].is_empty()) {
            return Err(KeydiffError::input(name.as_str(), "missing header row"));
        }

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            let cells = record
                .iter()
                .map(|field| {
                    if field.is_empty() {
                        None
                    } else {
                        Some(field.to_string())
                    }
                })
                .collect();
            rows.push(Row::new(cells));
        }

        Dataset::new(name, columns, rows)
    }
}

/// Validate a delimiter: exactly one ASCII character
pub fn parse_delimiter(delimiter: &str) -> Result<u8> {
    let mut chars = delimiter.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii() => Ok(c as u8),
        _ => Err(KeydiffError::invalid_input(format!(
            "Delimiter must be a single ASCII character, got '{}'",
            delimiter
        ))),
    }
}

fn clean_headers(headers: &csv::StringRecord) -> Vec<String> {
    headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            if i == 0 {
                h.trim_start_matches('\u{feff}').to_string()
            } else {
                h.to_string()
            }
        })
        .collect()
}

fn dataset_name(file_path: &Path) -> String {
    file_path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| file_path.display().to_string())
}
