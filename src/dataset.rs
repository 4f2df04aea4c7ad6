//! In-memory tabular dataset model

use crate::error::{KeydiffError, Result};
use indexmap::IndexMap;

/// A single row; cells are positional against the owning dataset's header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    cells: Vec<Option<String>>,
}

impl Row {
    pub fn new(cells: Vec<Option<String>>) -> Self {
        Self { cells }
    }

    /// Cell at a header position; out-of-range positions read as null
    pub fn cell(&self, position: usize) -> Option<&str> {
        self.cells.get(position).and_then(|c| c.as_deref())
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// A fully materialized dataset: ordered header plus rows
#[derive(Debug, Clone)]
pub struct Dataset {
    name: String,
    header: IndexMap<String, usize>,
    rows: Vec<Row>,
}

impl Dataset {
    /// Build a dataset, rejecting duplicate header names and ragged rows
    pub fn new(name: impl Into<String>, columns: Vec<String>, rows: Vec<Row>) -> Result<Self> {
        let name = name.into();
        let mut header = IndexMap::with_capacity(columns.len());
        for (position, column) in columns.into_iter().enumerate() {
            if header.contains_key(&column) {
                return Err(KeydiffError::input(
                    name.as_str(),
                    format!("duplicate column name '{}' in header", column),
                ));
            }
            header.insert(column, position);
        }

        if let Some((index, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != header.len())
        {
            return Err(KeydiffError::input(
                name.as_str(),
                format!(
                    "row {} has {} fields, expected {}",
                    index + 1,
                    row.len(),
                    header.len()
                ),
            ));
        }

        Ok(Self { name, header, rows })
    }

    /// Convenience constructor from string literals; empty strings become null
    pub fn from_records(name: &str, columns: &[&str], records: &[Vec<&str>]) -> Result<Self> {
        let columns = columns.iter().map(|c| c.to_string()).collect();
        let rows = records
            .iter()
            .map(|record| {
                Row::new(
                    record
                        .iter()
                        .map(|v| if v.is_empty() { None } else { Some(v.to_string()) })
                        .collect(),
                )
            })
            .collect();
        Self::new(name, columns, rows)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Column names in header order
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.header.keys().map(String::as_str)
    }

    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.header.contains_key(column)
    }

    pub fn position(&self, column: &str) -> Option<usize> {
        self.header.get(column).copied()
    }

    /// Resolve a list of column names to header positions
    pub fn positions(&self, columns: &[String]) -> Result<Vec<usize>> {
        columns
            .iter()
            .map(|column| {
                self.position(column).ok_or_else(|| {
                    KeydiffError::schema(
                        format!("column '{}' not found in dataset '{}'", column, self.name),
                        vec![column.clone()],
                    )
                })
            })
            .collect()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Look up a cell by column name
    pub fn value<'a>(&self, row: &'a Row, column: &str) -> Option<&'a str> {
        self.position(column).and_then(|p| row.cell(p))
    }
}
